use crate::error::AppError;
use crate::models::AppSettings;
use crate::services::store::Store;

/// Loads the preferences singleton. An absent document yields the defaults;
/// fields missing from a stored document are backfilled by serde, so values
/// written by an older build keep loading. An unparseable document is
/// logged and replaced by the defaults on the next save.
pub fn load_settings(store: &Store) -> Result<AppSettings, AppError> {
    match store.read_json::<AppSettings>(&store.settings_path()) {
        Ok(Some(settings)) => Ok(settings),
        Ok(None) => Ok(AppSettings::default()),
        Err(e) => {
            log::warn!("settings document unreadable, using defaults: {e}");
            Ok(AppSettings::default())
        }
    }
}

pub fn save_settings(store: &Store, settings: &AppSettings) -> Result<(), AppError> {
    store.write_json(&store.settings_path(), settings)
}

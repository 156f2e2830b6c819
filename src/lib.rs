mod commands;
pub mod error;
pub mod models;
pub mod services;

use commands::*;
use services::store::Store;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            app.manage(Store::new()?);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Project commands
            list_projects,
            get_project,
            create_project,
            get_dashboard_stats,
            // Chapter commands
            ensure_first_chapter,
            add_chapter,
            save_chapter,
            writing_stats,
            // Character commands
            add_character,
            update_character,
            delete_character,
            // Settings commands
            get_settings,
            save_settings,
            // Backup & export commands
            export_backup,
            import_backup,
            default_backup_name,
            export_chapter,
            get_exports_dir,
            // AI commands
            generate_suggestions,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

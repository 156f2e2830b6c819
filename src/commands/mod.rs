mod projects;
mod characters;
mod settings;
mod export;
mod ai;

pub use projects::*;
pub use characters::*;
pub use settings::*;
pub use export::*;
pub use ai::*;

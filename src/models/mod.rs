mod project;
mod chapter;
mod character;
mod suggestion;
mod settings;

pub use project::*;
pub use chapter::*;
pub use character::*;
pub use suggestion::*;
pub use settings::*;

pub mod loader;
pub mod types;

pub use loader::{ConfigError, InitResult};
pub use types::{apply_color, AnsiColor, ApiConfig, Config, DisplayConfig};

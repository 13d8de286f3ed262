// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{default_config_path, load_config, load_from_path, parse_config, CONFIG_ENV};
pub use settings::Config;

//! Service adapters: OS specific implementations (filesystem, env).

pub mod config;
pub mod keybinding;
pub mod paths;

pub use config::{load_schema, resolve_config_path, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_app_data_dir, get_log_dir};

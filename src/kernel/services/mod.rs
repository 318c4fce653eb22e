//! Services layer: OS specific pieces the kernel is wired to at startup
//! (config files, data directories, key maps).

pub mod adapters;

pub use adapters::{
    ensure_log_dir, get_log_dir, load_schema, resolve_config_path, KeybindingContext,
    KeybindingService, CONFIG_ENV_VAR, CONFIG_FILE_NAME,
};

//! 配置加载：定位并读取 config.yaml，解析为文件夹类型表
//!
//! 配置只在启动时读取一次，运行中不会写回。

use std::path::{Path, PathBuf};

use crate::models::{ConfigError, Schema};

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const CONFIG_ENV_VAR: &str = "CODEARCHITECT_CONFIG";

/// Picks the config file: explicit argument, then `$CODEARCHITECT_CONFIG`,
/// then `config.yaml` beside the executable, then `./config.yaml`.
///
/// Relative paths resolve against `cwd`. The returned path is not checked
/// for existence except when probing the executable's directory.
pub fn resolve_config_path(
    cwd: &Path,
    arg: Option<&str>,
    env_value: Option<&str>,
    exe_dir: Option<&Path>,
) -> PathBuf {
    let explicit = arg
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| env_value.map(str::trim).filter(|s| !s.is_empty()));
    if let Some(raw) = explicit {
        let path = PathBuf::from(raw);
        return if path.is_absolute() {
            path
        } else {
            cwd.join(path)
        };
    }

    if let Some(dir) = exe_dir {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return candidate;
        }
    }

    cwd.join(CONFIG_FILE_NAME)
}

pub fn load_schema(path: &Path) -> Result<Schema, ConfigError> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = Schema::from_yaml_str(&source)?;
    tracing::info!(
        path = %path.display(),
        types = schema.types().len(),
        root = %schema.root_type().name,
        "config loaded"
    );
    Ok(schema)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;

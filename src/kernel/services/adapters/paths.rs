//! 应用数据目录
//!
//! - macOS: ~/Library/Application Support/codearchitect
//! - Linux: $XDG_DATA_HOME/codearchitect 或 ~/.local/share/codearchitect
//! - Windows: %APPDATA%\codearchitect

use std::path::PathBuf;

const APP_NAME: &str = "codearchitect";
const LOG_DIR: &str = "logs";

pub fn get_app_data_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        std::env::var("HOME").ok().map(|home| {
            PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_NAME)
        })
    }

    #[cfg(target_os = "linux")]
    {
        match std::env::var("XDG_DATA_HOME") {
            Ok(xdg) if !xdg.is_empty() => Some(PathBuf::from(xdg).join(APP_NAME)),
            _ => std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share").join(APP_NAME)),
        }
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(LOG_DIR))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Cannot determine log directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

//! codearchitect - 配置驱动的项目目录树 + 属性面板
//!
//! 模块结构：
//! - models: 数据模型（Schema, FolderTree, FormDocument）
//! - core: 与前端无关的输入事件和命令
//! - kernel: 状态、Action、Store 以及配置/快捷键服务
//! - tui: crossterm 适配和终端守卫
//! - app: 应用层（Workbench）

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;

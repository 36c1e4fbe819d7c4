//! ### SVN 命令行的类型化门面
//!
//! 对一个工作副本执行 svn 子命令（历史查询、版本比较），
//! 把 XML 输出解析为类型化的领域对象

pub mod commands;
pub mod core;
pub mod ui;

pub use crate::core::client::Client;
pub use crate::core::error::{AppError, AppResult};
pub use crate::core::models::{Diff, LogEntry, SVNItemPath};
pub use crate::core::utils::Revision;

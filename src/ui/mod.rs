//! ### UI 模块

pub mod display;
pub mod models;

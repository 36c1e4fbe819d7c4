//! ### 核心模块

pub mod app;
pub mod client;
pub mod error;
pub mod models;
pub mod svn;
pub mod utils;

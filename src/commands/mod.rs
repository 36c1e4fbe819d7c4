//! ### 指令集合

pub mod repo;

//! ### 执行 SVN 相关操作
//!
//! 每次调用启动一个独立的 svn 进程，工作目录固定，
//! 读完两个输出流后返回，不解释任何输出内容

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::core::error::AppResult;

/// 一次 svn 调用的原始结果，stdout/stderr 均为未解码的字节流
pub struct SvnOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// ### SVN 命令执行器
/// 绑定到固定的工作副本目录
pub struct SvnRunner {
    cwd: PathBuf,
}

impl SvnRunner {
    pub fn new(cwd: PathBuf) -> Self {
        SvnRunner { cwd }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// ### svn <args...>
    /// 阻塞直到进程结束，两个输出流被完整读取
    pub fn execute(&self, args: &[&str]) -> AppResult<SvnOutput> {
        let output = Command::new("svn")
            .args(args)
            .current_dir(&self.cwd)
            .output()?;

        Ok(SvnOutput {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

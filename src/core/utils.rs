//! ### SVN 工具函数
//!

use std::{fmt::Display, io};

use chrono::NaiveDateTime;
use crossterm::execute;
use regex::Regex;

use super::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    Head,
    Number(u64),
}

impl Revision {
    /// 转换为 svn 命令行参数形式
    /// - Head -> "HEAD"
    /// - Number(100) -> "100"
    pub fn as_arg(&self) -> String {
        match self {
            Revision::Head => "HEAD".to_string(),
            Revision::Number(n) => n.to_string(),
        }
    }
}

impl Default for Revision {
    fn default() -> Self {
        Revision::Head
    }
}

impl Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Revision::Head => write!(f, "HEAD"),
            Revision::Number(n) => write!(f, "r{}", n),
        }
    }
}

pub fn parse_revision_arg(input: &str) -> AppResult<Revision> {
    let s = input.trim();

    // 特殊处理 HEAD
    if s.eq_ignore_ascii_case("HEAD") {
        return Ok(Revision::Head);
    }

    let target_rev: u64 = match s.trim_start_matches(|c| c == 'r' || c == 'R').parse() {
        Ok(r) => r,
        Err(_) => {
            return Err(AppError::RevisionParse(input.to_string()));
        }
    };

    Ok(Revision::Number(target_rev))
}

/// 检查 svn 是否安装并在 PATH 中
pub fn check_svn_installed() -> bool {
    which::which("svn").is_ok()
}

/// 从 stderr 中识别 "No such revision" 标记
///
/// 取标记所在行的最后一个 token 作为出错的版本号。
/// 这是对 svn 自由文本诊断输出的唯一依赖点，标记缺失时返回 None，
/// 由调用方退回到通用的命令失败错误。
pub fn no_such_revision(stderr: &str) -> Option<String> {
    let re = Regex::new(r"No such revision.*?(\S+)\s*$").unwrap();
    stderr
        .lines()
        .filter(|line| line.contains("No such revision"))
        .find_map(|line| re.captures(line).map(|c| c[1].to_string()))
}

/// 解析 svn 的日期文本
///
/// 在第一个 '.' 处截断，丢弃亚秒和时区后缀，按秒精度解析。
/// 解析失败按缺失处理。
pub fn parse_svn_date(text: &str) -> Option<NaiveDateTime> {
    let date_str = text.split('.').next().unwrap_or(text);
    NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S").ok()
}

pub fn auto_decode(input: &[u8]) -> AppResult<String> {
    // First, try UTF-8, which is the most common.
    if let Ok(s) = String::from_utf8(input.to_vec()) {
        return Ok(s.trim().to_string());
    }

    // Fallback to chardetng for other encodings if UTF-8 fails.
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(input, true);
    let encoding = detector.guess(None, true);
    let (decoded_bytes, _, had_errors) = encoding.decode(input);

    if had_errors {
        // Even the fallback had errors, so we return an error.
        // We use the From<FromUtf8Error> trait we defined earlier.
        return Err(String::from_utf8(vec![0xff]).unwrap_err().into());
    }

    Ok(decoded_bytes.trim().to_string())
}

pub struct CursorGuard;

impl CursorGuard {
    pub fn new() -> Self {
        execute!(io::stdout(), crossterm::cursor::Hide).ok();
        execute!(io::stderr(), crossterm::cursor::Hide).ok();
        CursorGuard
    }
}

impl Drop for CursorGuard {
    fn drop(&mut self) {
        execute!(io::stdout(), crossterm::cursor::Show).ok();
        execute!(io::stderr(), crossterm::cursor::Show).ok();
    }
}

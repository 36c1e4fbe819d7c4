//! ### SVN 客户端门面
//!
//! 构造时校验环境和仓库路径，之后每个查询操作独立启动一个
//! svn 进程，解析其 XML 输出为领域对象

use std::env;
use std::path::{Path, PathBuf};

use crate::core::{
    error::{AppError, AppResult},
    models::{Diff, LogEntry, SVNItemPath},
    svn::{SvnOutput, SvnRunner},
    utils::{Revision, auto_decode, check_svn_installed, no_such_revision, parse_svn_date},
};

/// 绑定到一个工作副本目录的 SVN 客户端
///
/// 唯一的状态是构造时解析出的绝对工作目录，之后不再变化。
/// 没有连接概念，每次操作都是一次全新的 svn 调用。
pub struct Client {
    runner: SvnRunner,
}

impl Client {
    /// 构造客户端，依次检查：
    /// 1. svn 在 PATH 中
    /// 2. 仓库路径存在
    /// 3. 仓库路径是目录
    ///
    /// `repository_dir` 为 None 时使用进程当前目录（调用时才解析）
    pub fn new(repository_dir: Option<&Path>) -> AppResult<Self> {
        if !check_svn_installed() {
            return Err(AppError::SvnNotInstalled);
        }

        let repo_dir: PathBuf = match repository_dir {
            Some(p) => p.to_path_buf(),
            None => env::current_dir()?,
        };

        if !repo_dir.exists() {
            return Err(AppError::RepositoryDirNotFound(
                repo_dir.display().to_string(),
            ));
        }
        if !repo_dir.is_dir() {
            return Err(AppError::NotADirectory(repo_dir.display().to_string()));
        }

        let cwd = repo_dir.canonicalize()?;
        Ok(Client {
            runner: SvnRunner::new(cwd),
        })
    }

    /// 当前绑定的工作副本目录（绝对路径）
    pub fn workdir(&self) -> &Path {
        self.runner.cwd()
    }

    /// ### 查询提交历史
    ///
    /// - `file` 给定时只查询该路径的历史，否则查询整个工作副本
    /// - 返回顺序与 svn 输出一致（最新的在前），不重新排序
    pub fn log(&self, file: Option<&Path>, revision: Revision) -> AppResult<Vec<LogEntry>> {
        let rev_arg = revision.as_arg();

        let file_arg: String;
        let mut args: Vec<&str> = vec!["log"];
        if let Some(f) = file {
            file_arg = f.to_string_lossy().into_owned();
            args.push(file_arg.as_str());
        }
        args.extend(["--xml", "--revision", rev_arg.as_str()]);

        let output = self.run_query(&args)?;
        let data = auto_decode(&output.stdout)?;

        let doc = roxmltree::Document::parse(&data)
            .map_err(|_| AppError::RevisionSyntax(rev_arg.clone()))?;

        Ok(collect_log_entries(&doc))
    }

    /// ### 比较两个版本
    ///
    /// 先执行一次 svn update，再比较 `start:end` 区间。
    /// `end_revision` 缺省为 HEAD。
    pub fn diff(&self, start_revision: u64, end_revision: Option<u64>) -> AppResult<Diff> {
        self.update()?;

        let end = end_revision.map(Revision::Number).unwrap_or(Revision::Head);
        let range = format!("{}:{}", start_revision, end.as_arg());

        let output = self.run_query(&["diff", "-r", &range, "--xml", "--summarize"])?;
        let data = auto_decode(&output.stdout)?;

        let doc =
            roxmltree::Document::parse(&data).map_err(|_| AppError::RevisionSyntax(range.clone()))?;

        Ok(Diff::new(collect_item_paths(&doc)))
    }

    /// svn update
    fn update(&self) -> AppResult<()> {
        let output = self.runner.execute(&["update"])?;
        if !output.status.success() {
            return Err(AppError::UpdateFailed {
                stderr: auto_decode(&output.stderr)?,
            });
        }
        Ok(())
    }

    /// 执行查询命令，统一处理 stderr 标记和失败退出码
    fn run_query(&self, args: &[&str]) -> AppResult<SvnOutput> {
        let output = self.runner.execute(args)?;

        let stderr = auto_decode(&output.stderr)?;
        if let Some(rev) = no_such_revision(&stderr) {
            return Err(AppError::NoSuchRevision(rev));
        }

        if !output.status.success() {
            return Err(AppError::SvnCommandFailed {
                command: format!("svn {}", args.join(" ")),
                stderr,
            });
        }

        Ok(output)
    }
}

/// 从 log XML 中收集历史记录
fn collect_log_entries(doc: &roxmltree::Document) -> Vec<LogEntry> {
    let mut entries = Vec::new();

    for entry in doc.descendants().filter(|n| n.has_tag_name("logentry")) {
        let revision = entry
            .attribute("revision")
            .unwrap_or("0")
            .parse::<u64>()
            .unwrap_or(0);

        let author = entry
            .children()
            .find(|n| n.has_tag_name("author"))
            .and_then(|n| n.text())
            .map(str::to_string);

        let message = entry
            .children()
            .find(|n| n.has_tag_name("msg"))
            .and_then(|n| n.text())
            .map(str::to_string);

        let date = entry
            .children()
            .find(|n| n.has_tag_name("date"))
            .and_then(|n| n.text())
            .and_then(parse_svn_date);

        entries.push(LogEntry {
            revision,
            author,
            message,
            date,
        });
    }

    entries
}

/// 从 diff --summarize XML 中收集改动路径
fn collect_item_paths(doc: &roxmltree::Document) -> Vec<SVNItemPath> {
    let mut paths = Vec::new();

    for node in doc.descendants().filter(|n| n.has_tag_name("path")) {
        paths.push(SVNItemPath {
            item: node.attribute("item").unwrap_or("").to_string(),
            props: node.attribute("props").map(str::to_string),
            kind: node.attribute("kind").unwrap_or("").to_string(),
            filepath: node.text().unwrap_or("").to_string(),
        });
    }

    paths
}

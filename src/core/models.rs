//! 存放领域数据模型
//!
//! 均由解析器从一次 svn 调用的输出构建，构建后不再修改

use chrono::NaiveDateTime;

/// 一条提交历史记录
///
/// author/message/date 在 svn 输出中可能缺失
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub revision: u64,
    pub author: Option<String>,
    pub message: Option<String>,
    pub date: Option<NaiveDateTime>,
}

/// 两个版本之间被改动的一个文件或目录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SVNItemPath {
    /// 改动类型 (added / modified / deleted / ...)
    pub item: String,
    /// 属性改动标记，缺失时为 None
    pub props: Option<String>,
    /// 节点类型 (file / dir)
    pub kind: String,
    /// 仓库相对路径文本，原样保留
    pub filepath: String,
}

/// 版本比较结果，顺序与 svn 输出一致
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diff {
    paths: Vec<SVNItemPath>,
}

impl Diff {
    pub fn new(paths: Vec<SVNItemPath>) -> Self {
        Diff { paths }
    }

    pub fn paths(&self) -> &[SVNItemPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl IntoIterator for Diff {
    type Item = SVNItemPath;
    type IntoIter = std::vec::IntoIter<SVNItemPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

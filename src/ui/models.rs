//! UI 相关的数据模型

use indicatif::{ProgressBar, ProgressStyle};

/// log 表格的一行
pub struct LogRow {
    pub revision: String,
    pub date: String,
    pub author: String,
    pub message: String,
}

/// diff 表格的一行
pub struct DiffRow {
    pub item: String,
    pub props: String,
    pub kind: String,
    pub filepath: String,
}

pub struct SpinnerInfo {
    pub pb: ProgressBar,
}

impl SpinnerInfo {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner();
        let frames = [
            "[=   ]", "[==  ]", "[=== ]", "[ ===]", "[  ==]", "[   =]", "[    ]", "[   =]",
            "[  ==]", "[ ===]", "[====]", "[=== ]", "[==  ]", "[=   ]", "[    ]", "    ",
        ];

        pb.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&frames)
                .template("{spinner:.blue.bold} {msg}")
                .unwrap(),
        );

        pb.enable_steady_tick(std::time::Duration::from_millis(50));
        SpinnerInfo { pb }
    }
}

//! ### 仓库查询指令
//!
//! 包括指令：
//!
//! - log: 查看提交历史
//! - diff: 比较两个版本的改动路径

use std::path::Path;

use chrono::{Local, NaiveDateTime, TimeZone};

use crate::{
    core::{app::App, error::AppResult, utils::parse_revision_arg},
    ui::models::{DiffRow, LogRow},
};

/// 查看提交历史
pub fn handle_log(app: &App, file: Option<&str>, revision_str: &str) -> AppResult<()> {
    let revision = parse_revision_arg(revision_str)?;

    app.ui.update_step("Fetching history");
    let entries = app.client.log(file.map(Path::new), revision)?;

    if entries.is_empty() {
        app.ui.success("No history entries");
        return Ok(());
    }

    let rows = entries
        .into_iter()
        .map(|e| LogRow {
            revision: format!("r{}", e.revision),
            date: e.date.map(format_relative_time).unwrap_or_default(),
            author: e.author.unwrap_or_default(),
            message: e.message.unwrap_or_default(),
        })
        .collect();

    app.ui.show_log(rows);
    Ok(())
}

/// 比较两个版本，显示改动路径
pub fn handle_diff(app: &App, start: u64, end: Option<u64>) -> AppResult<()> {
    let range_display = match end {
        Some(e) => format!("r{}..r{}", start, e),
        None => format!("r{}..HEAD", start),
    };
    app.ui.update_step(&format!("Comparing {}", range_display));

    let diff = app.client.diff(start, end)?;

    if diff.is_empty() {
        app.ui.success(&format!("No changes between {}", range_display));
        return Ok(());
    }

    let rows = diff
        .into_iter()
        .map(|p| DiffRow {
            item: p.item,
            props: p.props.unwrap_or_default(),
            kind: p.kind,
            filepath: p.filepath,
        })
        .collect();

    app.ui.show_diff(rows);
    Ok(())
}

/// 格式化相对时间显示
///
/// svn 的日期是 UTC，显示前转换到本地时区
fn format_relative_time(dt: NaiveDateTime) -> String {
    let dt = Local.from_utc_datetime(&dt);
    let now = Local::now();
    let diff = now.signed_duration_since(dt);
    let secs = diff.num_seconds();

    if secs < 60 {
        "just now".to_string()
    } else if secs < 3600 {
        format!("{} mins ago", diff.num_minutes())
    } else if secs < 86400 {
        format!("{} hours ago", diff.num_hours())
    } else {
        dt.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn relative_time_tiers() {
        let now = Local::now().naive_utc();
        assert_eq!(format_relative_time(now), "just now");

        let five_min = now - Duration::minutes(5);
        assert!(format_relative_time(five_min).ends_with("mins ago"));

        let old = now - Duration::days(30);
        let formatted = format_relative_time(old);
        assert!(formatted.contains('-'), "old dates render as calendar dates");
    }
}

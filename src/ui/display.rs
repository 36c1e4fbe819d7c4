use std::cell::RefCell;

use comfy_table::{Cell, ContentArrangement, Table, presets};
use crossterm::style::Stylize;

use crate::{
    core::utils::CursorGuard,
    ui::models::{DiffRow, LogRow, SpinnerInfo},
};

pub struct AppUI {
    spinner: RefCell<Option<SpinnerInfo>>,
    _cursor_guard: CursorGuard,
}

impl AppUI {
    pub fn new() -> Self {
        AppUI {
            spinner: RefCell::new(None),
            _cursor_guard: CursorGuard::new(),
        }
    }

    /// 打印普通信息
    pub fn info(&self, msg: &str) {
        self.print_safe(format!("{} {}", "[INFO]".blue().bold(), msg));
    }

    /// 打印警告信息
    pub fn warn(&self, msg: &str) {
        self.print_safe(format!("{} {}", "[WARN]".dark_yellow().bold(), msg));
    }

    /// 打印成功信息
    pub fn success(&self, msg: &str) {
        self.finish_step();
        self.print_safe(format!("{} {}", "[ OK ]".green().bold(), msg));
    }

    /// 打印错误信息
    pub fn error(&self, msg: &str) {
        self.finish_step();
        self.print_safe(format!("{} {}", "[ERR!]".red().bold(), msg));
    }

    /// 更新 spinner
    pub fn update_step(&self, msg: &str) {
        if let Some(pb_info) = self.spinner.borrow().as_ref() {
            pb_info.pb.set_message(msg.to_string());
        } else {
            self.start_step(msg);
        }
    }

    /// log 显示
    pub fn show_log(&self, rows: Vec<LogRow>) {
        self.finish_step();
        let mut table = self.create_clean_table();

        let header_cell1 = Cell::new("REV")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);
        let header_cell2 = Cell::new("DATE")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);
        let header_cell3 = Cell::new("AUTHOR")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);
        let header_cell4 = Cell::new("MESSAGE")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);

        table.set_header([header_cell1, header_cell2, header_cell3, header_cell4]);

        for column in table.column_iter_mut() {
            column.set_padding((0, 3));
        }

        for row in rows {
            let c_rev = Cell::new(row.revision).fg(comfy_table::Color::Yellow);
            let c_date = Cell::new(row.date).fg(comfy_table::Color::DarkGrey);
            let c_author = Cell::new(row.author).fg(comfy_table::Color::Cyan);
            let c_msg = Cell::new(row.message);

            table.add_row([c_rev, c_date, c_author, c_msg]);
        }

        self.print_safe(format!("{}", table));
    }

    /// diff 显示
    pub fn show_diff(&self, rows: Vec<DiffRow>) {
        self.finish_step();
        let mut table = self.create_clean_table();

        let header_cell1 = Cell::new("ITEM")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);
        let header_cell2 = Cell::new("PROPS")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);
        let header_cell3 = Cell::new("KIND")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);
        let header_cell4 = Cell::new("PATH")
            .fg(comfy_table::Color::DarkGrey)
            .add_attribute(comfy_table::Attribute::Bold);

        table.set_header([header_cell1, header_cell2, header_cell3, header_cell4]);

        for column in table.column_iter_mut() {
            column.set_padding((0, 3));
        }

        for row in rows {
            let c_item = match row.item.as_str() {
                "added" => Cell::new(row.item).fg(comfy_table::Color::Green),
                "deleted" => Cell::new(row.item).fg(comfy_table::Color::DarkRed),
                "modified" => Cell::new(row.item).fg(comfy_table::Color::Yellow),
                _ => Cell::new(row.item),
            };
            let c_props = Cell::new(row.props).fg(comfy_table::Color::DarkGrey);
            let c_kind = Cell::new(row.kind).fg(comfy_table::Color::DarkGrey);
            let c_path = Cell::new(row.filepath);

            table.add_row([c_item, c_props, c_kind, c_path]);
        }

        self.print_safe(format!("{}", table));
    }

    /// 开启一个 spinner
    fn start_step(&self, msg: &str) {
        let has_spinner = self.spinner.borrow().is_some();
        if has_spinner {
            self.finish_step();
        }

        let spinner_info = SpinnerInfo::new();
        spinner_info.pb.set_message(msg.to_string());
        *self.spinner.borrow_mut() = Some(spinner_info);
    }

    /// 结束 spinner
    fn finish_step(&self) {
        if let Some(pb_info) = self.spinner.borrow_mut().take() {
            pb_info.pb.finish_and_clear();
        }
    }

    fn print_safe(&self, msg: String) {
        if let Some(pb_info) = &self.spinner.borrow().as_ref() {
            pb_info.pb.suspend(|| println!("{}", msg));
        } else {
            println!("{}", msg);
        }
    }

    /// 创建一个无边框且动态宽度的表格
    fn create_clean_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(presets::NOTHING) // 无边框
            .set_content_arrangement(ContentArrangement::Dynamic); // 动态宽度
        table
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use svn_tool::{
    commands::repo::{handle_diff, handle_log},
    core::{app::App, error::AppResult},
};

#[derive(Parser, Debug)]
#[command(name = "SVN Query Tool")]
struct Cli {
    /// 工作副本目录，缺省为当前目录
    #[arg(short, long)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show commit history.
    /// Usage: log [file] [--revision <rev>]
    Log {
        /// 只查询该文件的历史，缺省为整个工作副本
        file: Option<String>,

        /// Target revision (e.g., "100", "r100" or "HEAD")
        #[arg(short, long, default_value = "HEAD")]
        revision: String,
    },
    /// Summarize changed paths between two revisions.
    /// Usage: diff <start> [end]
    Diff {
        /// Start revision
        start: u64,

        /// 结束版本，缺省为 HEAD
        end: Option<u64>,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(c) => c,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    // Attempt to initialize the App
    let app_result = App::new(cli.path.as_deref());

    match app_result {
        Ok(app) => {
            let command_result: AppResult<()> = match cli.command {
                Commands::Log { file, revision } => handle_log(&app, file.as_deref(), &revision),
                Commands::Diff { start, end } => handle_diff(&app, start, end),
            };

            if let Err(e) = command_result {
                app.ui.error(&format!("{}", e));
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
        }
    }
}

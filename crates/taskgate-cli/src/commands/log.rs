use std::path::PathBuf;

use clap::Subcommand;
use taskgate_core::Config;

#[derive(Subcommand)]
pub enum LogAction {
    /// Print the most recent run log lines
    Show {
        /// Run log path (overrides config)
        #[arg(long)]
        log: Option<PathBuf>,
        /// Number of lines to print
        #[arg(short = 'n', long, default_value_t = 20)]
        lines: usize,
    },
}

pub fn run(action: LogAction) -> Result<i32, Box<dyn std::error::Error>> {
    match action {
        LogAction::Show { log, lines } => {
            let path = match log {
                Some(path) => path,
                None => Config::load()?.log_path()?,
            };
            let content = match std::fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    println!("(log is empty)");
                    return Ok(0);
                }
                Err(e) => return Err(e.into()),
            };
            let all: Vec<&str> = content.lines().collect();
            let start = all.len().saturating_sub(lines);
            for line in &all[start..] {
                println!("{line}");
            }
            Ok(0)
        }
    }
}

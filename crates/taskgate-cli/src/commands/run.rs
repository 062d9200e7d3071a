use std::path::PathBuf;

use clap::Args;
use taskgate_core::{
    run_gate, CommandTask, Config, FileLogSink, FileRuleSource, Moment, NoopTask, TaskBody,
};

#[derive(Args)]
pub struct RunArgs {
    /// Rule document path (overrides config)
    #[arg(long)]
    pub rules: Option<PathBuf>,
    /// Run log path (overrides config)
    #[arg(long)]
    pub log: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = Config::load()?;

    let rules_path = match args.rules {
        Some(path) => path,
        None => config.rules_path()?,
    };
    let log_path = match args.log {
        Some(path) => path,
        None => config.log_path()?,
    };

    let source = FileRuleSource::new(rules_path);
    let sink = FileLogSink::new(log_path);
    let task: Box<dyn TaskBody> = if config.task.command.is_empty() {
        Box::new(NoopTask)
    } else {
        Box::new(CommandTask::new(
            config.task.command.clone(),
            config.task.args.clone(),
        ))
    };

    let now = Moment::from(chrono::Local::now());
    let outcome = run_gate(&source, &sink, task.as_ref(), now)?;
    Ok(outcome.exit_code())
}

use std::path::PathBuf;

use clap::Subcommand;
use taskgate_core::{decide, Config, FileRuleSource, Moment, RuleSource};

#[derive(Subcommand)]
pub enum RulesAction {
    /// Print the effective rule set as JSON
    Show {
        /// Rule document path (overrides config)
        #[arg(long)]
        rules: Option<PathBuf>,
    },
    /// Validate the rule document and report the decision without running
    Check {
        /// Rule document path (overrides config)
        #[arg(long)]
        rules: Option<PathBuf>,
        /// Evaluate at this RFC3339 time instead of now
        #[arg(long)]
        at: Option<String>,
    },
}

pub fn run(action: RulesAction) -> Result<i32, Box<dyn std::error::Error>> {
    match action {
        RulesAction::Show { rules } => {
            let source = source_for(rules)?;
            match source.load() {
                Ok(ruleset) => {
                    println!("{}", serde_json::to_string_pretty(&ruleset)?);
                    Ok(0)
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    Ok(2)
                }
            }
        }
        RulesAction::Check { rules, at } => {
            let moment = match at {
                Some(s) => Moment::from(chrono::DateTime::parse_from_rfc3339(&s)?),
                None => Moment::from(chrono::Local::now()),
            };
            let source = source_for(rules)?;
            let ruleset = match source.load() {
                Ok(ruleset) => ruleset,
                Err(e) => {
                    eprintln!("error: {e}");
                    return Ok(2);
                }
            };
            for warning in ruleset.warnings() {
                println!("warning: {warning}");
            }
            let decision = decide(&ruleset, moment);
            println!(
                "{} {}: {}",
                moment.day,
                moment.hour,
                decision.message()
            );
            Ok(0)
        }
    }
}

fn source_for(overridden: Option<PathBuf>) -> Result<FileRuleSource, Box<dyn std::error::Error>> {
    let path = match overridden {
        Some(path) => path,
        None => Config::load()?.rules_path()?,
    };
    Ok(FileRuleSource::new(path))
}

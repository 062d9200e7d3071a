//! # Taskgate Core Library
//!
//! This library provides the core logic for Taskgate, a gate an external
//! scheduler invokes once per tick to decide whether the deployer's task
//! may run. It implements a CLI-first philosophy where the `taskgate`
//! binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Rules**: a small externally edited JSON document (enable flag,
//!   allowed hour range, allowed weekday set), re-read on every invocation
//! - **Gate**: a pure decision function over a [`RuleSet`] and a [`Moment`]
//! - **Logbook**: an append-only run log, one timestamped line per outcome
//! - **Runner**: orchestrates one invocation end to end and owns the
//!   exit-code mapping
//!
//! The core is synchronous and stateless between invocations: nothing is
//! cached, and overlapping invocations coordinate only through the
//! platform's atomic append on the log file.
//!
//! ## Key Components
//!
//! - [`RuleSet`]: normalized rules for one invocation
//! - [`decide`]: the decision engine
//! - [`run_gate`]: one full invocation
//! - [`Config`]: application configuration management

pub mod config;
pub mod error;
pub mod gate;
pub mod logbook;
pub mod rules;
pub mod runner;
pub mod source;

pub use config::Config;
pub use error::{ConfigError, CoreError, LoadError, TaskError};
pub use gate::{decide, Decision, Moment};
pub use logbook::{FileLogSink, LogSink, MemoryLogSink};
pub use rules::{RuleSet, WEEKDAY_TOKENS};
pub use runner::{run_gate, CommandTask, FnTask, NoopTask, Outcome, TaskBody};
pub use source::{FileRuleSource, RuleSource};

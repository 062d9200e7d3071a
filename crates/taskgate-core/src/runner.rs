//! One full invocation: load rules, decide, maybe run the task body.
//!
//! The runner is the single boundary where task body failures are caught
//! and where every outcome is translated to a log line and an exit code.
//! It holds no state between invocations.

use std::io;
use std::process::Command;

use crate::error::{LoadError, TaskError};
use crate::gate::{decide, Decision, Moment};
use crate::logbook::LogSink;
use crate::source::RuleSource;

/// The deployer-supplied logic executed only on a `Run` decision.
pub trait TaskBody {
    fn run(&self) -> Result<(), TaskError>;
}

/// Task body backed by a closure, mostly useful when embedding the gate.
pub struct FnTask<F>(pub F);

impl<F> TaskBody for FnTask<F>
where
    F: Fn() -> Result<(), TaskError>,
{
    fn run(&self) -> Result<(), TaskError> {
        (self.0)()
    }
}

/// Task body that spawns a configured command and waits for it.
#[derive(Debug, Clone)]
pub struct CommandTask {
    command: String,
    args: Vec<String>,
}

impl CommandTask {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl TaskBody for CommandTask {
    fn run(&self) -> Result<(), TaskError> {
        let status = Command::new(&self.command)
            .args(&self.args)
            .status()
            .map_err(|e| TaskError::SpawnFailed {
                command: self.command.clone(),
                source: e,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(TaskError::ExitedNonZero {
                status: status.code().unwrap_or(-1),
            })
        }
    }
}

/// Task body that does nothing, for deployments that only want the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTask;

impl TaskBody for NoopTask {
    fn run(&self) -> Result<(), TaskError> {
        Ok(())
    }
}

/// How one invocation ended.
#[derive(Debug)]
pub enum Outcome {
    /// Rules loaded, decision made, task body (if any) succeeded.
    Completed(Decision),
    /// Rules loaded, decision was `Run`, task body failed (caught).
    TaskFailed(TaskError),
    /// No usable rule document; no decision attempted.
    LoadFailed(LoadError),
}

impl Outcome {
    /// Process exit status for this outcome. Denies are normal results,
    /// not errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed(_) => 0,
            Outcome::TaskFailed(_) => 1,
            Outcome::LoadFailed(_) => 2,
        }
    }
}

/// Run the gate once.
///
/// Exactly one decision log line is written per completed evaluation; a
/// load failure writes its one failure line instead. Task body failures
/// are caught here and logged, never propagated.
///
/// # Errors
/// Only the log sink itself failing surfaces as `Err`; everything else is
/// an [`Outcome`].
pub fn run_gate(
    source: &dyn RuleSource,
    sink: &dyn LogSink,
    task: &dyn TaskBody,
    now: Moment,
) -> io::Result<Outcome> {
    let rules = match source.load() {
        Ok(rules) => rules,
        Err(e) => {
            sink.append(&format!("Cannot load rules: {e}"))?;
            return Ok(Outcome::LoadFailed(e));
        }
    };

    let decision = decide(&rules, now);
    sink.append(&decision.message())?;

    if !decision.is_run() {
        return Ok(Outcome::Completed(decision));
    }

    match task.run() {
        Ok(()) => {
            sink.append("Main task finished")?;
            Ok(Outcome::Completed(decision))
        }
        Err(e) => {
            sink.append(&format!("Main task failed: {e}"))?;
            Ok(Outcome::TaskFailed(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logbook::MemoryLogSink;

    struct StaticSource(&'static [u8]);

    impl RuleSource for StaticSource {
        fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            Ok(self.0.to_vec())
        }
    }

    struct AbsentSource;

    impl RuleSource for AbsentSource {
        fn fetch(&self) -> Result<Vec<u8>, LoadError> {
            Err(LoadError::MissingDocument {
                path: "/nowhere/rules.json".into(),
            })
        }
    }

    const ALWAYS: &[u8] = br#"{"enabled": true, "days": ["Mon","Tue","Wed","Thu","Fri","Sat","Sun"]}"#;

    #[test]
    fn test_run_logs_decision_and_completion() {
        let sink = MemoryLogSink::new();
        let outcome =
            run_gate(&StaticSource(ALWAYS), &sink, &NoopTask, Moment::new("Wed", 14)).unwrap();
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            sink.messages(),
            vec!["Running main task...", "Main task finished"]
        );
    }

    #[test]
    fn test_deny_skips_task_and_exits_zero() {
        let sink = MemoryLogSink::new();
        let bomb = FnTask(|| -> Result<(), TaskError> { panic!("task body must not run on deny") });
        let outcome = run_gate(
            &StaticSource(br#"{"enabled": false}"#),
            &sink,
            &bomb,
            Moment::new("Wed", 14),
        )
        .unwrap();
        assert_eq!(outcome.exit_code(), 0);
        assert!(matches!(
            outcome,
            Outcome::Completed(Decision::DeniedDisabled)
        ));
        assert_eq!(sink.messages(), vec!["Task disabled via config"]);
    }

    #[test]
    fn test_task_failure_is_caught_and_logged() {
        let sink = MemoryLogSink::new();
        let failing =
            FnTask(|| -> Result<(), TaskError> { Err(TaskError::Failed("disk full".into())) });
        let outcome =
            run_gate(&StaticSource(ALWAYS), &sink, &failing, Moment::new("Wed", 14)).unwrap();
        assert_eq!(outcome.exit_code(), 1);
        assert!(matches!(outcome, Outcome::TaskFailed(_)));
        assert_eq!(
            sink.messages(),
            vec!["Running main task...", "Main task failed: disk full"]
        );
    }

    #[test]
    fn test_load_failure_logs_once_and_exits_two() {
        let sink = MemoryLogSink::new();
        let outcome = run_gate(&AbsentSource, &sink, &NoopTask, Moment::new("Wed", 14)).unwrap();
        assert_eq!(outcome.exit_code(), 2);
        assert!(matches!(outcome, Outcome::LoadFailed(LoadError::MissingDocument { .. })));
        let messages = sink.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("Cannot load rules:"));
    }

    #[test]
    fn test_invalid_document_is_load_failure() {
        let sink = MemoryLogSink::new();
        let outcome = run_gate(
            &StaticSource(br#"{"foo": 1}"#),
            &sink,
            &NoopTask,
            Moment::new("Wed", 14),
        )
        .unwrap();
        assert!(matches!(outcome, Outcome::LoadFailed(LoadError::InvalidFormat(_))));
        assert_eq!(outcome.exit_code(), 2);
    }

    #[test]
    fn test_denied_hour_end_to_end() {
        let sink = MemoryLogSink::new();
        let outcome = run_gate(
            &StaticSource(br#"{"enabled": true, "start_hour": 9, "end_hour": 17}"#),
            &sink,
            &NoopTask,
            Moment::new("Wed", 20),
        )
        .unwrap();
        assert!(matches!(
            outcome,
            Outcome::Completed(Decision::DeniedHour { hour: 20 })
        ));
        assert_eq!(sink.messages(), vec!["Outside allowed hours: 20"]);
    }

    #[test]
    fn test_each_invocation_reloads_rules() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingSource(AtomicUsize);
        impl RuleSource for CountingSource {
            fn fetch(&self) -> Result<Vec<u8>, LoadError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Ok(ALWAYS.to_vec())
            }
        }

        let source = CountingSource(AtomicUsize::new(0));
        let sink = MemoryLogSink::new();
        run_gate(&source, &sink, &NoopTask, Moment::new("Mon", 1)).unwrap();
        run_gate(&source, &sink, &NoopTask, Moment::new("Mon", 1)).unwrap();
        assert_eq!(source.0.load(Ordering::SeqCst), 2);
    }
}

//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                destination,
                staging_dir,
            } => serde_json::json!({
                "event": "start",
                "command": "deploy",
                "destination": destination,
                "staging_dir": staging_dir.display().to_string(),
            }),

            DeployEvent::StepStarted { step } => serde_json::json!({
                "event": "step_start",
                "command": "deploy",
                "step": step.as_str(),
            }),

            DeployEvent::AttributesStaged { path, outcome } => serde_json::json!({
                "event": "attributes_staged",
                "command": "deploy",
                "path": path.display().to_string(),
                "outcome": outcome,
            }),

            DeployEvent::Transferred { destination } => serde_json::json!({
                "event": "transferred",
                "command": "deploy",
                "destination": destination,
            }),

            DeployEvent::ConvergeFinished { success, exit_code } => serde_json::json!({
                "event": "converge_finished",
                "command": "deploy",
                "success": success,
                "exit_code": exit_code,
            }),

            DeployEvent::StacktraceFound { path } => serde_json::json!({
                "event": "stacktrace_found",
                "command": "deploy",
                "path": path,
            }),

            DeployEvent::StagingRetained { path } => serde_json::json!({
                "event": "staging_retained",
                "command": "deploy",
                "path": path.display().to_string(),
            }),

            DeployEvent::StagingRemoved { path } => serde_json::json!({
                "event": "staging_removed",
                "command": "deploy",
                "path": path.display().to_string(),
            }),

            DeployEvent::Completed { success } => serde_json::json!({
                "event": "complete",
                "command": "deploy",
                "success": success,
            }),
        };

        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DeployStep;
    use crate::domain::services::StageOutcome;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct TestWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines(writer: &TestWriter) -> Vec<serde_json::Value> {
        let buf = writer.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_sink_writes_one_object_per_event() {
        let writer = TestWriter::default();
        let sink = JsonEventSink::with_writer(writer.clone());

        sink.on_event(DeployEvent::Started {
            destination: "root@h:/chef".to_string(),
            staging_dir: PathBuf::from("/p/order-abc"),
        });
        sink.on_event(DeployEvent::StepStarted {
            step: DeployStep::StageAttributes,
        });
        sink.on_event(DeployEvent::Completed { success: true });

        let events = lines(&writer);
        assert_eq!(events.len(), 3);
        assert_eq!(events[0]["event"], "start");
        assert_eq!(events[0]["staging_dir"], "/p/order-abc");
        assert_eq!(events[1]["step"], "stage-attributes");
        assert_eq!(events[2]["success"], true);
        assert!(events.iter().all(|e| e["command"] == "deploy"));
    }

    #[test]
    fn json_sink_reports_stage_outcome_and_exit_code() {
        let writer = TestWriter::default();
        let sink = JsonEventSink::with_writer(writer.clone());

        sink.on_event(DeployEvent::AttributesStaged {
            path: PathBuf::from("/p/order-abc/attributes.json"),
            outcome: StageOutcome::AlreadyPresent,
        });
        sink.on_event(DeployEvent::ConvergeFinished {
            success: false,
            exit_code: None,
        });

        let events = lines(&writer);
        assert_eq!(events[0]["outcome"], "already_present");
        assert!(events[1]["exit_code"].is_null());
    }
}

use sous::SousError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::TerminalCapabilities;

/// Render a failure as a single plain report: icon, message, and the
/// extra detail lines the error carries.
pub fn format_error(err: &SousError, caps: TerminalCapabilities) -> String {
    let mut lines = err.to_string().lines().map(str::to_string).collect::<Vec<_>>();
    let head = if lines.is_empty() {
        String::new()
    } else {
        lines.remove(0)
    };

    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(caps.supports_color, caps.supports_unicode),
        ColoredText::error(head).bold().render(caps.supports_color)
    );
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// The NDJSON form of a failure, with a stable machine-readable `kind`.
pub fn error_event(err: &SousError) -> serde_json::Value {
    let mut event = serde_json::json!({
        "event": "error",
        "kind": err.kind(),
        "message": err.to_string(),
    });
    if let Some(code) = err.exit_code() {
        event["exit_code"] = serde_json::json!(code);
    }
    event
}

pub fn print_error(err: &SousError, json: bool) {
    if json {
        let _ = crate::ui::json::emit(error_event(err));
        return;
    }
    let caps = crate::ui::terminal::detect_stderr_capabilities();
    eprint!("{}", format_error(err, caps));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_is_plain_without_color() {
        let rendered = format_error(&SousError::HostMissing, TerminalCapabilities::plain());
        assert!(rendered.starts_with("[FAIL] "));
        assert!(!rendered.contains("\u{1b}["));
    }

    #[test]
    fn format_error_keeps_violation_lines() {
        let err = SousError::ConfigInvalid {
            file: "delivery.edn".into(),
            violations: vec![sous::FieldViolation {
                field: "port".to_string(),
                expected: "an integer between 1 and 65535",
                actual: "\"22\"".to_string(),
            }],
        };
        let rendered = format_error(&err, TerminalCapabilities::plain());
        assert_eq!(rendered.lines().count(), 2);
        assert!(rendered.contains("port: expected an integer between 1 and 65535"));
    }

    #[test]
    fn error_event_carries_kind_and_exit_code() {
        let event = error_event(&SousError::RemoteCommandFailure { exit_code: Some(1) });
        assert_eq!(event["event"], "error");
        assert_eq!(event["kind"], "remote-command-failure");
        assert_eq!(event["exit_code"], 1);
    }
}

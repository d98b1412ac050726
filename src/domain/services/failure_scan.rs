//! Stacktrace marker detection
//!
//! chef-client announces a fatal run with a line like
//! `[2024-05-01T10:00:00+00:00] FATAL: Stacktrace dumped to /var/chef/cache/chef-stacktrace.out`.
//! That format belongs to Chef, not to us; this matcher is the only place
//! that knows it.

use std::sync::OnceLock;

use regex::Regex;

fn stacktrace_marker() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(
            r"^\[\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}[^\]]*\] FATAL: Stacktrace dumped to (\S+)\s*$",
        )
        .expect("stacktrace marker pattern is valid")
    })
}

/// Path of the first dumped stacktrace announced in `lines`, if any.
pub fn find_stacktrace_path<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    lines.iter().find_map(|line| {
        stacktrace_marker()
            .captures(line.as_ref())
            .map(|caps| caps[1].to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_marker_with_offset_timestamp() {
        let lines = vec![
            "Starting Chef Infra Client".to_string(),
            "[2024-05-01T10:00:00+00:00] FATAL: Stacktrace dumped to /var/log/chef/trace.json"
                .to_string(),
        ];
        assert_eq!(
            find_stacktrace_path(&lines).as_deref(),
            Some("/var/log/chef/trace.json")
        );
    }

    #[test]
    fn finds_marker_with_fractional_seconds_and_zone() {
        let lines = ["[2019-03-07T14:02:11.123-08:00] FATAL: Stacktrace dumped to /tmp/st.out"];
        assert_eq!(find_stacktrace_path(&lines).as_deref(), Some("/tmp/st.out"));
    }

    #[test]
    fn first_marker_wins() {
        let lines = [
            "[2024-01-01T00:00:00Z] FATAL: Stacktrace dumped to /first",
            "[2024-01-01T00:00:01Z] FATAL: Stacktrace dumped to /second",
        ];
        assert_eq!(find_stacktrace_path(&lines).as_deref(), Some("/first"));
    }

    #[test]
    fn ignores_other_fatal_lines() {
        let lines = [
            "[2024-01-01T00:00:00Z] FATAL: Chef::Exceptions::ChildConvergeError",
            "FATAL: Stacktrace dumped to /no/timestamp",
            "  [2024-01-01T00:00:00Z] FATAL: Stacktrace dumped to /indented",
        ];
        assert_eq!(find_stacktrace_path(&lines), None);
    }

    #[test]
    fn empty_output_has_no_marker() {
        let lines: Vec<String> = Vec::new();
        assert_eq!(find_stacktrace_path(&lines), None);
    }
}

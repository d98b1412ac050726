use std::io::{self, Write};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut (impl Write + ?Sized), event: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, event)?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_event_appends_newline() {
        let mut buf = Vec::new();
        write_event(&mut buf, &serde_json::json!({"event": "x"})).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "{\"event\":\"x\"}\n");
    }
}

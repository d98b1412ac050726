use is_terminal::IsTerminal;
use sous::presentation::ColorWhen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
}

impl TerminalCapabilities {
    /// Capabilities for output that is never decorated (tests, pipes).
    pub fn plain() -> Self {
        Self {
            supports_color: false,
            supports_unicode: false,
        }
    }

    /// Apply an explicit `--color` choice on top of detection.
    pub fn with_color_mode(mut self, color: Option<ColorWhen>) -> Self {
        match color {
            Some(ColorWhen::Always) => self.supports_color = true,
            Some(ColorWhen::Never) => self.supports_color = false,
            Some(ColorWhen::Auto) | None => {}
        }
        self
    }
}

/// Detect what stdout can render.
pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

/// Detect what stderr can render; errors and warnings go there.
pub fn detect_stderr_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && unicode_locale(&get_env),
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            if v == "c" || v == "posix" {
                return false;
            }
        }
    }
    true
}

//! Terminal rendering of deploy progress

use std::io::{self, Write};

use sous::domain::ports::{DeployEvent, DeployEventSink};
use sous::domain::services::StageOutcome;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::TerminalCapabilities;

/// Render one event as terminal lines, or `None` for events with no
/// visible counterpart.
pub fn render_event(event: &DeployEvent, caps: TerminalCapabilities) -> Option<String> {
    let color = caps.supports_color;
    let icon = |icon: Icon| icon.colored(color, caps.supports_unicode);

    let rendered = match event {
        DeployEvent::Started {
            destination,
            staging_dir,
        } => {
            let mut header = CommandHeader::new(Icon::Deploy, "Sous Deploy");
            header.add("Target", destination.as_str());
            header.add("Staging", staging_dir.display().to_string());
            header.render(color, caps.supports_unicode)
        }
        DeployEvent::StepStarted { step } => format!(
            "{} {}\n",
            icon(Icon::Progress),
            ColoredText::plain(step.as_str()).bold().render(color)
        ),
        DeployEvent::AttributesStaged { path, outcome } => match outcome {
            StageOutcome::Written => {
                format!("{} wrote {}\n", icon(Icon::Success), path.display())
            }
            StageOutcome::AlreadyPresent => format!(
                "{} {}\n",
                icon(Icon::Warning),
                ColoredText::warning(format!("{} already present, left as is", path.display()))
                    .render(color)
            ),
            StageOutcome::SkippedNotObject => format!(
                "{} {}\n",
                icon(Icon::Warning),
                ColoredText::warning("attribute payload is not an object, nothing written")
                    .render(color)
            ),
        },
        DeployEvent::Transferred { destination } => {
            format!("{} transferred to {}\n", icon(Icon::Success), destination)
        }
        DeployEvent::ConvergeFinished { success: true, .. } => {
            format!("{} converge finished\n", icon(Icon::Success))
        }
        DeployEvent::ConvergeFinished {
            success: false,
            exit_code,
        } => {
            let code = exit_code.map_or_else(|| "signal".to_string(), |c| c.to_string());
            format!(
                "{} {}\n",
                icon(Icon::Error),
                ColoredText::error(format!("converge failed (exit {})", code)).render(color)
            )
        }
        DeployEvent::StacktraceFound { path } => format!(
            "\n{} {}\n",
            icon(Icon::Error),
            ColoredText::error(format!("Stacktrace dumped to {}", path))
                .bold()
                .render(color)
        ),
        DeployEvent::StagingRetained { path } => format!(
            "{} staging kept at {}\n",
            icon(Icon::Arrow),
            path.display()
        ),
        DeployEvent::StagingRemoved { path } => format!(
            "{} {}\n",
            icon(Icon::Arrow),
            ColoredText::dim(format!("removed {}", path.display())).render(color)
        ),
        DeployEvent::Completed { success: true } => format!(
            "{} {}\n",
            icon(Icon::Success),
            ColoredText::success("Deploy complete").bold().render(color)
        ),
        DeployEvent::Completed { success: false } => return None,
    };
    Some(rendered)
}

/// Human-readable progress on stdout
pub struct ConsoleEventSink {
    caps: TerminalCapabilities,
}

impl ConsoleEventSink {
    pub fn new(caps: TerminalCapabilities) -> Self {
        Self { caps }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(text) = render_event(&event, self.caps) {
            let mut out = io::stdout().lock();
            let _ = out.write_all(text.as_bytes());
            let _ = out.flush();
        }
    }
}

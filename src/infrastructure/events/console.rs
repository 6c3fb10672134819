//! Console Event Sink
//!
//! Human-readable build progress on stdout. Per-file lines are only shown
//! with `-v`.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Icons for console rendering
struct Icons {
    stage: &'static str,
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    remove: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            stage: "▸",
            check: "✓",
            cross: "✗",
            write: "→",
            remove: "−",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            stage: ">",
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            remove: "[DEL]",
            warn: "[WARN]",
        }
    }
}

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    icons: Icons,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Console sink on stdout; unicode icons when stdout is a terminal
    pub fn stdout(verbose: u8) -> Self {
        use is_terminal::IsTerminal;
        let unicode = io::stdout().is_terminal();
        Self::with_writer(io::stdout(), unicode, verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, unicode: bool, verbose: u8) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            icons: if unicode {
                Icons::unicode()
            } else {
                Icons::ascii()
            },
            verbose,
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let icons = &self.icons;
        match event {
            BuildEvent::Started {
                project_root,
                dist_root,
            } => {
                self.line("📦 distpack build".to_string());
                self.line(format!("Project: {}", project_root.display()));
                self.line(format!("Output:  {}", dist_root.display()));
            }
            BuildEvent::StageStarted { stage } => {
                self.line(format!("{} {}", icons.stage, stage));
            }
            BuildEvent::StageCompleted { stage } => {
                self.line(format!("  {} {} done", icons.check, stage));
            }
            BuildEvent::FileWritten { path, .. } => {
                if self.verbose > 0 {
                    self.line(format!("    {} {}", icons.write, path.display()));
                }
            }
            BuildEvent::FileRemoved { path, .. } => {
                if self.verbose > 0 {
                    self.line(format!("    {} {}", icons.remove, path.display()));
                }
            }
            BuildEvent::Warning { message, .. } => {
                self.line(format!("  {} {}", icons.warn, message));
            }
            BuildEvent::Failed { stage, error } => {
                self.line(format!("  {} {} failed: {}", icons.cross, stage, error));
            }
            BuildEvent::Completed {
                written_count,
                removed_count,
                warning_count,
            } => {
                let mut summary = format!(
                    "{} Build complete: {} written, {} removed",
                    icons.check, written_count, removed_count
                );
                if warning_count > 0 {
                    summary.push_str(&format!(", {} warnings", warning_count));
                }
                self.line(summary);
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose > 0
    }
}

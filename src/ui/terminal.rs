//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, UserInterface, VerstampTheme};

/// Terminal UI: status on stdout, errors and reports on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: VerstampTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            VerstampTheme::new()
        } else {
            VerstampTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn report(&mut self, block: &str) {
        if block.is_empty() {
            return;
        }
        writeln!(self.err).ok();
        write!(self.err, "{}", block).ok();
        self.err.flush().ok();
    }
}

//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing styled output to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use verstamp::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Stamped 0.2.2");
//! assert_eq!(ui.successes(), ["Stamped 0.2.2"]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, VerstampTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Emit a preformatted diagnostic block on the error stream.
    ///
    /// Shown in every output mode.
    fn report(&mut self, block: &str);
}

//! Line-oriented report output.
//!
//! Informational lines go to the info writer and are dropped in quiet mode;
//! warnings and errors always go to the error writer.

use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

pub struct Reporter<'a> {
    info: Box<dyn Write + 'a>,
    error: Box<dyn Write + 'a>,
    quiet: bool,
    passed: usize,
    warnings: usize,
    errors: usize,
}

impl<'a> Reporter<'a> {
    pub fn new(info: impl Write + 'a, error: impl Write + 'a, quiet: bool) -> Self {
        Self {
            info: Box::new(info),
            error: Box::new(error),
            quiet,
            passed: 0,
            warnings: 0,
            errors: 0,
        }
    }

    /// Stdout for info lines, stderr for everything else.
    pub fn stdio(quiet: bool) -> Reporter<'static> {
        Reporter::new(io::stdout(), io::stderr(), quiet)
    }

    fn emit_info(&mut self, line: &str) {
        if !self.quiet {
            let _ = writeln!(self.info, "{}", line);
        }
    }

    fn emit_error(&mut self, line: &str) {
        let _ = writeln!(self.error, "{}", line);
    }

    /// Section header, e.g. `Checking Labels`.
    pub fn heading(&mut self, message: &str) {
        self.emit_info(message);
    }

    /// Informational line that is neither a pass nor a failure.
    pub fn note(&mut self, message: &str) {
        self.emit_info(&format!(" - {}", message));
    }

    pub fn ok(&mut self, message: &str) {
        self.passed += 1;
        self.emit_info(&format!(" - {} {}", "OK.".green(), message));
    }

    pub fn warn(&mut self, message: &str) {
        self.warnings += 1;
        self.emit_error(&format!(" - {} {}", "Warning:".yellow(), message));
    }

    pub fn error(&mut self, message: &str) {
        self.errors += 1;
        self.emit_error(&format!(" - {} {}", "Error:".red(), message));
    }

    /// Supporting line under an error, such as one offending issue.
    pub fn detail(&mut self, message: &str) {
        self.emit_error(message);
    }

    /// Unindented failure reported before any check runs.
    pub fn fail(&mut self, message: &str) {
        self.errors += 1;
        self.emit_error(&format!("{} {}", "Error:".red(), message));
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn flush(&mut self) {
        debug!(
            passed = self.passed,
            warnings = self.warnings,
            errors = self.errors,
            "report finished"
        );
        let _ = self.info.flush();
        let _ = self.error.flush();
    }
}


#[cfg(test)]
mod tests {
    use super::capture;

    #[test]
    fn test_lines_and_counters() {
        let (mut out, info, error) = capture::reporter(false);
        out.heading("Checking Labels");
        out.ok("[bug] verified");
        out.warn("Project \"v1\" has no description");
        out.error("missing fix (0e8a16)");

        assert_eq!(info.lines(), vec!["Checking Labels", " - OK. [bug] verified"]);
        assert_eq!(
            error.lines(),
            vec![
                " - Warning: Project \"v1\" has no description",
                " - Error: missing fix (0e8a16)"
            ]
        );
        assert_eq!(out.warnings(), 1);
    }

    #[test]
    fn test_quiet_drops_info_only() {
        let (mut out, info, error) = capture::reporter(true);
        out.heading("Checking Labels");
        out.ok("[bug] verified");
        out.note("Created label bug");
        out.error("missing fix (0e8a16)");
        out.detail("   #12   Broken thing");

        assert!(info.contents().is_empty());
        assert_eq!(error.lines().len(), 2);
    }
}

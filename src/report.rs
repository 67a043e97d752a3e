//! Colored console progress output.
//!
//! The reporter is an explicit value built from the CLI flags and threaded
//! into the run; there is no process-global logging state. Progress lines go
//! to stdout and only in file-writing mode (stream mode keeps stdout clean
//! for the JSON). Errors always go to stderr.

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const MAGENTA: &str = "\x1b[35m";
const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Decorative progress reporter for interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    enabled: bool,
    color: bool,
}

impl Reporter {
    #[must_use]
    pub fn new(enabled: bool, color: bool) -> Self {
        Self { enabled, color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Banner line printed once at startup.
    pub fn title(&self, text: &str) {
        if self.enabled {
            println!("\n  {}\n", self.paint(MAGENTA, text));
        }
    }

    /// A progress step.
    pub fn step(&self, message: &str) {
        if self.enabled {
            println!("{} {message}", self.paint(CYAN, ">"));
        }
    }

    /// A completed step.
    pub fn done(&self, message: &str) {
        if self.enabled {
            println!("{} {message}", self.paint(GREEN, ">"));
        }
    }

    /// Highlight a URL or path inside a message.
    #[must_use]
    pub fn highlight(&self, text: &str) -> String {
        self.paint(BLUE, text)
    }

    /// Accent a count or name inside a message.
    #[must_use]
    pub fn accent(&self, text: &str) -> String {
        self.paint(MAGENTA, text)
    }

    /// Errors are printed regardless of the enabled flag.
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", self.paint(RED, "error:"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_with_ansi_codes_when_colored() {
        let reporter = Reporter::new(true, true);
        assert_eq!(reporter.highlight("x"), format!("{BLUE}x{RESET}"));
    }

    #[test]
    fn paint_passes_through_when_plain() {
        let reporter = Reporter::new(true, false);
        assert_eq!(reporter.highlight("x"), "x");
        assert_eq!(reporter.accent("42"), "42");
    }
}

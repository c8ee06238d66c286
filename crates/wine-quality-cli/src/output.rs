//! Output formatting utilities

use colored::Colorize;

/// How much the CLI prints and in which format.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct OutputMode {
    /// Machine-readable JSON on stdout
    pub json: bool,
    /// Progress diagnostics on stderr
    pub verbose: bool,
    /// Errors and the final result only
    pub quiet: bool,
}

impl OutputMode {
    /// Human-readable report sections are printed.
    pub(crate) fn human(self) -> bool {
        !self.json && !self.quiet
    }

    /// Print a progress diagnostic when verbose.
    pub(crate) fn trace(self, msg: &str) {
        if self.verbose && !self.quiet {
            info(msg);
        }
    }
}

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a success message
pub(crate) fn success(msg: &str) {
    println!("{} {}", "[PASS]".green().bold(), msg);
}

/// Print an info message to stderr so stdout stays parseable
pub(crate) fn info(msg: &str) {
    eprintln!("{} {}", "[INFO]".blue(), msg);
}

/// Print a warning message
pub(crate) fn warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

/// Format a coefficient or score with fixed precision
pub(crate) fn format_value(value: f64) -> String {
    format!("{value:.6}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0), "5.000000");
        assert_eq!(format_value(-0.1234567), "-0.123457");
    }

    #[test]
    fn test_output_mode_human() {
        assert!(OutputMode::default().human());
        let json = OutputMode {
            json: true,
            ..OutputMode::default()
        };
        assert!(!json.human());
        let quiet = OutputMode {
            quiet: true,
            ..OutputMode::default()
        };
        assert!(!quiet.human());
    }
}

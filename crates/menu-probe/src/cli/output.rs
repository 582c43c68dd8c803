//! Terminal styling for report headings and error lines.

use std::io::IsTerminal;

/// Check if color output is enabled.
pub fn color_enabled() -> bool {
    // Respect NO_COLOR env (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Colored string builder.
#[derive(Debug, Clone, Copy)]
pub struct Styled {
    use_color: bool,
}

impl Default for Styled {
    fn default() -> Self {
        Self::new()
    }
}

impl Styled {
    pub fn new() -> Self {
        Self {
            use_color: color_enabled(),
        }
    }

    /// Never emits escape codes.
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.use_color {
            format!("{code}{s}{RESET}")
        } else {
            s.to_string()
        }
    }

    pub fn red(&self, s: &str) -> String {
        self.paint(RED, s)
    }

    pub fn cyan(&self, s: &str) -> String {
        self.paint(CYAN, s)
    }

    pub fn dim(&self, s: &str) -> String {
        self.paint(DIM, s)
    }
}

/// Print a fatal error and its cause chain to stderr.
pub fn print_error(err: &anyhow::Error) {
    let s = Styled {
        use_color: std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal(),
    };
    eprintln!("{} {err}", s.red("Error:"));
    for cause in err.chain().skip(1) {
        eprintln!("  {} {cause}", s.dim("caused by:"));
    }
}

// Colored status output for CLI commands
// All helpers write to stderr so artifact listings on stdout stay clean

/// Print a right-aligned action label followed by a message
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a per-item pass line with a checkmark
pub fn check(message: &str) {
    eprintln!("\x1b[32m  \u{2713}\x1b[0m {}", message);
}

/// Print a final success line
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Print a warning line
pub fn warning(message: &str) {
    eprintln!("\x1b[33m  !\x1b[0m {}", message);
}

/// Print a muted line
pub fn dim(message: &str) {
    eprintln!("\x1b[2m{}\x1b[0m", message);
}

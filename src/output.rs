use owo_colors::OwoColorize;

/// Small wrapper around stdout/stderr printing to provide consistent, colored
/// user-facing status lines. Colors are enabled only when output is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn is_tty_err() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// Progress/status line (yellow).
pub fn print_status(msg: &str) {
    if is_tty() {
        println!("{}", msg.yellow());
    } else {
        println!("{}", msg);
    }
}

/// Completed action (green).
pub fn print_success(msg: &str) {
    if is_tty() {
        println!("{}", msg.green());
    } else {
        println!("{}", msg);
    }
}

/// Non-fatal problem (red). Kept on stdout so it stays in order with the
/// per-directory block it belongs to.
pub fn print_warn(msg: &str) {
    if is_tty() {
        println!("{}", msg.red());
    } else {
        println!("{}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty_err() {
        eprintln!("{}", msg.red().bold());
    } else {
        eprintln!("{}", msg);
    }
}

/// Print a plain user-facing line (no color).
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Print an empty separator line.
pub fn print_blank() {
    println!();
}

pub const RULE: &str = "----------------------------------------";
pub const DOUBLE_RULE: &str = "=========================================";

use owo_colors::OwoColorize;

/// Small wrapper around stderr/stdout printing to provide consistent, colored
/// user-facing messages. stdout belongs to the launched binary, so every
/// diagnostic goes to stderr. Colors are enabled only when stderr is a TTY.
fn is_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_warn(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if is_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain line on stdout (no prefix). Only tools that own stdout
/// (aicommit-locate) use this; the launcher itself never does.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

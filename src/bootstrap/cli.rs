//! Minimal argument parsing shared by both binaries.
//!
//! Only verbosity and help are recognised; everything else comes from the
//! environment.

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    /// Level forced by `-v` flags, if any.
    pub log_level: Option<&'static str>,
    pub help: bool,
}

/// Parse arguments (without the program name).
///
/// Each `-v` raises verbosity one tier:
///   -v      → warn
///   -vv     → info
///   -vvv    → debug
///   -vvvv+  → trace
pub fn parse<I, S>(args: I) -> CliArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut verbosity = 0u8;
    let mut help = false;

    for arg in args {
        match arg.as_ref() {
            "--" => break,
            "-h" | "--help" => help = true,
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add(u8::try_from(a.len() - 1).unwrap_or(u8::MAX));
            }
            _ => {}
        }
    }

    let log_level = match verbosity {
        0 => None,
        1 => Some("warn"),
        2 => Some("info"),
        3 => Some("debug"),
        _ => Some("trace"),
    };

    CliArgs { log_level, help }
}

/// Parse `std::env::args()`.
pub fn parse_env_args() -> CliArgs {
    parse(std::env::args().skip(1))
}

/// Print usage for a binary.
pub fn print_usage(bin: &str, about: &str) {
    println!("{about}");
    println!();
    println!("Usage: {bin} [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -h, --help                 Print help");
    println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity (overrides LOG_LEVEL / RUST_LOG)");
}

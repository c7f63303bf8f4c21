//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: fraudshield [OPTIONS]

Options:
  --dark            Start in dark mode
  --light           Start in light mode
  --tab <id>        Start on a tab: transactions, bias, logs, users
  --no-feed         Do not start the simulated live feed
  --config <path>   Read configuration from <path>

Values may also be attached with '=', as in --tab=bias.
  -V, --version     Print version and exit
  -h, --help        Print this help and exit";

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("fraudshield {}", VERSION);
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("fraudshield {}\n\n{}", VERSION, USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_lists_every_flag() {
        for flag in ["--dark", "--light", "--tab", "--no-feed", "--config", "--version", "--help"] {
            assert!(USAGE.contains(flag), "missing {}", flag);
        }
    }
}

mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use passgen::Generator;
use tracing::{Level, info};

const DEFAULT_LENGTH: usize = 16;

#[derive(Parser)]
#[command(
    name = "passgen",
    version,
    author,
    about = "Random passwords with a digit, both letter cases and no triple repeats"
)]
struct Cli {
    /// Password length (minimum 3)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Number of passwords to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Print only the passwords, one per line
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_tracing(verbose: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level(verbose))
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let generator = Generator::new(cli.length).context("Invalid password length")?;

    let passwords = (0..cli.count)
        .map(|_| generator.generate())
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate password")?;

    info!(
        count = passwords.len(),
        length = generator.length(),
        "Generated passwords"
    );

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let output_config = ui::OutputConfig {
        password_length: generator.length(),
        count: passwords.len(),
    };

    ui::display_output(&passwords, &output_config, &options);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["passgen"]).unwrap();
        assert_eq!(cli.length, DEFAULT_LENGTH);
        assert_eq!(cli.count, 1);
        assert!(!cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["passgen", "-l", "32", "-c", "5", "-q", "-vv"]).unwrap();
        assert_eq!(cli.length, 32);
        assert_eq!(cli.count, 5);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rejects_zero_count() {
        assert!(Cli::try_parse_from(["passgen", "-c", "0"]).is_err());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(7), Level::TRACE);
    }

    #[test]
    fn test_short_length_fails_construction() {
        let cli = Cli::try_parse_from(["passgen", "--length", "2"]).unwrap();
        assert!(Generator::new(cli.length).is_err());
    }
}

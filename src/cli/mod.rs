use clap::Parser;
use std::io::{self, IsTerminal, Write};

use crate::config::HexhelpConfig;
use crate::number::{Report, parse_strict};

pub mod formatters;

use formatters::ConsoleBlock;

#[derive(Parser)]
#[command(name = "hexhelp")]
#[command(
    about = "Show the little- and big-endian bytes of 64-bit integers and their bit reversal",
    long_about = None
)]
pub struct Cli {
    /// Start the interactive interface
    #[arg(long = "gui", visible_alias = "tui")]
    pub gui: bool,

    /// Show version information
    #[arg(long = "version", short = 'v', action = clap::ArgAction::SetTrue)]
    pub version: bool,

    /// Show configuration file locations
    #[arg(long = "config-info")]
    pub config_info: bool,

    /// Write a default user configuration file
    #[arg(long = "init-config")]
    pub init_config: bool,

    /// Numbers to display: decimal, or hexadecimal with a 0x prefix
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

/// Parse each text strictly and write its console block to `out`.
///
/// Stops at the first malformed number; blocks for earlier numbers have
/// already been written.
///
/// # Errors
///
/// Returns an error for a malformed number or a failed write.
pub fn report_numbers<'a, W: Write>(
    out: &mut W,
    numbers: impl IntoIterator<Item = &'a str>,
) -> Result<(), String> {
    for text in numbers {
        let value = parse_strict(text.trim()).map_err(|e| e.to_string())?;
        write!(out, "{}", ConsoleBlock(&Report::new(value)))
            .map_err(|e| format!("Failed to write output: {e}"))?;
    }
    Ok(())
}

/// Run the CLI application
///
/// # Errors
///
/// This function will return an error if:
/// - A number cannot be parsed
/// - The configuration cannot be loaded or written
/// - Reading stdin or writing stdout fails
/// - The interactive interface fails to drive the terminal
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    if cli.version {
        print!("{}", crate::version::get_version_info());
        return Ok(());
    }

    if cli.config_info {
        HexhelpConfig::print_config_info();
        return Ok(());
    }

    if cli.init_config {
        let path = HexhelpConfig::create_default_config_file()
            .map_err(|e| format!("Failed to create config file: {e}"))?;
        println!("Created default configuration at {}", path.display());
        return Ok(());
    }

    if cli.gui {
        let config =
            HexhelpConfig::load().map_err(|e| format!("Failed to load configuration: {e}"))?;
        return crate::tui::run_tui(&config.tui);
    }

    if cli.numbers.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            print!("{}", crate::version::get_version_info().banner());
            return Ok(());
        }
        // Numbers piped in, separated by whitespace
        let input = io::read_to_string(stdin).map_err(|e| format!("Failed to read stdin: {e}"))?;
        return report_numbers(&mut io::stdout().lock(), input.split_whitespace());
    }

    report_numbers(
        &mut io::stdout().lock(),
        cli.numbers.iter().map(String::as_str),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(numbers: &[&str]) -> (Result<(), String>, String) {
        let mut out = Vec::new();
        let result = report_numbers(&mut out, numbers.iter().copied());
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_one_block_per_number() {
        let (result, text) = report(&["1", "0xFF", "-5"]);
        assert!(result.is_ok());
        assert_eq!(text.lines().count(), 18);
        assert!(text.contains("  -5 FFFFFFFFFFFFFFFB\n"));
    }

    #[test]
    fn test_arguments_are_trimmed() {
        let (result, text) = report(&[" 0x10 "]);
        assert!(result.is_ok());
        assert!(text.starts_with("  16 0000000000000010\n"));
    }

    #[test]
    fn test_malformed_number_stops_the_batch() {
        let (result, text) = report(&["2", "abc", "3"]);
        assert_eq!(result, Err("invalid number 'abc'".to_string()));
        assert!(text.starts_with("  2 "));
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn test_bare_prefix_is_an_error_in_batch_mode() {
        let (result, text) = report(&["0x"]);
        assert_eq!(result, Err("invalid number '0x'".to_string()));
        assert!(text.is_empty());
    }

    #[test]
    fn test_negative_numbers_are_values_not_flags() {
        let cli = Cli::try_parse_from(["hexhelp", "-5", "0x10"]).unwrap();
        assert_eq!(cli.numbers, ["-5", "0x10"]);
        assert!(!cli.gui);
    }

    #[test]
    fn test_gui_flag_anywhere() {
        let cli = Cli::try_parse_from(["hexhelp", "1", "--gui"]).unwrap();
        assert!(cli.gui);
        let cli = Cli::try_parse_from(["hexhelp", "--tui"]).unwrap();
        assert!(cli.gui);
    }
}

//! CLI — command-line surface for the logsift binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "logsift")]
#[command(about = "Aggregate queries over a JSON log collection", long_about = None)]
pub struct Cli {
    /// Path to the JSON log file (falls back to the configured log_path)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Query to run: 1 action counts, 2 unique users, 3 users with 4xx
    /// errors, 4 unique IPs, 5 most frequent user
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub query: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["logsift", "--query", "3"]).unwrap();
        assert_eq!(cli.query, 3);
        assert!(cli.input.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_parse_with_input_path() {
        let cli = Cli::try_parse_from(["logsift", "-i", "/tmp/logs.json", "-q", "1"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("/tmp/logs.json")));
        assert_eq!(cli.query, 1);
    }

    #[test]
    fn test_query_is_required() {
        assert!(Cli::try_parse_from(["logsift"]).is_err());
    }

    #[test]
    fn test_query_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["logsift", "--query", "0"]).is_err());
        assert!(Cli::try_parse_from(["logsift", "--query", "6"]).is_err());
    }

    #[test]
    fn test_no_color_flag() {
        let cli = Cli::try_parse_from(["logsift", "--query", "2", "--no-color"]).unwrap();
        assert!(cli.no_color);
    }
}

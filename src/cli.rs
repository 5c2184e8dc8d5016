use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use huffman_codes::{Result, SortOrder};

const DEMO_TEXT: &str = "hello world";

/// Print the Huffman code of every character in a piece of text.
#[derive(Debug, Parser)]
#[command(name = "huffman-codes", version)]
pub struct Cli {
    /// Text to build codes for. Defaults to "hello world".
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead.
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Row order of the printed table.
    #[arg(short, long, value_enum, default_value_t = SortOrder::Traversal)]
    pub sort: SortOrder,

    /// Print entropy, average code length and encoded size after the table.
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    pub fn input_text(&self) -> Result<String> {
        match (&self.file, &self.text) {
            (Some(path), _) => {
                info!("Reading input file: {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            (None, Some(text)) => Ok(text.clone()),
            (None, None) => Ok(String::from(DEMO_TEXT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_demo_text() {
        let cli = Cli::parse_from(["huffman-codes"]);
        assert_eq!(cli.input_text().unwrap(), "hello world");
        assert_eq!(cli.sort, SortOrder::Traversal);
        assert!(!cli.stats);
    }

    #[test]
    fn parses_text_and_flags() {
        let cli = Cli::parse_from(["huffman-codes", "abracadabra", "--sort", "freq", "--stats"]);
        assert_eq!(cli.input_text().unwrap(), "abracadabra");
        assert_eq!(cli.sort, SortOrder::Freq);
        assert!(cli.stats);
    }

    #[test]
    fn text_and_file_conflict() {
        let res = Cli::try_parse_from(["huffman-codes", "abc", "--file", "in.txt"]);
        assert!(res.is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let cli = Cli::parse_from(["huffman-codes", "--file", "/nonexistent/huffman/input.txt"]);
        assert!(matches!(
            cli.input_text(),
            Err(huffman_codes::HuffmanError::Io(_))
        ));
    }
}

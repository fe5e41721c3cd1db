use std::path::PathBuf;

use anyhow::{bail, Result};

// ---------------------------------------------------------------------------
// Defaults + command-line arguments
// ---------------------------------------------------------------------------

pub const DEFAULT_PRICE_DIR: &str = "price_lists";
pub const DEFAULT_OUTPUT_FILE: &str = "price_catalog.html";

const USAGE: &str = "\
Usage: price-scout [OPTIONS] [PRICE_DIR] [OUTPUT_HTML]

Loads every price list from PRICE_DIR (default: price_lists), opens an
interactive product search, and writes the full catalog to OUTPUT_HTML
(default: price_catalog.html) on exit.

Options:
  -h, --help    Print this help and exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for price lists.
    pub price_dir: PathBuf,
    /// HTML file written on exit.
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            price_dir: PathBuf::from(DEFAULT_PRICE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl Config {
    /// Parse command-line arguments, program name already skipped.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut positionals = 0usize;
        for arg in args {
            match arg.as_str() {
                "-h" | "--help" => {
                    print!("{USAGE}");
                    std::process::exit(0);
                }
                flag if flag.starts_with('-') => bail!("unknown option: {flag}\n\n{USAGE}"),
                _ => {
                    match positionals {
                        0 => config.price_dir = PathBuf::from(&arg),
                        1 => config.output_path = PathBuf::from(&arg),
                        _ => bail!("unexpected argument: {arg}\n\n{USAGE}"),
                    }
                    positionals += 1;
                }
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_uses_defaults() {
        let config = Config::from_args(args(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn positionals_override_dir_then_output() {
        let config = Config::from_args(args(&["lists", "out/catalog.html"])).unwrap();
        assert_eq!(config.price_dir, PathBuf::from("lists"));
        assert_eq!(config.output_path, PathBuf::from("out/catalog.html"));
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(Config::from_args(args(&["--nope"])).is_err());
    }

    #[test]
    fn third_positional_is_an_error() {
        assert!(Config::from_args(args(&["a", "b", "c"])).is_err());
    }
}

//! The commands under the `tinyalign` CLI.

pub mod pairs;

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;

use crate::symbols::Symbols;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Levenshtein distance between two strings.
    Edit {
        /// The first string.
        s: String,

        /// The second string.
        t: String,

        /// Only report the exact distance if it is at most this value.
        #[arg(short('k'), long)]
        max_diff: Option<usize>,
    },
    /// Hamming distance between two strings of equal length.
    Hamming {
        /// The first string.
        s: String,

        /// The second string.
        t: String,
    },
    /// Distances for every tab-separated pair of strings in a file.
    Pairs {
        /// The path to the file of pairs.
        #[arg(short('i'), long)]
        inp_path: PathBuf,

        /// The distance function to use.
        #[arg(short('m'), long, default_value = "edit")]
        metric: pairs::Metric,

        /// Only report exact edit distances that are at most this value.
        #[arg(short('k'), long)]
        max_diff: Option<usize>,
    },
}

impl Commands {
    /// Runs the command and writes its results to `out`.
    pub fn run<W: Write>(&self, symbols: Symbols, out: &mut W) -> Result<(), String> {
        match self {
            Self::Edit { s, t, max_diff } => {
                let distance = symbols.edit_distance(s, t, *max_diff);
                ftlog::info!(
                    "Edit distance between lengths {} and {} with max_diff {max_diff:?}: {distance}",
                    s.len(),
                    t.len()
                );
                writeln!(out, "{distance}").map_err(|e| e.to_string())
            }
            Self::Hamming { s, t } => {
                let distance = symbols.hamming_distance(s, t).map_err(|e| e.to_string())?;
                ftlog::info!("Hamming distance between strings of length {}: {distance}", s.len());
                writeln!(out, "{distance}").map_err(|e| e.to_string())
            }
            Self::Pairs {
                inp_path,
                metric,
                max_diff,
            } => pairs::run(inp_path, *metric, symbols, *max_diff, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Commands;
    use crate::symbols::Symbols;

    fn run(command: &Commands) -> Result<String, String> {
        let mut out = Vec::new();
        command.run(Symbols::Bytes, &mut out)?;
        String::from_utf8(out).map_err(|e| e.to_string())
    }

    #[test]
    fn edit() {
        let command = Commands::Edit {
            s: "SISSI".to_string(),
            t: "MISSISSIPPI".to_string(),
            max_diff: None,
        };
        assert_eq!(run(&command), Ok("6\n".to_string()));

        let command = Commands::Edit {
            s: "SISSI".to_string(),
            t: "MISSISSIPPI".to_string(),
            max_diff: Some(2),
        };
        assert_eq!(run(&command), Ok("3\n".to_string()));
    }

    #[test]
    fn hamming() {
        let command = Commands::Hamming {
            s: "ABCXDEF".to_string(),
            t: "ABCYDEF".to_string(),
        };
        assert_eq!(run(&command), Ok("1\n".to_string()));

        let command = Commands::Hamming {
            s: "A".to_string(),
            t: "BC".to_string(),
        };
        assert_eq!(
            run(&command),
            Err("sequences must have the same length, got 1 and 2".to_string())
        );
    }
}

//! Distances for a file of tab-separated pairs.

use std::{
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::symbols::Symbols;

/// The distance functions available for pairs.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    #[clap(name = "edit")]
    Edit,
    #[clap(name = "hamming")]
    Hamming,
}

/// Reads pairs from `inp_path` and writes `s<TAB>t<TAB>distance` for each.
///
/// Blank lines and lines starting with `#` are skipped.
///
/// # Errors
///
/// * If the file cannot be read.
/// * If a line does not hold exactly two tab-separated strings.
/// * If the Hamming distance is requested for strings of different lengths.
pub fn run<P: AsRef<Path>, W: Write>(
    inp_path: P,
    metric: Metric,
    symbols: Symbols,
    max_diff: Option<usize>,
    out: &mut W,
) -> Result<(), String> {
    let file = std::fs::File::open(&inp_path)
        .map_err(|e| format!("Could not open {}: {e}", inp_path.as_ref().display()))?;
    ftlog::info!("Reading pairs from {}", inp_path.as_ref().display());

    let num_pairs = write_distances(BufReader::new(file), metric, symbols, max_diff, out)?;
    ftlog::info!("Wrote distances for {num_pairs} pairs");

    Ok(())
}

/// Computes the distance for every pair in `reader`, returning the number of
/// pairs seen.
pub fn write_distances<R: BufRead, W: Write>(
    reader: R,
    metric: Metric,
    symbols: Symbols,
    max_diff: Option<usize>,
    out: &mut W,
) -> Result<usize, String> {
    let mut num_pairs = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| e.to_string())?;
        let Some((s, t)) = parse_line(&line).map_err(|e| {
            ftlog::error!("Line {}: {e}", i + 1);
            format!("Line {}: {e}", i + 1)
        })?
        else {
            continue;
        };

        let distance = match metric {
            Metric::Edit => symbols.edit_distance(s, t, max_diff),
            Metric::Hamming => symbols
                .hamming_distance(s, t)
                .map_err(|e| format!("Line {}: {e}", i + 1))?,
        };
        writeln!(out, "{s}\t{t}\t{distance}").map_err(|e| e.to_string())?;
        num_pairs += 1;
    }
    Ok(num_pairs)
}

/// Splits a line into its two strings. Returns `None` for lines to skip.
fn parse_line(line: &str) -> Result<Option<(&str, &str)>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split('\t');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(s), Some(t), None) => Ok(Some((s, t))),
        _ => Err(format!("expected two tab-separated strings, got {line:?}")),
    }
}

//! Turning command-line strings into symbol sequences.

/// The unit in which strings are compared.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbols {
    /// Compare the UTF-8 bytes of each string.
    #[clap(name = "bytes")]
    Bytes,
    /// Compare Unicode scalar values.
    #[clap(name = "chars")]
    Chars,
}

impl Symbols {
    /// Computes the edit distance between `s` and `t`, split into symbols.
    pub fn edit_distance(self, s: &str, t: &str, maxdiff: Option<usize>) -> usize {
        match self {
            Self::Bytes => tinyalign::edit_distance(s.as_bytes(), t.as_bytes(), maxdiff),
            Self::Chars => tinyalign::edit_distance(&chars(s), &chars(t), maxdiff),
        }
    }

    /// Computes the Hamming distance between `s` and `t`, split into symbols.
    pub fn hamming_distance(self, s: &str, t: &str) -> Result<usize, tinyalign::Error> {
        match self {
            Self::Bytes => tinyalign::hamming_distance(s.as_bytes(), t.as_bytes()),
            Self::Chars => tinyalign::hamming_distance(&chars(s), &chars(t)),
        }
    }
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

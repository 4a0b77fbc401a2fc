//! Readers for the two plain-text input formats.
//!
//! Both files share the same shape: a leading entry count on its own
//! line, then one integer pair per line. The count is informational
//! only; it is never checked against the number of entries that
//! actually follow.

use crate::utils::*;
use crate::{Region, Request};

#[derive(Error, Debug)]
pub enum ParseError {
    /// The declared entry count was negative.
    #[error("invalid entry count: {0}")]
    InvalidCount(i64),
    /// A line did not hold the expected integer pair.
    #[error("malformed line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads the free-region list (`Minput`-style): `start end` pairs.
pub fn read_regions(path: &Path) -> Result<Vec<Region>, ParseError> {
    let pairs = read_entries(path)?;
    Ok(pairs
        .into_iter()
        .map(|(start, end)| Region::new(start, end))
        .collect())
}

/// Reads the request list (`Pinput`-style): `id size` pairs.
pub fn read_requests(path: &Path) -> Result<Vec<Request>, ParseError> {
    let pairs = read_entries(path)?;
    Ok(pairs
        .into_iter()
        .map(|(id, size)| Request::new(id, size))
        .collect())
}

fn read_entries(path: &Path) -> Result<Vec<(Address, Address)>, ParseError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines = reader.lines().enumerate();

    // An empty file simply yields an empty list. A present count,
    // however, must be a non-negative integer.
    if let Some((n, line)) = lines.next() {
        let line = line?;
        let count: i64 = line
            .trim()
            .parse()
            .map_err(|_| ParseError::MalformedLine {
                line: n + 1,
                text: line.clone(),
            })?;
        if count < 0 {
            return Err(ParseError::InvalidCount(count));
        }
    }

    let mut res = vec![];
    for (n, line) in lines {
        let line = line?;
        // Tokens past the first two are ignored, like the original
        // scanner did.
        let mut fields = line.split_whitespace().map(|tok| tok.parse::<Address>());
        match (fields.next(), fields.next()) {
            (Some(Ok(a)), Some(Ok(b))) => res.push((a, b)),
            _ => {
                return Err(ParseError::MalformedLine {
                    line: n + 1,
                    text: line,
                });
            }
        }
    }

    Ok(res)
}

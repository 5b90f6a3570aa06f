//! QBF instance data and its text format.

use std::path::Path;
use std::str::FromStr;

use crate::error::{Result, SearchError};

/// Coefficient matrix `A` of a quadratic binary function, stored densely.
///
/// # Text format
///
/// Whitespace-separated tokens: the dimension `n`, then the upper triangle
/// row by row (`A[i][i..n]` for `i` in `0..n`, `n - i` values per row).
/// Entries below the diagonal are zero.
///
/// ```
/// use qbf_metaheur::qbf::QbfInstance;
///
/// let inst: QbfInstance = "3\n1 -2 0\n4 5\n-1".parse().unwrap();
/// assert_eq!(inst.size(), 3);
/// assert_eq!(inst.coefficient(0, 1), -2.0);
/// assert_eq!(inst.coefficient(1, 0), 0.0);
/// assert_eq!(inst.coefficient(2, 2), -1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QbfInstance {
    size: usize,
    coefficients: Vec<f64>,
}

impl QbfInstance {
    /// Builds an instance from a square matrix given row by row.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut coefficients = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SearchError::MalformedInstance(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            coefficients.extend(row);
        }
        Ok(Self { size, coefficients })
    }

    /// Reads and parses an instance file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }

    /// Number of binary variables.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry `A[i][j]`.
    #[inline]
    pub fn coefficient(&self, i: usize, j: usize) -> f64 {
        self.coefficients[i * self.size + j]
    }
}

impl FromStr for QbfInstance {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s.split_whitespace();
        let size: usize = tokens
            .next()
            .ok_or_else(|| SearchError::MalformedInstance("missing dimension".into()))?
            .parse()
            .map_err(|e| SearchError::MalformedInstance(format!("bad dimension: {e}")))?;

        let too_large =
            || SearchError::MalformedInstance(format!("dimension {size} is too large"));
        let cells = size.checked_mul(size).ok_or_else(too_large)?;
        let expected = size
            .checked_add(1)
            .and_then(|m| size.checked_mul(m))
            .map(|t| t / 2)
            .ok_or_else(too_large)?;

        // allocate only after the token count matches the triangle
        let entries: Vec<&str> = tokens.collect();
        if entries.len() < expected {
            return Err(SearchError::MalformedInstance(format!(
                "missing entries: dimension {size} needs {expected}, found {}",
                entries.len()
            )));
        }
        if let Some(extra) = entries.get(expected) {
            return Err(SearchError::MalformedInstance(format!(
                "trailing token {extra:?} after {size}x{size} triangle"
            )));
        }

        let mut coefficients = vec![0.0; cells];
        let mut entries = entries.into_iter();
        for i in 0..size {
            for (j, token) in (i..size).zip(entries.by_ref()) {
                coefficients[i * size + j] = token.parse().map_err(|e| {
                    SearchError::MalformedInstance(format!("bad entry ({i}, {j}) {token:?}: {e}"))
                })?;
            }
        }

        Ok(Self { size, coefficients })
    }
}

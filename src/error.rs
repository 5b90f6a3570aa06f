//! Error types shared by the search engine and the QBF loader.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Where an evaluator inconsistency was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// While building the initial solution.
    Construction,
    /// After a neighborhood move and its repair.
    Search,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Construction => write!(f, "construction"),
            Stage::Search => write!(f, "search"),
        }
    }
}

/// Errors raised by the search or by instance loading.
///
/// Ordinary search outcomes (no admissible move, no improving candidate)
/// are never errors.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The evaluator reports zero variables.
    #[error("evaluator domain is empty")]
    EmptyDomain,

    /// Incremental costs disagree with a full re-evaluation.
    #[error(
        "evaluator inconsistency during {stage}: predicted cost {predicted}, evaluated cost {evaluated}"
    )]
    EvaluatorInconsistency {
        stage: Stage,
        predicted: f64,
        evaluated: f64,
    },

    /// A QBF instance could not be parsed.
    #[error("malformed instance: {0}")]
    MalformedInstance(String),

    /// IO error while reading an instance.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistency_message_names_stage() {
        let err = SearchError::EvaluatorInconsistency {
            stage: Stage::Search,
            predicted: -3.0,
            evaluated: -2.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("search"), "{msg}");
        assert!(msg.contains("-3"), "{msg}");
        assert!(msg.contains("-2.5"), "{msg}");
    }

    #[test]
    fn test_io_error_converts() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(SearchError::Io(_))));
    }
}

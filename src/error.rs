use thiserror::Error;

/// run-fatal failures
///
/// none of these is retried: a corrupted or partial null
/// distribution invalidates the statistical conclusion, so the
/// run stops at the first failure and reports it.
#[derive(Error, Debug)]
pub enum SigError {
    #[error("invalid composition profile: {0}")]
    InvalidProfile(String),
    #[error("scanner failure: {0}")]
    ScannerError(String),
    #[error("sequence unavailable: {0}")]
    SequenceUnavailable(String),
}

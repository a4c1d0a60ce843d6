/// Error type shared across the value types and every compiler stage.
///
/// Lives below both `core` and `compiler` so the value types can report
/// failures without depending on the pipeline.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Register width outside `1..=max`
    #[error("Invalid width {width}: must be between 1 and {max}")]
    InvalidWidth { width: usize, max: usize },
    /// Index negative or not below `2^width`
    #[error("Invalid index {index}: must be in [0, 2^{width})")]
    InvalidIndex { index: i64, width: usize },
    /// A bit-string whose width differs from the configured one
    #[error("Inconsistent width: expected {expected} bits, found {found}")]
    InconsistentWidth { expected: usize, found: usize },
    /// Repeated index under `DuplicatePolicy::Reject`
    #[error("Duplicate index {index}")]
    DuplicateIndex { index: i64 },
    /// Text that is not a string of `0`/`1`
    #[error("Invalid bit-string '{text}'")]
    InvalidBitString { text: String },
    /// Controlled instruction whose fields break the gate invariants
    #[error("Invalid instruction on q{target}: {msg}")]
    InvalidInstruction { target: usize, msg: String },
    /// Malformed index-list text
    #[error("Parse error line {line}: {msg}")]
    Parse { line: usize, msg: String },
}

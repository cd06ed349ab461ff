use thiserror::Error;

/// Errors surfaced by the encoding layer and the solve façade.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No model exists. A legitimate outcome of `solve_one`, distinct from
    /// any translation or backend fault.
    #[error("formula is unsatisfiable")]
    Unsatisfiable,

    /// The requested constraint has no encoding; construction is aborted
    /// rather than emitting a silently wrong CNF.
    #[error("unsupported constraint: {0}")]
    UnsupportedConstraint(&'static str),
}

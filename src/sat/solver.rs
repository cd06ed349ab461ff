//! The solve façade: translate once, delegate enumeration to a backend,
//! decode models lazily back into facts.

use crate::sat::cnf::Cnf;
use crate::sat::error::Error;
use crate::sat::fact::Lit;
use crate::sat::translate::{NumericCnf, translate};

/// The backend oracle contract.
///
/// Given a numeric CNF (DIMACS convention: clauses of nonzero signed
/// integers, variables `1..=num_vars`, sign carrying polarity), produce a
/// lazy sequence of total satisfying assignments, each covering every
/// variable exactly once. An empty sequence means unsatisfiable. The façade
/// is correct under any enumeration order.
pub trait Backend {
    /// The lazy model sequence; each pull may block while the backend
    /// searches.
    type Models: Iterator<Item = Vec<i32>>;

    fn enumerate(&self, cnf: NumericCnf) -> Self::Models;
}

/// Translates once and lazily decodes each backend model back to facts.
///
/// Negated literals are dropped from models unless `include_negated` is set.
/// The sequence is pull-based: no search happens between pulls, and
/// abandoning the iterator before exhaustion stops further search with no
/// explicit cancel signal.
///
/// # Panics
///
/// Panics if the backend emits a variable number outside the translated
/// range; numbering corruption must not pass silently.
pub fn solve_lazy<B: Backend>(
    cnf: &Cnf,
    backend: &B,
    include_negated: bool,
) -> impl Iterator<Item = Vec<Lit>> {
    let (numeric, map) = translate(cnf);
    log::trace!(
        "solving {} clauses over {} variables",
        numeric.clauses.len(),
        numeric.num_vars
    );

    backend.enumerate(numeric).map(move |model| {
        model
            .into_iter()
            .filter(|&number| include_negated || number > 0)
            .map(|number| {
                map.literal(number).cloned().unwrap_or_else(|| {
                    panic!("backend produced literal {number} outside the translated range")
                })
            })
            .collect()
    })
}

/// Materializes [`solve_lazy`], preserving the backend's enumeration order.
/// Order across distinct models is backend-defined; do not rely on it.
#[must_use]
pub fn solve_all<B: Backend>(cnf: &Cnf, backend: &B, include_negated: bool) -> Vec<Vec<Lit>> {
    solve_lazy(cnf, backend, include_negated).collect()
}

/// The first model the backend finds.
///
/// # Errors
///
/// Returns [`Error::Unsatisfiable`] if no model exists. That is a normal
/// outcome, distinct from any translation or backend fault.
pub fn solve_one<B: Backend>(
    cnf: &Cnf,
    backend: &B,
    include_negated: bool,
) -> Result<Vec<Lit>, Error> {
    solve_lazy(cnf, backend, include_negated)
        .next()
        .ok_or(Error::Unsatisfiable)
}

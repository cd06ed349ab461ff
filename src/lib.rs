#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Humane symbolic CNF encoding over pluggable SAT backends.
//!
//! Callers describe constraints over named boolean facts, convert
//! disjunctions-of-conjunctions and cardinality bounds into CNF, and hand the
//! result to a [`sat::solver::Backend`] for model enumeration. Models come
//! back as the original facts, not solver-internal variable numbers.

/// The `sat` module implements the symbolic literal model, the DNF to CNF
/// converters, the cardinality builder, the numeric translator and the solve
/// façade.
pub mod sat;

pub use sat::cardinality::{Quantity, all_true, basic_fact, exactly_one, none_true, some_true};
pub use sat::cnf::{Clause, Cnf};
pub use sat::convert::{from_dnf_exact, from_dnf_tseytin};
pub use sat::dpll::Dpll;
pub use sat::error::Error;
pub use sat::fact::{Fact, Lit, Minter};
pub use sat::solver::{Backend, solve_all, solve_lazy, solve_one};
pub use sat::translate::{NumericClause, NumericCnf, VarMap, translate, translate_unique};

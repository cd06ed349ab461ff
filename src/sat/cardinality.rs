//! Cardinality constraints: "exactly / at least / at most n of these
//! literals are true", encoded by direct subset enumeration.

use crate::sat::cnf::{Clause, Cnf};
use crate::sat::error::Error;
use crate::sat::fact::Lit;
use itertools::Itertools;

/// A bound on the number of true literals in an ordered set.
///
/// Encodings enumerate subsets, so clause counts are binomial in the set
/// size; for the small constraint sets this crate targets that is the
/// simplest correct choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    literals: Vec<Lit>,
}

impl Quantity {
    #[must_use]
    pub fn of(literals: impl IntoIterator<Item = Lit>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Fewer than `n` literals are true: for every `n`-subset, not all of
    /// its members hold.
    ///
    /// `fewer_than(0)` emits the single empty clause: the unique 0-subset of
    /// any set exists, and "not all zero of them are true" is unsatisfiable.
    #[must_use]
    pub fn fewer_than(&self, n: usize) -> Cnf {
        self.literals
            .iter()
            .map(Lit::negated)
            .combinations(n)
            .map(Clause::new)
            .collect()
    }

    #[must_use]
    pub fn at_most(&self, n: usize) -> Cnf {
        self.fewer_than(n + 1)
    }

    /// More than `n` literals are true: every `(len - n)`-subset contains at
    /// least one true literal.
    ///
    /// For `n >= len` the subset width saturates at 0, yielding the single
    /// empty clause: more literals than the set holds can never be true.
    #[must_use]
    pub fn more_than(&self, n: usize) -> Cnf {
        let width = self.literals.len().saturating_sub(n);
        self.literals
            .iter()
            .cloned()
            .combinations(width)
            .map(Clause::new)
            .collect()
    }

    /// `at_least(0)` is vacuously true and emits no clauses.
    #[must_use]
    pub fn at_least(&self, n: usize) -> Cnf {
        if n == 0 {
            Cnf::default()
        } else {
            self.more_than(n - 1)
        }
    }

    #[must_use]
    pub fn exactly(&self, n: usize) -> Cnf {
        self.at_most(n).and(self.at_least(n))
    }

    /// "Any number but `n`" has no clausal encoding here; fails
    /// deterministically rather than silently mis-encoding.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::UnsupportedConstraint`].
    pub fn not_equal(&self, _n: usize) -> Result<Cnf, Error> {
        Err(Error::UnsupportedConstraint("not-equal"))
    }
}

/// Every literal holds.
#[must_use]
pub fn all_true(literals: impl IntoIterator<Item = Lit>) -> Cnf {
    let quantity = Quantity::of(literals);
    quantity.exactly(quantity.len())
}

/// At least one literal holds.
#[must_use]
pub fn some_true(literals: impl IntoIterator<Item = Lit>) -> Cnf {
    Quantity::of(literals).at_least(1)
}

/// Exactly one literal holds.
#[must_use]
pub fn exactly_one(literals: impl IntoIterator<Item = Lit>) -> Cnf {
    Quantity::of(literals).exactly(1)
}

/// No literal holds.
#[must_use]
pub fn none_true(literals: impl IntoIterator<Item = Lit>) -> Cnf {
    Quantity::of(literals).exactly(0)
}

/// Asserts a single literal outright.
#[must_use]
pub fn basic_fact(literal: Lit) -> Cnf {
    Quantity::of([literal]).exactly(1)
}

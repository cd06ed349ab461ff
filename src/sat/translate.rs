//! Symbolic to numeric translation.
//!
//! Backends speak the DIMACS CNF convention: nonzero signed integers,
//! variables numbered contiguously from 1, sign carrying polarity. Each
//! translation call builds its own [`VarMap`]; numbering is never shared or
//! reused across calls.

use crate::sat::cnf::Cnf;
use crate::sat::fact::Lit;
use itertools::Itertools;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A translated clause of DIMACS-convention literals.
pub type NumericClause = SmallVec<[i32; 8]>;

/// A translated CNF ready to hand to a backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumericCnf {
    pub clauses: Vec<NumericClause>,
    /// Variables are numbered `1..=num_vars`.
    pub num_vars: usize,
}

/// The ephemeral bijection between occurring literals and signed integers.
///
/// Covers both polarities of every variable that occurs in the translated
/// CNF: a literal's number and its negation's are exact opposites. Scoped to
/// one translation call and discarded after use.
#[derive(Debug, Clone, Default)]
pub struct VarMap {
    numbers: FxHashMap<Lit, i32>,
    literals: FxHashMap<i32, Lit>,
}

impl VarMap {
    #[must_use]
    pub fn number(&self, literal: &Lit) -> Option<i32> {
        self.numbers.get(literal).copied()
    }

    #[must_use]
    pub fn literal(&self, number: i32) -> Option<&Lit> {
        self.literals.get(&number)
    }

    /// Count of distinct variables numbered so far.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.literals.len() / 2
    }

    fn number_of(&mut self, literal: &Lit) -> i32 {
        if let Some(number) = self.numbers.get(literal) {
            return *number;
        }

        let number = i32::try_from(self.num_vars() + 1).expect("variable count overflowed i32");
        let positive = literal.fact().lit();
        let negative = positive.negated();
        self.numbers.insert(positive.clone(), number);
        self.numbers.insert(negative.clone(), -number);
        self.literals.insert(number, positive);
        self.literals.insert(-number, negative);

        self.numbers[literal]
    }
}

/// Translates a symbolic CNF into numbered clauses plus the reverse map.
///
/// Variables are numbered in first-seen order over the flattened clause
/// traversal, contiguously from 1, restricted to variables that actually
/// occur. Independent calls never share numbering space.
#[must_use]
pub fn translate(cnf: &Cnf) -> (NumericCnf, VarMap) {
    let mut map = VarMap::default();
    let clauses: Vec<NumericClause> = cnf
        .iter()
        .map(|clause| clause.iter().map(|lit| map.number_of(lit)).collect())
        .collect();

    let num_vars = map.num_vars();
    log::trace!("translated {} clauses over {num_vars} variables", clauses.len());
    (NumericCnf { clauses, num_vars }, map)
}

/// Like [`translate`], after an order-preserving deduplication of identical
/// clauses. Changes the clause count, never satisfiability.
#[must_use]
pub fn translate_unique(cnf: &Cnf) -> (NumericCnf, VarMap) {
    let deduped: Cnf = cnf.iter().cloned().unique().collect();
    translate(&deduped)
}

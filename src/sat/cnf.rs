use crate::sat::fact::Lit;
use core::fmt;
use std::collections::BTreeSet;

/// A disjunction of literals.
///
/// Literals are unordered and duplicates collapse. The empty clause is a
/// valid, maximally restrictive CNF element (immediate falsity), not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Clause(BTreeSet<Lit>);

impl Clause {
    #[must_use]
    pub fn new(literals: impl IntoIterator<Item = Lit>) -> Self {
        Self(literals.into_iter().collect())
    }

    #[must_use]
    pub fn unit(literal: Lit) -> Self {
        Self::new([literal])
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.len() == 1
    }

    #[must_use]
    pub fn contains(&self, literal: &Lit) -> bool {
        self.0.contains(literal)
    }

    /// Whether the clause contains some literal together with its negation.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.0.iter().any(|lit| self.0.contains(&lit.negated()))
    }

    /// Whether every literal of `self` occurs in `other`, making `other`
    /// redundant in a CNF that already contains `self`.
    #[must_use]
    pub fn subsumes(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    pub fn insert(&mut self, literal: Lit) {
        self.0.insert(literal);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lit> {
        self.0.iter()
    }
}

impl FromIterator<Lit> for Clause {
    fn from_iter<I: IntoIterator<Item = Lit>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Clause {
    type Item = &'a Lit;
    type IntoIter = std::collections::btree_set::Iter<'a, Lit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Clause {
    type Item = Lit;
    type IntoIter = std::collections::btree_set::IntoIter<Lit>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, lit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{lit}")?;
        }
        f.write_str(")")
    }
}

/// A conjunction of clauses, ready for translation to a backend.
///
/// Clause order is kept for reproducibility but is semantically irrelevant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cnf(Vec<Clause>);

impl Cnf {
    #[must_use]
    pub const fn new(clauses: Vec<Clause>) -> Self {
        Self(clauses)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn clauses(&self) -> &[Clause] {
        &self.0
    }

    pub fn push(&mut self, clause: Clause) {
        self.0.push(clause);
    }

    /// Appends another CNF; conjunction of conjunctions is concatenation.
    pub fn append(&mut self, mut other: Self) {
        self.0.append(&mut other.0);
    }

    /// The conjunction of two CNFs.
    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.append(other);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.0.iter()
    }
}

impl FromIterator<Clause> for Cnf {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Clause> for Cnf {
    fn extend<I: IntoIterator<Item = Clause>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Cnf {
    type Item = &'a Clause;
    type IntoIter = core::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Cnf {
    type Item = Clause;
    type IntoIter = std::vec::IntoIter<Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Clause>> for Cnf {
    fn from(clauses: Vec<Clause>) -> Self {
        Self::new(clauses)
    }
}

impl fmt::Display for Cnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" & ")?;
            }
            write!(f, "{clause}")?;
        }
        Ok(())
    }
}

//! DNF to CNF conversion.
//!
//! Input to both converters is a disjunction of conjunctive groups: each
//! group is a sequence of literals that must all hold, and the groups are
//! implicitly ORed. [`from_dnf_exact`] produces a logically equivalent CNF
//! with no new variables at a potentially exponential cost;
//! [`from_dnf_tseytin`] produces a linear-size equisatisfiable CNF by
//! minting one extension variable per group.

use crate::sat::cnf::{Clause, Cnf};
use crate::sat::fact::{Lit, Minter};
use rustc_hash::FxHashSet;

/// Converts a disjunction of conjunctive groups into an equivalent CNF.
///
/// Groups are folded one at a time into a running clause set under the
/// distribution law. Candidate clauses containing a literal and its negation
/// are dropped, duplicate literals collapse, and after every folded group
/// any clause that is a strict superset of another present clause is
/// removed. The incremental pruning bounds intermediate growth, but the
/// result can still be exponential in group count; that is inherent to exact
/// conversion, not a bug.
///
/// Edge cases: zero groups yield the single empty clause (an empty
/// disjunction is false); a zero-literal group yields an empty CNF (an empty
/// conjunction is true, so the whole disjunction is).
#[must_use]
pub fn from_dnf_exact(groups: &[Vec<Lit>]) -> Cnf {
    let mut cnf: FxHashSet<Clause> = FxHashSet::default();
    cnf.insert(Clause::empty());

    for group in groups {
        let mut next = FxHashSet::default();
        for literal in group {
            let blocked = literal.negated();
            for clause in &cnf {
                if clause.contains(&blocked) {
                    // distributing here would produce a tautology
                    continue;
                }
                let mut grown = clause.clone();
                grown.insert(literal.clone());
                next.insert(grown);
            }
        }
        cnf = prune_subsumed(next);
    }

    let mut clauses: Vec<Clause> = cnf.into_iter().collect();
    clauses.sort();
    log::trace!(
        "exact conversion: {} groups -> {} clauses",
        groups.len(),
        clauses.len()
    );
    Cnf::new(clauses)
}

/// Drops every clause that is a strict superset of another clause present.
///
/// Shorter clauses are considered first, so one sweep suffices: a clause
/// survives iff no kept shorter clause subsumes it.
fn prune_subsumed(clauses: FxHashSet<Clause>) -> FxHashSet<Clause> {
    let mut by_len: Vec<Clause> = clauses.into_iter().collect();
    by_len.sort_by_key(Clause::len);

    let mut kept: Vec<Clause> = Vec::with_capacity(by_len.len());
    'candidates: for clause in by_len {
        for smaller in &kept {
            if smaller.len() < clause.len() && smaller.subsumes(&clause) {
                continue 'candidates;
            }
        }
        kept.push(clause);
    }
    kept.into_iter().collect()
}

/// Converts a disjunction of conjunctive groups into an equisatisfiable CNF
/// via the Tseytin transformation.
///
/// One extension variable `E` is minted per group: `(~E | L)` for every
/// literal `L` of the group, one `(~L1 | .. | ~Ln | E)` clause asserting the
/// conjunction implies `E`, and finally one clause ORing all minted `E`s.
/// Output size is linear in the total literal count. Satisfiability is
/// preserved exactly, but not the solution set: strip extension variables
/// (see [`Lit::is_extension`]) before interpreting models as answers to the
/// original question.
///
/// A zero-literal group still mints its extension variable; its "implies"
/// clause degenerates to the unit clause `(E)`, asserting `E` outright, so
/// an always-true group keeps the whole disjunction satisfiable.
#[must_use]
pub fn from_dnf_tseytin(groups: &[Vec<Lit>], minter: &Minter) -> Cnf {
    let mut cnf = Cnf::default();
    let mut switches: Vec<Lit> = Vec::with_capacity(groups.len());

    for group in groups {
        let on = minter.fresh().lit();
        let off = on.negated();

        let mut implies_on: Vec<Lit> = Vec::with_capacity(group.len() + 1);
        for literal in group {
            implies_on.push(literal.negated());
            cnf.push(Clause::new([off.clone(), literal.clone()]));
        }
        implies_on.push(on.clone());
        cnf.push(Clause::new(implies_on));

        switches.push(on);
    }

    cnf.push(Clause::new(switches));
    log::trace!(
        "tseytin conversion: {} groups -> {} clauses",
        groups.len(),
        cnf.len()
    );
    cnf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sat::dpll::Dpll;
    use crate::sat::fact::Fact;
    use crate::sat::solver::solve_all;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn lit(name: &str) -> Lit {
        Fact::new(name).lit()
    }

    fn clause_set(cnf: &Cnf) -> FxHashSet<Clause> {
        cnf.iter().cloned().collect()
    }

    #[test]
    fn exact_single_group_distributes() {
        let cnf = from_dnf_exact(&[vec![lit("A"), lit("B")]]);
        let expected: FxHashSet<Clause> =
            [Clause::unit(lit("A")), Clause::unit(lit("B"))].into_iter().collect();
        assert_eq!(clause_set(&cnf), expected);
    }

    #[test]
    fn exact_three_by_three_yields_27_width_3_clauses() {
        let groups = vec![
            vec![lit("A"), lit("B"), lit("C")],
            vec![lit("D"), lit("E"), lit("F")],
            vec![lit("G"), lit("H"), lit("I")],
        ];
        let cnf = from_dnf_exact(&groups);
        assert_eq!(cnf.len(), 27);
        assert!(cnf.iter().all(|clause| clause.len() == 3));
    }

    #[test]
    fn exact_drops_tautologies() {
        // (A) or (~A and B)  ==  (A | B)
        let cnf = from_dnf_exact(&[vec![lit("A")], vec![lit("A").negated(), lit("B")]]);
        let expected: FxHashSet<Clause> =
            [Clause::new([lit("A"), lit("B")])].into_iter().collect();
        assert_eq!(clause_set(&cnf), expected);
    }

    #[test]
    fn exact_prunes_subsumed_clauses_incrementally() {
        // (A and B) or (A and C)  ==  A and (B | C)
        let cnf = from_dnf_exact(&[vec![lit("A"), lit("B")], vec![lit("A"), lit("C")]]);
        let expected: FxHashSet<Clause> = [
            Clause::unit(lit("A")),
            Clause::new([lit("B"), lit("C")]),
        ]
        .into_iter()
        .collect();
        assert_eq!(clause_set(&cnf), expected);
    }

    #[test]
    fn exact_zero_groups_is_falsity() {
        let cnf = from_dnf_exact(&[]);
        assert_eq!(cnf.len(), 1);
        assert!(cnf.clauses()[0].is_empty());
    }

    #[test]
    fn exact_empty_group_is_truth() {
        let cnf = from_dnf_exact(&[vec![lit("A")], vec![]]);
        assert!(cnf.is_empty());
    }

    #[test]
    fn tseytin_pair_shape() {
        let reference = Minter::new();
        let e = reference.fresh().lit();

        let minter = Minter::new();
        let cnf = from_dnf_tseytin(&[vec![lit("A"), lit("B")]], &minter);

        let expected: FxHashSet<Clause> = [
            Clause::new([e.negated(), lit("A")]),
            Clause::new([e.negated(), lit("B")]),
            Clause::new([lit("A").negated(), lit("B").negated(), e.clone()]),
            Clause::unit(e),
        ]
        .into_iter()
        .collect();
        assert_eq!(cnf.len(), 4);
        assert_eq!(clause_set(&cnf), expected);
    }

    #[test]
    fn tseytin_three_by_three_is_linear() {
        let groups = vec![
            vec![lit("A"), lit("B"), lit("C")],
            vec![lit("D"), lit("E"), lit("F")],
            vec![lit("G"), lit("H"), lit("I")],
        ];
        let cnf = from_dnf_tseytin(&groups, &Minter::new());
        assert_eq!(cnf.len(), 13);

        let extensions: BTreeSet<_> = cnf
            .iter()
            .flat_map(Clause::iter)
            .filter(|l| l.is_extension())
            .map(|l| l.fact().clone())
            .collect();
        assert_eq!(extensions.len(), 3);
    }

    #[test]
    fn tseytin_empty_group_asserts_its_switch() {
        let cnf = from_dnf_tseytin(&[vec![]], &Minter::new());
        assert_eq!(cnf.len(), 2);
        assert!(cnf.iter().all(Clause::is_unit));
        assert!(
            cnf.iter()
                .flat_map(Clause::iter)
                .all(|l| l.is_extension() && l.is_positive())
        );
    }

    /// Non-extension facts occurring in a CNF. Subsumption can erase a
    /// variable from the exact conversion entirely, so model comparisons
    /// project onto the exact CNF's support.
    fn support(cnf: &Cnf) -> BTreeSet<Fact> {
        cnf.iter()
            .flat_map(Clause::iter)
            .map(|l| l.fact().clone())
            .filter(|f| !f.is_extension())
            .collect()
    }

    /// Models as sets of positive fact names restricted to `support`.
    /// Order across models is backend-defined, hence sets.
    fn fact_models(cnf: &Cnf, support: &BTreeSet<Fact>) -> BTreeSet<BTreeSet<String>> {
        solve_all(cnf, &Dpll, false)
            .into_iter()
            .map(|model| {
                model
                    .into_iter()
                    .filter(|l| support.contains(l.fact()))
                    .map(|l| l.fact().name().to_owned())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn conversions_agree_on_models() {
        let groups = vec![
            vec![lit("A"), lit("B")],
            vec![lit("B").negated(), lit("C")],
        ];
        let exact = from_dnf_exact(&groups);
        let tseytin = from_dnf_tseytin(&groups, &Minter::new());
        let support = support(&exact);
        assert_eq!(fact_models(&exact, &support), fact_models(&tseytin, &support));
    }

    prop_compose! {
        fn arb_lit()(index in 0..4usize, polarity in any::<bool>()) -> Lit {
            let name = ["a", "b", "c", "d"][index];
            Lit::new(Fact::new(name), polarity)
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        #[test]
        fn conversions_agree_on_arbitrary_small_dnfs(
            groups in prop::collection::vec(prop::collection::vec(arb_lit(), 0..3), 1..4),
        ) {
            let exact = from_dnf_exact(&groups);
            let tseytin = from_dnf_tseytin(&groups, &Minter::new());
            let support = support(&exact);
            prop_assert_eq!(fact_models(&exact, &support), fact_models(&tseytin, &support));
        }
    }
}

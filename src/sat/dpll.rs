//! Reference backend: a lazy DPLL-style model enumerator.
//!
//! Backtracking search with unit propagation, yielding every total
//! satisfying assignment exactly once, on demand. This is the crate's test
//! oracle and a workable backend for small problems; industrial workloads
//! should plug a real solver in through [`Backend`].

use crate::sat::solver::Backend;
use crate::sat::translate::{NumericClause, NumericCnf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dpll;

impl Backend for Dpll {
    type Models = Models;

    fn enumerate(&self, cnf: NumericCnf) -> Models {
        Models {
            stack: vec![vec![None; cnf.num_vars]],
            cnf,
        }
    }
}

/// Partial assignment indexed by variable number minus one.
type Assignment = Vec<Option<bool>>;

/// Lazy model sequence. Each pull resumes the depth-first search where the
/// previous pull left off; dropping the iterator abandons the search.
#[derive(Debug)]
pub struct Models {
    cnf: NumericCnf,
    stack: Vec<Assignment>,
}

impl Iterator for Models {
    type Item = Vec<i32>;

    fn next(&mut self) -> Option<Vec<i32>> {
        while let Some(mut assignment) = self.stack.pop() {
            if propagate(&self.cnf.clauses, &mut assignment) == Propagation::Conflict {
                continue;
            }
            if let Some(var) = assignment.iter().position(Option::is_none) {
                let mut negative = assignment.clone();
                negative[var] = Some(false);
                self.stack.push(negative);
                assignment[var] = Some(true);
                self.stack.push(assignment);
            } else {
                return Some(total(&assignment));
            }
        }
        None
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Propagation {
    Conflict,
    Stable,
}

fn value(assignment: &Assignment, literal: i32) -> Option<bool> {
    let var = literal.unsigned_abs() as usize - 1;
    assignment[var].map(|assigned| assigned == (literal > 0))
}

/// Unit propagation to fixpoint. Forced assignments are semantically implied
/// by the partial assignment, so no model is lost and none is duplicated.
fn propagate(clauses: &[NumericClause], assignment: &mut Assignment) -> Propagation {
    loop {
        let mut changed = false;
        for clause in clauses {
            let mut satisfied = false;
            let mut open = 0usize;
            let mut unit = 0i32;
            for &literal in clause {
                match value(assignment, literal) {
                    Some(true) => {
                        satisfied = true;
                        break;
                    }
                    Some(false) => {}
                    None => {
                        open += 1;
                        unit = literal;
                    }
                }
            }
            if satisfied {
                continue;
            }
            match open {
                0 => return Propagation::Conflict,
                1 => {
                    let var = unit.unsigned_abs() as usize - 1;
                    assignment[var] = Some(unit > 0);
                    changed = true;
                }
                _ => {}
            }
        }
        if !changed {
            return Propagation::Stable;
        }
    }
}

fn total(assignment: &Assignment) -> Vec<i32> {
    assignment
        .iter()
        .enumerate()
        .map(|(index, assigned)| {
            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            let number = (index + 1) as i32;
            if assigned.expect("assignment must be total here") {
                number
            } else {
                -number
            }
        })
        .collect()
}

#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod cardinality;
pub mod cnf;
pub mod convert;
pub mod dpll;
pub mod error;
pub mod fact;
pub mod solver;
pub mod translate;

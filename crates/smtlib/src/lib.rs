//! # sol-chc-smtlib
//!
//! SMT-LIB2 abstract syntax for the CHC encoder: sorts, terms, sorted
//! expressions, versioned function symbols and the commands that declare
//! and assert Horn clauses. `Display` implementations in [`formatter`]
//! produce solver input.

pub mod command;
pub mod expr;
pub mod formatter;
pub mod function;
pub mod script;
pub mod sort;
pub mod term;

pub use command::Command;
pub use expr::Expr;
pub use function::{ApplicationError, FunctionDecl, SymbolicFunction};
pub use script::Script;
pub use sort::{FunctionSort, Sort};
pub use term::Term;

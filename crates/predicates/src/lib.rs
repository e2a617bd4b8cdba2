//! # sol-chc-predicates
//!
//! Predicate management for a Constrained Horn Clause verifier of smart
//! contracts.
//!
//! Every program point that takes part in the Horn system (a function's
//! summary, a contract's interface, a loop or block) is an uninterpreted
//! relation. This crate gives each one a stable identity for the duration of
//! a verification run, versions its function symbol, classifies it, and turns
//! the solver's positional counterexamples back into named state.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use sol_chc_predicates::ir::{
//!     ContractDefinition, ContractScope, FunctionDefinition, FunctionKind, NodeId,
//!     VariableDeclaration,
//! };
//! use sol_chc_predicates::{PredicateRegistry, PredicateRole};
//! use sol_chc_smtlib::{Expr, FunctionSort, Sort};
//!
//! let counter = Arc::new(
//!     ContractDefinition::new(NodeId(1), "Counter")
//!         .with_state_variables(vec![VariableDeclaration::new(NodeId(2), "count", Sort::Int)]),
//! );
//! let inc = Arc::new(
//!     FunctionDefinition::new(NodeId(3), "inc", FunctionKind::Function).in_contract("Counter"),
//! );
//!
//! let mut registry = PredicateRegistry::new();
//! let id = registry
//!     .create(
//!         FunctionSort::relation(vec![Sort::Int, Sort::Int]),
//!         "summary_inc",
//!         PredicateRole::FunctionSummary,
//!         &ContractScope::new(counter),
//!         inc,
//!     )
//!     .unwrap();
//!
//! let summary = registry.get(id).unwrap();
//! assert!(summary.is_summary());
//! let head = summary.apply(&[Expr::int(0), Expr::int(1)]).unwrap();
//! assert_eq!(head.to_string(), "(summary_inc_0 0 1)");
//!
//! let args = vec!["1".to_string(), "2".to_string()];
//! assert_eq!(summary.format_summary_call(&args).unwrap(), "Counter.inc(1, 2)");
//! assert_eq!(summary.summary_state_values(&args).unwrap(), vec!["1"]);
//! ```

pub mod cex;
pub mod classify;
pub mod config;
pub mod error;
pub mod ir;
pub mod predicate;
pub mod registry;
pub mod trace;

pub use cex::StateAssignment;
pub use classify::{Classification, SummaryScope};
pub use config::{DuplicatePolicy, RegistryConfig};
pub use error::{PredicateError, PredicateResult};
pub use predicate::{Predicate, PredicateDecl, PredicateRole};
pub use registry::{PredicateId, PredicateRegistry};
pub use trace::{CounterexampleTrace, SummaryStep};

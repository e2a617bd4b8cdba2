//! Versioned uninterpreted function symbols.
//!
//! A [`SymbolicFunction`] is one logical function with a growing list of
//! syntactically distinct declarations `name_0`, `name_1`, ... that all share
//! the same [`FunctionSort`].

use thiserror::Error;

use crate::command::Command;
use crate::expr::Expr;
use crate::sort::{FunctionSort, Sort};
use crate::term::Term;

/// Reasons an application is rejected by [`FunctionDecl::apply`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("expected {expected} arguments, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("argument {position} has sort {actual}, expected {expected}")]
    Sort {
        position: usize,
        expected: Sort,
        actual: Sort,
    },
}

/// One concrete declaration of a function symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionDecl {
    pub name: String,
    pub sort: FunctionSort,
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, sort: FunctionSort) -> Self {
        Self {
            name: name.into(),
            sort,
        }
    }

    /// Apply this symbol to `args`.
    ///
    /// Arity is checked before sorts, and sorts left to right, so the
    /// reported error is always the first disagreement.
    pub fn apply(&self, args: &[Expr]) -> Result<Expr, ApplicationError> {
        if args.len() != self.sort.arity() {
            return Err(ApplicationError::Arity {
                expected: self.sort.arity(),
                actual: args.len(),
            });
        }
        for (position, (arg, expected)) in args.iter().zip(&self.sort.domain).enumerate() {
            if arg.sort() != expected {
                return Err(ApplicationError::Sort {
                    position,
                    expected: expected.clone(),
                    actual: arg.sort().clone(),
                });
            }
        }
        let terms = args.iter().map(|a| a.term().clone()).collect();
        Ok(Expr::new(
            Term::App(self.name.clone(), terms),
            self.sort.codomain.clone(),
        ))
    }

    /// `(declare-fun name (domain...) codomain)`
    pub fn to_command(&self) -> Command {
        Command::DeclareFun(
            self.name.clone(),
            self.sort.domain.clone(),
            self.sort.codomain.clone(),
        )
    }
}

/// A function symbol with an append-only list of versions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolicFunction {
    name: String,
    sort: FunctionSort,
    index: usize,
}

impl SymbolicFunction {
    /// Create the symbol with its initial version 0.
    pub fn new(name: impl Into<String>, sort: FunctionSort) -> Self {
        Self {
            name: name.into(),
            sort,
            index: 0,
        }
    }

    /// Base name shared by all versions.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sort(&self) -> &FunctionSort {
        &self.sort
    }

    /// Index of the newest version.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Declaration of the newest version.
    pub fn declaration(&self) -> FunctionDecl {
        self.make_decl(self.index)
    }

    /// Declaration of version `index`, if it has been created.
    pub fn declaration_at(&self, index: usize) -> Option<FunctionDecl> {
        (index <= self.index).then(|| self.make_decl(index))
    }

    /// Append a version and return its index.
    pub fn increase_index(&mut self) -> usize {
        self.index += 1;
        self.index
    }

    /// All versions, oldest first.
    pub fn declarations(&self) -> impl Iterator<Item = FunctionDecl> + '_ {
        (0..=self.index).map(|i| self.make_decl(i))
    }

    fn make_decl(&self, index: usize) -> FunctionDecl {
        FunctionDecl::new(format!("{}_{}", self.name, index), self.sort.clone())
    }
}

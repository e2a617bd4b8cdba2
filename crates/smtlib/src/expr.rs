//! Sorted expressions.
//!
//! [`Term`] is untyped; the predicate layer has to check argument sorts
//! before building an application, so every argument travels with its sort.

use crate::sort::Sort;
use crate::term::Term;

/// A term together with the sort it evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    term: Term,
    sort: Sort,
}

impl Expr {
    /// Pair an already-built term with its sort. The caller vouches for the sort.
    pub fn new(term: Term, sort: Sort) -> Self {
        Self { term, sort }
    }

    pub fn bool(value: bool) -> Self {
        Self::new(Term::BoolLit(value), Sort::Bool)
    }

    pub fn int(value: i128) -> Self {
        Self::new(Term::IntLit(value), Sort::Int)
    }

    pub fn bitvec(value: i128, width: u32) -> Self {
        Self::new(Term::BitVecLit(value, width), Sort::BitVec(width))
    }

    /// A named constant of the given sort.
    pub fn constant(name: impl Into<String>, sort: Sort) -> Self {
        Self::new(Term::Const(name.into()), sort)
    }

    pub fn term(&self) -> &Term {
        &self.term
    }

    pub fn sort(&self) -> &Sort {
        &self.sort
    }

    pub fn into_term(self) -> Term {
        self.term
    }
}

impl From<Expr> for Term {
    fn from(expr: Expr) -> Self {
        expr.term
    }
}

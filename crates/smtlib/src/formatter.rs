//! SMT-LIB2 text formatting for AST types.
//!
//! Implements `Display` for [`Sort`], [`FunctionSort`], [`Term`], [`Expr`],
//! [`Command`] and [`Script`], producing text a Horn solver (Z3 Spacer,
//! Eldarica) accepts.

use std::fmt;

use crate::command::Command;
use crate::expr::Expr;
use crate::script::Script;
use crate::sort::{FunctionSort, Sort};
use crate::term::Term;

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sort::Bool => write!(f, "Bool"),
            Sort::Int => write!(f, "Int"),
            Sort::Real => write!(f, "Real"),
            Sort::BitVec(width) => write!(f, "(_ BitVec {width})"),
            Sort::Array(index, element) => write!(f, "(Array {index} {element})"),
            Sort::Datatype(name) | Sort::Uninterpreted(name) => write!(f, "{name}"),
        }
    }
}

/// `(S1 S2 ...) R`, the shape used inside `declare-fun`.
impl fmt::Display for FunctionSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        fmt_sort_list(&self.domain, f)?;
        write!(f, ") {}", self.codomain)
    }
}

fn fmt_sort_list(sorts: &[Sort], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, s) in sorts.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{s}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Term
// ---------------------------------------------------------------------------

/// Negative bitvector literals wrap into `[0, 2^width)`.
fn fmt_bv_lit(value: i128, width: u32, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let unsigned = if value < 0 && width < 128 {
        let modulus: u128 = 1u128 << width;
        ((modulus as i128) + value) as u128
    } else {
        value as u128
    };
    write!(f, "(_ bv{unsigned} {width})")
}

fn fmt_binop(op: &str, lhs: &Term, rhs: &Term, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({op} {lhs} {rhs})")
}

fn fmt_sorted_vars(vars: &[(String, Sort)], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "(")?;
    for (i, (name, sort)) in vars.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "({name} {sort})")?;
    }
    write!(f, ")")
}

fn fmt_term_list(terms: &[Term], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, t) in terms.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{t}")?;
    }
    Ok(())
}

/// `(op t1 t2 ...)`, or `empty` when there are no operands.
fn fmt_nary(op: &str, empty: &str, terms: &[Term], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if terms.is_empty() {
        return write!(f, "{empty}");
    }
    write!(f, "({op} ")?;
    fmt_term_list(terms, f)?;
    write!(f, ")")
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::BoolLit(b) => write!(f, "{b}"),
            Term::IntLit(n) if *n < 0 => write!(f, "(- {})", n.unsigned_abs()),
            Term::IntLit(n) => write!(f, "{n}"),
            Term::BitVecLit(value, width) => fmt_bv_lit(*value, *width, f),
            Term::Const(name) => write!(f, "{name}"),

            Term::Not(inner) => write!(f, "(not {inner})"),
            Term::And(terms) => fmt_nary("and", "true", terms, f),
            Term::Or(terms) => fmt_nary("or", "false", terms, f),
            Term::Implies(lhs, rhs) => fmt_binop("=>", lhs, rhs, f),

            Term::Eq(lhs, rhs) => fmt_binop("=", lhs, rhs, f),
            Term::Ite(cond, then_branch, else_branch) => {
                write!(f, "(ite {cond} {then_branch} {else_branch})")
            }

            Term::IntAdd(a, b) => fmt_binop("+", a, b, f),
            Term::IntSub(a, b) => fmt_binop("-", a, b, f),
            Term::IntMul(a, b) => fmt_binop("*", a, b, f),
            Term::IntLt(a, b) => fmt_binop("<", a, b, f),
            Term::IntLe(a, b) => fmt_binop("<=", a, b, f),
            Term::IntGt(a, b) => fmt_binop(">", a, b, f),
            Term::IntGe(a, b) => fmt_binop(">=", a, b, f),

            Term::Select(arr, idx) => fmt_binop("select", arr, idx, f),
            Term::Store(arr, idx, val) => write!(f, "(store {arr} {idx} {val})"),

            Term::Forall(vars, body) => {
                write!(f, "(forall ")?;
                fmt_sorted_vars(vars, f)?;
                write!(f, " {body})")
            }
            Term::Exists(vars, body) => {
                write!(f, "(exists ")?;
                fmt_sorted_vars(vars, f)?;
                write!(f, " {body})")
            }

            Term::App(name, args) if args.is_empty() => write!(f, "{name}"),
            Term::App(name, args) => {
                write!(f, "({name} ")?;
                fmt_term_list(args, f)?;
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term())
    }
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetLogic(logic) => write!(f, "(set-logic {logic})"),
            Command::SetOption(key, value) => write!(f, "(set-option :{key} {value})"),
            Command::DeclareFun(name, param_sorts, return_sort) => {
                write!(f, "(declare-fun {name} (")?;
                fmt_sort_list(param_sorts, f)?;
                write!(f, ") {return_sort})")
            }
            Command::Assert(term) => write!(f, "(assert {term})"),
            Command::CheckSat => write!(f, "(check-sat)"),
            Command::GetModel => write!(f, "(get-model)"),
            Command::Comment(text) => write!(f, ";; {text}"),
            Command::Exit => write!(f, "(exit)"),
        }
    }
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{cmd}")?;
        }
        Ok(())
    }
}

use crate::sort::Sort;

/// SMT-LIB term (expression) representation.
///
/// Covers what Horn clauses over contract state need: literals, constants,
/// boolean structure, linear integer arithmetic, arrays, quantifiers and
/// uninterpreted function application.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    // === Literals ===
    /// Boolean literal
    BoolLit(bool),
    /// Integer literal (unbounded)
    IntLit(i128),
    /// Bitvector literal with value and width
    BitVecLit(i128, u32),

    // === Variables ===
    /// Named constant/variable reference
    Const(String),

    // === Boolean operations ===
    /// Logical NOT
    Not(Box<Term>),
    /// Logical AND (n-ary)
    And(Vec<Term>),
    /// Logical OR (n-ary)
    Or(Vec<Term>),
    /// Logical implication: `(=> a b)`
    Implies(Box<Term>, Box<Term>),

    // === Core ===
    /// Equality: `(= a b)`
    Eq(Box<Term>, Box<Term>),
    /// If-then-else: `(ite cond then else)`
    Ite(Box<Term>, Box<Term>, Box<Term>),

    // === Integer arithmetic ===
    /// `(+ a b)`
    IntAdd(Box<Term>, Box<Term>),
    /// `(- a b)`
    IntSub(Box<Term>, Box<Term>),
    /// `(* a b)`
    IntMul(Box<Term>, Box<Term>),
    /// `(< a b)`
    IntLt(Box<Term>, Box<Term>),
    /// `(<= a b)`
    IntLe(Box<Term>, Box<Term>),
    /// `(> a b)`
    IntGt(Box<Term>, Box<Term>),
    /// `(>= a b)`
    IntGe(Box<Term>, Box<Term>),

    // === Array operations ===
    /// `(select array index)`
    Select(Box<Term>, Box<Term>),
    /// `(store array index value)`
    Store(Box<Term>, Box<Term>, Box<Term>),

    // === Quantifiers ===
    /// `(forall ((x Sort) ...) body)`
    Forall(Vec<(String, Sort)>, Box<Term>),
    /// `(exists ((x Sort) ...) body)`
    Exists(Vec<(String, Sort)>, Box<Term>),

    // === Function application ===
    /// `(f arg1 arg2 ...)`; a nullary application prints as the bare symbol.
    App(String, Vec<Term>),
}

impl Term {
    /// `(=> body head)` as a Horn rule, universally closed over `vars`.
    ///
    /// With no variables the quantifier is omitted.
    pub fn horn_rule(vars: Vec<(String, Sort)>, body: Term, head: Term) -> Term {
        let rule = Term::Implies(Box::new(body), Box::new(head));
        if vars.is_empty() {
            rule
        } else {
            Term::Forall(vars, Box::new(rule))
        }
    }

    /// Name of the applied symbol if this is an application.
    pub fn app_symbol(&self) -> Option<&str> {
        match self {
            Term::App(name, _) => Some(name),
            _ => None,
        }
    }
}

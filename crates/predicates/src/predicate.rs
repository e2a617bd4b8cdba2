//! The predicate entity: one uninterpreted relation of the Horn system.
//!
//! A predicate wraps a [`SymbolicFunction`] and remembers which program
//! point it stands for. Every control-flow-distinct use of the same relation
//! gets its own version (`name_0`, `name_1`, ...) via [`Predicate::new_functor`];
//! old versions stay resolvable forever.

use std::fmt;

use sol_chc_smtlib::{Expr, FunctionDecl, FunctionSort, SymbolicFunction};

use crate::error::{PredicateError, PredicateResult};
use crate::ir::{EncodingContext, NodeKind, ProgramNode, VariableDeclaration};

/// The part a predicate plays in the encoding. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateRole {
    /// All reachable states of a contract between transactions.
    Interface,
    /// Reachable states under arbitrary (untrusted) external calls.
    NondetInterface,
    /// Effect of a constructor, explicit or implicit.
    ConstructorSummary,
    /// Pre-state, arguments and post-state of one function.
    FunctionSummary,
    /// An internal control-flow junction of a function body.
    FunctionBlock,
    /// The error target that property checks reach.
    Error,
    /// Anything else the encoder invents.
    Custom,
}

impl fmt::Display for PredicateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PredicateRole::Interface => "interface",
            PredicateRole::NondetInterface => "nondet_interface",
            PredicateRole::ConstructorSummary => "constructor_summary",
            PredicateRole::FunctionSummary => "function_summary",
            PredicateRole::FunctionBlock => "block",
            PredicateRole::Error => "error",
            PredicateRole::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

/// Everything needed to register a predicate.
#[derive(Debug, Clone)]
pub struct PredicateDecl {
    pub(crate) sort: FunctionSort,
    pub(crate) name: String,
    pub(crate) role: PredicateRole,
    pub(crate) node: ProgramNode,
    pub(crate) state_offset: usize,
}

impl PredicateDecl {
    /// A predicate not tied to any program point, state block at offset 0.
    pub fn new(sort: FunctionSort, name: impl Into<String>, role: PredicateRole) -> Self {
        Self {
            sort,
            name: name.into(),
            role,
            node: ProgramNode::None,
            state_offset: 0,
        }
    }

    pub fn with_node(mut self, node: impl Into<ProgramNode>) -> Self {
        self.node = node.into();
        self
    }

    /// First argument position holding a state variable.
    pub fn with_state_offset(mut self, offset: usize) -> Self {
        self.state_offset = offset;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A registered predicate. Only the registry constructs these.
#[derive(Debug)]
pub struct Predicate {
    function: SymbolicFunction,
    role: PredicateRole,
    node: ProgramNode,
    state_variables: Option<Vec<VariableDeclaration>>,
    state_offset: usize,
}

impl Predicate {
    /// Build a fully initialized predicate, or fail without side effects.
    pub(crate) fn build<C>(decl: PredicateDecl, context: &C) -> PredicateResult<Self>
    where
        C: EncodingContext + ?Sized,
    {
        let state_variables = match decl.node.kind() {
            NodeKind::Contract | NodeKind::Function => Some(
                context
                    .state_variables_in_scope(&decl.node)
                    .unwrap_or_default(),
            ),
            NodeKind::Other | NodeKind::None => None,
        };

        if let Some(vars) = &state_variables {
            let arity = decl.sort.arity();
            let end = decl.state_offset.checked_add(vars.len());
            if end.is_none_or(|end| end > arity) {
                return Err(PredicateError::InvalidStateLayout {
                    name: decl.name,
                    offset: decl.state_offset,
                    count: vars.len(),
                    arity,
                });
            }
        }

        let predicate = Self {
            function: SymbolicFunction::new(decl.name, decl.sort),
            role: decl.role,
            node: decl.node,
            state_variables,
            state_offset: decl.state_offset,
        };
        predicate.warn_on_role_mismatch();
        Ok(predicate)
    }

    pub fn name(&self) -> &str {
        self.function.name()
    }

    /// The fixed signature shared by every version.
    pub fn sort(&self) -> &FunctionSort {
        self.function.sort()
    }

    pub fn arity(&self) -> usize {
        self.function.sort().arity()
    }

    pub fn role(&self) -> PredicateRole {
        self.role
    }

    /// Index of the newest version.
    pub fn latest_version(&self) -> usize {
        self.function.current_index()
    }

    pub fn version_count(&self) -> usize {
        self.function.current_index() + 1
    }

    /// Function symbol of the newest version.
    pub fn functor(&self) -> FunctionDecl {
        self.function.declaration()
    }

    /// Function symbol of version `index`.
    pub fn functor_at(&self, index: usize) -> PredicateResult<FunctionDecl> {
        self.function
            .declaration_at(index)
            .ok_or_else(|| PredicateError::InvalidVersion {
                name: self.name().to_string(),
                index,
                latest: self.latest_version(),
            })
    }

    /// Append a version; `functor()` resolves to it from now on.
    pub fn new_functor(&mut self) {
        let index = self.function.increase_index();
        tracing::debug!(predicate = %self.name(), version = index, "new functor");
    }

    /// Apply the newest version to `args`.
    pub fn apply(&self, args: &[Expr]) -> PredicateResult<Expr> {
        self.functor()
            .apply(args)
            .map_err(|e| PredicateError::from_application(self.name(), e))
    }

    /// Apply version `index` to `args`.
    pub fn apply_at(&self, index: usize, args: &[Expr]) -> PredicateResult<Expr> {
        self.functor_at(index)?
            .apply(args)
            .map_err(|e| PredicateError::from_application(self.name(), e))
    }

    /// Every version, oldest first.
    pub fn functors(&self) -> impl Iterator<Item = FunctionDecl> + '_ {
        self.function.declarations()
    }

    /// The program point this predicate represents.
    pub fn program_node(&self) -> &ProgramNode {
        &self.node
    }

    /// State variables in scope at creation, in declaration order.
    ///
    /// Present exactly when the program node is a contract or a function.
    pub fn state_variables(&self) -> Option<&[VariableDeclaration]> {
        self.state_variables.as_deref()
    }

    /// Position of the first state variable in the argument vector.
    pub fn state_offset(&self) -> usize {
        self.state_offset
    }

    /// True when `decl` would produce this same predicate.
    pub(crate) fn matches_decl(&self, decl: &PredicateDecl) -> bool {
        self.sort() == &decl.sort
            && self.role == decl.role
            && self.state_offset == decl.state_offset
            && self.node.same_node(&decl.node)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.sort())
    }
}

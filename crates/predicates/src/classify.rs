//! Semantic classification of predicates.
//!
//! Derived from the recorded [`PredicateRole`] and the tag of the program
//! node; never from the predicate's name.

use std::sync::Arc;

use crate::ir::{ContractDefinition, FunctionDefinition, ProgramNode};
use crate::predicate::{Predicate, PredicateRole};

/// What a summary predicate summarizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryScope {
    /// An explicit function, constructors included.
    Function(Arc<FunctionDefinition>),
    /// The implicit constructor of a contract that declares none.
    ImplicitConstructor(Arc<ContractDefinition>),
}

/// Exactly one of these holds for every predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Summary(SummaryScope),
    Interface(Arc<ContractDefinition>),
    Unclassified,
}

impl Predicate {
    pub fn classification(&self) -> Classification {
        match (self.role(), self.program_node()) {
            (
                PredicateRole::FunctionSummary | PredicateRole::ConstructorSummary,
                ProgramNode::Function(f),
            ) => Classification::Summary(SummaryScope::Function(f.clone())),
            (PredicateRole::ConstructorSummary, ProgramNode::Contract(c)) => {
                Classification::Summary(SummaryScope::ImplicitConstructor(c.clone()))
            }
            (PredicateRole::Interface, ProgramNode::Contract(c)) => {
                Classification::Interface(c.clone())
            }
            _ => Classification::Unclassified,
        }
    }

    /// The contract this predicate represents, if its node is a contract.
    pub fn program_contract(&self) -> Option<&Arc<ContractDefinition>> {
        match self.program_node() {
            ProgramNode::Contract(c) => Some(c),
            _ => None,
        }
    }

    /// The function this predicate represents, if its node is a function.
    pub fn program_function(&self) -> Option<&Arc<FunctionDefinition>> {
        match self.program_node() {
            ProgramNode::Function(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_summary(&self) -> bool {
        matches!(self.classification(), Classification::Summary(_))
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.classification(), Classification::Interface(_))
    }

    pub fn is_nondet_interface(&self) -> bool {
        self.role() == PredicateRole::NondetInterface && self.program_contract().is_some()
    }

    pub fn is_constructor_summary(&self) -> bool {
        match self.classification() {
            Classification::Summary(SummaryScope::ImplicitConstructor(_)) => true,
            Classification::Summary(SummaryScope::Function(f)) => f.is_constructor(),
            _ => false,
        }
    }

    /// Summary and interface roles are only meaningful on the matching node
    /// kind; anything else ends up unclassified.
    pub(crate) fn warn_on_role_mismatch(&self) {
        let expects_node = matches!(
            self.role(),
            PredicateRole::Interface
                | PredicateRole::NondetInterface
                | PredicateRole::ConstructorSummary
                | PredicateRole::FunctionSummary
        );
        let nondet_ok = self.is_nondet_interface();
        if expects_node && !nondet_ok && self.classification() == Classification::Unclassified {
            tracing::warn!(
                predicate = %self.name(),
                role = %self.role(),
                node = ?self.program_node().kind(),
                "role does not match program node; predicate is unclassified"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use sol_chc_smtlib::{FunctionSort, Sort};

    use super::*;
    use crate::ir::{ContractScope, FunctionKind, NodeId, ProgramPoint, VariableDeclaration};
    use crate::predicate::PredicateDecl;

    fn contract() -> Arc<ContractDefinition> {
        let balance = VariableDeclaration::new(NodeId(2), "balance", Sort::Int);
        Arc::new(ContractDefinition::new(NodeId(1), "Vault").with_state_variables(vec![balance]))
    }

    fn function(kind: FunctionKind) -> Arc<FunctionDefinition> {
        Arc::new(FunctionDefinition::new(NodeId(3), "withdraw", kind).in_contract("Vault"))
    }

    fn build(role: PredicateRole, node: ProgramNode) -> Predicate {
        let sort = FunctionSort::relation(vec![Sort::Int, Sort::Int]);
        Predicate::build(
            PredicateDecl::new(sort, "p", role).with_node(node),
            &ContractScope::new(contract()),
        )
        .unwrap()
    }

    #[test]
    fn function_summary() {
        let f = function(FunctionKind::Function);
        let p = build(PredicateRole::FunctionSummary, ProgramNode::Function(f.clone()));
        assert_eq!(p.classification(), Classification::Summary(SummaryScope::Function(f.clone())));
        assert!(p.is_summary());
        assert!(!p.is_interface());
        assert!(!p.is_constructor_summary());
        assert_eq!(p.program_function(), Some(&f));
        assert!(p.program_contract().is_none());
        assert_eq!(p.state_variables().map(|v| v.len()), Some(1));
    }

    #[test]
    fn explicit_and_implicit_constructor_summaries() {
        let ctor = function(FunctionKind::Constructor);
        let explicit = build(PredicateRole::ConstructorSummary, ProgramNode::Function(ctor));
        assert!(explicit.is_summary());
        assert!(explicit.is_constructor_summary());

        let c = contract();
        let implicit = build(PredicateRole::ConstructorSummary, ProgramNode::Contract(c.clone()));
        assert_eq!(
            implicit.classification(),
            Classification::Summary(SummaryScope::ImplicitConstructor(c))
        );
        assert!(implicit.is_constructor_summary());
        assert!(!implicit.is_interface());
    }

    #[test]
    fn interface() {
        let c = contract();
        let p = build(PredicateRole::Interface, ProgramNode::Contract(c.clone()));
        assert_eq!(p.classification(), Classification::Interface(c.clone()));
        assert!(p.is_interface());
        assert!(!p.is_summary());
        assert_eq!(p.program_contract(), Some(&c));
    }

    #[test]
    fn nondet_interface_is_not_an_interface() {
        let p = build(PredicateRole::NondetInterface, ProgramNode::Contract(contract()));
        assert!(p.is_nondet_interface());
        assert!(!p.is_interface());
        assert_eq!(p.classification(), Classification::Unclassified);
    }

    #[test]
    fn mismatched_role_is_unclassified() {
        let f = function(FunctionKind::Function);
        let p = build(PredicateRole::Interface, ProgramNode::Function(f));
        assert_eq!(p.classification(), Classification::Unclassified);
        // Still a function node, so the state scope is there.
        assert!(p.state_variables().is_some());

        let q = build(PredicateRole::FunctionSummary, ProgramNode::Contract(contract()));
        assert!(!q.is_summary());
    }

    #[test]
    fn blocks_are_unclassified() {
        let point = Arc::new(ProgramPoint::new(NodeId(40), "while_header"));
        let p = build(PredicateRole::FunctionBlock, ProgramNode::Other(point));
        assert_eq!(p.classification(), Classification::Unclassified);
        assert!(p.program_contract().is_none());
        assert!(p.program_function().is_none());
        assert!(p.state_variables().is_none());
    }
}

//! Shared program fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use sol_chc_predicates::ir::{
    ContractDefinition, ContractScope, FunctionDefinition, FunctionKind, NodeId,
    VariableDeclaration,
};
use sol_chc_smtlib::{FunctionSort, Sort};

pub fn var(id: u64, name: &str) -> VariableDeclaration {
    VariableDeclaration::new(NodeId(id), name, Sort::Int)
}

/// `contract C { int a; int b; function f(int x) ... }`
pub fn contract_c() -> Arc<ContractDefinition> {
    let state = vec![var(2, "a"), var(3, "b")];
    Arc::new(ContractDefinition::new(NodeId(1), "C").with_state_variables(state))
}

pub fn function_f() -> Arc<FunctionDefinition> {
    Arc::new(
        FunctionDefinition::new(NodeId(4), "f", FunctionKind::Function)
            .in_contract("C")
            .with_parameters(vec![var(5, "x")]),
    )
}

pub fn scope_c() -> ContractScope {
    ContractScope::new(contract_c())
}

pub fn int_relation(arity: usize) -> FunctionSort {
    FunctionSort::relation(vec![Sort::Int; arity])
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

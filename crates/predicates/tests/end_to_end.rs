//! The full encoder-to-diagnostics path for one predicate.

mod common;

use std::sync::Arc;

use common::{int_relation, strings};
use sol_chc_predicates::ir::{
    ContractDefinition, ContractScope, FunctionDefinition, FunctionKind, NodeId,
    VariableDeclaration,
};
use sol_chc_predicates::{Classification, PredicateError, PredicateRegistry, PredicateRole};
use sol_chc_smtlib::{Command, Expr, Sort, Term};

#[test]
fn create_apply_version_reset() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("sol_chc_predicates=debug")
        .with_test_writer()
        .try_init();

    let contract = Arc::new(
        ContractDefinition::new(NodeId(1), "C")
            .with_state_variables(vec![VariableDeclaration::new(NodeId(2), "x", Sort::Int)]),
    );
    let f = Arc::new(
        FunctionDefinition::new(NodeId(3), "f", FunctionKind::Function).in_contract("C"),
    );
    let mut registry = PredicateRegistry::new();

    let id = registry
        .create(
            int_relation(2),
            "P",
            PredicateRole::FunctionSummary,
            &ContractScope::new(contract),
            f,
        )
        .unwrap();
    let args = [Expr::int(5), Expr::int(7)];

    let first = registry.get(id).unwrap().apply(&args).unwrap();
    assert_eq!(first.sort(), &Sort::Bool);
    let summary_before = registry.get(id).unwrap().is_summary();
    assert!(summary_before);

    registry.new_functor(id).unwrap();
    let p = registry.get(id).unwrap();
    let second = p.apply_at(1, &args).unwrap();
    assert_ne!(first.term().app_symbol(), second.term().app_symbol());
    assert_eq!(second.term(), p.apply(&args).unwrap().term());
    assert_eq!(p.is_summary(), summary_before);
    assert!(matches!(p.classification(), Classification::Summary(_)));
    assert_eq!(p.state_variables().map(|v| v[0].name.as_str()), Some("x"));

    // A Horn rule between the two versions.
    let rule = Term::horn_rule(
        vec![("a".into(), Sort::Int)],
        p.apply_at(0, &[Expr::constant("a", Sort::Int), Expr::int(7)]).unwrap().into_term(),
        p.apply(&[Expr::constant("a", Sort::Int), Expr::int(8)]).unwrap().into_term(),
    );
    assert_eq!(
        Command::Assert(rule).to_string(),
        "(assert (forall ((a Int)) (=> (P_0 a 7) (P_1 a 8))))"
    );

    registry.reset();
    assert_eq!(
        registry.lookup("P"),
        Err(PredicateError::NotFound { name: "P".into() })
    );
}

#[test]
fn counterexample_round_trip() {
    let mut registry = PredicateRegistry::new();
    let id = registry
        .create(
            int_relation(3),
            "summary_f",
            PredicateRole::FunctionSummary,
            &common::scope_c(),
            common::function_f(),
        )
        .unwrap();
    let p = registry.get(id).unwrap();
    let args = strings(&["1", "2", "3"]);

    assert_eq!(p.summary_state_values(&args).unwrap(), strings(&["1", "2"]));
    let call = p.format_summary_call(&args).unwrap();
    assert!(call.contains('C'));
    let (i1, i2, i3) = (
        call.find('1').unwrap(),
        call.find('2').unwrap(),
        call.find('3').unwrap(),
    );
    assert!(i1 < i2 && i2 < i3);
    assert_eq!(call, "C.f(1, 2, 3)");
}

#[test]
fn counterexample_trace_end_to_end() {
    let mut registry = PredicateRegistry::new();
    let ctor = registry
        .create(
            int_relation(2),
            "summary_constructor_C",
            PredicateRole::ConstructorSummary,
            &common::scope_c(),
            common::contract_c(),
        )
        .unwrap();
    let f = registry
        .create(
            int_relation(3),
            "summary_f",
            PredicateRole::FunctionSummary,
            &common::scope_c(),
            common::function_f(),
        )
        .unwrap();
    let iface = registry
        .create(
            int_relation(2),
            "interface_C",
            PredicateRole::Interface,
            &common::scope_c(),
            common::contract_c(),
        )
        .unwrap();

    let path = vec![
        (ctor, strings(&["0", "0"])),
        (iface, strings(&["0", "0"])),
        (f, strings(&["4", "9", "2"])),
    ];
    let trace = sol_chc_predicates::CounterexampleTrace::from_path(&registry, &path).unwrap();
    assert_eq!(
        trace.to_string(),
        "Transaction trace:\n\
         C.constructor(0, 0)\n\
         State: a = 0, b = 0\n\
         C.f(4, 9, 2)\n\
         State: a = 4, b = 9"
    );
}

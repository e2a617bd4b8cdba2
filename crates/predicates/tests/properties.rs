//! Property-based checks of the registry and predicate invariants.

mod common;

use std::sync::Arc;

use common::{contract_c, function_f, int_relation, scope_c};
use proptest::prelude::*;
use sol_chc_predicates::ir::{ContractScope, NodeId, ProgramNode, ProgramPoint};
use sol_chc_predicates::{
    PredicateDecl, PredicateError, PredicateId, PredicateRegistry, PredicateResult, PredicateRole,
};
use sol_chc_smtlib::Expr;

fn create_free(
    reg: &mut PredicateRegistry,
    arity: usize,
    name: impl Into<String>,
) -> PredicateResult<PredicateId> {
    reg.create(
        int_relation(arity),
        name,
        PredicateRole::Custom,
        &ContractScope::default(),
        ProgramNode::None,
    )
}

fn is_arity_mismatch<T>(result: &PredicateResult<T>) -> bool {
    matches!(result, Err(PredicateError::ArityMismatch { .. }))
}

fn role_strategy() -> impl Strategy<Value = PredicateRole> {
    prop_oneof![
        Just(PredicateRole::Interface),
        Just(PredicateRole::NondetInterface),
        Just(PredicateRole::ConstructorSummary),
        Just(PredicateRole::FunctionSummary),
        Just(PredicateRole::FunctionBlock),
        Just(PredicateRole::Error),
        Just(PredicateRole::Custom),
    ]
}

fn node_strategy() -> impl Strategy<Value = ProgramNode> {
    prop_oneof![
        Just(ProgramNode::None),
        Just(ProgramNode::Contract(contract_c())),
        Just(ProgramNode::Function(function_f())),
        Just(ProgramNode::Other(Arc::new(ProgramPoint::new(NodeId(77), "loop")))),
    ]
}

proptest! {
    #[test]
    fn ids_are_stable(arities in prop::collection::vec(0usize..5, 1..40)) {
        let mut reg = PredicateRegistry::new();
        let mut created = Vec::new();
        for (i, arity) in arities.iter().enumerate() {
            let id = create_free(&mut reg, *arity, format!("p{i}")).unwrap();
            created.push((id, *arity));
            for (earlier, earlier_arity) in &created {
                let p = reg.get(*earlier).unwrap();
                prop_assert_eq!(p.arity(), *earlier_arity);
                prop_assert_eq!(p.functor_at(0).unwrap().name, format!("p{}_0", earlier.index()));
            }
        }
    }

    #[test]
    fn versions_are_dense_and_monotone(k in 0usize..30, probe in 0usize..40) {
        let mut reg = PredicateRegistry::new();
        let id = create_free(&mut reg, 1, "v").unwrap();
        prop_assert_eq!(reg.get(id).unwrap().functor().name, "v_0");
        for _ in 0..k {
            reg.new_functor(id).unwrap();
        }
        let p = reg.get(id).unwrap();
        prop_assert_eq!(p.latest_version(), k);
        prop_assert_eq!(p.functor(), p.functor_at(k).unwrap());
        if probe <= k {
            prop_assert_eq!(p.functor_at(probe).unwrap().name, format!("v_{probe}"));
        } else {
            let is_invalid_version = matches!(
                p.functor_at(probe),
                Err(PredicateError::InvalidVersion { .. })
            );
            prop_assert!(is_invalid_version);
        }
    }

    #[test]
    fn classification_is_exclusive(role in role_strategy(), node in node_strategy()) {
        let mut reg = PredicateRegistry::new();
        let id = reg.create(int_relation(4), "p", role, &scope_c(), node).unwrap();
        let p = reg.get(id).unwrap();
        prop_assert!(!(p.is_summary() && p.is_interface()));
        let scoped = p.program_contract().is_some() || p.program_function().is_some();
        prop_assert_eq!(p.state_variables().is_some(), scoped);
    }

    #[test]
    fn arity_is_enforced(arity in 2usize..6, given in 0usize..8) {
        prop_assume!(given != arity);
        let mut reg = PredicateRegistry::new();
        let id = reg
            .create(
                int_relation(arity),
                "summary_f",
                PredicateRole::FunctionSummary,
                &scope_c(),
                function_f(),
            )
            .unwrap();
        let p = reg.get(id).unwrap();
        let exprs: Vec<Expr> = (0..given).map(|i| Expr::int(i as i128)).collect();
        let rendered: Vec<String> = (0..given).map(|i| i.to_string()).collect();

        prop_assert!(is_arity_mismatch(&p.apply(&exprs)));
        prop_assert!(is_arity_mismatch(&p.format_summary_call(&rendered)));
        prop_assert!(is_arity_mismatch(&p.summary_state_values(&rendered)));
    }

    #[test]
    fn only_fitting_state_layouts_register(
        arity in 0usize..6,
        offset in prop_oneof![0usize..8, (usize::MAX - 4)..=usize::MAX]
    ) {
        let mut reg = PredicateRegistry::new();
        let role = PredicateRole::FunctionSummary;
        let decl = PredicateDecl::new(int_relation(arity), "summary_f", role)
            .with_node(function_f())
            .with_state_offset(offset);
        let fits = offset <= arity && arity - offset >= 2;
        match reg.create_with(decl, &scope_c()) {
            Ok(id) => {
                prop_assert!(fits);
                let rendered: Vec<String> = (0..arity).map(|i| i.to_string()).collect();
                let values = reg.get(id).unwrap().summary_state_values(&rendered).unwrap();
                prop_assert_eq!(values, rendered[offset..offset + 2].to_vec());
            }
            Err(err) => {
                prop_assert!(!fits);
                let is_layout_error = matches!(err, PredicateError::InvalidStateLayout { .. });
                prop_assert!(is_layout_error);
                prop_assert!(reg.is_empty());
            }
        }
    }
}

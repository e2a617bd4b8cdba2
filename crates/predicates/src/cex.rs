//! Counterexample rendering for summary predicates.
//!
//! The solver reports a failing execution as predicate applications over
//! concrete values, one rendered string per argument position. Position is
//! the only link back to the source: the state block of a predicate starts
//! at [`Predicate::state_offset`] and follows the order of
//! [`Predicate::state_variables`].

use serde::{Deserialize, Serialize};

use crate::error::{PredicateError, PredicateResult};
use crate::ir::ProgramNode;
use crate::predicate::{Predicate, PredicateRole};

/// One named state variable and its value at a point of the trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateAssignment {
    pub variable: String,
    pub value: String,
}

impl Predicate {
    /// Render an application of this predicate as a call, e.g.
    /// `Vault.withdraw(0, 10, 3)`.
    ///
    /// Functions render as `Contract.member`, contracts as
    /// `Contract.constructor` for constructor summaries and `Contract.<role>`
    /// otherwise, other program points by their label. A predicate without
    /// a program node falls back to its own name.
    pub fn format_summary_call(&self, args: &[String]) -> PredicateResult<String> {
        self.check_rendered_arity(args)?;
        Ok(format!("{}({})", self.call_target(), args.join(", ")))
    }

    /// The values of the state variables in `args`, in the order of
    /// [`Predicate::state_variables`].
    pub fn summary_state_values(&self, args: &[String]) -> PredicateResult<Vec<String>> {
        self.check_rendered_arity(args)?;
        let vars = self.state_variables().ok_or_else(|| PredicateError::NoStateScope {
            name: self.name().to_string(),
        })?;
        let first = self.state_offset();
        let block = first
            .checked_add(vars.len())
            .and_then(|end| args.get(first..end))
            .ok_or_else(|| PredicateError::InvalidStateLayout {
                name: self.name().to_string(),
                offset: first,
                count: vars.len(),
                arity: self.arity(),
            })?;
        Ok(block.to_vec())
    }

    /// [`Predicate::summary_state_values`] paired with the variable names.
    pub fn summary_state(&self, args: &[String]) -> PredicateResult<Vec<StateAssignment>> {
        let values = self.summary_state_values(args)?;
        let vars = self.state_variables().unwrap_or_default();
        Ok(vars
            .iter()
            .zip(values)
            .map(|(var, value)| StateAssignment {
                variable: var.name.clone(),
                value,
            })
            .collect())
    }

    fn call_target(&self) -> String {
        match self.program_node() {
            ProgramNode::Function(f) => match &f.contract_name {
                Some(contract) => format!("{contract}.{}", f.display_name()),
                None => f.display_name().to_string(),
            },
            ProgramNode::Contract(c) if self.role() == PredicateRole::ConstructorSummary => {
                format!("{}.constructor", c.name)
            }
            ProgramNode::Contract(c) => format!("{}.{}", c.name, self.role()),
            ProgramNode::Other(point) => point.label.clone(),
            ProgramNode::None => self.name().to_string(),
        }
    }

    fn check_rendered_arity(&self, args: &[String]) -> PredicateResult<()> {
        if args.len() != self.arity() {
            return Err(PredicateError::ArityMismatch {
                name: self.name().to_string(),
                expected: self.arity(),
                actual: args.len(),
            });
        }
        Ok(())
    }
}

//! Transaction traces built from a solver counterexample.
//!
//! A counterexample path visits many predicates; only summaries correspond
//! to transactions a user could replay. The trace keeps those, each with
//! its rendered call and the named state it leaves behind.
//!
//! ```text
//! Transaction trace:
//! Vault.constructor()
//! State: balance = 0
//! Vault.deposit(5, 5)
//! State: balance = 5
//! ```
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cex::StateAssignment;
use crate::error::PredicateResult;
use crate::registry::{PredicateId, PredicateRegistry};

/// One transaction of a counterexample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStep {
    /// Name of the summary predicate the step came from.
    pub predicate: String,
    /// Rendered call, e.g. `Vault.deposit(5)`.
    pub call: String,
    /// State variables after the step, in declaration order.
    pub state: Vec<StateAssignment>,
}

/// Sequence of transactions leading to a property violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterexampleTrace {
    pub steps: Vec<SummaryStep>,
}

impl CounterexampleTrace {
    /// Build a trace from the predicate applications along a solver path.
    ///
    /// Non-summary predicates are skipped. The first error from the
    /// registry or the formatter aborts the whole trace.
    pub fn from_path(
        registry: &PredicateRegistry,
        path: &[(PredicateId, Vec<String>)],
    ) -> PredicateResult<Self> {
        let mut steps = Vec::new();
        for (id, args) in path {
            let predicate = registry.get(*id)?;
            if !predicate.is_summary() {
                continue;
            }
            steps.push(SummaryStep {
                predicate: predicate.name().to_string(),
                call: predicate.format_summary_call(args)?,
                state: predicate.summary_state(args)?,
            });
        }
        tracing::debug!(steps = steps.len(), path = path.len(), "built counterexample trace");
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pretty-printed JSON, for IDE and CI consumers.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for CounterexampleTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction trace:")?;
        for step in &self.steps {
            write!(f, "\n{}\nState: ", step.call)?;
            if step.state.is_empty() {
                write!(f, "<none>")?;
            }
            for (i, assignment) in step.state.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {}", assignment.variable, assignment.value)?;
            }
        }
        Ok(())
    }
}

//! Name-keyed store of every predicate of one verification run.
//!
//! The registry is the only way to create a [`Predicate`]. Storage is an
//! append-only arena: the position of an entry is its identity and never
//! changes, so a [`PredicateId`] handed out earlier keeps resolving to the
//! same predicate until [`PredicateRegistry::reset`].
//!
//! Each registry instance, and each reset, draws a fresh process-unique run
//! token. Identities carry the token of the run that issued them, so an
//! identity from a previous run (or from another registry) is reported as
//! [`PredicateError::Stale`] rather than silently aliasing a new predicate.
//!
//! One registry serves one run on one thread of control at a time. The type
//! is `Send`; encoders verifying contracts in parallel use one registry each.
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use sol_chc_smtlib::{FunctionSort, Script};

use crate::config::{DuplicatePolicy, RegistryConfig};
use crate::error::{PredicateError, PredicateResult};
use crate::ir::{EncodingContext, ProgramNode};
use crate::predicate::{Predicate, PredicateDecl, PredicateRole};

static NEXT_RUN: AtomicU64 = AtomicU64::new(1);

fn fresh_run() -> u64 {
    NEXT_RUN.fetch_add(1, Ordering::Relaxed)
}

/// Stable identity of a registered predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PredicateId {
    run: u64,
    index: usize,
}

impl PredicateId {
    /// Position in creation order within its run.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for PredicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}@run{}", self.index, self.run)
    }
}

/// Store of all predicates of a verification run.
#[derive(Debug)]
pub struct PredicateRegistry {
    predicates: IndexMap<String, Predicate>,
    run: u64,
    config: RegistryConfig,
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PredicateRegistry {
    /// Empty registry with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            predicates: IndexMap::new(),
            run: fresh_run(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Register a predicate for `node` with its initial version 0.
    pub fn create<C>(
        &mut self,
        sort: FunctionSort,
        name: impl Into<String>,
        role: PredicateRole,
        context: &C,
        node: impl Into<ProgramNode>,
    ) -> PredicateResult<PredicateId>
    where
        C: EncodingContext + ?Sized,
    {
        self.create_with(PredicateDecl::new(sort, name, role).with_node(node), context)
    }

    /// Register a predicate from a full declaration.
    ///
    /// All-or-nothing: on error the registry is unchanged.
    pub fn create_with<C>(
        &mut self,
        decl: PredicateDecl,
        context: &C,
    ) -> PredicateResult<PredicateId>
    where
        C: EncodingContext + ?Sized,
    {
        if let Some((index, _, existing)) = self.predicates.get_full(decl.name()) {
            return match self.config.duplicate_policy {
                DuplicatePolicy::ReuseIdentical if existing.matches_decl(&decl) => {
                    tracing::trace!(predicate = %decl.name(), "reusing identical predicate");
                    Ok(self.id_at(index))
                }
                _ => Err(PredicateError::DuplicateName {
                    name: decl.name().to_string(),
                }),
            };
        }

        let name = decl.name().to_string();
        let predicate = Predicate::build(decl, context)?;
        tracing::debug!(
            predicate = %name,
            role = %predicate.role(),
            arity = predicate.arity(),
            node = ?predicate.program_node().kind(),
            "created predicate"
        );
        let (index, _) = self.predicates.insert_full(name, predicate);
        Ok(self.id_at(index))
    }

    /// Identity of the live predicate called `name`.
    pub fn lookup(&self, name: &str) -> PredicateResult<PredicateId> {
        tracing::trace!(predicate = %name, "lookup");
        self.predicates
            .get_index_of(name)
            .map(|index| self.id_at(index))
            .ok_or_else(|| PredicateError::NotFound {
                name: name.to_string(),
            })
    }

    /// The live predicate called `name`.
    pub fn predicate(&self, name: &str) -> PredicateResult<&Predicate> {
        self.predicates.get(name).ok_or_else(|| PredicateError::NotFound {
            name: name.to_string(),
        })
    }

    pub fn get(&self, id: PredicateId) -> PredicateResult<&Predicate> {
        let index = self.check(id)?;
        self.predicates
            .get_index(index)
            .map(|(_, p)| p)
            .ok_or(PredicateError::Stale { id })
    }

    pub fn get_mut(&mut self, id: PredicateId) -> PredicateResult<&mut Predicate> {
        let index = self.check(id)?;
        self.predicates
            .get_index_mut(index)
            .map(|(_, p)| p)
            .ok_or(PredicateError::Stale { id })
    }

    /// Append a version to the predicate behind `id`.
    pub fn new_functor(&mut self, id: PredicateId) -> PredicateResult<()> {
        self.get_mut(id)?.new_functor();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Live predicates in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PredicateId, &Predicate)> {
        let run = self.run;
        self.predicates
            .values()
            .enumerate()
            .map(move |(index, p)| (PredicateId { run, index }, p))
    }

    /// `(set-logic HORN)` plus a `declare-fun` for every version of every
    /// predicate, in creation order.
    pub fn declarations(&self) -> Script {
        let mut script = Script::horn();
        for predicate in self.predicates.values() {
            script.extend(predicate.functors().map(|decl| decl.to_command()));
        }
        script
    }

    /// Drop every predicate and invalidate every identity issued so far.
    ///
    /// Idempotent. Configuration is kept.
    pub fn reset(&mut self) {
        let dropped = self.predicates.len();
        self.predicates = IndexMap::new();
        self.run = fresh_run();
        tracing::debug!(dropped, "predicate registry reset");
    }

    fn id_at(&self, index: usize) -> PredicateId {
        PredicateId {
            run: self.run,
            index,
        }
    }

    fn check(&self, id: PredicateId) -> PredicateResult<usize> {
        if id.run != self.run {
            return Err(PredicateError::Stale { id });
        }
        Ok(id.index)
    }
}

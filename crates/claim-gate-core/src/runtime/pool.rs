// crates/claim-gate-core/src/runtime/pool.rs
// ============================================================================
// Module: Assertion Pools
// Description: Immutable, indexed collections of one definition family.
// Purpose: Provide copy-on-extend candidate storage for dispatchers.
// Dependencies: crate::core::definition, crate::runtime::index
// ============================================================================

//! ## Overview
//! A pool is an ordered, duplicate-tolerant collection of definitions of one
//! execution family plus its derived phrase index. Pools are never mutated in
//! place: extension concatenates onto a copy (existing definitions first,
//! extensions appended) and rebuilds the index, so every dispatcher bound to
//! the original pool keeps observing exactly the definitions it was built
//! with. Definitions are shared by `Arc` across pools.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use crate::core::definition::AsyncAssertionDefinition;
use crate::core::definition::SyncAssertionDefinition;
use crate::runtime::index::PhraseIndex;

// ============================================================================
// SECTION: Synchronous Pool
// ============================================================================

/// Immutable pool of synchronous definitions with its phrase index.
///
/// # Invariants
/// - `index` is derived from `definitions` and rebuilt on every construction.
#[derive(Debug, Clone, Default)]
pub struct SyncPool {
    /// Definitions in registration order.
    definitions: Vec<Arc<SyncAssertionDefinition>>,
    /// Derived phrase lookup.
    index: PhraseIndex,
}

impl SyncPool {
    /// Creates a pool from definitions in registration order.
    #[must_use]
    pub fn new(definitions: Vec<Arc<SyncAssertionDefinition>>) -> Self {
        let index = PhraseIndex::build(
            definitions
                .iter()
                .enumerate()
                .filter_map(|(position, definition)| {
                    definition.dispatch_choice().map(|choice| (position, choice))
                }),
        );
        Self {
            definitions,
            index,
        }
    }

    /// Creates a new pool with extensions appended after the existing
    /// definitions; the receiver is left untouched.
    #[must_use]
    pub fn extend_with(&self, extensions: Vec<Arc<SyncAssertionDefinition>>) -> Self {
        let mut definitions = self.definitions.clone();
        definitions.extend(extensions);
        Self::new(definitions)
    }

    /// Returns the definitions in registration order.
    #[must_use]
    pub fn definitions(&self) -> &[Arc<SyncAssertionDefinition>] {
        &self.definitions
    }

    /// Returns the candidates declaring the phrase, in pool order.
    pub fn candidates(&self, phrase: &str) -> impl Iterator<Item = &Arc<SyncAssertionDefinition>> {
        self.index
            .candidates(phrase)
            .iter()
            .filter_map(|&position| self.definitions.get(position))
    }
}

// ============================================================================
// SECTION: Asynchronous Pool
// ============================================================================

/// Immutable pool of asynchronous definitions with its phrase index.
///
/// # Invariants
/// - `index` is derived from `definitions` and rebuilt on every construction.
#[derive(Debug, Clone, Default)]
pub struct AsyncPool {
    /// Definitions in registration order.
    definitions: Vec<Arc<AsyncAssertionDefinition>>,
    /// Derived phrase lookup.
    index: PhraseIndex,
}

impl AsyncPool {
    /// Creates a pool from definitions in registration order.
    #[must_use]
    pub fn new(definitions: Vec<Arc<AsyncAssertionDefinition>>) -> Self {
        let index = PhraseIndex::build(
            definitions
                .iter()
                .enumerate()
                .filter_map(|(position, definition)| {
                    definition.dispatch_choice().map(|choice| (position, choice))
                }),
        );
        Self {
            definitions,
            index,
        }
    }

    /// Creates a new pool with extensions appended after the existing
    /// definitions; the receiver is left untouched.
    #[must_use]
    pub fn extend_with(&self, extensions: Vec<Arc<AsyncAssertionDefinition>>) -> Self {
        let mut definitions = self.definitions.clone();
        definitions.extend(extensions);
        Self::new(definitions)
    }

    /// Returns the definitions in registration order.
    #[must_use]
    pub fn definitions(&self) -> &[Arc<AsyncAssertionDefinition>] {
        &self.definitions
    }

    /// Returns the candidates declaring the phrase, in pool order.
    pub fn candidates(&self, phrase: &str) -> impl Iterator<Item = &Arc<AsyncAssertionDefinition>> {
        self.index
            .candidates(phrase)
            .iter()
            .filter_map(|&position| self.definitions.get(position))
    }
}

// crates/claim-gate-core/src/runtime/index.rs
// ============================================================================
// Module: Phrase Index
// Description: Precomputed phrase-text to candidate-definition lookup.
// Purpose: Avoid linear scans over every registered assertion per call.
// Dependencies: crate::core::phrase
// ============================================================================

//! ## Overview
//! The phrase index maps lower-cased dispatch-phrase text to the positions of
//! the definitions that declare it at slot 1. It is derived once when a pool
//! is constructed (including after extension) and never mutated afterwards.
//! Lookup is case-insensitive; literal matching during slot parsing remains
//! case-sensitive.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::phrase::PhraseChoice;

// ============================================================================
// SECTION: Phrase Index
// ============================================================================

/// Lookup from normalized phrase text to candidate definition positions.
///
/// # Invariants
/// - Keys are lower-cased phrase literals.
/// - Candidate lists preserve pool order (existing before extensions).
#[derive(Debug, Clone, Default)]
pub struct PhraseIndex {
    /// Candidate positions keyed by normalized phrase text.
    entries: BTreeMap<String, Vec<usize>>,
}

impl PhraseIndex {
    /// Builds an index from `(position, dispatch choice)` pairs in pool
    /// order.
    #[must_use]
    pub fn build<'a, I>(choices: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a PhraseChoice)>,
    {
        let mut entries: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (position, choice) in choices {
            for member in choice.members() {
                let key = member.as_str().to_lowercase();
                let candidates = entries.entry(key).or_default();
                // A choice may repeat a member; keep one entry per position.
                if candidates.last() != Some(&position) {
                    candidates.push(position);
                }
            }
        }
        Self {
            entries,
        }
    }

    /// Returns candidate positions for a phrase, in pool order.
    #[must_use]
    pub fn candidates(&self, phrase: &str) -> &[usize] {
        self.entries
            .get(&phrase.to_lowercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Returns the number of distinct phrase keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the index holds no phrases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

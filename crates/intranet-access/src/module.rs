//! Module identifiers and module membership sets.
//!
//! # Purpose
//! A module is an organizational unit of the intranet (Compliance, Finance,
//! Facilities, ...). Users belong to one primary module and may hold
//! secondary or administrative membership in others.
//!
//! # Key invariants
//! - `ModuleId(0)` is the "no module" sentinel.
//! - A [`ModuleSet`] never contains the sentinel.
//! - Stored lists are whitespace separated integers; blank tokens are ignored.
use crate::{AccessError, AccessResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Numeric module identifier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ModuleId(u32);

impl ModuleId {
    pub const NONE: ModuleId = ModuleId(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Convert a stored (signed) column value.
    ///
    /// # Errors
    /// - [`AccessError::InvalidModuleList`] for negative or out-of-range values.
    pub fn from_stored(value: i64) -> AccessResult<Self> {
        u32::try_from(value)
            .map(ModuleId)
            .map_err(|_| AccessError::InvalidModuleList(value.to_string()))
    }
}

impl From<u32> for ModuleId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of module memberships (secondary or administrative).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleSet(BTreeSet<ModuleId>);

impl ModuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stored whitespace separated module list such as `"12 40 7"`.
    ///
    /// # Errors
    /// - [`AccessError::InvalidModuleList`] when a token is not a module number.
    pub fn parse(raw: &str) -> AccessResult<Self> {
        let mut set = BTreeSet::new();
        for token in raw.split_whitespace() {
            let id: u32 = token
                .parse()
                .map_err(|_| AccessError::InvalidModuleList(token.to_string()))?;
            if id != 0 {
                set.insert(ModuleId(id));
            }
        }
        Ok(Self(set))
    }

    pub fn contains(&self, module: ModuleId) -> bool {
        self.0.contains(&module)
    }

    pub fn insert(&mut self, module: ModuleId) -> bool {
        if module.is_none() {
            return false;
        }
        self.0.insert(module)
    }

    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render in the stored list format.
    pub fn to_stored(&self) -> String {
        self.iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl FromIterator<ModuleId> for ModuleSet {
    fn from_iter<I: IntoIterator<Item = ModuleId>>(iter: I) -> Self {
        let mut set = ModuleSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl FromIterator<u32> for ModuleSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().map(ModuleId).collect()
    }
}

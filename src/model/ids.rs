// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use smol_str::SmolStr;

/// A stable identifier used across the model and interchange surfaces.
///
/// IDs are cloned into every snapshot, clipboard entry and remap table, so the
/// backing storage is a [`SmolStr`] (short ids stay inline and clone for free).
/// This does not enforce a UUID format; it only enforces that the id is a
/// non-empty *path segment* (i.e. contains no `/`), because ids appear inside
/// store keys and share-code envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: SmolStr,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<SmolStr>) -> Result<Self, IdError> {
        let value = value.into();
        validate_id_segment(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value.to_string()
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsSlash,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ContainsSlash => f.write_str("id must not contain '/'"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id_segment(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.contains('/') {
        return Err(IdError::ContainsSlash);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunnelIdTag {}
pub type FunnelId = Id<FunnelIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeIdTag {}
pub type NodeId = Id<NodeIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeIdTag {}
pub type EdgeId = Id<EdgeIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockIdTag {}
pub type BlockId = Id<BlockIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemIdTag {}
pub type ItemId = Id<ItemIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateIdTag {}
pub type TemplateId = Id<TemplateIdTag>;

/// Mints short sequential ids like `n1`, `n2`, ... behind a fixed prefix.
///
/// The counter only ever moves forward; callers that reuse a generator over a
/// pre-existing arena seed it past the largest numeric suffix already present
/// (see [`IdGen::seeded`]) and skip occupied ids at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGen<T> {
    prefix: &'static str,
    next: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> IdGen<T> {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: 1,
            _marker: PhantomData,
        }
    }

    /// Seeds the counter past the largest `<prefix><digits>` among `existing`.
    ///
    /// Ids that do not match the prefix-plus-digits shape are ignored; they can
    /// never collide with minted ids.
    pub fn seeded<'a, I>(prefix: &'static str, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut next = 1u64;
        for value in existing {
            let Some(digits) = value.strip_prefix(prefix) else {
                continue;
            };
            if let Ok(suffix) = digits.parse::<u64>() {
                next = next.max(suffix.saturating_add(1));
            }
        }
        Self {
            prefix,
            next,
            _marker: PhantomData,
        }
    }

    pub fn mint(&mut self) -> Id<T> {
        let mut digits = itoa::Buffer::new();
        let digits = digits.format(self.next);
        self.next = self.next.saturating_add(1);

        let mut value = String::with_capacity(self.prefix.len() + digits.len());
        value.push_str(self.prefix);
        value.push_str(digits);
        Id::new(value).expect("minted id should be valid")
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus — funnel canvas engine (model + ops + history + templates).
//!
//! This crate is the headless core of the funnel builder: the rendering,
//! persistence and transport layers live with the host application and talk
//! to it through `Session`, the JSON interchange in [`format`] and the
//! template store in [`template`].

pub mod editor;
pub mod format;
pub mod history;
pub mod model;
pub mod ops;
pub mod query;
pub mod template;

#[cfg(test)]
mod tests {
    #[test]
    fn sanity() {
        assert_eq!(2 + 2, 4);
    }
}

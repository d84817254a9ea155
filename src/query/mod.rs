// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over canvases.
//!
//! Queries provide derived views (currently node search) that power quick-jump
//! style UI without touching session state.

pub mod search;

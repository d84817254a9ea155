// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interchange formats for canvases and templates.

pub mod json;

pub use json::{canvas_from_json, canvas_to_json, snapshot_schema, template_schema, DecodeError};

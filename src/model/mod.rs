// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Sessions wrap a canvas (nodes, edges), selection, clipboard, and snapshot history.

pub mod canvas;
pub mod clipboard;
pub mod content;
pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod node;
pub mod session;

pub use canvas::Canvas;
pub use clipboard::Clipboard;
pub use content::{
    BlockBody, BlockKind, ChecklistItem, Content, ContentBlock, ListItem, ParseBlockKindError,
    StyleKey, TextStyle,
};
pub use edge::{Anchor, Edge, EdgeStyle, ParseAnchorError, ParseEdgeStyleError};
pub use ids::{BlockId, EdgeId, FunnelId, Id, IdError, IdGen, ItemId, NodeId, TemplateId};
pub use node::{KindStyle, Node, NodeKind, ParseNodeKindError, Position};
pub use session::Session;

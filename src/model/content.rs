// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::{BlockId, ItemId};

/// Inline formatting flags for a text-bearing block.
///
/// An empty `color` means "inherit"; anything else is a CSS color value the
/// renderer applies verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextStyle {
    bold: bool,
    italic: bool,
    underline: bool,
    highlight: bool,
    color: String,
}

/// One toggleable boolean flag of a [`TextStyle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey {
    Bold,
    Italic,
    Underline,
    Highlight,
}

impl TextStyle {
    pub fn new_with(
        bold: bool,
        italic: bool,
        underline: bool,
        highlight: bool,
        color: impl Into<String>,
    ) -> Self {
        Self {
            bold,
            italic,
            underline,
            highlight,
            color: color.into(),
        }
    }

    pub fn bold(&self) -> bool {
        self.bold
    }

    pub fn italic(&self) -> bool {
        self.italic
    }

    pub fn underline(&self) -> bool {
        self.underline
    }

    pub fn highlight(&self) -> bool {
        self.highlight
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn is_set(&self, key: StyleKey) -> bool {
        match key {
            StyleKey::Bold => self.bold,
            StyleKey::Italic => self.italic,
            StyleKey::Underline => self.underline,
            StyleKey::Highlight => self.highlight,
        }
    }

    pub fn toggle(&mut self, key: StyleKey) {
        match key {
            StyleKey::Bold => self.bold = !self.bold,
            StyleKey::Italic => self.italic = !self.italic,
            StyleKey::Underline => self.underline = !self.underline,
            StyleKey::Highlight => self.highlight = !self.highlight,
        }
    }
}

/// One entry of a bullet-list block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    item_id: ItemId,
    text: String,
}

impl ListItem {
    pub fn new(item_id: ItemId, text: impl Into<String>) -> Self {
        Self {
            item_id,
            text: text.into(),
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// One entry of a checklist block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    item_id: ItemId,
    text: String,
    checked: bool,
}

impl ChecklistItem {
    pub fn new(item_id: ItemId, text: impl Into<String>, checked: bool) -> Self {
        Self {
            item_id,
            text: text.into(),
            checked,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// The closed set of content block kinds, matching the wire `type` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    H1,
    H2,
    Subtitle,
    Paragraph,
    Link,
    List,
    Checklist,
}

impl BlockKind {
    pub const ALL: [BlockKind; 7] = [
        Self::H1,
        Self::H2,
        Self::Subtitle,
        Self::Paragraph,
        Self::Link,
        Self::List,
        Self::Checklist,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::Subtitle => "subtitle",
            Self::Paragraph => "paragraph",
            Self::Link => "link",
            Self::List => "list",
            Self::Checklist => "checklist",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBlockKindError;

impl fmt::Display for ParseBlockKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid block kind")
    }
}

impl std::error::Error for ParseBlockKindError {}

impl FromStr for BlockKind {
    type Err = ParseBlockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or(ParseBlockKindError)
    }
}

/// The kind-specific payload of a content block.
///
/// The variant fixes which fields exist: only links carry a `url`, only lists
/// and checklists carry items. The flat wire shape lives in `crate::format`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    H1 { text: String, style: TextStyle },
    H2 { text: String, style: TextStyle },
    Subtitle { text: String, style: TextStyle },
    Paragraph { text: String, style: TextStyle },
    Link { text: String, style: TextStyle, url: String },
    List { items: Vec<ListItem> },
    Checklist { items: Vec<ChecklistItem> },
}

impl BlockBody {
    /// Blank payload for a freshly added block of `kind`.
    pub fn empty(kind: BlockKind) -> Self {
        match kind {
            BlockKind::H1 => Self::H1 { text: String::new(), style: TextStyle::default() },
            BlockKind::H2 => Self::H2 { text: String::new(), style: TextStyle::default() },
            BlockKind::Subtitle => {
                Self::Subtitle { text: String::new(), style: TextStyle::default() }
            }
            BlockKind::Paragraph => {
                Self::Paragraph { text: String::new(), style: TextStyle::default() }
            }
            BlockKind::Link => Self::Link {
                text: String::new(),
                style: TextStyle::default(),
                url: String::new(),
            },
            BlockKind::List => Self::List { items: Vec::new() },
            BlockKind::Checklist => Self::Checklist { items: Vec::new() },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::H1 { .. } => BlockKind::H1,
            Self::H2 { .. } => BlockKind::H2,
            Self::Subtitle { .. } => BlockKind::Subtitle,
            Self::Paragraph { .. } => BlockKind::Paragraph,
            Self::Link { .. } => BlockKind::Link,
            Self::List { .. } => BlockKind::List,
            Self::Checklist { .. } => BlockKind::Checklist,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::H1 { text, .. }
            | Self::H2 { text, .. }
            | Self::Subtitle { text, .. }
            | Self::Paragraph { text, .. }
            | Self::Link { text, .. } => Some(text),
            Self::List { .. } | Self::Checklist { .. } => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::H1 { text, .. }
            | Self::H2 { text, .. }
            | Self::Subtitle { text, .. }
            | Self::Paragraph { text, .. }
            | Self::Link { text, .. } => Some(text),
            Self::List { .. } | Self::Checklist { .. } => None,
        }
    }

    pub fn style(&self) -> Option<&TextStyle> {
        match self {
            Self::H1 { style, .. }
            | Self::H2 { style, .. }
            | Self::Subtitle { style, .. }
            | Self::Paragraph { style, .. }
            | Self::Link { style, .. } => Some(style),
            Self::List { .. } | Self::Checklist { .. } => None,
        }
    }

    pub fn style_mut(&mut self) -> Option<&mut TextStyle> {
        match self {
            Self::H1 { style, .. }
            | Self::H2 { style, .. }
            | Self::Subtitle { style, .. }
            | Self::Paragraph { style, .. }
            | Self::Link { style, .. } => Some(style),
            Self::List { .. } | Self::Checklist { .. } => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Link { url, .. } => Some(url),
            _ => None,
        }
    }

    pub fn url_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Link { url, .. } => Some(url),
            _ => None,
        }
    }
}

/// One block of a node's content panel. Block order is render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBlock {
    block_id: BlockId,
    body: BlockBody,
}

impl ContentBlock {
    pub fn new(block_id: BlockId, body: BlockBody) -> Self {
        Self { block_id, body }
    }

    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    pub fn body(&self) -> &BlockBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut BlockBody {
        &mut self.body
    }
}

/// Structured content attached to a node, edited through the content editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    title: String,
    description: String,
    blocks: Vec<ContentBlock>,
}

impl Content {
    pub fn new_with(
        title: impl Into<String>,
        description: impl Into<String>,
        blocks: Vec<ContentBlock>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            blocks,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut Vec<ContentBlock> {
        &mut self.blocks
    }

    pub fn block(&self, block_id: &BlockId) -> Option<&ContentBlock> {
        self.blocks.iter().find(|block| block.block_id() == block_id)
    }

    pub fn block_mut(&mut self, block_id: &BlockId) -> Option<&mut ContentBlock> {
        self.blocks
            .iter_mut()
            .find(|block| block.block_id() == block_id)
    }

    /// True when no field is populated; a node holding such content has
    /// `has_content == false`.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.blocks.is_empty()
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Transient editing buffer for a node's structured content.
//!
//! The editor never touches the live canvas. Callers seed it from a node, apply block
//! edits, and hand the committed [`Content`] to `Session::update_node_content`, which
//! is where the single history record happens. Dropping the editor discards the draft.

use crate::model::ids::{BlockIdTag, ItemIdTag};
use crate::model::{
    BlockBody, BlockId, BlockKind, ChecklistItem, Content, ContentBlock, IdGen, ItemId, ListItem,
    Node, StyleKey, TextStyle,
};

/// Partial update for one block. Fields that do not apply to the block's kind are
/// ignored, so the same patch shape serves every variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockPatch {
    pub text: Option<String>,
    pub url: Option<String>,
    pub style: Option<TextStyle>,
}

#[derive(Debug, Clone)]
pub struct ContentEditor {
    title: String,
    description: String,
    blocks: Vec<ContentBlock>,
    block_ids: IdGen<BlockIdTag>,
    item_ids: IdGen<ItemIdTag>,
}

impl ContentEditor {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            blocks: Vec::new(),
            block_ids: IdGen::new("b"),
            item_ids: IdGen::new("i"),
        }
    }

    /// Seeds the buffer from existing content. Id generators continue past the
    /// highest block/item suffix already in use.
    pub fn from_content(content: &Content) -> Self {
        let block_ids = IdGen::seeded(
            "b",
            content.blocks().iter().map(|block| block.block_id().as_str()),
        );
        let item_ids = IdGen::seeded(
            "i",
            content.blocks().iter().flat_map(|block| match block.body() {
                BlockBody::List { items } => items
                    .iter()
                    .map(|item| item.item_id().as_str())
                    .collect::<Vec<_>>(),
                BlockBody::Checklist { items } => items
                    .iter()
                    .map(|item| item.item_id().as_str())
                    .collect::<Vec<_>>(),
                _ => Vec::new(),
            }),
        );

        Self {
            title: content.title().to_owned(),
            description: content.description().to_owned(),
            blocks: content.blocks().to_vec(),
            block_ids,
            item_ids,
        }
    }

    /// Opens an editor on the node's content, or a blank one for nodes without any.
    pub fn for_node(node: &Node) -> Self {
        match node.content() {
            Some(content) => Self::from_content(content),
            None => Self::new(),
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

    pub fn block(&self, block_id: &BlockId) -> Option<&ContentBlock> {
        self.blocks.iter().find(|block| block.block_id() == block_id)
    }

    /// Appends an empty block of `kind` and returns its id.
    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        let block_id = self.fresh_block_id();
        self.blocks
            .push(ContentBlock::new(block_id.clone(), BlockBody::empty(kind)));
        block_id
    }

    /// Applies the fields of `patch` that are meaningful for the block's kind.
    pub fn update_block(&mut self, block_id: &BlockId, patch: BlockPatch) -> bool {
        let Some(block) = self.block_mut(block_id) else {
            return false;
        };

        if let Some(text) = patch.text {
            if let Some(slot) = block.body_mut().text_mut() {
                *slot = text;
            }
        }
        if let Some(url) = patch.url {
            if let Some(slot) = block.body_mut().url_mut() {
                *slot = url;
            }
        }
        if let Some(style) = patch.style {
            if let Some(slot) = block.body_mut().style_mut() {
                *slot = style;
            }
        }
        true
    }

    pub fn remove_block(&mut self, block_id: &BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|block| block.block_id() != block_id);
        self.blocks.len() != before
    }

    /// Moves the block to `new_index`, clamped to the end. Block order is render order.
    pub fn move_block(&mut self, block_id: &BlockId, new_index: usize) -> bool {
        let Some(from) = self
            .blocks
            .iter()
            .position(|block| block.block_id() == block_id)
        else {
            return false;
        };

        let block = self.blocks.remove(from);
        let to = new_index.min(self.blocks.len());
        self.blocks.insert(to, block);
        true
    }

    /// Appends a blank item to a list or checklist block. Checklist items start
    /// unchecked.
    pub fn add_list_item(&mut self, block_id: &BlockId) -> Option<ItemId> {
        let item_id = self.fresh_item_id();
        let block = self.block_mut(block_id)?;
        match block.body_mut() {
            BlockBody::List { items } => {
                items.push(ListItem::new(item_id.clone(), ""));
                Some(item_id)
            }
            BlockBody::Checklist { items } => {
                items.push(ChecklistItem::new(item_id.clone(), "", false));
                Some(item_id)
            }
            _ => None,
        }
    }

    pub fn update_list_item(
        &mut self,
        block_id: &BlockId,
        item_id: &ItemId,
        text: impl Into<String>,
    ) -> bool {
        let Some(block) = self.block_mut(block_id) else {
            return false;
        };
        match block.body_mut() {
            BlockBody::List { items } => {
                let Some(item) = items.iter_mut().find(|item| item.item_id() == item_id) else {
                    return false;
                };
                item.set_text(text);
                true
            }
            BlockBody::Checklist { items } => {
                let Some(item) = items.iter_mut().find(|item| item.item_id() == item_id) else {
                    return false;
                };
                item.set_text(text);
                true
            }
            _ => false,
        }
    }

    pub fn remove_list_item(&mut self, block_id: &BlockId, item_id: &ItemId) -> bool {
        let Some(block) = self.block_mut(block_id) else {
            return false;
        };
        match block.body_mut() {
            BlockBody::List { items } => {
                let before = items.len();
                items.retain(|item| item.item_id() != item_id);
                items.len() != before
            }
            BlockBody::Checklist { items } => {
                let before = items.len();
                items.retain(|item| item.item_id() != item_id);
                items.len() != before
            }
            _ => false,
        }
    }

    /// Flips the checked flag on a checklist item. No-op for list blocks.
    pub fn toggle_checklist_item(&mut self, block_id: &BlockId, item_id: &ItemId) -> bool {
        let Some(block) = self.block_mut(block_id) else {
            return false;
        };
        let BlockBody::Checklist { items } = block.body_mut() else {
            return false;
        };
        let Some(item) = items.iter_mut().find(|item| item.item_id() == item_id) else {
            return false;
        };
        item.toggle();
        true
    }

    /// Flips one style flag on a text-bearing block.
    pub fn toggle_style(&mut self, block_id: &BlockId, key: StyleKey) -> bool {
        let Some(block) = self.block_mut(block_id) else {
            return false;
        };
        let Some(style) = block.body_mut().style_mut() else {
            return false;
        };
        style.toggle(key);
        true
    }

    pub fn set_style_color(&mut self, block_id: &BlockId, color: impl Into<String>) -> bool {
        let Some(block) = self.block_mut(block_id) else {
            return false;
        };
        let Some(style) = block.body_mut().style_mut() else {
            return false;
        };
        style.set_color(color);
        true
    }

    /// Consumes the buffer into a [`Content`] ready for
    /// `Session::update_node_content`.
    pub fn commit(self) -> Content {
        Content::new_with(self.title, self.description, self.blocks)
    }

    fn block_mut(&mut self, block_id: &BlockId) -> Option<&mut ContentBlock> {
        self.blocks
            .iter_mut()
            .find(|block| block.block_id() == block_id)
    }

    fn fresh_block_id(&mut self) -> BlockId {
        loop {
            let candidate = self.block_ids.mint();
            if self.block(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn fresh_item_id(&mut self) -> ItemId {
        loop {
            let candidate = self.item_ids.mint();
            let occupied = self.blocks.iter().any(|block| match block.body() {
                BlockBody::List { items } => {
                    items.iter().any(|item| item.item_id() == &candidate)
                }
                BlockBody::Checklist { items } => {
                    items.iter().any(|item| item.item_id() == &candidate)
                }
                _ => false,
            });
            if !occupied {
                return candidate;
            }
        }
    }
}

impl Default for ContentEditor {
    fn default() -> Self {
        Self::new()
    }
}

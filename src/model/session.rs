// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::history::History;

use super::canvas::Canvas;
use super::clipboard::Clipboard;
use super::ids::{EdgeId, EdgeIdTag, FunnelId, Id, IdGen, NodeId, NodeIdTag};

/// The editing context for one funnel: the live canvas plus everything that
/// travels with it (selection, clipboard, history, id generators).
///
/// The canvas can only be mutated through the session's operations (see
/// `crate::ops`), which keeps the history contract intact: every successful
/// mutation records exactly one snapshot and bumps `rev`. Selection changes
/// are UI state and do neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    funnel_id: FunnelId,
    canvas: Canvas,
    selection: BTreeSet<NodeId>,
    clipboard: Clipboard,
    history: History,
    node_ids: IdGen<NodeIdTag>,
    edge_ids: IdGen<EdgeIdTag>,
    rev: u64,
}

impl Session {
    /// Starts an editing session over an empty canvas.
    pub fn new(funnel_id: FunnelId) -> Self {
        Self::open(funnel_id, Canvas::new())
    }

    /// Starts an editing session over a loaded canvas. Id generators are
    /// seeded past the ids already present, and the opening state becomes the
    /// first history snapshot so undo can always return to it.
    pub fn open(funnel_id: FunnelId, canvas: Canvas) -> Self {
        let node_ids = IdGen::seeded("n", canvas.nodes().keys().map(Id::as_str));
        let edge_ids = IdGen::seeded("e", canvas.edges().keys().map(Id::as_str));

        let mut history = History::new();
        history.record(canvas.clone());

        Self {
            funnel_id,
            canvas,
            selection: BTreeSet::new(),
            clipboard: Clipboard::new(),
            history,
            node_ids,
            edge_ids,
            rev: 0,
        }
    }

    pub fn funnel_id(&self) -> &FunnelId {
        &self.funnel_id
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Monotonic revision counter; bumps on every state change including
    /// undo/redo, so hosts can cheaply detect staleness.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn selection(&self) -> &BTreeSet<NodeId> {
        &self.selection
    }

    pub fn is_selected(&self, node_id: &NodeId) -> bool {
        self.selection.contains(node_id)
    }

    /// Adds a node to the selection; ids not present on the canvas are
    /// silently ignored.
    pub fn select(&mut self, node_id: NodeId) -> bool {
        if !self.canvas.contains_node(&node_id) {
            return false;
        }
        self.selection.insert(node_id)
    }

    pub fn deselect(&mut self, node_id: &NodeId) -> bool {
        self.selection.remove(node_id)
    }

    /// Replaces the selection, keeping only ids present on the canvas.
    pub fn set_selection<I>(&mut self, node_ids: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.selection = node_ids
            .into_iter()
            .filter(|node_id| self.canvas.contains_node(node_id))
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub(crate) fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub(crate) fn clipboard_mut(&mut self) -> &mut Clipboard {
        &mut self.clipboard
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub(crate) fn selection_mut(&mut self) -> &mut BTreeSet<NodeId> {
        &mut self.selection
    }

    /// Mints a node id unused on the current canvas.
    pub(crate) fn fresh_node_id(&mut self) -> NodeId {
        loop {
            let node_id = self.node_ids.mint();
            if !self.canvas.nodes().contains_key(&node_id) {
                return node_id;
            }
        }
    }

    /// Mints an edge id unused on the current canvas.
    pub(crate) fn fresh_edge_id(&mut self) -> EdgeId {
        loop {
            let edge_id = self.edge_ids.mint();
            if !self.canvas.edges().contains_key(&edge_id) {
                return edge_id;
            }
        }
    }

    /// Seals a successful mutation: one history snapshot, one rev bump.
    pub(crate) fn commit(&mut self) {
        self.rev = self.rev.saturating_add(1);
        let snapshot = self.canvas.clone();
        self.history.record(snapshot);
    }

    /// Replaces the live canvas wholesale (undo/redo), pruning selection
    /// entries whose nodes no longer exist.
    pub(crate) fn restore(&mut self, canvas: Canvas) {
        self.canvas = canvas;
        let canvas = &self.canvas;
        self.selection
            .retain(|node_id| canvas.nodes().contains_key(node_id));
        self.rev = self.rev.saturating_add(1);
    }
}

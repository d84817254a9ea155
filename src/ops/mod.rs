// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations on funnel sessions.
//!
//! Every successful mutation commits exactly one history snapshot and bumps the session
//! revision. Operations aimed at ids that no longer exist are silent no-ops: they return
//! `false`/`None`/empty and leave the canvas, history, and revision untouched.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::model::{
    Anchor, Canvas, Clipboard, Content, Edge, EdgeId, EdgeStyle, Node, NodeId, NodeKind, Position,
    Session,
};
use crate::template::Template;

/// Offset applied on both axes when pasting or duplicating, so copies do not sit exactly
/// on top of their sources.
pub const PASTE_OFFSET: f64 = 50.0;

impl Session {
    pub fn add_node(&mut self, kind: NodeKind, position: Position) -> NodeId {
        let node_id = self.fresh_node_id();
        self.canvas_mut()
            .nodes_mut()
            .insert(node_id.clone(), Node::new(node_id.clone(), kind, position));
        self.commit();
        node_id
    }

    pub fn move_node(&mut self, node_id: &NodeId, position: Position) -> bool {
        let Some(node) = self.canvas_mut().node_mut(node_id) else {
            return false;
        };
        node.set_position(position);
        self.commit();
        true
    }

    /// Inserts a copy of the node offset by [`PASTE_OFFSET`], without its edges.
    ///
    /// The copy keeps label, content, and custom styling but gets a fresh id. The
    /// selection is left as it was.
    pub fn duplicate_node(&mut self, node_id: &NodeId) -> Option<NodeId> {
        let source = self.canvas().node(node_id)?.clone();
        let new_id = self.fresh_node_id();
        let copy = source.cloned_as(
            new_id.clone(),
            source.position().translated(PASTE_OFFSET, PASTE_OFFSET),
        );
        self.canvas_mut().nodes_mut().insert(new_id.clone(), copy);
        self.commit();
        Some(new_id)
    }

    /// Removes the node together with every edge touching it.
    pub fn delete_node(&mut self, node_id: &NodeId) -> bool {
        if self.canvas_mut().nodes_mut().remove(node_id).is_none() {
            return false;
        }
        for edge_id in incident_edges(self.canvas(), node_id) {
            self.canvas_mut().edges_mut().remove(&edge_id);
        }
        self.selection_mut().remove(node_id);
        self.commit();
        true
    }

    /// Connects two nodes. Both endpoints must exist; self-loops are allowed.
    pub fn connect(
        &mut self,
        source: &NodeId,
        target: &NodeId,
        source_anchor: Anchor,
        target_anchor: Anchor,
        style: EdgeStyle,
    ) -> Option<EdgeId> {
        if !self.canvas().contains_node(source) || !self.canvas().contains_node(target) {
            return None;
        }
        let edge_id = self.fresh_edge_id();
        let edge = Edge::new(
            edge_id.clone(),
            source.clone(),
            target.clone(),
            source_anchor,
            target_anchor,
            style,
        );
        self.canvas_mut().edges_mut().insert(edge_id.clone(), edge);
        self.commit();
        Some(edge_id)
    }

    pub fn disconnect(&mut self, edge_id: &EdgeId) -> bool {
        if self.canvas_mut().edges_mut().remove(edge_id).is_none() {
            return false;
        }
        self.commit();
        true
    }

    /// Replaces the node's content and optionally its label.
    ///
    /// `None` content clears the node. An empty label is ignored so a cleared title
    /// input in the editor does not wipe the canvas label.
    pub fn update_node_content(
        &mut self,
        node_id: &NodeId,
        content: Option<Content>,
        label: Option<String>,
    ) -> bool {
        let Some(node) = self.canvas_mut().node_mut(node_id) else {
            return false;
        };
        node.set_content(content);
        if let Some(label) = label {
            if !label.is_empty() {
                node.set_label(label);
            }
        }
        self.commit();
        true
    }

    /// Overrides icon and/or color on a [`NodeKind::Custom`] node.
    ///
    /// Only the provided fields change. Calling with neither is a no-op, as is calling
    /// on a non-custom node.
    pub fn set_custom_style(
        &mut self,
        node_id: &NodeId,
        icon: Option<String>,
        color: Option<String>,
    ) -> bool {
        if icon.is_none() && color.is_none() {
            return false;
        }
        let Some(node) = self.canvas_mut().node_mut(node_id) else {
            return false;
        };
        if node.kind() != NodeKind::Custom {
            return false;
        }
        if let Some(icon) = icon {
            node.set_custom_icon(Some(icon));
        }
        if let Some(color) = color {
            node.set_custom_color(Some(color));
        }
        self.commit();
        true
    }

    /// Copies the selected nodes, plus edges whose endpoints are both selected, into
    /// the clipboard. Copying never commits; with an empty selection the clipboard
    /// keeps its previous contents.
    pub fn copy_selection(&mut self) -> &Clipboard {
        if self.selection().is_empty() {
            return self.clipboard();
        }
        let nodes = self
            .canvas()
            .nodes()
            .values()
            .filter(|node| self.is_selected(node.node_id()))
            .cloned()
            .collect::<Vec<_>>();
        let edges = self
            .canvas()
            .edges()
            .values()
            .filter(|edge| self.is_selected(edge.source()) && self.is_selected(edge.target()))
            .cloned()
            .collect::<Vec<_>>();
        self.clipboard_mut().set_contents(nodes, edges);
        self.clipboard()
    }

    /// Inserts clipboard contents with fresh ids, offset by [`PASTE_OFFSET`].
    ///
    /// Edges are rewired to the freshly minted node ids. Pasted nodes are not
    /// selected. Returns the new node ids, in clipboard order.
    pub fn paste(&mut self) -> Vec<NodeId> {
        if self.clipboard().is_empty() {
            return Vec::new();
        }
        let nodes = self.clipboard().nodes().to_vec();
        let edges = self.clipboard().edges().to_vec();
        let inserted = insert_with_fresh_ids(self, &nodes, &edges, PASTE_OFFSET, PASTE_OFFSET);
        self.commit();
        inserted
    }

    /// Deletes every selected node and its incident edges in one commit.
    ///
    /// Returns the number of nodes removed; `0` means nothing was selected and
    /// nothing was recorded.
    pub fn delete_selected(&mut self) -> usize {
        let selected = self.selection().iter().cloned().collect::<Vec<_>>();
        if selected.is_empty() {
            return 0;
        }
        let mut removed = 0usize;
        for node_id in &selected {
            if self.canvas_mut().nodes_mut().remove(node_id).is_none() {
                continue;
            }
            removed += 1;
            for edge_id in incident_edges(self.canvas(), node_id) {
                self.canvas_mut().edges_mut().remove(&edge_id);
            }
        }
        self.clear_selection();
        self.commit();
        removed
    }

    /// Inserts the template's nodes and edges with fresh ids at their authored
    /// positions. Returns the new node ids; inserting an empty template is a no-op.
    pub fn insert_template(&mut self, template: &Template) -> Vec<NodeId> {
        let nodes = template
            .canvas()
            .nodes()
            .values()
            .cloned()
            .collect::<Vec<_>>();
        let edges = template
            .canvas()
            .edges()
            .values()
            .cloned()
            .collect::<Vec<_>>();
        if nodes.is_empty() {
            return Vec::new();
        }
        let inserted = insert_with_fresh_ids(self, &nodes, &edges, 0.0, 0.0);
        self.commit();
        inserted
    }

    /// Steps back to the previous snapshot. Selection entries whose nodes no longer
    /// exist are dropped. Undoing past the oldest snapshot returns `false`.
    pub fn undo(&mut self) -> bool {
        let Some(canvas) = self.history_mut().undo().cloned() else {
            return false;
        };
        self.restore(canvas);
        true
    }

    /// Steps forward again after [`Session::undo`]. Redo becomes unavailable as soon
    /// as a new mutation commits.
    pub fn redo(&mut self) -> bool {
        let Some(canvas) = self.history_mut().redo().cloned() else {
            return false;
        };
        self.restore(canvas);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history().can_redo()
    }
}

// Extracted helpers shared by remove/paste/insert operations.
include!("ops_impl.rs");

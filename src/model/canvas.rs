// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::edge::Edge;
use super::ids::{EdgeId, NodeId};
use super::node::Node;

/// The diagram state: id-indexed node and edge arenas.
///
/// This is also the unit of history: a `Clone` is a full deep snapshot, and
/// undo/redo replace a session's canvas wholesale. Iteration order is id order,
/// which keeps encoding and remapping deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Canvas {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut BTreeMap<NodeId, Node> {
        &mut self.nodes
    }

    pub fn edges(&self) -> &BTreeMap<EdgeId, Edge> {
        &self.edges
    }

    pub fn edges_mut(&mut self) -> &mut BTreeMap<EdgeId, Edge> {
        &mut self.edges
    }

    pub fn node(&self, node_id: &NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    pub fn node_mut(&mut self, node_id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node_id)
    }

    pub fn edge(&self, edge_id: &EdgeId) -> Option<&Edge> {
        self.edges.get(edge_id)
    }

    pub fn edge_mut(&mut self, edge_id: &EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(edge_id)
    }

    pub fn contains_node(&self, node_id: &NodeId) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Canvas;
    use crate::model::edge::{Anchor, Edge, EdgeStyle};
    use crate::model::ids::{EdgeId, NodeId};
    use crate::model::node::{Node, NodeKind, Position};

    #[test]
    fn canvas_clone_is_a_deep_snapshot() {
        let mut canvas = Canvas::new();
        let node_id = NodeId::new("n1").expect("node id");
        canvas.nodes_mut().insert(
            node_id.clone(),
            Node::new(node_id.clone(), NodeKind::CapturePage, Position::default()),
        );
        let edge_id = EdgeId::new("e1").expect("edge id");
        canvas.edges_mut().insert(
            edge_id.clone(),
            Edge::new(
                edge_id,
                node_id.clone(),
                node_id.clone(),
                Anchor::Right,
                Anchor::Left,
                EdgeStyle::default(),
            ),
        );

        let snapshot = canvas.clone();
        canvas
            .node_mut(&node_id)
            .expect("node present")
            .set_label("Mudou");
        canvas.edges_mut().clear();

        let node = snapshot.node(&node_id).expect("snapshot node");
        assert_eq!(node.label(), "Página de Captura");
        assert_eq!(snapshot.edges().len(), 1);
    }
}

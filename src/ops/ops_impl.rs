// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Ids of every edge whose source or target is `node_id`. Self-loops show up once.
fn incident_edges(canvas: &Canvas, node_id: &NodeId) -> SmallVec<[EdgeId; 8]> {
    canvas
        .edges()
        .iter()
        .filter(|(_, edge)| edge.source() == node_id || edge.target() == node_id)
        .map(|(edge_id, _)| edge_id.clone())
        .collect()
}

/// Inserts copies of `nodes` and `edges` into the session canvas under fresh ids,
/// translating every node by `(dx, dy)`.
///
/// Runs in two passes: nodes first, building the old-to-new id map, then edges
/// rewired through that map. Edges referencing nodes outside `nodes` are dropped.
/// Returns the new node ids in input order. Does not commit.
fn insert_with_fresh_ids(
    session: &mut Session,
    nodes: &[Node],
    edges: &[Edge],
    dx: f64,
    dy: f64,
) -> Vec<NodeId> {
    let mut id_map = BTreeMap::new();
    let mut inserted = Vec::with_capacity(nodes.len());

    for node in nodes {
        let new_id = session.fresh_node_id();
        let copy = node.cloned_as(new_id.clone(), node.position().translated(dx, dy));
        session.canvas_mut().nodes_mut().insert(new_id.clone(), copy);
        id_map.insert(node.node_id().clone(), new_id.clone());
        inserted.push(new_id);
    }

    for edge in edges {
        let (Some(source), Some(target)) = (id_map.get(edge.source()), id_map.get(edge.target()))
        else {
            continue;
        };
        let new_id = session.fresh_edge_id();
        let copy = edge.rewired_as(new_id.clone(), source.clone(), target.clone());
        session.canvas_mut().edges_mut().insert(new_id, copy);
    }

    inserted
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::{EdgeId, NodeId};

/// One of the eight directional anchor points on a node's border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Anchor {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl Anchor {
    pub const ALL: [Anchor; 8] = [
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopRight => "top-right",
            Self::Right => "right",
            Self::BottomRight => "bottom-right",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::Left => "left",
            Self::TopLeft => "top-left",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnchorError;

impl fmt::Display for ParseAnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid anchor")
    }
}

impl std::error::Error for ParseAnchorError {}

impl FromStr for Anchor {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|anchor| anchor.as_str() == s)
            .ok_or(ParseAnchorError)
    }
}

/// Routing style of an edge's rendered path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum EdgeStyle {
    Straight,
    #[default]
    Smoothstep,
}

impl EdgeStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Smoothstep => "smoothstep",
        }
    }
}

impl fmt::Display for EdgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEdgeStyleError;

impl fmt::Display for ParseEdgeStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid edge style")
    }
}

impl std::error::Error for ParseEdgeStyleError {}

impl FromStr for EdgeStyle {
    type Err = ParseEdgeStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "smoothstep" => Ok(Self::Smoothstep),
            _ => Err(ParseEdgeStyleError),
        }
    }
}

/// A directed connection between two nodes on the same canvas.
///
/// Both endpoints must reference nodes present in that canvas; node deletion
/// cascades to every incident edge. Self-loops (`source == target`) are valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    edge_id: EdgeId,
    source: NodeId,
    target: NodeId,
    source_anchor: Anchor,
    target_anchor: Anchor,
    style: EdgeStyle,
}

impl Edge {
    pub fn new(
        edge_id: EdgeId,
        source: NodeId,
        target: NodeId,
        source_anchor: Anchor,
        target_anchor: Anchor,
        style: EdgeStyle,
    ) -> Self {
        Self {
            edge_id,
            source,
            target,
            source_anchor,
            target_anchor,
            style,
        }
    }

    pub fn edge_id(&self) -> &EdgeId {
        &self.edge_id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn source_anchor(&self) -> Anchor {
        self.source_anchor
    }

    pub fn target_anchor(&self) -> Anchor {
        self.target_anchor
    }

    pub fn set_anchors(&mut self, source_anchor: Anchor, target_anchor: Anchor) {
        self.source_anchor = source_anchor;
        self.target_anchor = target_anchor;
    }

    pub fn style(&self) -> EdgeStyle {
        self.style
    }

    pub fn set_style(&mut self, style: EdgeStyle) {
        self.style = style;
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Copy of this edge under a fresh id with rewired endpoints, used by
    /// paste/template insertion after node ids have been remapped.
    pub fn rewired_as(&self, edge_id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            edge_id,
            source,
            target,
            source_anchor: self.source_anchor,
            target_anchor: self.target_anchor,
            style: self.style,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Anchor, Edge, EdgeStyle};
    use crate::model::ids::{EdgeId, NodeId};

    #[test]
    fn anchor_round_trips_through_wire_tags() {
        for anchor in Anchor::ALL {
            let parsed = Anchor::from_str(anchor.as_str()).expect("parse anchor tag");
            assert_eq!(parsed, anchor);
        }
    }

    #[test]
    fn edge_style_defaults_to_smoothstep() {
        assert_eq!(EdgeStyle::default(), EdgeStyle::Smoothstep);
        assert!(EdgeStyle::from_str("bezier").is_err());
    }

    #[test]
    fn edge_reports_self_loops() {
        let edge_id = EdgeId::new("e1").expect("edge id");
        let node = NodeId::new("n1").expect("node id");
        let edge = Edge::new(
            edge_id,
            node.clone(),
            node,
            Anchor::Right,
            Anchor::Left,
            EdgeStyle::Straight,
        );
        assert!(edge.is_self_loop());
    }

    #[test]
    fn rewired_as_keeps_anchors_and_style() {
        let edge = Edge::new(
            EdgeId::new("e1").expect("edge id"),
            NodeId::new("n1").expect("node id"),
            NodeId::new("n2").expect("node id"),
            Anchor::Bottom,
            Anchor::TopLeft,
            EdgeStyle::Straight,
        );

        let rewired = edge.rewired_as(
            EdgeId::new("e9").expect("edge id"),
            NodeId::new("n8").expect("node id"),
            NodeId::new("n9").expect("node id"),
        );

        assert_eq!(rewired.edge_id().as_str(), "e9");
        assert_eq!(rewired.source().as_str(), "n8");
        assert_eq!(rewired.target().as_str(), "n9");
        assert_eq!(rewired.source_anchor(), Anchor::Bottom);
        assert_eq!(rewired.target_anchor(), Anchor::TopLeft);
        assert_eq!(rewired.style(), EdgeStyle::Straight);
    }
}

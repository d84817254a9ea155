// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use proteus::model::{
    Anchor, BlockBody, BlockId, Canvas, ChecklistItem, Content, ContentBlock, Edge, EdgeId,
    EdgeStyle, FunnelId, ItemId, Node, NodeId, Position, Session, TextStyle,
};

pub fn checksum_canvas(canvas: &Canvas) -> u64 {
    let mut acc = 0u64;
    for (node_id, node) in canvas.nodes() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(node_id.as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(node.label().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(node.has_content() as u64);
    }
    for (edge_id, edge) in canvas.edges() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(edge_id.as_str().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(edge.source().as_str().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(edge.target().as_str().len() as u64);
    }
    acc
}

pub fn checksum_session(session: &Session) -> u64 {
    let mut acc = checksum_canvas(session.canvas());
    acc = acc.wrapping_mul(131).wrapping_add(session.rev());
    acc = acc
        .wrapping_mul(131)
        .wrapping_add(session.history().len() as u64);
    acc
}

pub mod funnel {
    use proteus::model::NodeKind;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GridParams {
        pub columns: usize,
        pub rows: usize,
        pub content_every: usize,
    }

    impl GridParams {
        pub const fn new(columns: usize, rows: usize, content_every: usize) -> Self {
            Self {
                columns,
                rows,
                content_every,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumChained,
        LargeContentHeavy,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumChained => "medium_chained",
                Self::LargeContentHeavy => "large_content_heavy",
            }
        }

        pub const fn params(self) -> GridParams {
            match self {
                Self::Small => GridParams::new(4, 3, 0),
                Self::MediumChained => GridParams::new(10, 8, 4),
                Self::LargeContentHeavy => GridParams::new(25, 16, 2),
            }
        }
    }

    const KIND_CYCLE: [NodeKind; 8] = [
        NodeKind::CapturePage,
        NodeKind::SalesPage,
        NodeKind::Checkout,
        NodeKind::Upsell,
        NodeKind::ThankYou,
        NodeKind::Email,
        NodeKind::Whatsapp,
        NodeKind::Webinar,
    ];

    pub fn node_id(index: usize) -> NodeId {
        NodeId::new(format!("n{index}")).expect("valid node id")
    }

    fn edge_id(index: usize) -> EdgeId {
        EdgeId::new(format!("e{index}")).expect("valid edge id")
    }

    fn block_id(index: usize) -> BlockId {
        BlockId::new(format!("b{index}")).expect("valid block id")
    }

    fn item_id(index: usize) -> ItemId {
        ItemId::new(format!("i{index}")).expect("valid item id")
    }

    fn content_sample(seed: usize) -> Content {
        Content::new_with(
            format!("Oferta {seed}"),
            format!("Conteúdo determinístico do passo {seed}"),
            vec![
                ContentBlock::new(
                    block_id(1),
                    BlockBody::H1 {
                        text: format!("Título principal {seed}"),
                        style: TextStyle::default(),
                    },
                ),
                ContentBlock::new(
                    block_id(2),
                    BlockBody::Paragraph {
                        text: format!("Texto de apoio do passo {seed} com detalhes da oferta."),
                        style: TextStyle::default(),
                    },
                ),
                ContentBlock::new(
                    block_id(3),
                    BlockBody::Checklist {
                        items: (1..=3)
                            .map(|k| {
                                ChecklistItem::new(item_id(k), format!("Passo {k}"), k % 2 == 0)
                            })
                            .collect(),
                    },
                ),
            ],
        )
    }

    /// Deterministic funnel grid generator.
    ///
    /// - Node ids are `n1..nN` row-major, so sessions opened over the canvas
    ///   continue minting at `n{N+1}`.
    /// - Every row is chained left→right; the first column is chained
    ///   top→bottom, which gives interior nodes up to four incident edges.
    /// - `content_every` attaches structured content to every Nth node
    ///   (0 disables content).
    pub fn grid(params: GridParams) -> Canvas {
        assert!(params.columns >= 2, "columns must be >= 2");
        assert!(params.rows >= 1, "rows must be >= 1");

        let mut canvas = Canvas::new();

        let mut ids = Vec::<Vec<NodeId>>::with_capacity(params.rows);
        let mut index = 0usize;
        for row in 0..params.rows {
            let mut row_ids = Vec::<NodeId>::with_capacity(params.columns);
            for column in 0..params.columns {
                index += 1;
                let id = node_id(index);
                let kind = KIND_CYCLE[(index - 1) % KIND_CYCLE.len()];
                let position = Position::new(column as f64 * 250.0, row as f64 * 160.0);
                let mut node = Node::new(id.clone(), kind, position);
                if params.content_every > 0 && index % params.content_every == 0 {
                    node.set_content(Some(content_sample(index)));
                }
                canvas.nodes_mut().insert(id.clone(), node);
                row_ids.push(id);
            }
            ids.push(row_ids);
        }

        let mut next_edge = 0usize;
        for row_ids in &ids {
            for pair in row_ids.windows(2) {
                next_edge += 1;
                canvas.edges_mut().insert(
                    edge_id(next_edge),
                    Edge::new(
                        edge_id(next_edge),
                        pair[0].clone(),
                        pair[1].clone(),
                        Anchor::Right,
                        Anchor::Left,
                        EdgeStyle::Smoothstep,
                    ),
                );
            }
        }
        for rows in ids.windows(2) {
            next_edge += 1;
            canvas.edges_mut().insert(
                edge_id(next_edge),
                Edge::new(
                    edge_id(next_edge),
                    rows[0][0].clone(),
                    rows[1][0].clone(),
                    Anchor::Bottom,
                    Anchor::Top,
                    EdgeStyle::Straight,
                ),
            );
        }

        canvas
    }

    pub fn fixture(case: Case) -> Canvas {
        grid(case.params())
    }

    pub fn session(case: Case) -> Session {
        Session::open(FunnelId::new("bench").expect("funnel id"), fixture(case))
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::canvas::Canvas;
use super::content::{BlockBody, ChecklistItem, Content, ContentBlock, StyleKey, TextStyle};
use super::edge::{Anchor, Edge, EdgeStyle};
use super::ids::{BlockId, EdgeId, ItemId, NodeId};
use super::node::{Node, NodeKind, Position};

pub(crate) fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

pub(crate) fn eid(value: &str) -> EdgeId {
    EdgeId::new(value).expect("edge id")
}

/// Capture -> sales -> checkout funnel with a self-loop on the checkout node.
///
/// Ids are `n1..n3` / `e1..e3` so seeded generators continue at `n4` / `e4`.
pub(crate) fn canvas_three_step_funnel() -> Canvas {
    let mut canvas = Canvas::new();

    let n1 = nid("n1");
    let n2 = nid("n2");
    let n3 = nid("n3");

    canvas.nodes_mut().insert(
        n1.clone(),
        Node::new(n1.clone(), NodeKind::CapturePage, Position::new(0.0, 0.0)),
    );
    canvas.nodes_mut().insert(
        n2.clone(),
        Node::new(n2.clone(), NodeKind::SalesPage, Position::new(250.0, 0.0)),
    );
    canvas.nodes_mut().insert(
        n3.clone(),
        Node::new(n3.clone(), NodeKind::Checkout, Position::new(500.0, 0.0)),
    );

    canvas.edges_mut().insert(
        eid("e1"),
        Edge::new(
            eid("e1"),
            n1,
            n2.clone(),
            Anchor::Right,
            Anchor::Left,
            EdgeStyle::Smoothstep,
        ),
    );
    canvas.edges_mut().insert(
        eid("e2"),
        Edge::new(
            eid("e2"),
            n2,
            n3.clone(),
            Anchor::Right,
            Anchor::Left,
            EdgeStyle::Smoothstep,
        ),
    );
    canvas.edges_mut().insert(
        eid("e3"),
        Edge::new(
            eid("e3"),
            n3.clone(),
            n3,
            Anchor::Bottom,
            Anchor::BottomRight,
            EdgeStyle::Straight,
        ),
    );

    canvas
}

/// Populated content with one of each interesting block shape.
pub(crate) fn content_sample() -> Content {
    let headline = ContentBlock::new(
        BlockId::new("b1").expect("block id"),
        BlockBody::H1 {
            text: "Oferta principal".to_owned(),
            style: TextStyle::default(),
        },
    );

    let mut pitch_style = TextStyle::default();
    pitch_style.toggle(StyleKey::Bold);
    let pitch = ContentBlock::new(
        BlockId::new("b2").expect("block id"),
        BlockBody::Paragraph {
            text: "Acesso imediato após a compra.".to_owned(),
            style: pitch_style,
        },
    );

    let link = ContentBlock::new(
        BlockId::new("b3").expect("block id"),
        BlockBody::Link {
            text: "Garantir minha vaga".to_owned(),
            style: TextStyle::default(),
            url: "https://example.com/checkout".to_owned(),
        },
    );

    let checklist = ContentBlock::new(
        BlockId::new("b4").expect("block id"),
        BlockBody::Checklist {
            items: vec![
                ChecklistItem::new(ItemId::new("i1").expect("item id"), "Criativo aprovado", true),
                ChecklistItem::new(ItemId::new("i2").expect("item id"), "Pixel instalado", false),
            ],
        },
    );

    Content::new_with(
        "Página de vendas",
        "Oferta de lançamento",
        vec![headline, pitch, link, checklist],
    )
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas and template wire shapes.
//!
//! The JSON side uses the host's camelCase field names and flat block objects;
//! everything here converts between that and the sum-typed model. Decoding
//! re-derives `hasContent` and drops edges whose endpoints are missing from the
//! same blob, so a decoded canvas always satisfies the cascade invariant no
//! matter what the blob claims.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::ids::IdError;
use crate::model::{
    Anchor, BlockBody, BlockId, BlockKind, Canvas, ChecklistItem, Content, ContentBlock, Edge,
    EdgeId, EdgeStyle, ItemId, ListItem, Node, NodeId, NodeKind, Position, TemplateId, TextStyle,
};
use crate::template::Template;

/// The `{nodes, edges}` envelope stored per funnel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotJson {
    #[serde(default)]
    pub nodes: Vec<NodeJson>,
    #[serde(default)]
    pub edges: Vec<EdgeJson>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema)]
pub struct PositionJson {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeJson {
    pub id: String,
    #[serde(default)]
    pub position: PositionJson,
    pub kind: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentJson>,
    #[serde(default)]
    pub has_content: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EdgeJson {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: String,
    pub target_handle: String,
    pub edge_style: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ContentJson {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blocks: Vec<BlockJson>,
}

/// Flat block object: `type` decides which of the optional fields mean anything.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockJson {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleJson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_items: Vec<ItemJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ItemJson {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct StyleJson {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub color: String,
}

/// Template interchange envelope. Every field is optional at the serde level so
/// presence can be validated with field-tagged errors instead of opaque parse
/// failures.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TemplateJson {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub nodes: Option<Vec<NodeJson>>,
    #[serde(default)]
    pub edges: Option<Vec<EdgeJson>>,
    #[serde(default)]
    pub created_at: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TemplateStoreJson {
    #[serde(default)]
    pub templates: Vec<TemplateJson>,
}

#[derive(Debug)]
pub enum DecodeError {
    Json {
        source: serde_json::Error,
    },
    MissingField {
        field: &'static str,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: Box<IdError>,
    },
    UnknownKind {
        value: String,
    },
    UnknownAnchor {
        value: String,
    },
    UnknownEdgeStyle {
        value: String,
    },
    UnknownBlockType {
        value: String,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "malformed json: {source}"),
            Self::MissingField { field } => write!(f, "missing required field {field}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::UnknownKind { value } => write!(f, "unknown node kind {value:?}"),
            Self::UnknownAnchor { value } => write!(f, "unknown anchor {value:?}"),
            Self::UnknownEdgeStyle { value } => write!(f, "unknown edge style {value:?}"),
            Self::UnknownBlockType { value } => write!(f, "unknown block type {value:?}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::MissingField { .. }
            | Self::UnknownKind { .. }
            | Self::UnknownAnchor { .. }
            | Self::UnknownEdgeStyle { .. }
            | Self::UnknownBlockType { .. } => None,
        }
    }
}

pub fn canvas_to_json(canvas: &Canvas) -> Result<String, serde_json::Error> {
    serde_json::to_string(&canvas_to_snapshot(canvas))
}

pub fn canvas_from_json(blob: &str) -> Result<Canvas, DecodeError> {
    let snapshot: SnapshotJson =
        serde_json::from_str(blob).map_err(|source| DecodeError::Json { source })?;
    canvas_from_snapshot(snapshot)
}

pub fn canvas_to_snapshot(canvas: &Canvas) -> SnapshotJson {
    SnapshotJson {
        nodes: canvas.nodes().values().map(node_to_json).collect(),
        edges: canvas.edges().values().map(edge_to_json).collect(),
    }
}

pub fn canvas_from_snapshot(snapshot: SnapshotJson) -> Result<Canvas, DecodeError> {
    let mut canvas = Canvas::new();

    for node_json in snapshot.nodes {
        let node = node_from_json(node_json)?;
        canvas.nodes_mut().insert(node.node_id().clone(), node);
    }

    for edge_json in snapshot.edges {
        let edge = edge_from_json(edge_json)?;
        // Edges pointing at nodes absent from the blob are dropped, not errors.
        if !canvas.contains_node(edge.source()) || !canvas.contains_node(edge.target()) {
            continue;
        }
        canvas.edges_mut().insert(edge.edge_id().clone(), edge);
    }

    Ok(canvas)
}

/// JSON Schema for the `{nodes, edges}` snapshot envelope.
pub fn snapshot_schema() -> schemars::Schema {
    schemars::schema_for!(SnapshotJson)
}

/// JSON Schema for the template interchange envelope.
pub fn template_schema() -> schemars::Schema {
    schemars::schema_for!(TemplateJson)
}

fn node_to_json(node: &Node) -> NodeJson {
    NodeJson {
        id: node.node_id().to_string(),
        position: PositionJson {
            x: node.position().x,
            y: node.position().y,
        },
        kind: node.kind().as_str().to_owned(),
        label: node.label().to_owned(),
        content: node.content().map(content_to_json),
        has_content: node.has_content(),
        custom_icon: node.custom_icon().map(ToOwned::to_owned),
        custom_color: node.custom_color().map(ToOwned::to_owned),
    }
}

fn node_from_json(node_json: NodeJson) -> Result<Node, DecodeError> {
    let node_id = NodeId::new(node_json.id.clone()).map_err(|source| DecodeError::InvalidId {
        field: "nodes[].id",
        value: node_json.id,
        source: Box::new(source),
    })?;
    let kind = node_json
        .kind
        .parse::<NodeKind>()
        .map_err(|_| DecodeError::UnknownKind {
            value: node_json.kind,
        })?;
    let content = node_json.content.map(content_from_json).transpose()?;

    // `hasContent` on the wire is advisory; the flag is re-derived from the
    // decoded content.
    Ok(Node::new_with(
        node_id,
        kind,
        Position::new(node_json.position.x, node_json.position.y),
        node_json.label,
        content,
        node_json.custom_icon,
        node_json.custom_color,
    ))
}

fn edge_to_json(edge: &Edge) -> EdgeJson {
    EdgeJson {
        id: edge.edge_id().to_string(),
        source: edge.source().to_string(),
        target: edge.target().to_string(),
        source_handle: edge.source_anchor().as_str().to_owned(),
        target_handle: edge.target_anchor().as_str().to_owned(),
        edge_style: edge.style().as_str().to_owned(),
    }
}

fn edge_from_json(edge_json: EdgeJson) -> Result<Edge, DecodeError> {
    let edge_id = EdgeId::new(edge_json.id.clone()).map_err(|source| DecodeError::InvalidId {
        field: "edges[].id",
        value: edge_json.id,
        source: Box::new(source),
    })?;
    let source = NodeId::new(edge_json.source.clone()).map_err(|source| DecodeError::InvalidId {
        field: "edges[].source",
        value: edge_json.source,
        source: Box::new(source),
    })?;
    let target = NodeId::new(edge_json.target.clone()).map_err(|source| DecodeError::InvalidId {
        field: "edges[].target",
        value: edge_json.target,
        source: Box::new(source),
    })?;
    let source_anchor =
        edge_json
            .source_handle
            .parse::<Anchor>()
            .map_err(|_| DecodeError::UnknownAnchor {
                value: edge_json.source_handle,
            })?;
    let target_anchor =
        edge_json
            .target_handle
            .parse::<Anchor>()
            .map_err(|_| DecodeError::UnknownAnchor {
                value: edge_json.target_handle,
            })?;
    let style =
        edge_json
            .edge_style
            .parse::<EdgeStyle>()
            .map_err(|_| DecodeError::UnknownEdgeStyle {
                value: edge_json.edge_style,
            })?;

    Ok(Edge::new(
        edge_id,
        source,
        target,
        source_anchor,
        target_anchor,
        style,
    ))
}

fn content_to_json(content: &Content) -> ContentJson {
    ContentJson {
        title: content.title().to_owned(),
        description: content.description().to_owned(),
        blocks: content.blocks().iter().map(block_to_json).collect(),
    }
}

fn content_from_json(content_json: ContentJson) -> Result<Content, DecodeError> {
    let blocks = content_json
        .blocks
        .into_iter()
        .map(block_from_json)
        .collect::<Result<Vec<_>, DecodeError>>()?;

    Ok(Content::new_with(
        content_json.title,
        content_json.description,
        blocks,
    ))
}

fn block_to_json(block: &ContentBlock) -> BlockJson {
    let body = block.body();
    let list_items = match body {
        BlockBody::List { items } => items
            .iter()
            .map(|item| ItemJson {
                id: item.item_id().to_string(),
                text: item.text().to_owned(),
                checked: None,
            })
            .collect(),
        BlockBody::Checklist { items } => items
            .iter()
            .map(|item| ItemJson {
                id: item.item_id().to_string(),
                text: item.text().to_owned(),
                checked: Some(item.checked()),
            })
            .collect(),
        _ => Vec::new(),
    };

    BlockJson {
        id: block.block_id().to_string(),
        block_type: body.kind().as_str().to_owned(),
        text: body.text().unwrap_or_default().to_owned(),
        style: body.style().map(style_to_json),
        url: body.url().map(ToOwned::to_owned),
        list_items,
    }
}

fn block_from_json(block_json: BlockJson) -> Result<ContentBlock, DecodeError> {
    let block_id = BlockId::new(block_json.id.clone()).map_err(|source| DecodeError::InvalidId {
        field: "nodes[].content.blocks[].id",
        value: block_json.id,
        source: Box::new(source),
    })?;
    let kind = block_json
        .block_type
        .parse()
        .map_err(|_| DecodeError::UnknownBlockType {
            value: block_json.block_type,
        })?;

    let style = block_json.style.map(style_from_json).unwrap_or_default();
    let body = match kind {
        BlockKind::H1 => BlockBody::H1 {
            text: block_json.text,
            style,
        },
        BlockKind::H2 => BlockBody::H2 {
            text: block_json.text,
            style,
        },
        BlockKind::Subtitle => BlockBody::Subtitle {
            text: block_json.text,
            style,
        },
        BlockKind::Paragraph => BlockBody::Paragraph {
            text: block_json.text,
            style,
        },
        BlockKind::Link => BlockBody::Link {
            text: block_json.text,
            style,
            url: block_json.url.unwrap_or_default(),
        },
        BlockKind::List => BlockBody::List {
            items: block_json
                .list_items
                .into_iter()
                .map(|item_json| {
                    let item_id = item_id_from_json(&item_json)?;
                    Ok(ListItem::new(item_id, item_json.text))
                })
                .collect::<Result<Vec<_>, DecodeError>>()?,
        },
        BlockKind::Checklist => BlockBody::Checklist {
            items: block_json
                .list_items
                .into_iter()
                .map(|item_json| {
                    let item_id = item_id_from_json(&item_json)?;
                    let checked = item_json.checked.unwrap_or(false);
                    Ok(ChecklistItem::new(item_id, item_json.text, checked))
                })
                .collect::<Result<Vec<_>, DecodeError>>()?,
        },
    };

    Ok(ContentBlock::new(block_id, body))
}

fn item_id_from_json(item_json: &ItemJson) -> Result<ItemId, DecodeError> {
    ItemId::new(item_json.id.clone()).map_err(|source| DecodeError::InvalidId {
        field: "nodes[].content.blocks[].listItems[].id",
        value: item_json.id.clone(),
        source: Box::new(source),
    })
}

fn style_to_json(style: &TextStyle) -> StyleJson {
    StyleJson {
        bold: style.bold(),
        italic: style.italic(),
        underline: style.underline(),
        highlight: style.highlight(),
        color: style.color().to_owned(),
    }
}

fn style_from_json(style_json: StyleJson) -> TextStyle {
    TextStyle::new_with(
        style_json.bold,
        style_json.italic,
        style_json.underline,
        style_json.highlight,
        style_json.color,
    )
}

pub(crate) fn template_to_json(template: &Template) -> Result<String, serde_json::Error> {
    serde_json::to_string(&template_to_dto(template))
}

pub(crate) fn template_to_dto(template: &Template) -> TemplateJson {
    let snapshot = canvas_to_snapshot(template.canvas());
    TemplateJson {
        id: Some(template.template_id().to_string()),
        name: Some(template.name().to_owned()),
        description: Some(template.description().to_owned()),
        nodes: Some(snapshot.nodes),
        edges: Some(snapshot.edges),
        created_at: Some(template.created_at_ms()),
    }
}

pub(crate) fn template_from_json(blob: &str) -> Result<Template, DecodeError> {
    let template_json: TemplateJson =
        serde_json::from_str(blob).map_err(|source| DecodeError::Json { source })?;
    template_from_dto(template_json)
}

/// Validates the envelope and decodes the body. The decoded id and timestamp
/// come straight from the blob; importing through a store re-mints both.
pub(crate) fn template_from_dto(template_json: TemplateJson) -> Result<Template, DecodeError> {
    let Some(id) = template_json.id else {
        return Err(DecodeError::MissingField { field: "id" });
    };
    let Some(name) = template_json.name else {
        return Err(DecodeError::MissingField { field: "name" });
    };
    let Some(nodes) = template_json.nodes else {
        return Err(DecodeError::MissingField { field: "nodes" });
    };
    let Some(edges) = template_json.edges else {
        return Err(DecodeError::MissingField { field: "edges" });
    };

    let template_id = TemplateId::new(id.clone()).map_err(|source| DecodeError::InvalidId {
        field: "id",
        value: id,
        source: Box::new(source),
    })?;
    let canvas = canvas_from_snapshot(SnapshotJson { nodes, edges })?;

    Ok(Template::new_with(
        template_id,
        name,
        template_json.description.unwrap_or_default(),
        canvas,
        template_json.created_at.unwrap_or_default(),
    ))
}

pub(crate) fn templates_to_json<'a>(
    templates: impl IntoIterator<Item = &'a Template>,
) -> Result<String, serde_json::Error> {
    let store_json = TemplateStoreJson {
        templates: templates.into_iter().map(template_to_dto).collect(),
    };
    serde_json::to_string(&store_json)
}

pub(crate) fn templates_from_json(blob: &str) -> Result<Vec<Template>, DecodeError> {
    let store_json: TemplateStoreJson =
        serde_json::from_str(blob).map_err(|source| DecodeError::Json { source })?;
    store_json
        .templates
        .into_iter()
        .map(template_from_dto)
        .collect()
}

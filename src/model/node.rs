// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::content::Content;
use super::ids::NodeId;

/// Canvas position in logical pixels. Grid snapping is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The closed set of funnel step kinds.
///
/// `kind` is fixed at creation; it selects the default label, icon and color.
/// Only [`NodeKind::Custom`] honours per-node icon/color overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    CapturePage,
    SalesPage,
    Checkout,
    Upsell,
    Downsell,
    ThankYou,
    Webinar,
    MembersArea,
    Email,
    Whatsapp,
    Sms,
    Call,
    Instagram,
    Youtube,
    Tiktok,
    FacebookAds,
    GoogleAds,
    Blog,
    Custom,
    Annotation,
}

/// Default icon name and hex color for a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

impl NodeKind {
    pub const ALL: [NodeKind; 20] = [
        Self::CapturePage,
        Self::SalesPage,
        Self::Checkout,
        Self::Upsell,
        Self::Downsell,
        Self::ThankYou,
        Self::Webinar,
        Self::MembersArea,
        Self::Email,
        Self::Whatsapp,
        Self::Sms,
        Self::Call,
        Self::Instagram,
        Self::Youtube,
        Self::Tiktok,
        Self::FacebookAds,
        Self::GoogleAds,
        Self::Blog,
        Self::Custom,
        Self::Annotation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CapturePage => "capture-page",
            Self::SalesPage => "sales-page",
            Self::Checkout => "checkout",
            Self::Upsell => "upsell",
            Self::Downsell => "downsell",
            Self::ThankYou => "thank-you",
            Self::Webinar => "webinar",
            Self::MembersArea => "members-area",
            Self::Email => "email",
            Self::Whatsapp => "whatsapp",
            Self::Sms => "sms",
            Self::Call => "call",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::FacebookAds => "facebook-ads",
            Self::GoogleAds => "google-ads",
            Self::Blog => "blog",
            Self::Custom => "custom",
            Self::Annotation => "annotation",
        }
    }

    /// Label a freshly created node starts with. Applied once at creation and
    /// never re-applied; the product ships in Brazilian Portuguese.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::CapturePage => "Página de Captura",
            Self::SalesPage => "Página de Vendas",
            Self::Checkout => "Checkout",
            Self::Upsell => "Upsell",
            Self::Downsell => "Downsell",
            Self::ThankYou => "Página de Obrigado",
            Self::Webinar => "Webinário",
            Self::MembersArea => "Área de Membros",
            Self::Email => "E-mail",
            Self::Whatsapp => "WhatsApp",
            Self::Sms => "SMS",
            Self::Call => "Ligação",
            Self::Instagram => "Instagram",
            Self::Youtube => "YouTube",
            Self::Tiktok => "TikTok",
            Self::FacebookAds => "Facebook Ads",
            Self::GoogleAds => "Google Ads",
            Self::Blog => "Blog",
            Self::Custom => "Personalizado",
            Self::Annotation => "Anotação",
        }
    }

    pub fn default_style(self) -> KindStyle {
        match self {
            Self::CapturePage => KindStyle { icon: "file-text", color: "#3b82f6" },
            Self::SalesPage => KindStyle { icon: "badge-dollar-sign", color: "#22c55e" },
            Self::Checkout => KindStyle { icon: "shopping-cart", color: "#f59e0b" },
            Self::Upsell => KindStyle { icon: "trending-up", color: "#10b981" },
            Self::Downsell => KindStyle { icon: "trending-down", color: "#f97316" },
            Self::ThankYou => KindStyle { icon: "heart", color: "#ec4899" },
            Self::Webinar => KindStyle { icon: "video", color: "#8b5cf6" },
            Self::MembersArea => KindStyle { icon: "users", color: "#6366f1" },
            Self::Email => KindStyle { icon: "mail", color: "#0ea5e9" },
            Self::Whatsapp => KindStyle { icon: "message-circle", color: "#25d366" },
            Self::Sms => KindStyle { icon: "message-square", color: "#64748b" },
            Self::Call => KindStyle { icon: "phone", color: "#14b8a6" },
            Self::Instagram => KindStyle { icon: "instagram", color: "#e1306c" },
            Self::Youtube => KindStyle { icon: "youtube", color: "#ff0000" },
            Self::Tiktok => KindStyle { icon: "music", color: "#0f172a" },
            Self::FacebookAds => KindStyle { icon: "facebook", color: "#1877f2" },
            Self::GoogleAds => KindStyle { icon: "search", color: "#4285f4" },
            Self::Blog => KindStyle { icon: "pen-tool", color: "#a855f7" },
            Self::Custom => KindStyle { icon: "box", color: "#6b7280" },
            Self::Annotation => KindStyle { icon: "sticky-note", color: "#eab308" },
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNodeKindError;

impl fmt::Display for ParseNodeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid node kind")
    }
}

impl std::error::Error for ParseNodeKindError {}

impl FromStr for NodeKind {
    type Err = ParseNodeKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or(ParseNodeKindError)
    }
}

/// A single step on the funnel canvas.
///
/// `node_id` and `kind` are immutable after creation. `has_content` is a
/// derived flag kept in lockstep with `content` by [`Node::set_content`]:
/// it is true exactly when content is present and has at least one populated
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    node_id: NodeId,
    position: Position,
    kind: NodeKind,
    label: String,
    content: Option<Content>,
    has_content: bool,
    custom_icon: Option<String>,
    custom_color: Option<String>,
}

impl Node {
    pub fn new(node_id: NodeId, kind: NodeKind, position: Position) -> Self {
        let (custom_icon, custom_color) = if kind == NodeKind::Custom {
            let style = kind.default_style();
            (Some(style.icon.to_owned()), Some(style.color.to_owned()))
        } else {
            (None, None)
        };

        Self {
            node_id,
            position,
            kind,
            label: kind.default_label().to_owned(),
            content: None,
            has_content: false,
            custom_icon,
            custom_color,
        }
    }

    pub fn new_with(
        node_id: NodeId,
        kind: NodeKind,
        position: Position,
        label: impl Into<String>,
        content: Option<Content>,
        custom_icon: Option<String>,
        custom_color: Option<String>,
    ) -> Self {
        let has_content = content.as_ref().is_some_and(|c| !c.is_empty());
        Self {
            node_id,
            position,
            kind,
            label: label.into(),
            content,
            has_content,
            custom_icon,
            custom_color,
        }
    }

    pub fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: Option<Content>) {
        self.has_content = content.as_ref().is_some_and(|c| !c.is_empty());
        self.content = content;
    }

    pub fn has_content(&self) -> bool {
        self.has_content
    }

    pub fn custom_icon(&self) -> Option<&str> {
        self.custom_icon.as_deref()
    }

    pub fn set_custom_icon<T: Into<String>>(&mut self, custom_icon: Option<T>) {
        self.custom_icon = custom_icon.map(Into::into);
    }

    pub fn custom_color(&self) -> Option<&str> {
        self.custom_color.as_deref()
    }

    pub fn set_custom_color<T: Into<String>>(&mut self, custom_color: Option<T>) {
        self.custom_color = custom_color.map(Into::into);
    }

    /// Icon shown on the canvas: the per-node override for custom kind nodes,
    /// the kind default otherwise.
    pub fn effective_icon(&self) -> &str {
        match (self.kind, self.custom_icon.as_deref()) {
            (NodeKind::Custom, Some(icon)) => icon,
            _ => self.kind.default_style().icon,
        }
    }

    pub fn effective_color(&self) -> &str {
        match (self.kind, self.custom_color.as_deref()) {
            (NodeKind::Custom, Some(color)) => color,
            _ => self.kind.default_style().color,
        }
    }

    /// Copy of this node under a fresh id at a new position, used by
    /// duplicate/paste/template insertion. Incident edges are never carried.
    pub fn cloned_as(&self, node_id: NodeId, position: Position) -> Self {
        Self {
            node_id,
            position,
            kind: self.kind,
            label: self.label.clone(),
            content: self.content.clone(),
            has_content: self.has_content,
            custom_icon: self.custom_icon.clone(),
            custom_color: self.custom_color.clone(),
        }
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Funnel templates: saved canvases that can be re-inserted, exported as JSON
//! and passed around as share codes.
//!
//! The store owns every template behind its id. Importing always re-mints the
//! id and the timestamp, so a blob can never claim an identity inside the
//! receiving store; a failed import leaves the store untouched.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::format::json;
use crate::format::json::DecodeError;
use crate::model::{Canvas, TemplateId};

/// Prefix of every share code. The `T1` segment versions the envelope.
pub const SHARE_CODE_PREFIX: &str = "PROTEUS.T1.";

/// A named, reusable canvas snapshot.
///
/// The canvas inside is a deep copy taken at export time and never aliases
/// live session state. Node and edge ids are the author's; insertion into a
/// session re-mints them (see `Session::insert_template`).
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    template_id: TemplateId,
    name: String,
    description: String,
    canvas: Canvas,
    created_at_ms: u64,
}

impl Template {
    pub fn new_with(
        template_id: TemplateId,
        name: impl Into<String>,
        description: impl Into<String>,
        canvas: Canvas,
        created_at_ms: u64,
    ) -> Self {
        Self {
            template_id,
            name: name.into(),
            description: description.into(),
            canvas,
            created_at_ms,
        }
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Export timestamp in unix milliseconds.
    pub fn created_at_ms(&self) -> u64 {
        self.created_at_ms
    }

    pub fn to_json(&self) -> Result<String, TemplateError> {
        json::template_to_json(self).map_err(|source| TemplateError::Json { source })
    }

    /// Prefixed base64 of the template's JSON, suitable for chat or e-mail.
    pub fn share_code(&self) -> Result<String, TemplateError> {
        let blob = self.to_json()?;
        let mut code = String::from(SHARE_CODE_PREFIX);
        code.push_str(&STANDARD.encode(blob));
        Ok(code)
    }
}

/// The library of templates available to a workspace.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateStore {
    templates: BTreeMap<TemplateId, Template>,
    seq: u64,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
            seq: 1,
        }
    }

    pub fn templates(&self) -> &BTreeMap<TemplateId, Template> {
        &self.templates
    }

    pub fn template(&self, template_id: &TemplateId) -> Option<&Template> {
        self.templates.get(template_id)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Saves a deep copy of `canvas` as a new template and returns it.
    pub fn export(
        &mut self,
        canvas: &Canvas,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &Template {
        let template_id = self.mint_template_id();
        let template = Template {
            template_id: template_id.clone(),
            name: name.into(),
            description: description.into(),
            canvas: canvas.clone(),
            created_at_ms: now_ms(),
        };
        self.templates.insert(template_id.clone(), template);
        self.templates
            .get(&template_id)
            .expect("template inserted above")
    }

    /// Imports a template blob. The blob must carry `id`, `name`, `nodes` and
    /// `edges`; both the id and the timestamp are re-minted regardless of what
    /// the blob claims. On any error the store is left untouched.
    pub fn import(&mut self, blob: &str) -> Result<&Template, TemplateError> {
        let template = json::template_from_json(blob).map_err(import_error)?;
        Ok(self.admit(template))
    }

    /// Imports a template from a share code produced by [`Template::share_code`].
    pub fn import_share_code(&mut self, code: &str) -> Result<&Template, TemplateError> {
        let encoded = code
            .trim()
            .strip_prefix(SHARE_CODE_PREFIX)
            .ok_or(TemplateError::ShareCodePrefix)?;
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|source| TemplateError::ShareCodeBase64 { source })?;
        let blob =
            String::from_utf8(bytes).map_err(|source| TemplateError::ShareCodeUtf8 { source })?;
        self.import(&blob)
    }

    pub fn remove(&mut self, template_id: &TemplateId) -> bool {
        self.templates.remove(template_id).is_some()
    }

    /// Serializes the whole store for persistence. Ids and timestamps survive
    /// a [`TemplateStore::from_json`] round trip unchanged; re-minting only
    /// applies to foreign blobs coming through import.
    pub fn to_json(&self) -> Result<String, TemplateError> {
        json::templates_to_json(self.templates.values())
            .map_err(|source| TemplateError::Json { source })
    }

    pub fn from_json(blob: &str) -> Result<Self, TemplateError> {
        let templates = json::templates_from_json(blob).map_err(import_error)?;
        let mut store = Self::new();
        for template in templates {
            store
                .templates
                .insert(template.template_id.clone(), template);
        }
        Ok(store)
    }

    /// Inserts `template` under a freshly minted id and current timestamp.
    fn admit(&mut self, template: Template) -> &Template {
        let template_id = self.mint_template_id();
        let template = Template {
            template_id: template_id.clone(),
            created_at_ms: now_ms(),
            ..template
        };
        self.templates.insert(template_id.clone(), template);
        self.templates
            .get(&template_id)
            .expect("template inserted above")
    }

    /// Ids are `tpl-<unix millis>-<seq>`; the sequence number disambiguates
    /// exports landing on the same millisecond. Skips occupied ids, which can
    /// appear after a store reload.
    fn mint_template_id(&mut self) -> TemplateId {
        let millis = now_ms();
        loop {
            let seq = self.seq;
            self.seq = self.seq.saturating_add(1);
            let candidate = TemplateId::new(format!("tpl-{millis}-{seq}"))
                .expect("minted template id should be valid");
            if !self.templates.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn import_error(source: DecodeError) -> TemplateError {
    match source {
        DecodeError::Json { source } => TemplateError::Json { source },
        DecodeError::MissingField { field } => TemplateError::MissingField { field },
        other => TemplateError::Decode { source: other },
    }
}

#[derive(Debug)]
pub enum TemplateError {
    Json {
        source: serde_json::Error,
    },
    MissingField {
        field: &'static str,
    },
    Decode {
        source: DecodeError,
    },
    ShareCodePrefix,
    ShareCodeBase64 {
        source: base64::DecodeError,
    },
    ShareCodeUtf8 {
        source: std::string::FromUtf8Error,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "malformed template json: {source}"),
            Self::MissingField { field } => {
                write!(f, "template is missing required field {field}")
            }
            Self::Decode { source } => write!(f, "invalid template body: {source}"),
            Self::ShareCodePrefix => {
                write!(f, "share code does not start with {SHARE_CODE_PREFIX:?}")
            }
            Self::ShareCodeBase64 { source } => write!(f, "share code is not base64: {source}"),
            Self::ShareCodeUtf8 { source } => write!(f, "share code payload is not utf-8: {source}"),
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::Decode { source } => Some(source),
            Self::ShareCodeBase64 { source } => Some(source),
            Self::ShareCodeUtf8 { source } => Some(source),
            Self::MissingField { .. } | Self::ShareCodePrefix => None,
        }
    }
}

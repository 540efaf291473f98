// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading fragment groups from JSON.
//!
//! Two shapes are accepted: a full document
//! `{"config": {...}, "groups": [[...], ...]}`, or a bare array of groups,
//! which renders with the default configuration.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::types::Fragment;

/// Fragment groups plus the configuration to render them with.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputDocument {
    #[serde(default)]
    pub config: GeneratorConfig,
    pub groups: Vec<Vec<Fragment>>,
}

/// Error type for input loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: String, message: String },
    /// The contents are not a valid input document.
    Json { message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, message } => write!(f, "Failed to read {}: {}", path, message),
            LoadError::Json { message } => write!(f, "Invalid input JSON: {}", message),
        }
    }
}

impl std::error::Error for LoadError {}

#[derive(Deserialize)]
#[serde(untagged)]
enum InputShape {
    Document(InputDocument),
    Groups(Vec<Vec<Fragment>>),
}

/// Parse an input document from JSON text.
pub fn parse_document(json: &str) -> Result<InputDocument, LoadError> {
    let shape: InputShape = serde_json::from_str(json).map_err(|e| LoadError::Json {
        message: e.to_string(),
    })?;
    Ok(match shape {
        InputShape::Document(document) => document,
        InputShape::Groups(groups) => InputDocument {
            config: GeneratorConfig::default(),
            groups,
        },
    })
}

/// Read and parse an input document.
pub fn load_document(path: &Path) -> Result<InputDocument, LoadError> {
    let json = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_document(&json)
}

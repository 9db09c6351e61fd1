//! Orbit content datasets.
//!
//! A dataset is the ordered list of node descriptors shown around one orbit.
//! The engine never looks inside a descriptor beyond formatting the panel
//! header; everything else is display data for the render layer.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

/// Nodes per built-in dataset.
pub const NODE_COUNT: usize = 5;

const BUILTIN_JSON: &str = include_str!("../../assets/orbit_content.json");

/// One node's display payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NodeContent {
    pub number: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl NodeContent {
    /// Detail panel header, e.g. `"2. Humidity Control"`.
    pub fn header(&self) -> String {
        format!("{}. {} {}", self.number, self.title, self.subtitle)
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset `{0}` is empty")]
    EmptyDataset(String),
}

/// Datasets keyed by domain ("algae", "mushroom", "plant").
#[derive(Debug, Clone, Default)]
pub struct ContentLibrary {
    datasets: BTreeMap<String, Vec<NodeContent>>,
}

impl ContentLibrary {
    /// The site's three built-in datasets.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_JSON) {
            Ok(lib) => lib,
            Err(e) => {
                log::error!("built-in orbit content is malformed: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let datasets: BTreeMap<String, Vec<NodeContent>> = serde_json::from_str(text)?;
        if let Some((key, _)) = datasets.iter().find(|(_, nodes)| nodes.is_empty()) {
            return Err(ContentError::EmptyDataset(key.clone()));
        }
        Ok(Self { datasets })
    }

    pub fn get(&self, key: &str) -> Option<&[NodeContent]> {
        self.datasets.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

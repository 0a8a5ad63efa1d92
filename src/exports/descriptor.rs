//! Exporter descriptor types and the declaration contract shape

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contract version understood by this aggregator. Contributions declaring
/// any other value are dropped whole, never silently accepted.
pub const SUPPORTED_API: u32 = 1;

/// Exporter machine names: letters, digits, underscore, hyphen.
pub static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("id pattern is a valid regex"));

/// A named, instantiable export target declared by a provider.
///
/// Identity within the combined registry is `(provider, id)`; descriptors are
/// never deduplicated across providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExporterDescriptor {
    /// Machine name, unique within the declaring provider's namespace.
    pub id: String,
    /// Key the resolver uses to pick a factory for this exporter.
    pub implementation_ref: String,
    /// Ordered arguments handed to the factory on instantiation.
    #[serde(default)]
    pub constructor_args: Vec<Value>,
    /// Human-readable name for admin listings.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ExporterDescriptor {
    pub fn new(id: impl Into<String>, implementation_ref: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            implementation_ref: implementation_ref.into(),
            constructor_args: Vec::new(),
            display_name: None,
            description: None,
        }
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.constructor_args = args;
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One provider's declaration: the contract version it targets plus the
/// exporters it contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub api: u32,
    pub exports: Vec<ExporterDescriptor>,
}

impl Contribution {
    /// Declaration targeting the current contract version.
    pub fn v1(exports: Vec<ExporterDescriptor>) -> Self {
        Self {
            api: SUPPORTED_API,
            exports,
        }
    }
}

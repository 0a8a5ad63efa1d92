//! Central aggregator for exporter declarations

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::exports::descriptor::{ExporterDescriptor, ID_PATTERN, SUPPORTED_API};
use crate::exports::error::RegistryError;
use crate::exports::provider::ExportProvider;
use crate::exports::validator::{self, ValidationResult};

/// Combined mapping of provider name -> exporter id -> descriptor.
///
/// This is the mutable handle alteration passes receive; there is no
/// ownership enforcement, any pass may touch any entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedRegistry {
    exports: HashMap<String, HashMap<String, ExporterDescriptor>>,
}

impl CombinedRegistry {
    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }

    pub fn provider_exports(&self, provider: &str) -> Option<&HashMap<String, ExporterDescriptor>> {
        self.exports.get(provider)
    }

    pub fn descriptor(&self, provider: &str, id: &str) -> Option<&ExporterDescriptor> {
        self.exports.get(provider).and_then(|entries| entries.get(id))
    }

    pub fn descriptor_mut(&mut self, provider: &str, id: &str) -> Option<&mut ExporterDescriptor> {
        self.exports
            .get_mut(provider)
            .and_then(|entries| entries.get_mut(id))
    }

    /// Insert under `(provider, descriptor.id)`, returning the descriptor it
    /// displaced. Last declaration wins.
    pub fn insert(
        &mut self,
        provider: &str,
        descriptor: ExporterDescriptor,
    ) -> Option<ExporterDescriptor> {
        self.exports
            .entry(provider.to_string())
            .or_default()
            .insert(descriptor.id.clone(), descriptor)
    }

    pub fn remove(&mut self, provider: &str, id: &str) -> Option<ExporterDescriptor> {
        let entries = self.exports.get_mut(provider)?;
        let removed = entries.remove(id);
        if entries.is_empty() {
            self.exports.remove(provider);
        }
        removed
    }

    /// Every `(provider, id, descriptor)` entry, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &ExporterDescriptor)> {
        self.exports.iter().flat_map(|(provider, entries)| {
            entries
                .iter()
                .map(move |(id, descriptor)| (provider.as_str(), id.as_str(), descriptor))
        })
    }

    /// Total descriptor count across all providers.
    pub fn len(&self) -> usize {
        self.exports.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    /// Re-check contract invariants after alteration.
    ///
    /// Alteration passes may mutate any field, including `id`, so a pass can
    /// leave an entry whose `id` disagrees with its map key or no longer
    /// matches the machine-name pattern. Collection never produces either.
    pub fn lint(&self) -> ValidationResult {
        let mut result = ValidationResult::new();

        for (provider, id, descriptor) in self.iter() {
            if descriptor.id != id {
                result.add_warning(format!(
                    "entry '{provider}/{id}' carries mismatched id '{}' after alteration",
                    descriptor.id
                ));
            }
            if !ID_PATTERN.is_match(&descriptor.id) {
                result.add_error(format!(
                    "entry '{provider}/{id}' has a malformed id '{}' after alteration",
                    descriptor.id
                ));
            }
            if descriptor.implementation_ref.trim().is_empty() {
                result.add_error(format!(
                    "entry '{provider}/{id}' lost its implementation reference after alteration"
                ));
            }
        }

        result
    }
}

/// A contribution, entry, or alteration pass dropped during aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub provider: String,
    /// Set when a single descriptor was dropped; `None` when the whole
    /// contribution or an alteration pass was.
    pub id: Option<String>,
    pub error: RegistryError,
}

/// Finalized output of a registry build: the combined mapping plus every
/// rejection recorded along the way. Partial failure is observable, never
/// silent.
#[derive(Debug, Clone)]
pub struct Collection {
    pub exports: CombinedRegistry,
    pub rejections: Vec<Rejection>,
}

/// Central registry of export providers.
///
/// Providers live in an explicit ordered list; registration order is the
/// precedence order for collection and alteration, so the last registered
/// provider wins any contested alteration.
pub struct ExportRegistry {
    providers: Vec<Box<dyn ExportProvider>>,
}

impl ExportRegistry {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the builtin provider pre-registered.
    pub fn with_core_providers() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::exports::core::CoreProvider));
        registry
    }

    pub fn register(&mut self, provider: Box<dyn ExportProvider>) {
        debug!(provider = provider.name(), "registering export provider");
        self.providers.push(provider);
    }

    /// Provider names in precedence order (registration order).
    pub fn precedence(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Invoke every provider's declaration callback and fold the results.
    ///
    /// A contribution targeting an unsupported contract version is dropped
    /// whole; a single malformed descriptor is dropped on its own with its
    /// siblings retained. Duplicate ids within one contribution overwrite,
    /// last declaration wins. No side effects beyond the provider callbacks,
    /// so two collections over the same providers are structurally identical.
    pub fn collect(&self) -> Collection {
        let mut exports = CombinedRegistry::default();
        let mut rejections = Vec::new();

        for provider in &self.providers {
            let name = provider.name();
            let contribution = provider.declare_exports();

            if contribution.api != SUPPORTED_API {
                let error = RegistryError::ContractVersionUnsupported {
                    provider: name.to_string(),
                    api: contribution.api,
                    supported: SUPPORTED_API,
                };
                warn!(provider = name, "dropping contribution: {}", error);
                rejections.push(Rejection {
                    provider: name.to_string(),
                    id: None,
                    error,
                });
                continue;
            }

            for descriptor in contribution.exports {
                if let Err(source) = validator::validate_descriptor(&descriptor) {
                    warn!(
                        provider = name,
                        id = %descriptor.id,
                        "dropping exporter: {}",
                        source
                    );
                    rejections.push(Rejection {
                        provider: name.to_string(),
                        id: Some(descriptor.id.clone()),
                        error: RegistryError::InvalidExporterDescriptor {
                            provider: name.to_string(),
                            id: descriptor.id,
                            source,
                        },
                    });
                    continue;
                }

                if let Some(previous) = exports.insert(name, descriptor) {
                    debug!(
                        provider = name,
                        id = %previous.id,
                        "exporter redeclared within contribution, last declaration wins"
                    );
                }
            }
        }

        Collection {
            exports,
            rejections,
        }
    }

    /// Run every provider's alteration pass over the combined mapping, in
    /// precedence order.
    ///
    /// Best-effort: a pass returning `Err` is skipped and recorded; later
    /// passes still run, so one misbehaving provider cannot veto the rest.
    pub fn alter(&self, exports: &mut CombinedRegistry) -> Vec<Rejection> {
        let mut failures = Vec::new();

        for provider in &self.providers {
            let name = provider.name();
            if let Err(source) = provider.alter_exports(exports) {
                warn!(provider = name, "skipping alteration pass: {}", source);
                failures.push(Rejection {
                    provider: name.to_string(),
                    id: None,
                    error: RegistryError::AlterationFailure {
                        provider: name.to_string(),
                        source,
                    },
                });
            }
        }

        failures
    }

    /// Collect, then alter: the finalized registry a consumer hands to the
    /// resolver.
    pub fn build(&self) -> Collection {
        debug!(precedence = ?self.precedence(), "building export registry");

        let mut collection = self.collect();
        let failures = self.alter(&mut collection.exports);
        collection.rejections.extend(failures);

        let lint = collection.exports.lint();
        if !lint.passed {
            warn!(errors = ?lint.errors, "combined registry failed post-alteration lint");
        }

        collection
    }
}

impl Default for ExportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

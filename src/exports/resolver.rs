//! Resolution of implementation references into live exporters

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::exports::descriptor::ExporterDescriptor;
use crate::exports::error::{ExportError, ResolveError};
use crate::exports::registry::CombinedRegistry;

/// A live export target constructed from a finalized descriptor.
pub trait Exporter: Send + Sync {
    /// Machine name this exporter was declared under.
    fn machine_name(&self) -> &str;

    /// Human-readable name for admin listings.
    fn display_name(&self) -> &str;

    /// Turn one content record into a feed document.
    fn export(&self, record: &Value) -> Result<Value, ExportError>;
}

/// Constructor for an exporter implementation. Receives the finalized
/// descriptor, including its ordered constructor arguments.
pub type ExporterFactory =
    Box<dyn Fn(&ExporterDescriptor) -> Result<Box<dyn Exporter>, ResolveError> + Send + Sync>;

/// Maps `implementation_ref` keys to exporter factories.
///
/// Instantiation sits outside the declaration contract proper: providers
/// declare string references, and the host wires each reference to a factory
/// here before resolving descriptors from a finalized registry.
#[derive(Default)]
pub struct ResolverRegistry {
    factories: HashMap<String, ExporterFactory>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a resolver with the builtin implementations pre-registered.
    pub fn with_core_factories() -> Self {
        let mut resolver = Self::new();
        resolver.register(
            crate::exports::core::article::ARTICLE_IMPLEMENTATION,
            Box::new(|descriptor| {
                Ok(Box::new(
                    crate::exports::core::article::ArticleExporter::from_descriptor(descriptor)?,
                ))
            }),
        );
        resolver
    }

    pub fn register(&mut self, implementation_ref: impl Into<String>, factory: ExporterFactory) {
        let implementation_ref = implementation_ref.into();
        debug!(%implementation_ref, "registering exporter factory");
        self.factories.insert(implementation_ref, factory);
    }

    pub fn implementations(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Resolve `(provider, id)` from the finalized registry into a live
    /// exporter.
    pub fn instantiate(
        &self,
        exports: &CombinedRegistry,
        provider: &str,
        id: &str,
    ) -> Result<Box<dyn Exporter>, ResolveError> {
        let descriptor =
            exports
                .descriptor(provider, id)
                .ok_or_else(|| ResolveError::ExporterNotFound {
                    provider: provider.to_string(),
                    id: id.to_string(),
                })?;

        let factory = self
            .factories
            .get(&descriptor.implementation_ref)
            .ok_or_else(|| ResolveError::ImplementationNotFound {
                implementation_ref: descriptor.implementation_ref.clone(),
            })?;

        factory(descriptor)
    }
}

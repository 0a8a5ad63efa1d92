//! Pressfeed - exporter plugin registry for publishing-feed integrations
//!
//! Feature modules declare named exporters (a machine name, an implementation
//! reference, ordered constructor arguments). The registry aggregates every
//! declaration, lets each provider rework the combined result in a stable,
//! inspectable precedence order, and resolves finalized descriptors into live
//! exporters.

pub mod exports;

pub use exports::{
    Collection, CombinedRegistry, Contribution, ExportProvider, ExportRegistry, Exporter,
    ExporterDescriptor, Rejection, ResolverRegistry, SUPPORTED_API,
};

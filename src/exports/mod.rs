//! Exporter declaration, aggregation, and resolution

pub mod core;
pub mod descriptor;
pub mod error;
pub mod provider;
pub mod registry;
pub mod resolver;
pub mod validator;

// Re-export commonly used types
pub use descriptor::{Contribution, ExporterDescriptor, SUPPORTED_API};
pub use error::{AlterError, ExportError, RegistryError, ResolveError, ValidationError};
pub use provider::ExportProvider;
pub use registry::{Collection, CombinedRegistry, ExportRegistry, Rejection};
pub use resolver::{Exporter, ExporterFactory, ResolverRegistry};

use thiserror::Error;

/// Errors recorded while aggregating provider declarations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("unsupported contract version {api} from provider '{provider}' (supported: {supported})")]
    ContractVersionUnsupported {
        provider: String,
        api: u32,
        supported: u32,
    },

    #[error("invalid exporter descriptor '{id}' from provider '{provider}': {source}")]
    InvalidExporterDescriptor {
        provider: String,
        id: String,
        source: ValidationError,
    },

    #[error("alteration pass by provider '{provider}' failed: {source}")]
    AlterationFailure {
        provider: String,
        source: AlterError,
    },
}

/// Errors that can occur during descriptor validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("id '{id}' does not match the exporter machine-name pattern")]
    MalformedId { id: String },

    #[error("missing implementation reference")]
    MissingImplementationRef,
}

/// Failure raised by a provider's alteration pass
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct AlterError {
    message: String,
}

impl AlterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur while resolving a descriptor into a live exporter
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no exporter '{id}' declared by provider '{provider}'")]
    ExporterNotFound { provider: String, id: String },

    #[error("no factory registered for implementation '{implementation_ref}'")]
    ImplementationNotFound { implementation_ref: String },

    #[error("constructing '{id}' via '{implementation_ref}' failed: {reason}")]
    ConstructionFailed {
        id: String,
        implementation_ref: String,
        reason: String,
    },
}

/// Errors that can occur while exporting a content record
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("content record is missing required field '{field}'")]
    MissingField { field: String },

    #[error("content record is not an object")]
    NotAnObject,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

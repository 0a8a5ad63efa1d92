//! Article exporter - turns article records into feed documents

use serde_json::{json, Value};

use crate::exports::descriptor::ExporterDescriptor;
use crate::exports::error::{ExportError, ResolveError};
use crate::exports::resolver::Exporter;

/// Implementation reference the article factory is registered under.
pub const ARTICLE_IMPLEMENTATION: &str = "pressfeed::article";

/// Exports article records as title/body feed documents.
///
/// The first constructor argument names the layout applied to the document;
/// it defaults to `"default"` when absent.
pub struct ArticleExporter {
    machine_name: String,
    display_name: String,
    layout: String,
}

impl ArticleExporter {
    pub fn from_descriptor(descriptor: &ExporterDescriptor) -> Result<Self, ResolveError> {
        let layout = match descriptor.constructor_args.first() {
            None => "default".to_string(),
            Some(Value::String(layout)) => layout.clone(),
            Some(other) => {
                return Err(ResolveError::ConstructionFailed {
                    id: descriptor.id.clone(),
                    implementation_ref: descriptor.implementation_ref.clone(),
                    reason: format!("layout argument must be a string, got {other}"),
                })
            }
        };

        Ok(Self {
            machine_name: descriptor.id.clone(),
            display_name: descriptor
                .display_name
                .clone()
                .unwrap_or_else(|| descriptor.id.clone()),
            layout,
        })
    }
}

impl Exporter for ArticleExporter {
    fn machine_name(&self) -> &str {
        &self.machine_name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn export(&self, record: &Value) -> Result<Value, ExportError> {
        let record = record.as_object().ok_or(ExportError::NotAnObject)?;

        let identifier = record
            .get("id")
            .ok_or_else(|| ExportError::MissingField {
                field: "id".to_string(),
            })?
            .clone();

        let title = record
            .get("title")
            .and_then(Value::as_str)
            .ok_or_else(|| ExportError::MissingField {
                field: "title".to_string(),
            })?;

        let body = record.get("body").and_then(Value::as_str).unwrap_or("");

        Ok(json!({
            "identifier": identifier,
            "title": title,
            "layout": self.layout,
            "components": [
                { "role": "title", "text": title },
                { "role": "body", "text": body },
            ],
        }))
    }
}

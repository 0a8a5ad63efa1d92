//! Builtin exporters shipped with the crate

pub mod article;

use serde_json::json;

use crate::exports::descriptor::{Contribution, ExporterDescriptor};
use crate::exports::provider::ExportProvider;

/// The crate's own provider, declaring the default exports.
pub struct CoreProvider;

impl ExportProvider for CoreProvider {
    fn name(&self) -> &'static str {
        "pressfeed"
    }

    fn declare_exports(&self) -> Contribution {
        Contribution::v1(vec![ExporterDescriptor::new(
            "article",
            article::ARTICLE_IMPLEMENTATION,
        )
        .with_args(vec![json!("default")])
        .with_display_name("Articles")
        .with_description("Export articles as defined by the default install profile.")])
    }
}

//! Descriptor validation

use tracing::debug;

use crate::exports::descriptor::{ExporterDescriptor, ID_PATTERN};
use crate::exports::error::ValidationError;

/// Check a single descriptor against the declaration contract.
///
/// A failing descriptor is dropped from the collection on its own; siblings
/// from the same contribution are unaffected.
pub fn validate_descriptor(descriptor: &ExporterDescriptor) -> Result<(), ValidationError> {
    if !ID_PATTERN.is_match(&descriptor.id) {
        return Err(ValidationError::MalformedId {
            id: descriptor.id.clone(),
        });
    }

    if descriptor.implementation_ref.trim().is_empty() {
        return Err(ValidationError::MissingImplementationRef);
    }

    Ok(())
}

/// Carrier for post-alteration lint findings
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub passed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        debug!("Validation error: {}", error);
        self.errors.push(error);
        self.passed = false;
    }

    pub fn add_warning(&mut self, warning: String) {
        debug!("Validation warning: {}", warning);
        self.warnings.push(warning);
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.passed {
            self.passed = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_machine_names() {
        for id in ["article", "front_page", "video-embed", "A1"] {
            let descriptor = ExporterDescriptor::new(id, "pressfeed::article");
            assert!(validate_descriptor(&descriptor).is_ok(), "rejected {id}");
        }
    }

    #[test]
    fn rejects_malformed_id() {
        let descriptor = ExporterDescriptor::new("bad id!", "pressfeed::article");
        assert_eq!(
            validate_descriptor(&descriptor),
            Err(ValidationError::MalformedId {
                id: "bad id!".to_string()
            })
        );
    }

    #[test]
    fn rejects_empty_id() {
        let descriptor = ExporterDescriptor::new("", "pressfeed::article");
        assert!(matches!(
            validate_descriptor(&descriptor),
            Err(ValidationError::MalformedId { .. })
        ));
    }

    #[test]
    fn rejects_blank_implementation_ref() {
        let descriptor = ExporterDescriptor::new("article", "  ");
        assert_eq!(
            validate_descriptor(&descriptor),
            Err(ValidationError::MissingImplementationRef)
        );
    }

    proptest! {
        #[test]
        fn accepts_every_id_in_pattern(id in "[A-Za-z0-9_-]{1,32}") {
            let descriptor = ExporterDescriptor::new(id, "pressfeed::article");
            prop_assert!(validate_descriptor(&descriptor).is_ok());
        }

        #[test]
        fn rejects_ids_with_forbidden_characters(
            prefix in "[A-Za-z0-9_-]{0,8}",
            bad in "[ !@#$%^&*()+=/\\\\.]",
            suffix in "[A-Za-z0-9_-]{0,8}",
        ) {
            let descriptor =
                ExporterDescriptor::new(format!("{prefix}{bad}{suffix}"), "pressfeed::article");
            let rejected = matches!(
                validate_descriptor(&descriptor),
                Err(ValidationError::MalformedId { .. })
            );
            prop_assert!(rejected, "accepted id {:?}", descriptor.id);
        }
    }
}

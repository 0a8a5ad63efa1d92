//! Provider extension point

use crate::exports::descriptor::Contribution;
use crate::exports::error::AlterError;
use crate::exports::registry::CombinedRegistry;

/// Inbound extension point: a feature module contributing exporter
/// declarations to the combined registry.
///
/// Providers are held in an explicit ordered list by [`ExportRegistry`];
/// registration order is the precedence order for both collection and
/// alteration.
///
/// [`ExportRegistry`]: crate::exports::registry::ExportRegistry
pub trait ExportProvider: Send + Sync {
    /// Provider name, used as the namespace for its exporter ids.
    fn name(&self) -> &'static str;

    /// Declare this provider's exporters.
    fn declare_exports(&self) -> Contribution;

    /// Rework the combined registry after every declaration was collected.
    ///
    /// The pass receives the entire combined mapping and may mutate any
    /// entry, including ones this provider does not own; on a contested
    /// field the last registered provider wins. Returning `Err` skips this
    /// pass only, later passes still run.
    fn alter_exports(&self, _exports: &mut CombinedRegistry) -> Result<(), AlterError> {
        Ok(())
    }
}

/// `--brightness` / `--get-brightness`: brightness operations.
use crate::cli::Printer;
use crate::monitor::{Handle, MonitorError, Registry, Setting, control};

/// Set brightness on every monitor in the registry (a single entry when a
/// monitor was selected).
///
/// # Errors
///
/// Returns the first per-monitor failure after all entries were attempted.
pub fn set(registry: &Registry<Handle>, level: u32) -> Result<(), MonitorError> {
    super::apply_level(registry, Setting::Brightness, level)
}

/// Read the current brightness of the selected monitor. The registry was
/// filtered to one entry before this runs.
///
/// # Errors
///
/// Returns `MonitorError::QueryFailed` when the hardware query fails.
pub fn get(registry: &Registry<Handle>, printer: &mut Printer) -> Result<(), MonitorError> {
    for (_, handle) in registry.entries() {
        let range = control::get(handle, Setting::Brightness)?;
        printer.brightness(range.current);
    }
    Ok(())
}

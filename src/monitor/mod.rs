/// Public API for monitor discovery and control.
pub mod control;
// Pure resolution logic; only the Windows build feeds it live data.
#[cfg_attr(not(windows), allow(dead_code))]
pub mod discover;
pub mod errors;
pub mod registry;

pub use control::{ControlChannel, Setting, ValueRange};
pub use errors::MonitorError;
pub use registry::Registry;

/// The platform control handle type held by the registry.
#[cfg(windows)]
pub type Handle = crate::win32::PhysicalHandle;

/// Build the registry of currently attached, controllable monitors.
///
/// Walks the logical display outputs for control handles, walks the
/// adapter/display devices for persistent identities, and resolves the two
/// into one registry. Each call acquires fresh handles; the previous
/// registry must be dropped (or disposed) first, which releases the handles
/// it held.
///
/// # Errors
///
/// Returns `MonitorError::Enumeration` when the output walk fails as a
/// whole. Individual malfunctioning outputs are skipped with a warning.
#[cfg(windows)]
pub fn discover() -> Result<Registry<Handle>, MonitorError> {
    let outputs = crate::win32::enumerate_outputs()?;
    let devices = crate::win32::enumerate_display_devices();
    Ok(discover::resolve_identities(outputs, &devices))
}

/// Stub handle for platforms without the Windows monitor configuration API.
/// Never constructed; [`discover`] fails before any handle exists.
#[cfg(not(windows))]
#[derive(Debug)]
#[allow(dead_code)]
pub struct Handle {}

#[cfg(not(windows))]
impl ControlChannel for Handle {
    fn query(&self, setting: Setting) -> Result<ValueRange, MonitorError> {
        Err(MonitorError::QueryFailed {
            setting,
            reason: "monitor control is only supported on Windows".to_owned(),
        })
    }

    fn write(&self, setting: Setting, _level: u32) -> Result<(), MonitorError> {
        Err(MonitorError::WriteFailed {
            setting,
            reason: "monitor control is only supported on Windows".to_owned(),
        })
    }
}

/// See the Windows implementation above.
///
/// # Errors
///
/// Always fails on non-Windows platforms.
#[cfg(not(windows))]
pub fn discover() -> Result<Registry<Handle>, MonitorError> {
    Err(MonitorError::Enumeration {
        reason: "the Windows monitor configuration API is unavailable on this platform".to_owned(),
    })
}

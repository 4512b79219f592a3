/// Owned handle to the DDC/CI channel of one physical monitor.
use windows::Win32::Devices::Display::{
    DestroyPhysicalMonitor, GetMonitorBrightness, GetMonitorContrast, SetMonitorBrightness,
    SetMonitorContrast,
};
use windows::Win32::Foundation::{FALSE, HANDLE};

use super::last_error_message;
use crate::monitor::{ControlChannel, MonitorError, Setting, ValueRange};

/// A physical monitor handle from `GetPhysicalMonitorsFromHMONITOR`.
///
/// Released via `DestroyPhysicalMonitor` on drop, so every acquisition is
/// paired with exactly one release even on early error paths.
#[derive(Debug)]
pub struct PhysicalHandle {
    raw: HANDLE,
}

impl PhysicalHandle {
    /// Take ownership of a raw physical monitor handle. `raw` must come
    /// from `GetPhysicalMonitorsFromHMONITOR` and must not be destroyed
    /// elsewhere.
    pub(crate) fn new(raw: HANDLE) -> Self {
        Self { raw }
    }
}

impl Drop for PhysicalHandle {
    fn drop(&mut self) {
        // SAFETY: `raw` was acquired from GetPhysicalMonitorsFromHMONITOR
        // and this is its single release.
        unsafe {
            let _ = DestroyPhysicalMonitor(self.raw);
        }
    }
}

impl ControlChannel for PhysicalHandle {
    fn query(&self, setting: Setting) -> Result<ValueRange, MonitorError> {
        let mut minimum = 0u32;
        let mut current = 0u32;
        let mut maximum = 0u32;

        // SAFETY: `raw` is a live physical monitor handle and the three
        // out-pointers are valid for the duration of the call.
        let ok = unsafe {
            match setting {
                Setting::Brightness => {
                    GetMonitorBrightness(self.raw, &mut minimum, &mut current, &mut maximum)
                }
                Setting::Contrast => {
                    GetMonitorContrast(self.raw, &mut minimum, &mut current, &mut maximum)
                }
            }
        };
        if ok == FALSE.0 {
            return Err(MonitorError::QueryFailed {
                setting,
                reason: last_error_message(),
            });
        }

        Ok(ValueRange {
            minimum,
            maximum,
            current,
        })
    }

    fn write(&self, setting: Setting, level: u32) -> Result<(), MonitorError> {
        // SAFETY: `raw` is a live physical monitor handle.
        let ok = unsafe {
            match setting {
                Setting::Brightness => SetMonitorBrightness(self.raw, level),
                Setting::Contrast => SetMonitorContrast(self.raw, level),
            }
        };
        if ok == FALSE.0 {
            return Err(MonitorError::WriteFailed {
                setting,
                reason: last_error_message(),
            });
        }
        Ok(())
    }
}

/// Logical display output enumeration and physical handle acquisition.
use std::{mem, ptr};

use tracing::{debug, warn};
use windows::Win32::Devices::Display::{
    GetNumberOfPhysicalMonitorsFromHMONITOR, GetPhysicalMonitorsFromHMONITOR, PHYSICAL_MONITOR,
};
use windows::Win32::Foundation::{BOOL, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW,
};

use super::{PhysicalHandle, wide_to_string};
use crate::monitor::MonitorError;
use crate::monitor::discover::RawOutput;

/// Enumerate all logical display outputs and the physical control handles
/// each one exposes.
///
/// A malfunctioning output is skipped with a warning so that one broken
/// display does not block control of the others; the error return is only
/// for the enumeration call itself failing.
///
/// # Errors
///
/// Returns `MonitorError::Enumeration` when `EnumDisplayMonitors` fails.
pub fn enumerate_outputs() -> Result<Vec<RawOutput<PhysicalHandle>>, MonitorError> {
    let mut outputs: Vec<RawOutput<PhysicalHandle>> = Vec::new();

    // SAFETY: the callback only runs within this call, and `outputs`
    // outlives it. Null HDC and clip rect enumerate every display monitor.
    unsafe {
        EnumDisplayMonitors(
            None,
            None,
            Some(enum_outputs_callback),
            LPARAM(ptr::addr_of_mut!(outputs) as isize),
        )
        .ok()
        .map_err(|e| MonitorError::Enumeration {
            reason: e.message(),
        })?;
    }

    Ok(outputs)
}

unsafe extern "system" fn enum_outputs_callback(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    data: LPARAM,
) -> BOOL {
    // SAFETY: `data` is the address of the Vec passed by `enumerate_outputs`.
    let outputs = unsafe { &mut *(data.0 as *mut Vec<RawOutput<PhysicalHandle>>) };

    match raw_output(hmonitor) {
        Ok(output) => outputs.push(output),
        Err(err) => warn!("skipping display output: {err}"),
    }

    // TRUE continues the enumeration.
    TRUE
}

/// Collect the physical control handles reachable from one output.
fn raw_output(hmonitor: HMONITOR) -> Result<RawOutput<PhysicalHandle>, MonitorError> {
    let device_name = output_device_name(hmonitor)?;

    let mut count = 0u32;
    // SAFETY: `hmonitor` is valid for the duration of the enumeration
    // callback; `count` is a valid out-pointer.
    unsafe {
        GetNumberOfPhysicalMonitorsFromHMONITOR(hmonitor, ptr::addr_of_mut!(count)).map_err(
            |e| MonitorError::Enumeration {
                reason: format!(
                    "failed to get physical monitor count for {device_name}: {}",
                    e.message()
                ),
            },
        )?;
    }

    // A count of zero is not an error: the output has no DDC/CI-capable
    // monitor attached and yields no handles.
    if count == 0 {
        debug!(device = %device_name, "output exposes no physical monitors");
        return Ok(RawOutput {
            device_name,
            handles: Vec::new(),
        });
    }

    // Size the buffer from the reported count. The call fills exactly
    // `count` entries; the single-monitor case is still 0-indexed, so a
    // count of one must not be special-cased.
    let mut physical = vec![PHYSICAL_MONITOR::default(); count as usize];
    // SAFETY: `physical` has exactly `count` elements for the API to fill.
    unsafe {
        GetPhysicalMonitorsFromHMONITOR(hmonitor, &mut physical).map_err(|e| {
            MonitorError::Enumeration {
                reason: format!(
                    "failed to get physical monitors for {device_name}: {}",
                    e.message()
                ),
            }
        })?;
    }

    let handles = physical
        .into_iter()
        .map(|p| PhysicalHandle::new(p.hPhysicalMonitor))
        .collect();

    Ok(RawOutput {
        device_name,
        handles,
    })
}

/// Transient device name of a logical output, e.g. `\\.\DISPLAY1`.
#[allow(clippy::cast_possible_truncation)]
fn output_device_name(hmonitor: HMONITOR) -> Result<String, MonitorError> {
    let mut info = MONITORINFOEXW::default();
    info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

    // SAFETY: `info` is a properly sized MONITORINFOEXW and the cast to
    // MONITORINFO matches the documented calling convention.
    unsafe {
        GetMonitorInfoW(hmonitor, ptr::addr_of_mut!(info).cast())
            .ok()
            .map_err(|e| MonitorError::Enumeration {
                reason: format!("failed to get monitor information: {}", e.message()),
            })?;
    }

    Ok(wide_to_string(&info.szDevice))
}

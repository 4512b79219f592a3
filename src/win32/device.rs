/// Adapter and display device enumeration.
use std::{mem, ptr};

use windows::Win32::Graphics::Gdi::{
    DISPLAY_DEVICE_ATTACHED_TO_DESKTOP, DISPLAY_DEVICE_MIRRORING_DRIVER, DISPLAY_DEVICEW,
    EnumDisplayDevicesW,
};
use windows::core::PCWSTR;

use super::wide_to_string;
use crate::monitor::discover::DisplayDeviceRecord;

/// Walk every display adapter and, per adapter, the display devices attached
/// to it. Each record carries the transient device name used for matching
/// against logical outputs (`\\.\DISPLAY1\Monitor0`) and the persistent
/// device ID that becomes the monitor's public identity.
#[must_use]
pub fn enumerate_display_devices() -> Vec<DisplayDeviceRecord> {
    let mut records = Vec::new();

    let mut adapter_index = 0u32;
    loop {
        let mut adapter = display_device();
        // SAFETY: `adapter.cb` is initialized; a null device name walks the
        // adapter list.
        let found = unsafe {
            EnumDisplayDevicesW(PCWSTR::null(), adapter_index, ptr::addr_of_mut!(adapter), 0)
        };
        if !found.as_bool() {
            break;
        }
        adapter_index += 1;

        // Mirroring is flagged on the adapter, not on its monitor records.
        let mirroring = adapter.StateFlags & DISPLAY_DEVICE_MIRRORING_DRIVER != 0;

        let mut monitor_index = 0u32;
        loop {
            let mut device = display_device();
            // SAFETY: `adapter.DeviceName` is NUL-terminated and outlives
            // the call; `device.cb` is initialized.
            let found = unsafe {
                EnumDisplayDevicesW(
                    PCWSTR::from_raw(adapter.DeviceName.as_ptr()),
                    monitor_index,
                    ptr::addr_of_mut!(device),
                    0,
                )
            };
            if !found.as_bool() {
                break;
            }
            monitor_index += 1;

            records.push(DisplayDeviceRecord {
                device_name: wide_to_string(&device.DeviceName),
                device_id: wide_to_string(&device.DeviceID),
                attached: device.StateFlags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP != 0,
                mirroring,
            });
        }
    }

    records
}

#[allow(clippy::cast_possible_truncation)]
fn display_device() -> DISPLAY_DEVICEW {
    DISPLAY_DEVICEW {
        cb: mem::size_of::<DISPLAY_DEVICEW>() as u32,
        ..Default::default()
    }
}

/// Identity resolution: reconcile the two OS enumerations into a registry.
///
/// The window subsystem hands out logical output handles with transient
/// device names (`\\.\DISPLAY1`); the adapter/device enumeration hands out
/// display device records with both a transient name (`\\.\DISPLAY1\Monitor0`)
/// and a persistent device ID. The physical control handles come from the
/// first enumeration, the stable identities from the second; this module
/// matches them up by reconstructing the transient name each handle index
/// should have.
use tracing::{debug, warn};

use super::registry::Registry;

/// One logical display output and the physical control handles reachable
/// from it, in the index order the OS reported them. An output with no
/// controllable monitor attached carries an empty handle list; that is not
/// an error.
#[derive(Debug)]
pub struct RawOutput<H> {
    /// Transient output device name, e.g. `\\.\DISPLAY1`.
    pub device_name: String,
    /// Control handles for the physical monitors on this output.
    pub handles: Vec<H>,
}

/// One display device record from the adapter/device enumeration.
#[derive(Debug, Clone)]
pub struct DisplayDeviceRecord {
    /// Transient device name, e.g. `\\.\DISPLAY1\Monitor0`.
    pub device_name: String,
    /// Persistent device identifier, stable across runs.
    pub device_id: String,
    /// Whether the device is attached to the desktop.
    pub attached: bool,
    /// Whether the device belongs to a mirroring/virtual driver.
    pub mirroring: bool,
}

/// The transient device name the OS gives the monitor at `index` on the
/// output named `output_device`. Single-monitor outputs still index from
/// zero, so a count of one yields exactly `\Monitor0`.
#[must_use]
pub fn expected_device_name(output_device: &str, index: usize) -> String {
    format!("{output_device}\\Monitor{index}")
}

/// Bind each physical control handle to a persistent device identity.
///
/// For handle `i` of an output, the expected transient name is
/// `<output>\Monitor<i>`; an attached, non-mirroring record with that name
/// contributes its device ID as the identity. Handles with no matching
/// record cannot be addressed and are dropped (released on the spot), so
/// bulk operations skip unidentified monitors. Duplicate identities keep
/// the first binding.
pub fn resolve_identities<H>(
    outputs: Vec<RawOutput<H>>,
    devices: &[DisplayDeviceRecord],
) -> Registry<H> {
    let mut registry = Registry::new();

    for output in outputs {
        let device_name = output.device_name;
        for (index, handle) in output.handles.into_iter().enumerate() {
            let expected = expected_device_name(&device_name, index);
            let record = devices
                .iter()
                .find(|r| r.attached && !r.mirroring && r.device_name == expected);

            match record {
                Some(record) => {
                    debug!(
                        identity = %record.device_id,
                        device = %expected,
                        "resolved monitor identity"
                    );
                    if !registry.insert(record.device_id.clone(), handle) {
                        warn!(
                            identity = %record.device_id,
                            device = %expected,
                            "duplicate monitor identity, keeping first binding"
                        );
                    }
                }
                None => {
                    warn!(
                        device = %expected,
                        "no display device matches this control handle, dropping it"
                    );
                }
            }
        }
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(device_name: &str, device_id: &str) -> DisplayDeviceRecord {
        DisplayDeviceRecord {
            device_name: device_name.to_owned(),
            device_id: device_id.to_owned(),
            attached: true,
            mirroring: false,
        }
    }

    fn output(device_name: &str, handle_count: u32) -> RawOutput<u32> {
        RawOutput {
            device_name: device_name.to_owned(),
            handles: (0..handle_count).collect(),
        }
    }

    #[test]
    fn test_output_with_zero_handles_contributes_no_entries() {
        let outputs = vec![output(r"\\.\DISPLAY1", 0)];
        let devices = [record(r"\\.\DISPLAY1\Monitor0", "MONITOR\\A\\0001")];
        let registry = resolve_identities(outputs, &devices);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_single_handle_matches_monitor_zero() {
        // Regression for the single-monitor indexing quirk: a count of one
        // must pair the lone handle with index 0, not index 1.
        let outputs = vec![output(r"\\.\DISPLAY1", 1)];
        let devices = [record(r"\\.\DISPLAY1\Monitor0", "MONITOR\\A\\0001")];
        let registry = resolve_identities(outputs, &devices);
        assert_eq!(registry.list(), ["MONITOR\\A\\0001"]);
    }

    #[test]
    fn test_multi_head_output_binds_each_index() {
        let outputs = vec![output(r"\\.\DISPLAY1", 2)];
        let devices = [
            record(r"\\.\DISPLAY1\Monitor0", "MONITOR\\A\\0001"),
            record(r"\\.\DISPLAY1\Monitor1", "MONITOR\\B\\0002"),
        ];
        let registry = resolve_identities(outputs, &devices);
        assert_eq!(registry.len(), 2);
        let entries: Vec<_> = registry.entries().map(|(id, h)| (id.to_owned(), *h)).collect();
        assert!(entries.contains(&("MONITOR\\A\\0001".to_owned(), 0)));
        assert!(entries.contains(&("MONITOR\\B\\0002".to_owned(), 1)));
    }

    #[test]
    fn test_detached_and_mirroring_devices_are_excluded() {
        let outputs = vec![output(r"\\.\DISPLAY1", 1), output(r"\\.\DISPLAY2", 1)];
        let mut detached = record(r"\\.\DISPLAY1\Monitor0", "MONITOR\\A\\0001");
        detached.attached = false;
        let mut mirror = record(r"\\.\DISPLAY2\Monitor0", "MONITOR\\B\\0002");
        mirror.mirroring = true;
        let registry = resolve_identities(outputs, &[detached, mirror]);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unmatched_handle_is_dropped_silently() {
        let outputs = vec![output(r"\\.\DISPLAY1", 1), output(r"\\.\DISPLAY2", 1)];
        let devices = [record(r"\\.\DISPLAY2\Monitor0", "MONITOR\\B\\0002")];
        let registry = resolve_identities(outputs, &devices);
        assert_eq!(registry.list(), ["MONITOR\\B\\0002"]);
    }

    #[test]
    fn test_expected_device_name_convention() {
        assert_eq!(
            expected_device_name(r"\\.\DISPLAY1", 0),
            r"\\.\DISPLAY1\Monitor0"
        );
        assert_eq!(
            expected_device_name(r"\\.\DISPLAY3", 2),
            r"\\.\DISPLAY3\Monitor2"
        );
    }
}

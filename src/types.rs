/// Shared serializable output types.
///
/// In `--json` mode the whole invocation emits one object; only the keys
/// touched by the requested operations are present.
use serde::Serialize;

/// The structured report accumulated across the operations of one run.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// Identities of all discovered monitors, in listing order.
    #[serde(rename = "monitorList", skip_serializing_if = "Option::is_none")]
    pub monitor_list: Option<Vec<String>>,
    /// Current brightness of the selected monitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<u32>,
    /// Current contrast of the selected monitor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast: Option<u32>,
}

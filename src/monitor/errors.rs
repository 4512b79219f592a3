/// Errors from the monitor control layer.
use thiserror::Error;

use super::control::Setting;

/// Errors that can occur while discovering or controlling monitors.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Display enumeration failed as a whole. Per-output failures are only
    /// logged and skipped; this variant means no outputs could be walked.
    #[error("display enumeration failed: {reason}")]
    Enumeration {
        /// Description of the underlying OS failure.
        reason: String,
    },

    /// No monitor in the registry matches the requested identity.
    #[error("monitor '{identity}' doesn't exist")]
    MonitorNotFound {
        /// The identity that was searched.
        identity: String,
    },

    /// Requested level is below the minimum the hardware currently reports.
    #[error("{setting} level {level} deceeds minimum {minimum}")]
    BelowMinimum {
        /// Which setting was being adjusted.
        setting: Setting,
        /// The rejected level.
        level: u32,
        /// The hardware-reported minimum at the time of the call.
        minimum: u32,
    },

    /// Requested level is above the maximum the hardware currently reports.
    #[error("{setting} level {level} exceeds maximum {maximum}")]
    AboveMaximum {
        /// Which setting was being adjusted.
        setting: Setting,
        /// The rejected level.
        level: u32,
        /// The hardware-reported maximum at the time of the call.
        maximum: u32,
    },

    /// The DDC/CI query for a setting's range failed (unsupported feature,
    /// disconnected monitor, or an I/O error on the control bus).
    #[error("failed to get monitor {setting}: {reason}")]
    QueryFailed {
        /// Which setting was being queried.
        setting: Setting,
        /// Description of the underlying channel failure.
        reason: String,
    },

    /// The DDC/CI write failed after the level passed bounds validation.
    #[error("failed to set monitor {setting}: {reason}")]
    WriteFailed {
        /// Which setting was being written.
        setting: Setting,
        /// Description of the underlying channel failure.
        reason: String,
    },
}

/// Exit code mapping for `MonitorError` variants.
impl MonitorError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MonitorNotFound { .. } => 4,
            Self::BelowMinimum { .. } | Self::AboveMaximum { .. } => 3,
            Self::Enumeration { .. } | Self::QueryFailed { .. } | Self::WriteFailed { .. } => 1,
        }
    }
}

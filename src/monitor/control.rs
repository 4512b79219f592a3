/// Bounds-checked get/set of brightness and contrast over a control channel.
use std::fmt;

use super::errors::MonitorError;

/// A monitor setting addressable over DDC/CI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Brightness,
    Contrast,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brightness => f.write_str("brightness"),
            Self::Contrast => f.write_str("contrast"),
        }
    }
}

/// The range a monitor reports for one setting, plus its current value.
///
/// Always read fresh from hardware; never cached across operations, because
/// the bounds can change between calls and a set must validate against the
/// bounds current at the moment of the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    /// Hardware-reported minimum.
    pub minimum: u32,
    /// Hardware-reported maximum.
    pub maximum: u32,
    /// Current value.
    pub current: u32,
}

/// The DDC/CI control channel of one physical monitor.
///
/// Implemented by the Win32 physical monitor handle, and by fakes in tests.
pub trait ControlChannel {
    /// Query the range and current value of a setting.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::QueryFailed` when the channel call fails.
    fn query(&self, setting: Setting) -> Result<ValueRange, MonitorError>;

    /// Write a raw level for a setting. Callers must validate bounds first;
    /// use [`set`] rather than calling this directly.
    ///
    /// # Errors
    ///
    /// Returns `MonitorError::WriteFailed` when the channel call fails.
    fn write(&self, setting: Setting, level: u32) -> Result<(), MonitorError>;
}

/// Get the current range and value of a setting.
///
/// # Errors
///
/// Returns `MonitorError::QueryFailed` when the channel call fails.
pub fn get<C: ControlChannel>(channel: &C, setting: Setting) -> Result<ValueRange, MonitorError> {
    channel.query(setting)
}

/// Set a setting to `level`, validating against the bounds the hardware
/// reports right now. Read-then-validate-then-write: an out-of-range level is
/// rejected before any write is issued.
///
/// No retries here. The control bus is known to be flaky, but retry policy
/// belongs to the caller.
///
/// # Errors
///
/// Returns `MonitorError::QueryFailed` when the bounds query fails,
/// `MonitorError::BelowMinimum` / `MonitorError::AboveMaximum` when `level`
/// is outside the current bounds, and `MonitorError::WriteFailed` when the
/// write itself fails.
pub fn set<C: ControlChannel>(
    channel: &C,
    setting: Setting,
    level: u32,
) -> Result<(), MonitorError> {
    let range = channel.query(setting)?;

    if level < range.minimum {
        return Err(MonitorError::BelowMinimum {
            setting,
            level,
            minimum: range.minimum,
        });
    }
    if level > range.maximum {
        return Err(MonitorError::AboveMaximum {
            setting,
            level,
            maximum: range.maximum,
        });
    }

    channel.write(setting, level)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Simulated control channel backed by in-memory state.
    struct FakeChannel {
        brightness: Cell<ValueRange>,
        contrast: Cell<ValueRange>,
        writes: RefCell<Vec<(Setting, u32)>>,
        fail_query: bool,
        fail_write: bool,
    }

    impl FakeChannel {
        fn new() -> Self {
            let range = ValueRange {
                minimum: 0,
                maximum: 100,
                current: 50,
            };
            Self {
                brightness: Cell::new(range),
                contrast: Cell::new(range),
                writes: RefCell::new(Vec::new()),
                fail_query: false,
                fail_write: false,
            }
        }
    }

    impl ControlChannel for FakeChannel {
        fn query(&self, setting: Setting) -> Result<ValueRange, MonitorError> {
            if self.fail_query {
                return Err(MonitorError::QueryFailed {
                    setting,
                    reason: "simulated bus failure".to_owned(),
                });
            }
            Ok(match setting {
                Setting::Brightness => self.brightness.get(),
                Setting::Contrast => self.contrast.get(),
            })
        }

        fn write(&self, setting: Setting, level: u32) -> Result<(), MonitorError> {
            if self.fail_write {
                return Err(MonitorError::WriteFailed {
                    setting,
                    reason: "simulated bus failure".to_owned(),
                });
            }
            self.writes.borrow_mut().push((setting, level));
            let cell = match setting {
                Setting::Brightness => &self.brightness,
                Setting::Contrast => &self.contrast,
            };
            let mut range = cell.get();
            range.current = level;
            cell.set(range);
            Ok(())
        }
    }

    #[test]
    fn test_get_returns_current_range() {
        let channel = FakeChannel::new();
        let range = get(&channel, Setting::Brightness).unwrap();
        assert_eq!(range.minimum, 0);
        assert_eq!(range.maximum, 100);
        assert_eq!(range.current, 50);
    }

    #[test]
    fn test_set_within_bounds_issues_one_write() {
        let channel = FakeChannel::new();
        set(&channel, Setting::Brightness, 50).unwrap();
        assert_eq!(
            channel.writes.borrow().as_slice(),
            &[(Setting::Brightness, 50)]
        );
    }

    #[test]
    fn test_set_above_maximum_rejected_without_write() {
        let channel = FakeChannel::new();
        let err = set(&channel, Setting::Brightness, 150).unwrap_err();
        assert!(matches!(
            err,
            MonitorError::AboveMaximum {
                setting: Setting::Brightness,
                level: 150,
                maximum: 100,
            }
        ));
        assert!(err.to_string().contains("exceeds maximum"));
        assert!(channel.writes.borrow().is_empty());
    }

    #[test]
    fn test_set_below_minimum_rejected_without_write() {
        let channel = FakeChannel::new();
        channel.contrast.set(ValueRange {
            minimum: 10,
            maximum: 90,
            current: 40,
        });
        let err = set(&channel, Setting::Contrast, 5).unwrap_err();
        assert!(matches!(
            err,
            MonitorError::BelowMinimum {
                setting: Setting::Contrast,
                level: 5,
                minimum: 10,
            }
        ));
        assert!(err.to_string().contains("deceeds minimum"));
        assert!(channel.writes.borrow().is_empty());
    }

    #[test]
    fn test_get_after_set_reflects_new_current() {
        let channel = FakeChannel::new();
        set(&channel, Setting::Brightness, 75).unwrap();
        let range = get(&channel, Setting::Brightness).unwrap();
        assert_eq!(range.current, 75);
    }

    #[test]
    fn test_query_failure_surfaces_before_validation() {
        let mut channel = FakeChannel::new();
        channel.fail_query = true;
        let err = set(&channel, Setting::Brightness, 50).unwrap_err();
        assert!(matches!(err, MonitorError::QueryFailed { .. }));
        assert!(channel.writes.borrow().is_empty());
    }

    #[test]
    fn test_write_failure_surfaces() {
        let mut channel = FakeChannel::new();
        channel.fail_write = true;
        let err = set(&channel, Setting::Contrast, 50).unwrap_err();
        assert!(matches!(err, MonitorError::WriteFailed { .. }));
    }
}

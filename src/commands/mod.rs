/// Command dispatch: runs the requested operations in a fixed order.
pub mod brightness;
pub mod contrast;
pub mod list;

use tracing::{debug, error, warn};

use crate::cli::{Cli, Printer};
use crate::monitor::{self, Handle, MonitorError, Registry, Setting, control};

/// Discover monitors, apply the optional identity filter, then run every
/// requested operation. The registry is owned by this invocation; its
/// handles are released when it drops on the way out, error paths included.
///
/// # Errors
///
/// Returns the first `MonitorError` hit. Bulk set failures are all reported
/// to stderr before the first one is returned.
pub fn dispatch(cli: &Cli) -> Result<(), MonitorError> {
    let mut printer = Printer::new(cli.json);

    let mut registry = monitor::discover()?;
    debug!("discovered {} controllable monitor(s)", registry.len());
    if registry.is_empty() {
        warn!("no controllable monitors discovered");
    }

    // Listing happens before the filter so `-l -m <id>` still shows
    // everything.
    if cli.list {
        list::run(&registry, &mut printer);
    }

    if let Some(identity) = cli.monitor.as_deref() {
        registry = registry.filter(identity)?;
    }

    if let Some(level) = cli.brightness {
        brightness::set(&registry, level)?;
    }
    if cli.get_brightness {
        brightness::get(&registry, &mut printer)?;
    }
    if let Some(level) = cli.contrast {
        contrast::set(&registry, level)?;
    }
    if cli.get_contrast {
        contrast::get(&registry, &mut printer)?;
    }

    registry.dispose();
    printer.finish();
    Ok(())
}

/// Bounds-checked set of one setting across every registry entry. A failure
/// on one monitor is reported and does not stop the rest; the first failure
/// is returned afterwards so the process exits nonzero.
pub(crate) fn apply_level(
    registry: &Registry<Handle>,
    setting: Setting,
    level: u32,
) -> Result<(), MonitorError> {
    let mut failures = registry.for_each(|_, handle| control::set(handle, setting, level));

    for (identity, err) in &failures {
        error!("{identity}: {err}");
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.swap_remove(0).1)
    }
}

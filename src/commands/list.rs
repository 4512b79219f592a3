/// `--list`: print the identities of all discovered monitors.
use crate::cli::Printer;
use crate::monitor::{Handle, Registry};

/// Run the list operation. Identities come out in the registry's
/// deterministic (lexicographic) order.
pub fn run(registry: &Registry<Handle>, printer: &mut Printer) {
    printer.monitor_list(registry.list());
}

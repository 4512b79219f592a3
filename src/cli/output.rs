/// Output writing: plain text immediately, or one JSON object at the end.
use crate::types::Report;

/// Writes operation results to stdout.
///
/// Plain mode prints each value as it is produced, one per line, matching
/// what shell pipelines expect. JSON mode accumulates a [`Report`] and
/// emits a single object from [`Printer::finish`]. The monitor core never
/// prints; everything user-visible flows through here.
pub struct Printer {
    json: bool,
    report: Report,
}

impl Printer {
    /// Construct for plain or JSON output.
    #[must_use]
    pub fn new(json: bool) -> Self {
        Self {
            json,
            report: Report::default(),
        }
    }

    /// Record the monitor list (one identity per line in plain mode).
    pub fn monitor_list(&mut self, identities: Vec<String>) {
        if self.json {
            self.report.monitor_list = Some(identities);
        } else {
            for identity in &identities {
                println!("{identity}");
            }
        }
    }

    /// Record a brightness reading.
    pub fn brightness(&mut self, level: u32) {
        if self.json {
            self.report.brightness = Some(level);
        } else {
            println!("{level}");
        }
    }

    /// Record a contrast reading.
    pub fn contrast(&mut self, level: u32) {
        if self.json {
            self.report.contrast = Some(level);
        } else {
            println!("{level}");
        }
    }

    /// Emit the accumulated JSON object. No-op in plain mode.
    pub fn finish(self) {
        if self.json {
            match serde_json::to_string(&self.report) {
                Ok(s) => println!("{s}"),
                Err(e) => eprintln!("JSON serialization error: {e}"),
            }
        }
    }

    #[cfg(test)]
    fn report(&self) -> &Report {
        &self.report
    }
}

/// CLI argument definitions via clap derive.
///
/// Flags combine in one invocation (e.g. `-l -m <id> -B`), matching the
/// tool's single-pass flow: list, select, then get/set.
use clap::Parser;

/// winddc — read and set monitor brightness and contrast over DDC/CI.
#[derive(Debug, Parser)]
#[command(
    name = "winddc",
    about = "Read and set monitor brightness and contrast over DDC/CI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// List connected monitors.
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Select a monitor by device identity. When omitted, set operations
    /// apply to all monitors.
    #[arg(short = 'm', long, value_name = "IDENTITY")]
    pub monitor: Option<String>,

    /// Set monitor brightness.
    #[arg(short = 'b', long, value_name = "LEVEL")]
    pub brightness: Option<u32>,

    /// Print the current brightness of the selected monitor.
    #[arg(short = 'B', long, requires = "monitor")]
    pub get_brightness: bool,

    /// Set monitor contrast.
    #[arg(short = 'c', long, value_name = "LEVEL")]
    pub contrast: Option<u32>,

    /// Print the current contrast of the selected monitor.
    #[arg(short = 'C', long, requires = "monitor")]
    pub get_contrast: bool,

    /// Output action results as a JSON object.
    #[arg(short = 'j', long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn test_get_brightness_requires_monitor() {
        assert!(Cli::try_parse_from(["winddc", "-B"]).is_err());
        let cli = Cli::try_parse_from(["winddc", "-B", "-m", "MONITOR\\A\\0001"]).unwrap();
        assert!(cli.get_brightness);
        assert_eq!(cli.monitor.as_deref(), Some("MONITOR\\A\\0001"));
    }

    #[test]
    fn test_flags_combine() {
        let cli = Cli::try_parse_from(["winddc", "-l", "-b", "70", "-j"]).unwrap();
        assert!(cli.list);
        assert!(cli.json);
        assert_eq!(cli.brightness, Some(70));
        assert!(cli.monitor.is_none());
    }

    #[test]
    fn test_set_does_not_require_monitor() {
        let cli = Cli::try_parse_from(["winddc", "--contrast", "50"]).unwrap();
        assert_eq!(cli.contrast, Some(50));
    }
}

/// Safe wrappers over the Win32 monitor configuration API.
pub mod device;
pub mod output;
pub mod physical;

pub use device::enumerate_display_devices;
pub use output::enumerate_outputs;
pub use physical::PhysicalHandle;

/// Decode a NUL-terminated UTF-16 buffer into a `String`.
fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}

/// Message for the thread's last Win32 error.
fn last_error_message() -> String {
    windows::core::Error::from_win32().message()
}

#[cfg(test)]
mod tests {
    use super::wide_to_string;

    #[test]
    fn test_wide_to_string_stops_at_nul() {
        let wide: Vec<u16> = "\\\\.\\DISPLAY1\0garbage".encode_utf16().collect();
        assert_eq!(wide_to_string(&wide), "\\\\.\\DISPLAY1");
    }

    #[test]
    fn test_wide_to_string_without_nul_takes_whole_buffer() {
        let wide: Vec<u16> = "\\\\.\\DISPLAY1".encode_utf16().collect();
        assert_eq!(wide_to_string(&wide), "\\\\.\\DISPLAY1");
    }
}

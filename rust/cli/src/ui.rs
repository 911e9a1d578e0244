//! UI helper functions for terminal output formatting.
//!
//! Error and warning lines share a fixed prefix so scripts can grep for them.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Format coins the way the table shows them: whole amounts without a
/// fraction, half coins with one decimal.
pub fn format_coins(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.1}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_prefix() {
        let mut err = Vec::new();
        write_error(&mut err, "boom").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: boom\n");
    }

    #[test]
    fn test_display_warning_prefix() {
        let mut err = Vec::new();
        display_warning(&mut err, "careful").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "WARNING: careful\n");
    }

    #[test]
    fn test_format_coins() {
        assert_eq!(format_coins(200.0), "200");
        assert_eq!(format_coins(12.5), "12.5");
        assert_eq!(format_coins(0.0), "0");
    }
}

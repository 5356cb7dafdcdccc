//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around [`Date`] that formats it for human consumption via
/// the `Display` trait.
///
/// # Format
///
/// The display format follows the pattern `Mon DD, YYYY` (e.g.
/// `Oct 01, 2023`), keeping list columns aligned regardless of month.
pub struct DisplayDate<'a>(pub &'a Date);

impl fmt::Display for DisplayDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %d, %Y"))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_display_date_format() {
        let day = date(2023, 10, 1);
        assert_eq!(format!("{}", DisplayDate(&day)), "Oct 01, 2023");
    }
}

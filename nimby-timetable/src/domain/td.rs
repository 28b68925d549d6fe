//! Timetable identifier (train description) type.

use std::fmt;

/// Short identifier printed alongside an exported timetable.
///
/// Realtime Trains pages carry the train's headcode in their title, e.g.
/// `"Realtime Trains | 1A23 0905 London Paddington to Bristol"`. Working
/// timetable input has no identifier of its own and uses [`Td::LUL`].
///
/// # Examples
///
/// ```
/// use nimby_timetable::domain::Td;
///
/// let td = Td::from_title("Realtime Trains | 1A23 0905 Paddington").unwrap();
/// assert_eq!(td.as_str(), "1A23");
/// assert!(td.is_standard_headcode());
///
/// assert!(Td::from_title("no delimiter").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Td(String);

impl Td {
    /// Identifier used for working timetable input.
    pub const LUL: &'static str = "LUL";

    /// Create an identifier from any text.
    pub fn new(s: impl Into<String>) -> Self {
        Td(s.into())
    }

    /// Identifier for working timetable input.
    pub fn lul() -> Self {
        Td::new(Self::LUL)
    }

    /// Extract the identifier from a page title.
    ///
    /// Takes the second `|`-separated segment, skips its first character
    /// (the space after the delimiter) and keeps the next four.
    pub fn from_title(title: &str) -> Option<Self> {
        let segment = title.split('|').nth(1)?;
        let td: String = segment.chars().skip(1).take(4).collect();

        if td.is_empty() {
            return None;
        }

        Some(Td(td))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a standard headcode: digit, uppercase letter, two digits.
    pub fn is_standard_headcode(&self) -> bool {
        let bytes = self.0.as_bytes();

        bytes.len() == 4
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_uppercase()
            && bytes[2].is_ascii_digit()
            && bytes[3].is_ascii_digit()
    }
}

impl fmt::Debug for Td {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Td({})", self.as_str())
    }
}

impl fmt::Display for Td {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

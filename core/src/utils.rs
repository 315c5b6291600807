//! Utility functions and types.

use std::fmt::Debug;

/// Redacts a secret for Debug output.
///
/// Strings of 12 characters or more keep their first and last three
/// characters so different keys stay distinguishable in logs; anything
/// shorter is masked entirely.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or(""))
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.len() {
            0 => f.write_str("EMPTY"),
            1..=11 => f.write_str("***"),
            len => write!(f, "{}***{}", &self.0[..3], &self.0[len - 3..]),
        }
    }
}

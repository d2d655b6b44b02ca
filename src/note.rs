// src/note.rs
use std::fmt::Write;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{JotterError, Result};

/// A single note as it is persisted: `{"id","title","text","date"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub text: String,
    pub date: String,
}

impl Note {
    /// Create a note with a freshly generated id.
    pub fn new(title: String, text: String, date: String) -> Self {
        Self {
            id: new_id(),
            title,
            text,
            date,
        }
    }

    /// First seven characters of the id, used in listings.
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }

    /// First line of the body, cut to `max_chars` characters.
    pub fn snippet(&self, max_chars: usize) -> String {
        let first_line = self.text.lines().next().unwrap_or("");
        if first_line.chars().count() <= max_chars {
            first_line.to_string()
        } else {
            let cut: String = first_line.chars().take(max_chars).collect();
            format!("{}...", cut.trim_end())
        }
    }
}

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Format a timestamp with a strftime pattern for the `date` field.
///
/// Patterns chrono cannot format (unknown or parse-only specifiers such as
/// `%#z`) give `JotterError::Config`.
pub fn format_date<Tz>(at: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", at.format(pattern))
        .map_err(|_| JotterError::Config(format!("invalid date_format '{}'", pattern)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note(text: &str) -> Note {
        Note::new("Title".to_string(), text.to_string(), "01/02/2024".to_string())
    }

    #[test]
    fn test_new_generates_unique_ids() {
        let a = note("a");
        let b = note("b");
        assert_ne!(a.id, b.id);
        assert!(Uuid::parse_str(&a.id).is_ok());
    }

    #[test]
    fn test_json_shape() {
        let n = Note {
            id: "abc".to_string(),
            title: "Groceries".to_string(),
            text: "milk".to_string(),
            date: "12/03/2023".to_string(),
        };
        let value = serde_json::to_value(&n).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "abc",
                "title": "Groceries",
                "text": "milk",
                "date": "12/03/2023"
            })
        );
    }

    #[test]
    fn test_short_id() {
        let n = note("x");
        assert_eq!(n.short_id().len(), 7);
        assert!(n.id.starts_with(n.short_id()));

        let mut tiny = note("x");
        tiny.id = "ab".to_string();
        assert_eq!(tiny.short_id(), "ab");
    }

    #[test]
    fn test_snippet_first_line_only() {
        let n = note("first line\nsecond line");
        assert_eq!(n.snippet(40), "first line");
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let n = note("héllo wörld, this is long");
        assert_eq!(n.snippet(5), "héllo...");
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2023, 12, 3, 10, 0, 0).unwrap();
        assert_eq!(format_date(&at, "%m/%d/%Y").unwrap(), "12/03/2023");
        assert_eq!(format_date(&at, "%Y-%m-%d").unwrap(), "2023-12-03");
    }

    #[test]
    fn test_format_date_rejects_unformattable_patterns() {
        let at = Utc.with_ymd_and_hms(2023, 12, 3, 10, 0, 0).unwrap();
        assert!(matches!(
            format_date(&at, "%#z"),
            Err(JotterError::Config(_))
        ));
        assert!(matches!(
            format_date(&at, "%Q"),
            Err(JotterError::Config(_))
        ));
    }
}

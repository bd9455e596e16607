//! Message Data Structure
//!
//! Defines the `Message` entry stored in a sender's message list and the
//! human-readable timestamp format it carries.
//!
//! Timestamps are produced from the server clock at write time and look like
//! `September 14th 2021, 7:27:31 am`.

use chrono::{DateTime, Datelike, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single chat message as stored under a sender's document
///
/// Messages are immutable once written. Two messages with the same text and
/// the same timestamp are structurally identical.
///
/// # Example
/// ```rust
/// use roomchat::shared::Message;
///
/// let message = Message::new("hi");
/// assert_eq!(message.message, "hi");
/// assert!(!message.timestamp.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// The message text (may be empty)
    pub message: String,
    /// Human-readable write time, server local clock
    pub timestamp: String,
}

impl Message {
    /// Create a message stamped with the current server time
    pub fn new(message: impl Into<String>) -> Self {
        Self::at(message, &Local::now())
    }

    /// Create a message stamped with the given time
    pub fn at<Tz>(message: impl Into<String>, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            message: message.into(),
            timestamp: format_timestamp(at),
        }
    }
}

/// Format a time as `September 14th 2021, 7:27:31 am`
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let day = at.day();
    format!(
        "{} {}{} {}",
        at.format("%B"),
        day,
        ordinal_suffix(day),
        at.format("%Y, %-I:%M:%S %P"),
    )
}

/// English ordinal suffix for a day of the month
fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_morning_timestamp() {
        let at = utc(2021, 9, 14, 7, 27, 31);
        assert_eq!(format_timestamp(&at), "September 14th 2021, 7:27:31 am");
    }

    #[test]
    fn test_afternoon_timestamp() {
        let at = utc(2022, 3, 1, 15, 4, 9);
        assert_eq!(format_timestamp(&at), "March 1st 2022, 3:04:09 pm");
    }

    #[test]
    fn test_midnight_and_noon_use_twelve() {
        assert_eq!(
            format_timestamp(&utc(2023, 12, 22, 0, 0, 0)),
            "December 22nd 2023, 12:00:00 am"
        );
        assert_eq!(
            format_timestamp(&utc(2023, 12, 23, 12, 30, 0)),
            "December 23rd 2023, 12:30:00 pm"
        );
    }

    #[test]
    fn test_ordinal_suffixes() {
        let expected = [
            (1, "st"), (2, "nd"), (3, "rd"), (4, "th"), (11, "th"), (12, "th"),
            (13, "th"), (21, "st"), (22, "nd"), (23, "rd"), (30, "th"), (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_message_json_shape() {
        let message = Message::at("hi", &utc(2021, 9, 14, 7, 27, 31));
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "hi",
                "timestamp": "September 14th 2021, 7:27:31 am"
            })
        );
    }
}

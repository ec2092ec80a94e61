//! Human-readable slot suggestions.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::interval::TimeInterval;

/// A proposed slot for a named task or appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotSuggestion {
    pub id: Uuid,
    pub title: String,
    pub slot: TimeInterval,
}

impl SlotSuggestion {
    /// Create a new suggestion
    pub fn new(title: impl Into<String>, slot: TimeInterval) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            slot,
        }
    }

    /// Render the slot bounds as local wall-clock times,
    /// e.g. `09:00 AM - 10:00 AM`.
    pub fn local_label(&self, tz: Tz) -> String {
        format!(
            "{} - {}",
            self.slot.start().with_timezone(&tz).format("%I:%M %p"),
            self.slot.end().with_timezone(&tz).format("%I:%M %p"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn label_uses_local_wall_clock() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(3, 30, 0)
            .unwrap()
            .and_utc();
        let end = start + chrono::Duration::minutes(60);
        let slot = TimeInterval::new(start, end).unwrap();

        let suggestion = SlotSuggestion::new("Doctor Appointment", slot);
        // 03:30 UTC is 09:00 in Asia/Kolkata (UTC+05:30).
        assert_eq!(
            suggestion.local_label(chrono_tz::Asia::Kolkata),
            "09:00 AM - 10:00 AM"
        );
    }

    #[test]
    fn id_serializes_as_uuid_string() {
        let start = Utc::now();
        let slot = TimeInterval::new(start, start + chrono::Duration::minutes(30)).unwrap();
        let suggestion = SlotSuggestion::new("Review", slot);

        let json = serde_json::to_value(&suggestion).unwrap();
        let id = json["id"].as_str().unwrap();
        assert_eq!(id.parse::<Uuid>().unwrap(), suggestion.id);
    }

    #[test]
    fn suggestions_get_unique_ids() {
        let start = Utc::now();
        let slot = TimeInterval::new(start, start + chrono::Duration::minutes(30)).unwrap();
        let a = SlotSuggestion::new("a", slot);
        let b = SlotSuggestion::new("b", slot);
        assert_ne!(a.id, b.id);
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// Category tag, e.g. "workshop" or "social". Also used as a CSS class.
    #[serde(rename = "type", default)]
    pub event_type: String,
}

/// Event files written by hand use both `"id": 3` and `"id": "3"`.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accepts_numeric_and_string_ids() {
        let json = r#"[
            {"id": 1, "title": "Qiskit Workshop", "date": "2026-02-14", "time": "18:00",
             "location": "Snape LT1", "description": "Intro to circuits", "type": "workshop"},
            {"id": "movie-night", "title": "Movie Night", "date": "2026-03-01", "time": "19:00",
             "location": "Kramer", "description": "Popcorn", "type": "social"}
        ]"#;

        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0].id, "1");
        assert_eq!(events[1].id, "movie-night");
        assert_eq!(events[0].event_type, "workshop");
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
    }

    #[test]
    fn test_event_rejects_bad_date() {
        let json = r#"[{"id": 1, "title": "Broken", "date": "14/02/2026"}]"#;
        assert!(serde_json::from_str::<Vec<Event>>(json).is_err());
    }
}

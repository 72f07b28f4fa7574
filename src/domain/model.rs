use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub launch_label: Option<String>,
}

/// Colour-legend group of a timeline bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimelineCategory {
    Current,
    Past,
    Education,
}

impl TimelineCategory {
    pub const ALL: [TimelineCategory; 3] = [
        TimelineCategory::Current,
        TimelineCategory::Past,
        TimelineCategory::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimelineCategory::Current => "Current",
            TimelineCategory::Past => "Past",
            TimelineCategory::Education => "Education",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TimelineCategory::Current => "current",
            TimelineCategory::Past => "past",
            TimelineCategory::Education => "education",
        }
    }
}

impl fmt::Display for TimelineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub start: NaiveDate,
    /// `None` means the position is ongoing.
    pub end: Option<NaiveDate>,
    pub category: TimelineCategory,
    #[serde(default)]
    pub highlights: Vec<String>,
    pub summary: Option<String>,
}

impl Experience {
    /// End of the interval, with ongoing entries closed at `today`.
    pub fn resolved_end(&self, today: NaiveDate) -> NaiveDate {
        self.end.unwrap_or(today).max(self.start)
    }

    pub fn description(&self) -> &str {
        self.summary.as_deref().unwrap_or(&self.role)
    }

    /// Human-readable period, e.g. "Sep 2023 - Jul 2024" or "Jul 2024 - Present".
    pub fn period_label(&self) -> String {
        let start = self.start.format("%b %Y");
        match self.end {
            Some(end) => format!("{} - {}", start, end.format("%b %Y")),
            None => format!("{} - Present", start),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetRefs {
    pub resume: Option<String>,
    pub resume_download_name: Option<String>,
    pub profile_image: Option<String>,
}

impl AssetRefs {
    pub fn resume_file_name(&self) -> &str {
        self.resume_download_name.as_deref().unwrap_or("resume.pdf")
    }
}

/// Section a decorative animation is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSlotKind {
    Hero,
    Projects,
    Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSlot {
    pub slot: AnimationSlotKind,
    pub url: String,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSettings {
    pub relay_endpoint: String,
    pub heading: Option<String>,
    pub submit_label: Option<String>,
}

/// Binary payload of a local asset that was readable at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub path: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Fetched animation payload for one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub slot: AnimationSlotKind,
    pub height: u32,
    pub payload: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn brillio() -> Experience {
        Experience {
            role: "Data Analyst".to_string(),
            organization: "Brillio".to_string(),
            start: date(2023, 9, 1),
            end: Some(date(2024, 7, 31)),
            category: TimelineCategory::Past,
            highlights: vec![],
            summary: None,
        }
    }

    #[test]
    fn test_period_label() {
        let mut exp = brillio();
        assert_eq!(exp.period_label(), "Sep 2023 - Jul 2024");
        exp.end = None;
        assert_eq!(exp.period_label(), "Sep 2023 - Present");
    }

    #[test]
    fn test_resolved_end_uses_today_for_ongoing() {
        let mut exp = brillio();
        assert_eq!(exp.resolved_end(date(2026, 1, 1)), date(2024, 7, 31));
        exp.end = None;
        assert_eq!(exp.resolved_end(date(2026, 1, 1)), date(2026, 1, 1));
        // never before the start
        assert_eq!(exp.resolved_end(date(2020, 1, 1)), date(2023, 9, 1));
    }

    #[test]
    fn test_description_falls_back_to_role() {
        let mut exp = brillio();
        assert_eq!(exp.description(), "Data Analyst");
        exp.summary = Some("Churn models".to_string());
        assert_eq!(exp.description(), "Churn models");
    }

    #[test]
    fn test_category_deserializes_from_name() {
        let cat: TimelineCategory = serde_json::from_str("\"Education\"").unwrap();
        assert_eq!(cat, TimelineCategory::Education);
        assert_eq!(cat.css_class(), "education");
    }
}

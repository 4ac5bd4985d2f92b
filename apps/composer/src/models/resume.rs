use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// The resume itself. List order is presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub full_name: String,
    pub personal_info: Vec<FeatureItem>,
    pub languages: Vec<String>,
    pub education: Vec<EducationDetails>,
    pub extra_courses: Vec<String>,
    pub about_me: String,
    pub work_experience: Vec<WorkExperience>,
    pub military_service: Vec<MilitaryService>,
}

/// One personal-info line: phone, email, profile link and so on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub text: String,
    pub hyperlink: Option<String>,
    /// Path of an icon resource. Resolved at composition time; unresolvable paths render blank.
    pub icon: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Dates
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMonthYear")]
pub struct MonthYear {
    month: u32,
    year: i32,
}

#[derive(Deserialize)]
struct RawMonthYear {
    month: u32,
    year: i32,
}

impl TryFrom<RawMonthYear> for MonthYear {
    type Error = AppError;

    fn try_from(raw: RawMonthYear) -> Result<Self, Self::Error> {
        MonthYear::new(raw.month, raw.year)
    }
}

impl MonthYear {
    pub fn new(month: u32, year: i32) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidDate(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        if !(1..=9999).contains(&year) {
            return Err(AppError::InvalidDate(format!(
                "year must be between 1 and 9999, got {year}"
            )));
        }
        Ok(MonthYear { month, year })
    }
}

/// Renders as `"Mar 2021"`.
impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => write!(f, "{}", date.format("%b %Y")),
            None => write!(f, "{:02}/{}", self.month, self.year),
        }
    }
}

/// Dates attached to an education, work or military entry.
///
/// A literal `date_range` wins over the structured start/end pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    pub start_date: Option<MonthYear>,
    pub end_date: Option<MonthYear>,
    pub date_range: Option<String>,
}

impl DateRange {
    /// `"Start"`, `"Start - End"` or `" - End"`; empty when nothing is set.
    pub fn display(&self) -> String {
        if let Some(literal) = &self.date_range {
            return literal.clone();
        }

        let mut result = String::new();
        if let Some(start) = &self.start_date {
            result.push_str(&start.to_string());
        }
        if let Some(end) = &self.end_date {
            result.push_str(&format!(" - {end}"));
        }
        result
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entries
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationDetails {
    pub major: String,
    pub facility: Option<String>,
    #[serde(flatten)]
    pub dates: DateRange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperience {
    pub position: String,
    pub company: Option<String>,
    pub job_type: Option<String>,
    #[serde(flatten)]
    pub dates: DateRange,
    #[serde(alias = "description_items")]
    pub details: Vec<String>,
}

impl WorkExperience {
    /// `position[, company][ (job_type)]`. Absent or empty parts are dropped.
    pub fn header(&self) -> String {
        let mut result = self.position.clone();
        if let Some(company) = self.company.as_deref().filter(|c| !c.is_empty()) {
            result.push_str(&format!(", {company}"));
        }
        if let Some(job_type) = self.job_type.as_deref().filter(|j| !j.is_empty()) {
            result.push_str(&format!(" ({job_type})"));
        }
        result
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilitaryService {
    pub position: String,
    pub branch: String,
    #[serde(flatten)]
    pub dates: DateRange,
    #[serde(alias = "description")]
    pub details: Vec<String>,
}

impl MilitaryService {
    pub fn header(&self) -> String {
        format!("{} at {}", self.position, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_job(position: &str, company: Option<&str>, job_type: Option<&str>) -> WorkExperience {
        WorkExperience {
            position: position.to_string(),
            company: company.map(str::to_string),
            job_type: job_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_work_header_all_parts() {
        let job = make_job("Engineer", Some("Acme"), Some("Contract"));
        assert_eq!(job.header(), "Engineer, Acme (Contract)");
    }

    #[test]
    fn test_work_header_position_only() {
        assert_eq!(make_job("Engineer", None, None).header(), "Engineer");
    }

    #[test]
    fn test_work_header_skips_empty_company() {
        let job = make_job("Engineer", Some(""), Some("Part-time"));
        assert_eq!(job.header(), "Engineer (Part-time)");
    }

    #[test]
    fn test_military_header() {
        let service = MilitaryService {
            position: "Medic".to_string(),
            branch: "Corps".to_string(),
            ..Default::default()
        };
        assert_eq!(service.header(), "Medic at Corps");
    }

    #[test]
    fn test_month_year_display() {
        assert_eq!(MonthYear::new(3, 2021).unwrap().to_string(), "Mar 2021");
    }

    #[test]
    fn test_month_year_rejects_out_of_range() {
        assert!(MonthYear::new(0, 2021).is_err());
        assert!(MonthYear::new(13, 2021).is_err());
        assert!(MonthYear::new(5, 0).is_err());
    }

    #[test]
    fn test_date_range_variants() {
        let start = MonthYear::new(1, 2020).unwrap();
        let end = MonthYear::new(6, 2022).unwrap();

        let both = DateRange {
            start_date: Some(start),
            end_date: Some(end),
            date_range: None,
        };
        assert_eq!(both.display(), "Jan 2020 - Jun 2022");

        let open = DateRange {
            start_date: Some(start),
            ..Default::default()
        };
        assert_eq!(open.display(), "Jan 2020");

        let end_only = DateRange {
            end_date: Some(end),
            ..Default::default()
        };
        assert_eq!(end_only.display(), " - Jun 2022");

        assert_eq!(DateRange::default().display(), "");
    }

    #[test]
    fn test_literal_date_range_wins() {
        let dates = DateRange {
            start_date: Some(MonthYear::new(1, 2020).unwrap()),
            end_date: None,
            date_range: Some("2020 – present".to_string()),
        };
        assert_eq!(dates.display(), "2020 – present");
    }

    #[test]
    fn test_deserialize_work_entry_with_flattened_dates() {
        let job: WorkExperience = serde_json::from_value(json!({
            "position": "Developer",
            "company": "Acme",
            "start_date": { "month": 2, "year": 2019 },
            "description_items": ["Built things."],
            "unknown_field": true
        }))
        .unwrap();

        assert_eq!(job.header(), "Developer, Acme");
        assert_eq!(job.dates.display(), "Feb 2019");
        assert_eq!(job.details, vec!["Built things.".to_string()]);
    }

    #[test]
    fn test_deserialize_invalid_month_fails() {
        let result: Result<EducationDetails, _> = serde_json::from_value(json!({
            "major": "CS",
            "start_date": { "month": 14, "year": 2019 }
        }));
        assert!(result.is_err());
    }
}

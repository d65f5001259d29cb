//! Editing-boundary checks: what a form must supply before a draft or a merged
//! record is handed to the store. The store itself trusts its callers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::editor::dates::{ends_before_start, parse_period_start};
use crate::models::resume::{
    Course, CustomSection, CustomSectionItem, Education, Experience, Extracurricular, Hobby,
    Internship, Language, Link, PersonalInfo, Project, Reference, Skill,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Error)]
#[error("{}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Implemented by every draft and record the editor can submit.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Accumulates field errors so a form gets every problem in one response.
#[derive(Default)]
struct Checks {
    errors: Vec<FieldError>,
}

impl Checks {
    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.fail(field, "is required");
        }
        self
    }

    fn date(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() && parse_period_start(value).is_none() {
            self.fail(field, "is not a recognised date (use YYYY, YYYY-MM or YYYY-MM-DD)");
        }
        self
    }

    fn date_range(&mut self, start: &str, end: &str) -> &mut Self {
        self.date("startDate", start).date("endDate", end);
        if ends_before_start(start, end) {
            self.fail("endDate", "cannot be earlier than the start date");
        }
        self
    }

    fn url(&mut self, field: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() && !looks_like_url(value) {
            self.fail(field, "must be a valid URL (e.g. https://example.com)");
        }
        self
    }

    fn email(&mut self, field: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() {
            let valid = value
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
            if !valid {
                self.fail(field, "must be a valid email address");
            }
        }
        self
    }

    fn finish(&mut self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: std::mem::take(&mut self.errors),
            })
        }
    }
}

/// Absolute http(s) URL with a non-empty host and no whitespace.
fn looks_like_url(value: &str) -> bool {
    let value = value.trim();
    let rest = match value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
    {
        Some(rest) => rest,
        None => return false,
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    !host.is_empty() && !value.chars().any(char::is_whitespace)
}

// ────────────────────────────────────────────────────────────────────────────
// Rules per record
// ────────────────────────────────────────────────────────────────────────────

impl Validate for PersonalInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .email("email", &self.email)
            .url("website", self.website.as_deref().unwrap_or_default())
            .finish()
    }
}

impl Validate for Experience {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .date_range(&self.start_date, &self.end_date)
            .finish()
    }
}

impl Validate for Internship {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("jobTitle", &self.job_title)
            .required("company", &self.company)
            .date_range(&self.start_date, &self.end_date)
            .finish()
    }
}

impl Validate for Education {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("startDate", &self.start_date)
            .required("endDate", &self.end_date)
            .date_range(&self.start_date, &self.end_date)
            .finish()
    }
}

impl Validate for Skill {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::default();
        checks.required("name", &self.name);
        if !(1..=5).contains(&self.level) {
            checks.fail("level", "must be between 1 and 5");
        }
        checks.finish()
    }
}

impl Validate for Project {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("title", &self.title)
            .date_range(&self.start_date, &self.end_date)
            .finish()
    }
}

impl Validate for Course {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("name", &self.name)
            .date_range(&self.start_date, &self.end_date)
            .url(
                "certificateLink",
                self.certificate_link.as_deref().unwrap_or_default(),
            )
            .finish()
    }
}

impl Validate for Language {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default().required("name", &self.name).finish()
    }
}

impl Validate for Hobby {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("description", &self.description)
            .finish()
    }
}

impl Validate for Reference {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("fullName", &self.full_name)
            .email("email", &self.email)
            .finish()
    }
}

impl Validate for Extracurricular {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("title", &self.title)
            .date_range(&self.start_date, &self.end_date)
            .finish()
    }
}

impl Validate for Link {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut checks = Checks::default();
        checks.required("label", &self.label).required("url", &self.url);
        if !self.url.trim().is_empty() {
            checks.url("url", &self.url);
        }
        checks.finish()
    }
}

impl Validate for CustomSection {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default().required("title", &self.title).finish()
    }
}

impl Validate for CustomSectionItem {
    fn validate(&self) -> Result<(), ValidationError> {
        Checks::default()
            .required("title", &self.title)
            .date_range(
                self.start_date.as_deref().unwrap_or_default(),
                self.end_date.as_deref().unwrap_or_default(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rich_text::RichText;

    fn fields(err: ValidationError) -> Vec<String> {
        err.errors.into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_education_requires_both_dates() {
        let edu = Education {
            institution: "MIT".into(),
            ..Default::default()
        };
        assert_eq!(
            fields(edu.validate().unwrap_err()),
            vec!["startDate", "endDate"]
        );
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let exp = Experience {
            start_date: "2022-03".into(),
            end_date: "2021-11".into(),
            ..Default::default()
        };
        let err = exp.validate().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "endDate");
        assert!(err.to_string().contains("earlier than the start date"));
    }

    #[test]
    fn test_ongoing_experience_without_end_date_passes() {
        let exp = Experience {
            company: "Acme".into(),
            start_date: "2022-03".into(),
            current: true,
            description: RichText::from("Platform team"),
            ..Default::default()
        };
        assert!(exp.validate().is_ok());
    }

    #[test]
    fn test_unrecognised_date_is_rejected() {
        let project = Project {
            title: "CLI".into(),
            start_date: "sometime".into(),
            ..Default::default()
        };
        assert_eq!(fields(project.validate().unwrap_err()), vec!["startDate"]);
    }

    #[test]
    fn test_link_needs_label_and_valid_url() {
        let missing = Link::default();
        assert_eq!(fields(missing.validate().unwrap_err()), vec!["label", "url"]);

        let bad = Link {
            label: "Site".into(),
            url: "example com".into(),
        };
        assert_eq!(fields(bad.validate().unwrap_err()), vec!["url"]);

        let good = Link {
            label: "Site".into(),
            url: "https://example.com/me".into(),
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_skill_level_bounds() {
        let skill = Skill {
            name: "Rust".into(),
            level: 6,
        };
        assert_eq!(fields(skill.validate().unwrap_err()), vec!["level"]);
    }

    #[test]
    fn test_internship_requires_title_and_company() {
        let internship = Internship::default();
        assert_eq!(
            fields(internship.validate().unwrap_err()),
            vec!["jobTitle", "company"]
        );
    }

    #[test]
    fn test_custom_section_title_must_not_be_blank() {
        let section = CustomSection {
            title: "   ".into(),
            items: Vec::new(),
        };
        assert!(section.validate().is_err());
    }

    #[test]
    fn test_reference_email_shape() {
        let reference = Reference {
            full_name: "Grace Hopper".into(),
            email: "grace-at-navy".into(),
            ..Default::default()
        };
        assert_eq!(fields(reference.validate().unwrap_err()), vec!["email"]);
    }

    #[test]
    fn test_url_shapes() {
        assert!(looks_like_url("http://a.io"));
        assert!(looks_like_url("https://github.com/x?tab=repos"));
        assert!(!looks_like_url("ftp://a.io"));
        assert!(!looks_like_url("https://"));
        assert!(!looks_like_url("github.com/x"));
    }
}

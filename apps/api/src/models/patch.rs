//! Partial-update payloads and the `Record`/`Section` wiring for every record type.
//!
//! A patch field left out (or `null`) means "leave as is". For optional record
//! fields an empty string clears the value.

use serde::{Deserialize, Serialize};

use crate::models::resume::{
    Course, CustomSection, CustomSectionItem, Education, Entry, Experience, Extracurricular,
    Hobby, Internship, Language, Link, PersonalInfo, Project, Record, Reference, Resume, Section,
    SectionKind, Skill,
};
use crate::models::rich_text::RichText;

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}

fn set_optional(slot: &mut Option<String>, value: Option<String>) {
    if let Some(v) = value {
        *slot = if v.is_empty() { None } else { Some(v) };
    }
}

fn set_optional_rich(slot: &mut Option<RichText>, value: Option<RichText>) {
    if let Some(v) = value {
        *slot = if v.as_str().is_empty() { None } else { Some(v) };
    }
}

/// `current = true` means the entry is ongoing and carries no end date.
fn set_current(current: &mut bool, end_date: &mut String, value: Option<bool>) {
    if let Some(v) = value {
        *current = v;
        if v {
            end_date.clear();
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Personal info
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<RichText>,
}

impl PersonalInfo {
    pub fn apply(&mut self, patch: PersonalInfoPatch) {
        set(&mut self.full_name, patch.full_name);
        set(&mut self.job_title, patch.job_title);
        set(&mut self.email, patch.email);
        set(&mut self.phone, patch.phone);
        set(&mut self.location, patch.location);
        set_optional(&mut self.website, patch.website);
        set(&mut self.summary, patch.summary);
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Experience & internships
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<RichText>,
}

impl Record for Experience {
    type Draft = Experience;
    type Patch = ExperiencePatch;

    fn from_draft(mut draft: Self::Draft) -> Self {
        if draft.current {
            draft.end_date.clear();
        }
        draft
    }

    fn apply(&mut self, patch: ExperiencePatch) {
        set(&mut self.company, patch.company);
        set(&mut self.position, patch.position);
        set(&mut self.start_date, patch.start_date);
        set(&mut self.end_date, patch.end_date);
        set(&mut self.description, patch.description);
        // Applied last so an ongoing entry never keeps an end date from the same patch.
        set_current(&mut self.current, &mut self.end_date, patch.current);
        if self.current {
            self.end_date.clear();
        }
    }
}

impl Section for Experience {
    const KIND: SectionKind = SectionKind::Experience;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.experience
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.experience
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternshipPatch {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<RichText>,
}

impl Record for Internship {
    type Draft = Internship;
    type Patch = InternshipPatch;

    fn from_draft(mut draft: Self::Draft) -> Self {
        if draft.current {
            draft.end_date.clear();
        }
        draft
    }

    fn apply(&mut self, patch: InternshipPatch) {
        set(&mut self.job_title, patch.job_title);
        set(&mut self.company, patch.company);
        set(&mut self.start_date, patch.start_date);
        set(&mut self.end_date, patch.end_date);
        set(&mut self.description, patch.description);
        set_current(&mut self.current, &mut self.end_date, patch.current);
        if self.current {
            self.end_date.clear();
        }
    }
}

impl Section for Internship {
    const KIND: SectionKind = SectionKind::Internships;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.internships
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.internships
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<RichText>,
}

impl Record for Education {
    type Draft = Education;
    type Patch = EducationPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: EducationPatch) {
        set(&mut self.institution, patch.institution);
        set(&mut self.degree, patch.degree);
        set(&mut self.field, patch.field);
        set(&mut self.start_date, patch.start_date);
        set(&mut self.end_date, patch.end_date);
        set(&mut self.description, patch.description);
    }
}

impl Section for Education {
    const KIND: SectionKind = SectionKind::Education;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.education
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.education
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Skills, languages, hobbies, links
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub level: Option<u8>,
}

impl Record for Skill {
    type Draft = Skill;
    type Patch = SkillPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: SkillPatch) {
        set(&mut self.name, patch.name);
        set(&mut self.level, patch.level);
    }
}

impl Section for Skill {
    const KIND: SectionKind = SectionKind::Skills;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.skills
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.skills
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguagePatch {
    pub name: Option<String>,
    pub level: Option<String>,
}

impl Record for Language {
    type Draft = Language;
    type Patch = LanguagePatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: LanguagePatch) {
        set(&mut self.name, patch.name);
        set(&mut self.level, patch.level);
    }
}

impl Section for Language {
    const KIND: SectionKind = SectionKind::Languages;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.languages
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.languages
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HobbyPatch {
    pub description: Option<String>,
}

impl Record for Hobby {
    type Draft = Hobby;
    type Patch = HobbyPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: HobbyPatch) {
        set(&mut self.description, patch.description);
    }
}

impl Section for Hobby {
    const KIND: SectionKind = SectionKind::Hobbies;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.hobbies
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.hobbies
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkPatch {
    pub label: Option<String>,
    pub url: Option<String>,
}

impl Record for Link {
    type Draft = Link;
    type Patch = LinkPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: LinkPatch) {
        set(&mut self.label, patch.label);
        set(&mut self.url, patch.url);
    }
}

impl Section for Link {
    const KIND: SectionKind = SectionKind::Links;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.links
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.links
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects, courses, references, extracurricular
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<RichText>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Record for Project {
    type Draft = Project;
    type Patch = ProjectPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: ProjectPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.description, patch.description);
        set(&mut self.start_date, patch.start_date);
        set(&mut self.end_date, patch.end_date);
    }
}

impl Section for Project {
    const KIND: SectionKind = SectionKind::Projects;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.projects
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.projects
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePatch {
    pub name: Option<String>,
    pub institution: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub certificate_link: Option<String>,
}

impl Record for Course {
    type Draft = Course;
    type Patch = CoursePatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: CoursePatch) {
        set(&mut self.name, patch.name);
        set(&mut self.institution, patch.institution);
        set(&mut self.start_date, patch.start_date);
        set(&mut self.end_date, patch.end_date);
        set_optional(&mut self.certificate_link, patch.certificate_link);
    }
}

impl Section for Course {
    const KIND: SectionKind = SectionKind::Courses;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.courses
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.courses
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReferencePatch {
    pub full_name: Option<String>,
    pub company: Option<String>,
    pub role: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Record for Reference {
    type Draft = Reference;
    type Patch = ReferencePatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: ReferencePatch) {
        set(&mut self.full_name, patch.full_name);
        set(&mut self.company, patch.company);
        set(&mut self.role, patch.role);
        set(&mut self.email, patch.email);
        set(&mut self.phone, patch.phone);
    }
}

impl Section for Reference {
    const KIND: SectionKind = SectionKind::References;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.references
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.references
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtracurricularPatch {
    pub title: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<RichText>,
}

impl Record for Extracurricular {
    type Draft = Extracurricular;
    type Patch = ExtracurricularPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: ExtracurricularPatch) {
        set(&mut self.title, patch.title);
        set(&mut self.start_date, patch.start_date);
        set(&mut self.end_date, patch.end_date);
        set(&mut self.description, patch.description);
    }
}

impl Section for Extracurricular {
    const KIND: SectionKind = SectionKind::Extracurricular;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.extracurricular
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.extracurricular
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Custom sections
// ────────────────────────────────────────────────────────────────────────────

/// A new custom section starts with a title and no items; items get their
/// own store-issued ids through the item operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSectionDraft {
    pub title: String,
}

/// Only the title of a section is patchable; its items have their own operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSectionPatch {
    pub title: Option<String>,
}

impl Record for CustomSection {
    type Draft = CustomSectionDraft;
    type Patch = CustomSectionPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        CustomSection {
            title: draft.title,
            items: Vec::new(),
        }
    }

    fn apply(&mut self, patch: CustomSectionPatch) {
        set(&mut self.title, patch.title);
    }
}

impl Section for CustomSection {
    const KIND: SectionKind = SectionKind::CustomSections;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>> {
        &resume.custom_sections
    }

    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>> {
        &mut resume.custom_sections
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSectionItemPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<RichText>,
}

impl Record for CustomSectionItem {
    type Draft = CustomSectionItem;
    type Patch = CustomSectionItemPatch;

    fn from_draft(draft: Self::Draft) -> Self {
        draft
    }

    fn apply(&mut self, patch: CustomSectionItemPatch) {
        set(&mut self.title, patch.title);
        set_optional(&mut self.location, patch.location);
        set_optional(&mut self.start_date, patch.start_date);
        set_optional(&mut self.end_date, patch.end_date);
        set_optional_rich(&mut self.description, patch.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience() -> Experience {
        Experience {
            company: "Acme".into(),
            position: "Engineer".into(),
            start_date: "2020-01".into(),
            end_date: "2022-06".into(),
            current: false,
            description: RichText::from("Built the billing system"),
        }
    }

    #[test]
    fn test_patch_touches_only_named_fields() {
        let mut exp = experience();
        exp.apply(ExperiencePatch {
            position: Some("Staff Engineer".into()),
            ..Default::default()
        });
        assert_eq!(exp.position, "Staff Engineer");
        assert_eq!(exp.company, "Acme");
        assert_eq!(exp.end_date, "2022-06");
        assert_eq!(exp.description.as_str(), "Built the billing system");
    }

    #[test]
    fn test_current_on_clears_end_date() {
        let mut exp = experience();
        exp.apply(ExperiencePatch {
            current: Some(true),
            ..Default::default()
        });
        assert!(exp.current);
        assert_eq!(exp.end_date, "");
    }

    #[test]
    fn test_current_on_wins_over_end_date_in_same_patch() {
        let mut exp = experience();
        exp.apply(ExperiencePatch {
            current: Some(true),
            end_date: Some("2024-01".into()),
            ..Default::default()
        });
        assert_eq!(exp.end_date, "");
    }

    #[test]
    fn test_current_off_does_not_populate_end_date() {
        let mut exp = experience();
        exp.apply(ExperiencePatch {
            current: Some(true),
            ..Default::default()
        });
        exp.apply(ExperiencePatch {
            current: Some(false),
            ..Default::default()
        });
        assert!(!exp.current);
        assert_eq!(exp.end_date, "");
    }

    #[test]
    fn test_internship_draft_marked_current_has_no_end_date() {
        let draft = Internship {
            job_title: "Intern".into(),
            company: "Acme".into(),
            start_date: "2019-06".into(),
            end_date: "2019-09".into(),
            current: true,
            description: RichText::default(),
        };
        assert_eq!(Internship::from_draft(draft).end_date, "");
    }

    #[test]
    fn test_patch_deserializes_from_partial_json() {
        let patch: ExperiencePatch = serde_json::from_str(r#"{"company":"Globex"}"#).unwrap();
        assert_eq!(patch.company.as_deref(), Some("Globex"));
        assert!(patch.position.is_none());
        assert!(patch.current.is_none());
    }

    #[test]
    fn test_empty_string_clears_optional_field() {
        let mut info = PersonalInfo {
            website: Some("https://ada.dev".into()),
            ..Default::default()
        };
        info.apply(PersonalInfoPatch {
            website: Some(String::new()),
            ..Default::default()
        });
        assert_eq!(info.website, None);
    }

    #[test]
    fn test_custom_section_patch_keeps_items() {
        let mut section = CustomSection::from_draft(CustomSectionDraft {
            title: "Awards".into(),
        });
        section.items.push(Entry::new(
            "i1".into(),
            CustomSectionItem {
                title: "Hackathon winner".into(),
                ..Default::default()
            },
        ));
        section.apply(CustomSectionPatch {
            title: Some("Honors".into()),
        });
        assert_eq!(section.title, "Honors");
        assert_eq!(section.items.len(), 1);
    }

    #[test]
    fn test_item_draft_is_stored_as_given() {
        let draft = CustomSectionItem {
            title: "Talk".into(),
            location: Some(String::new()),
            start_date: Some("2023-04".into()),
            end_date: Some(String::new()),
            description: Some(RichText::from("")),
        };
        assert_eq!(CustomSectionItem::from_draft(draft.clone()), draft);
    }

    #[test]
    fn test_course_draft_keeps_blank_link() {
        let draft = Course {
            name: "Distributed Systems".into(),
            certificate_link: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(Course::from_draft(draft.clone()).certificate_link.as_deref(), Some(""));
    }
}

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::ids::EntityId;
use crate::models::rich_text::RichText;

/// Template selected for a brand-new document.
pub const DEFAULT_TEMPLATE_ID: &str = "classic";

// ────────────────────────────────────────────────────────────────────────────
// Root aggregate
// ────────────────────────────────────────────────────────────────────────────

/// The resume document. Only the store creates or replaces it.
///
/// Every collection defaults to empty so documents persisted before a section
/// existed still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    #[serde(default)]
    pub personal: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Entry<Experience>>,
    #[serde(default)]
    pub education: Vec<Entry<Education>>,
    #[serde(default)]
    pub skills: Vec<Entry<Skill>>,
    #[serde(default)]
    pub projects: Vec<Entry<Project>>,
    #[serde(default)]
    pub courses: Vec<Entry<Course>>,
    #[serde(default)]
    pub languages: Vec<Entry<Language>>,
    #[serde(default)]
    pub hobbies: Vec<Entry<Hobby>>,
    #[serde(default)]
    pub references: Vec<Entry<Reference>>,
    #[serde(default)]
    pub internships: Vec<Entry<Internship>>,
    #[serde(default)]
    pub extracurricular: Vec<Entry<Extracurricular>>,
    #[serde(default)]
    pub links: Vec<Entry<Link>>,
    #[serde(default)]
    pub custom_sections: Vec<Entry<CustomSection>>,
    #[serde(default = "default_template_id")]
    pub selected_template: String,
}

fn default_template_id() -> String {
    DEFAULT_TEMPLATE_ID.to_string()
}

impl Default for Resume {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            courses: Vec::new(),
            languages: Vec::new(),
            hobbies: Vec::new(),
            references: Vec::new(),
            internships: Vec::new(),
            extracurricular: Vec::new(),
            links: Vec::new(),
            custom_sections: Vec::new(),
            selected_template: default_template_id(),
        }
    }
}

/// An identified record: the store-issued id flattened next to the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry<F> {
    pub id: EntityId,
    #[serde(flatten)]
    pub fields: F,
}

impl<F> Entry<F> {
    pub fn new(id: EntityId, fields: F) -> Self {
        Self { id, fields }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section kinds
// ────────────────────────────────────────────────────────────────────────────

/// Every renderable part of a resume besides the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Courses,
    Languages,
    Hobbies,
    References,
    Internships,
    Extracurricular,
    Links,
    CustomSections,
}

impl SectionKind {
    pub const ALL: [SectionKind; 13] = [
        SectionKind::Summary,
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Courses,
        SectionKind::Languages,
        SectionKind::Hobbies,
        SectionKind::References,
        SectionKind::Internships,
        SectionKind::Extracurricular,
        SectionKind::Links,
        SectionKind::CustomSections,
    ];

    /// URL segment used by the editor API for this collection.
    pub fn path_segment(&self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Skills => "skills",
            SectionKind::Projects => "projects",
            SectionKind::Courses => "courses",
            SectionKind::Languages => "languages",
            SectionKind::Hobbies => "hobbies",
            SectionKind::References => "references",
            SectionKind::Internships => "internships",
            SectionKind::Extracurricular => "extracurricular",
            SectionKind::Links => "links",
            SectionKind::CustomSections => "custom-sections",
        }
    }

    /// Whether the document has anything to show for this section.
    pub fn has_content(&self, resume: &Resume) -> bool {
        match self {
            SectionKind::Summary => !resume.personal.summary.is_blank(),
            SectionKind::Experience => !resume.experience.is_empty(),
            SectionKind::Education => !resume.education.is_empty(),
            SectionKind::Skills => !resume.skills.is_empty(),
            SectionKind::Projects => !resume.projects.is_empty(),
            SectionKind::Courses => !resume.courses.is_empty(),
            SectionKind::Languages => !resume.languages.is_empty(),
            SectionKind::Hobbies => !resume.hobbies.is_empty(),
            SectionKind::References => !resume.references.is_empty(),
            SectionKind::Internships => !resume.internships.is_empty(),
            SectionKind::Extracurricular => !resume.extracurricular.is_empty(),
            SectionKind::Links => !resume.links.is_empty(),
            SectionKind::CustomSections => !resume.custom_sections.is_empty(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record traits
// ────────────────────────────────────────────────────────────────────────────

/// The field set of an identified record, with its creation draft and
/// partial-update patch.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Payload accepted when a new entry is created.
    type Draft: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;
    /// Payload accepted when an entry is partially updated.
    type Patch: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static;

    fn from_draft(draft: Self::Draft) -> Self;

    /// Merges the named fields of `patch` into `self`, leaving the rest alone.
    fn apply(&mut self, patch: Self::Patch);
}

/// A record that lives in one of the resume's top-level collections.
pub trait Section: Record {
    const KIND: SectionKind;

    fn entries(resume: &Resume) -> &Vec<Entry<Self>>;
    fn entries_mut(resume: &mut Resume) -> &mut Vec<Entry<Self>>;
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub summary: RichText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: RichText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: RichText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    /// Proficiency from 1 (beginner) to 5 (expert).
    pub level: u8,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: 3,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub title: String,
    pub description: RichText,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Course {
    pub name: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub name: String,
    pub level: String,
}

impl Default for Language {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: "intermediate".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hobby {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Reference {
    pub full_name: String,
    pub company: String,
    pub role: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Internship {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: RichText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extracurricular {
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub description: RichText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// A user-titled section owning its own ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSection {
    pub title: String,
    pub items: Vec<Entry<CustomSectionItem>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomSectionItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<RichText>,
}

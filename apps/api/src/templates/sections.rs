//! Section builders shared by every template.

use crate::editor::dates::format_month_year;
use crate::models::resume::{CustomSection, PersonalInfo};
use crate::models::{Entry, Resume, RichText, SectionKind};
use crate::templates::{Block, LinkRef};

pub const PRESENT: &str = "Present";
pub const EMPTY_CUSTOM_SECTION: &str = "No items in this section";

/// Name, job title and contact line. Nothing at all for a blank profile.
pub fn header(personal: &PersonalInfo, separator: &str) -> Vec<Block> {
    let contacts = contacts(personal);
    if personal.full_name.trim().is_empty()
        && personal.job_title.trim().is_empty()
        && contacts.is_empty()
    {
        return Vec::new();
    }
    vec![Block::Header {
        name: personal.full_name.clone(),
        title: personal.job_title.clone(),
        contacts,
        separator: separator.to_string(),
    }]
}

pub fn contacts(personal: &PersonalInfo) -> Vec<String> {
    [
        Some(personal.email.as_str()),
        Some(personal.phone.as_str()),
        Some(personal.location.as_str()),
        personal.website.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|c| !c.trim().is_empty())
    .map(str::to_string)
    .collect()
}

/// `start - end`, with `Present` for ongoing entries and month names for
/// parseable dates. `None` when there is nothing to show.
pub fn date_range(start: &str, end: &str, current: bool) -> Option<String> {
    let start = (!start.trim().is_empty()).then(|| format_month_year(start));
    let end = if current {
        Some(PRESENT.to_string())
    } else {
        (!end.trim().is_empty()).then(|| format_month_year(end))
    };
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (Some(s), None) => Some(s),
        (None, Some(e)) => Some(e),
        (None, None) => None,
    }
}

/// Custom-section dates are shown as typed with the first `-` turned into `/`.
pub fn custom_date(value: &str) -> String {
    value.replacen('-', "/", 1)
}

pub fn custom_date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    let start = start.filter(|s| !s.is_empty()).map(custom_date);
    let end = end.filter(|s| !s.is_empty()).map(custom_date);
    match (start, end) {
        (Some(s), Some(e)) => Some(format!("{s} - {e}")),
        (s, e) => s.or(e),
    }
}

pub fn text(rich: &RichText) -> Option<Block> {
    if rich.is_blank() {
        return None;
    }
    Some(Block::Text {
        html: rich.to_safe_html(),
        plain: rich.plain_text(),
    })
}

fn heading(blocks: &mut Vec<Block>, title: Option<&str>) {
    if let Some(title) = title {
        blocks.push(Block::Heading {
            text: title.to_string(),
        });
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// The default rendering of `kind`, preceded by `title` when given.
pub fn standard(kind: SectionKind, resume: &Resume, title: Option<&str>) -> Vec<Block> {
    if kind == SectionKind::CustomSections {
        return resume.custom_sections.iter().flat_map(custom_section).collect();
    }

    let mut blocks = Vec::new();
    heading(&mut blocks, title);

    match kind {
        SectionKind::Summary => blocks.extend(text(&resume.personal.summary)),
        SectionKind::Experience => {
            for exp in &resume.experience {
                let exp = &exp.fields;
                blocks.push(Block::Entry {
                    title: exp.position.clone(),
                    subtitle: non_empty(&exp.company),
                    dates: date_range(&exp.start_date, &exp.end_date, exp.current),
                    detail: None,
                });
                blocks.extend(text(&exp.description));
            }
        }
        SectionKind::Education => {
            for edu in &resume.education {
                let edu = &edu.fields;
                let title = match non_empty(&edu.field) {
                    Some(field) => format!("{} in {field}", edu.degree),
                    None => edu.degree.clone(),
                };
                blocks.push(Block::Entry {
                    title,
                    subtitle: non_empty(&edu.institution),
                    dates: date_range(&edu.start_date, &edu.end_date, false),
                    detail: None,
                });
                blocks.extend(text(&edu.description));
            }
        }
        SectionKind::Skills => blocks.push(Block::Inline {
            items: resume.skills.iter().map(|s| s.fields.name.clone()).collect(),
        }),
        SectionKind::Projects => {
            for project in &resume.projects {
                let p = &project.fields;
                blocks.push(Block::Entry {
                    title: p.title.clone(),
                    subtitle: None,
                    dates: date_range(&p.start_date, &p.end_date, false),
                    detail: None,
                });
                blocks.extend(text(&p.description));
            }
        }
        SectionKind::Courses => {
            for course in &resume.courses {
                let c = &course.fields;
                blocks.push(Block::Entry {
                    title: c.name.clone(),
                    subtitle: non_empty(&c.institution),
                    dates: date_range(&c.start_date, &c.end_date, false),
                    detail: None,
                });
                if let Some(url) = c.certificate_link.as_deref().and_then(non_empty) {
                    blocks.push(Block::Links {
                        items: vec![LinkRef {
                            label: "Certificate Link".to_string(),
                            url,
                        }],
                    });
                }
            }
        }
        SectionKind::Languages => blocks.push(Block::Inline {
            items: resume
                .languages
                .iter()
                .map(|l| match non_empty(&l.fields.level) {
                    Some(level) => format!("{} ({level})", l.fields.name),
                    None => l.fields.name.clone(),
                })
                .collect(),
        }),
        SectionKind::Hobbies => blocks.push(Block::Inline {
            items: resume
                .hobbies
                .iter()
                .map(|h| h.fields.description.clone())
                .collect(),
        }),
        SectionKind::References => {
            for reference in &resume.references {
                let r = &reference.fields;
                let role = [r.role.as_str(), r.company.as_str()]
                    .into_iter()
                    .filter(|s| !s.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(", ");
                let reach = [r.email.as_str(), r.phone.as_str()]
                    .into_iter()
                    .filter(|s| !s.trim().is_empty())
                    .collect::<Vec<_>>()
                    .join(" · ");
                blocks.push(Block::Entry {
                    title: r.full_name.clone(),
                    subtitle: non_empty(&role),
                    dates: None,
                    detail: non_empty(&reach),
                });
            }
        }
        SectionKind::Internships => {
            for internship in &resume.internships {
                let i = &internship.fields;
                blocks.push(Block::Entry {
                    title: i.job_title.clone(),
                    subtitle: non_empty(&i.company),
                    dates: date_range(&i.start_date, &i.end_date, i.current),
                    detail: None,
                });
                blocks.extend(text(&i.description));
            }
        }
        SectionKind::Extracurricular => {
            for activity in &resume.extracurricular {
                let a = &activity.fields;
                blocks.push(Block::Entry {
                    title: a.title.clone(),
                    subtitle: None,
                    dates: date_range(&a.start_date, &a.end_date, false),
                    detail: None,
                });
                blocks.extend(text(&a.description));
            }
        }
        SectionKind::Links => blocks.push(links(resume)),
        SectionKind::CustomSections => {}
    }
    blocks
}

pub fn links(resume: &Resume) -> Block {
    Block::Links {
        items: resume
            .links
            .iter()
            .map(|l| LinkRef {
                label: l.fields.label.clone(),
                url: l.fields.url.clone(),
            })
            .collect(),
    }
}

/// A custom section under its own title; an empty one says so.
pub fn custom_section(section: &Entry<CustomSection>) -> Vec<Block> {
    let section = &section.fields;
    let mut blocks = vec![Block::Heading {
        text: section.title.clone(),
    }];
    if section.items.is_empty() {
        blocks.push(Block::Note {
            text: EMPTY_CUSTOM_SECTION.to_string(),
        });
        return blocks;
    }
    for item in &section.items {
        let item = &item.fields;
        blocks.push(Block::Entry {
            title: item.title.clone(),
            subtitle: item.location.as_deref().and_then(non_empty),
            dates: custom_date_range(item.start_date.as_deref(), item.end_date.as_deref()),
            detail: None,
        });
        if let Some(description) = &item.description {
            blocks.extend(text(description));
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{CustomSectionItem, Experience, Reference};
    use crate::models::EntityId;

    #[test]
    fn test_ongoing_entry_shows_present() {
        assert_eq!(
            date_range("2021-03", "2022-01", true).as_deref(),
            Some("Mar 2021 - Present")
        );
        assert_eq!(
            date_range("2019-01", "2020-06", false).as_deref(),
            Some("Jan 2019 - Jun 2020")
        );
        assert_eq!(date_range("", "", false), None);
    }

    #[test]
    fn test_custom_dates_replace_first_dash_only() {
        assert_eq!(custom_date("2023-09-01"), "2023/09-01");
        assert_eq!(
            custom_date_range(Some("2023-09"), Some("2024-01")).as_deref(),
            Some("2023/09 - 2024/01")
        );
        assert_eq!(custom_date_range(None, Some("2024-01")).as_deref(), Some("2024/01"));
        assert_eq!(custom_date_range(Some(""), None), None);
    }

    #[test]
    fn test_empty_custom_section_shows_note() {
        let section = Entry::new(
            EntityId::from("cs"),
            CustomSection {
                title: "Awards".into(),
                items: Vec::new(),
            },
        );
        let blocks = custom_section(&section);
        assert_eq!(
            blocks,
            vec![
                Block::Heading {
                    text: "Awards".into()
                },
                Block::Note {
                    text: EMPTY_CUSTOM_SECTION.into()
                },
            ]
        );
    }

    #[test]
    fn test_custom_item_location_and_dates() {
        let section = Entry::new(
            EntityId::from("cs"),
            CustomSection {
                title: "Talks".into(),
                items: vec![Entry::new(
                    EntityId::from("i1"),
                    CustomSectionItem {
                        title: "Keynote".into(),
                        location: Some("Lisbon".into()),
                        start_date: Some("2024-05".into()),
                        ..Default::default()
                    },
                )],
            },
        );
        let blocks = custom_section(&section);
        assert_eq!(
            blocks[1],
            Block::Entry {
                title: "Keynote".into(),
                subtitle: Some("Lisbon".into()),
                dates: Some("2024/05".into()),
                detail: None,
            }
        );
    }

    #[test]
    fn test_blank_optional_fields_are_not_rendered() {
        let section = Entry::new(
            EntityId::from("cs"),
            CustomSection {
                title: "Talks".into(),
                items: vec![Entry::new(
                    EntityId::from("i1"),
                    CustomSectionItem {
                        title: "Keynote".into(),
                        location: Some("  ".into()),
                        start_date: Some(String::new()),
                        end_date: Some(String::new()),
                        description: Some(RichText::from("")),
                    },
                )],
            },
        );
        assert_eq!(
            custom_section(&section)[1..],
            [Block::Entry {
                title: "Keynote".into(),
                subtitle: None,
                dates: None,
                detail: None,
            }]
        );
    }

    #[test]
    fn test_experience_description_is_sanitized() {
        let mut resume = Resume::default();
        resume.experience.push(Entry::new(
            EntityId::from("e1"),
            Experience {
                position: "Engineer".into(),
                description: RichText::from("<b>Shipped</b><script>alert(1)</script>"),
                ..Default::default()
            },
        ));
        let blocks = standard(SectionKind::Experience, &resume, Some("Experience"));
        let html = blocks
            .iter()
            .find_map(|b| match b {
                Block::Text { html, .. } => Some(html.clone()),
                _ => None,
            })
            .unwrap();
        assert!(html.contains("<b>Shipped</b>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_reference_lines() {
        let mut resume = Resume::default();
        resume.references.push(Entry::new(
            EntityId::from("r1"),
            Reference {
                full_name: "Grace Hopper".into(),
                company: "Navy".into(),
                role: "Rear Admiral".into(),
                email: "grace@navy.mil".into(),
                phone: String::new(),
            },
        ));
        let blocks = standard(SectionKind::References, &resume, None);
        assert_eq!(
            blocks,
            vec![Block::Entry {
                title: "Grace Hopper".into(),
                subtitle: Some("Rear Admiral, Navy".into()),
                dates: None,
                detail: Some("grace@navy.mil".into()),
            }]
        );
    }

    #[test]
    fn test_blank_profile_has_no_header() {
        assert!(header(&PersonalInfo::default(), " ").is_empty());
    }
}

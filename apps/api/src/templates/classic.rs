//! Classic: centered serif header, ruled section headings, every section.

use crate::layout::FontFamily;
use crate::models::SectionKind;
use crate::templates::TemplateRenderer;

pub struct Classic;

const SECTIONS: &[SectionKind] = &[
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Projects,
    SectionKind::Internships,
    SectionKind::Courses,
    SectionKind::Extracurricular,
    SectionKind::Languages,
    SectionKind::References,
    SectionKind::Hobbies,
    SectionKind::Links,
    SectionKind::CustomSections,
];

impl TemplateRenderer for Classic {
    fn id(&self) -> &'static str {
        "classic"
    }

    fn font(&self) -> FontFamily {
        FontFamily::Merriweather
    }

    fn sections(&self) -> &'static [SectionKind] {
        SECTIONS
    }

    fn heading(&self, kind: SectionKind) -> Option<&'static str> {
        Some(match kind {
            SectionKind::Summary => "Profile Summary",
            SectionKind::Experience => "Professional Experience",
            SectionKind::Education => "Education",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Courses => "Courses & Certifications",
            SectionKind::Languages => "Languages",
            SectionKind::Hobbies => "Hobbies & Interests",
            SectionKind::References => "References",
            SectionKind::Internships => "Internships",
            SectionKind::Extracurricular => "Extracurricular Activities",
            SectionKind::Links => "Social",
            SectionKind::CustomSections => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Hobby;
    use crate::models::sample::sample_resume;
    use crate::models::{EntityId, Entry};
    use crate::templates::{render_with, Block};

    #[test]
    fn test_classic_covers_every_section_kind() {
        for kind in SectionKind::ALL {
            assert!(SECTIONS.contains(&kind), "{kind:?} missing");
        }
    }

    #[test]
    fn test_classic_renders_hobbies_and_custom_sections() {
        let mut resume = sample_resume();
        resume.hobbies.push(Entry::new(
            EntityId::from("h1"),
            Hobby {
                description: "Bouldering".into(),
            },
        ));
        let rendered = render_with(&resume, "classic");
        assert!(rendered.blocks.contains(&Block::Heading {
            text: "Hobbies & Interests".into()
        }));
        assert!(rendered.blocks.contains(&Block::Heading {
            text: "Talks".into()
        }));
        assert_eq!(rendered.sections.last(), Some(&SectionKind::CustomSections));
    }
}

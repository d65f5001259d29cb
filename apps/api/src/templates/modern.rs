//! Modern: accent-colored uppercase headings and skill proficiency bars.

use crate::layout::FontFamily;
use crate::models::{Resume, SectionKind};
use crate::templates::{sections, Block, TemplateRenderer};

pub struct Modern;

const SECTIONS: &[SectionKind] = &[
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Skills,
    SectionKind::Education,
    SectionKind::Projects,
    SectionKind::Languages,
    SectionKind::Links,
];

impl TemplateRenderer for Modern {
    fn id(&self) -> &'static str {
        "modern"
    }

    fn font(&self) -> FontFamily {
        FontFamily::Inter
    }

    fn sections(&self) -> &'static [SectionKind] {
        SECTIONS
    }

    fn heading(&self, kind: SectionKind) -> Option<&'static str> {
        match kind {
            SectionKind::Summary => Some("PROFILE"),
            SectionKind::Experience => Some("EXPERIENCE"),
            SectionKind::Skills => Some("SKILLS"),
            SectionKind::Education => Some("EDUCATION"),
            SectionKind::Projects => Some("PROJECTS"),
            SectionKind::Languages => Some("LANGUAGES"),
            SectionKind::Links => Some("LINKS"),
            _ => None,
        }
    }

    fn section(&self, kind: SectionKind, resume: &Resume) -> Vec<Block> {
        if kind != SectionKind::Skills {
            return sections::standard(kind, resume, self.heading(kind));
        }
        let mut blocks = vec![Block::Heading {
            text: "SKILLS".to_string(),
        }];
        blocks.extend(resume.skills.iter().map(|s| Block::Meter {
            label: s.fields.name.clone(),
            level: s.fields.level.clamp(1, 5),
        }));
        blocks
    }
}

//! Minimal: links up front, summary without a heading, then the essentials.

use crate::layout::FontFamily;
use crate::models::SectionKind;
use crate::templates::TemplateRenderer;

pub struct Minimal;

const SECTIONS: &[SectionKind] = &[
    SectionKind::Links,
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
];

impl TemplateRenderer for Minimal {
    fn id(&self) -> &'static str {
        "minimal"
    }

    fn font(&self) -> FontFamily {
        FontFamily::Inter
    }

    fn sections(&self) -> &'static [SectionKind] {
        SECTIONS
    }

    fn heading(&self, kind: SectionKind) -> Option<&'static str> {
        match kind {
            SectionKind::Links => Some("Links"),
            SectionKind::Experience => Some("Experience"),
            SectionKind::Education => Some("Education"),
            SectionKind::Skills => Some("Skills"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::sample::sample_resume;
    use crate::templates::{render_with, Block};

    #[test]
    fn test_minimal_summary_has_no_heading() {
        let rendered = render_with(&sample_resume(), "minimal");
        let summary_at = rendered
            .blocks
            .iter()
            .position(|b| matches!(b, Block::Text { plain, .. } if plain.starts_with("Backend engineer")))
            .unwrap();
        assert!(!matches!(rendered.blocks[summary_at - 1], Block::Heading { .. }));
    }
}

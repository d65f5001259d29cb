//! Template projection: pure functions from a resume snapshot to a block
//! layout and its HTML.
//!
//! Each renderer declares the sections it shows, in order. Rendering walks that
//! list and skips sections the document has nothing for. `selectedTemplate`
//! values without a renderer (catalog-only designs, typos) get Classic.

pub mod catalog;
pub mod classic;
pub mod handlers;
pub mod html;
pub mod minimal;
pub mod modern;
pub mod professional;
pub mod sections;

use serde::Serialize;

use crate::layout::FontFamily;
use crate::models::resume::PersonalInfo;
use crate::models::{Resume, SectionKind};

pub use catalog::{find_template, TemplateInfo, CATALOG};

// ────────────────────────────────────────────────────────────────────────────
// Layout blocks
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRef {
    pub label: String,
    pub url: String,
}

/// One vertically stacked piece of a rendered resume.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        name: String,
        title: String,
        contacts: Vec<String>,
        separator: String,
    },
    Heading {
        text: String,
    },
    /// A dated entry line: title, optional subtitle, date range and a detail line.
    Entry {
        title: String,
        subtitle: Option<String>,
        dates: Option<String>,
        detail: Option<String>,
    },
    /// Sanitized rich text with its plain-text rendering.
    Text {
        html: String,
        plain: String,
    },
    Bullets {
        items: Vec<String>,
    },
    /// Short items laid out side by side.
    Inline {
        items: Vec<String>,
    },
    Links {
        items: Vec<LinkRef>,
    },
    /// A skill with a proficiency bar (level 1-5).
    Meter {
        label: String,
        level: u8,
    },
    Note {
        text: String,
    },
    Divider,
}

// ────────────────────────────────────────────────────────────────────────────
// Renderers
// ────────────────────────────────────────────────────────────────────────────

pub trait TemplateRenderer: Send + Sync {
    fn id(&self) -> &'static str;

    fn font(&self) -> FontFamily;

    /// Sections this template shows, in display order.
    fn sections(&self) -> &'static [SectionKind];

    /// Heading shown above a section; `None` shows the section without one.
    fn heading(&self, kind: SectionKind) -> Option<&'static str>;

    fn header(&self, personal: &PersonalInfo) -> Vec<Block> {
        sections::header(personal, "   ")
    }

    fn section(&self, kind: SectionKind, resume: &Resume) -> Vec<Block> {
        sections::standard(kind, resume, self.heading(kind))
    }
}

static CLASSIC: classic::Classic = classic::Classic;
static MODERN: modern::Modern = modern::Modern;
static MINIMAL: minimal::Minimal = minimal::Minimal;
static PROFESSIONAL: professional::Professional = professional::Professional;

/// The renderer for `template_id`, Classic when there is none.
pub fn renderer_for(template_id: &str) -> &'static dyn TemplateRenderer {
    match template_id {
        "modern" => &MODERN,
        "minimal" => &MINIMAL,
        "professional" => &PROFESSIONAL,
        _ => &CLASSIC,
    }
}

/// Ids that have a renderer of their own.
pub fn has_renderer(template_id: &str) -> bool {
    renderer_for(template_id).id() == template_id
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResume {
    /// The template id the document asked for.
    pub requested_template: String,
    /// The renderer that actually produced the output.
    pub template_id: &'static str,
    pub font: FontFamily,
    pub accent_color: &'static str,
    /// Sections that produced output, in order.
    pub sections: Vec<SectionKind>,
    pub blocks: Vec<Block>,
    pub html: String,
}

/// Renders `resume` with its selected template.
pub fn render(resume: &Resume) -> RenderedResume {
    render_with(resume, &resume.selected_template)
}

/// Renders `resume` with `template_id`, regardless of its own selection.
pub fn render_with(resume: &Resume, template_id: &str) -> RenderedResume {
    let renderer = renderer_for(template_id);

    let mut blocks = renderer.header(&resume.personal);
    let mut shown = Vec::new();
    for &kind in renderer.sections() {
        if !kind.has_content(resume) {
            continue;
        }
        let section = renderer.section(kind, resume);
        if !section.is_empty() {
            shown.push(kind);
            blocks.extend(section);
        }
    }

    let accent_color = find_template(renderer.id())
        .map(|t| t.color)
        .unwrap_or("#0072b1");
    let html = html::to_html(&blocks, renderer.id(), renderer.font(), accent_color);

    RenderedResume {
        requested_template: template_id.to_string(),
        template_id: renderer.id(),
        font: renderer.font(),
        accent_color,
        sections: shown,
        blocks,
        html,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::sample_resume;

    #[test]
    fn test_unknown_template_falls_back_to_classic() {
        let mut resume = sample_resume();
        resume.selected_template = "does-not-exist".into();
        let rendered = render(&resume);
        assert_eq!(rendered.template_id, "classic");
        assert_eq!(rendered.requested_template, "does-not-exist");
    }

    #[test]
    fn test_catalog_only_template_falls_back_to_classic() {
        let rendered = render_with(&sample_resume(), "executive");
        assert_eq!(rendered.template_id, "classic");
        assert!(!has_renderer("executive"));
        assert!(has_renderer("minimal"));
    }

    #[test]
    fn test_sections_follow_declared_order() {
        let resume = sample_resume();
        for id in ["classic", "modern", "minimal", "professional"] {
            let renderer = renderer_for(id);
            let rendered = render_with(&resume, id);
            let declared: Vec<_> = renderer
                .sections()
                .iter()
                .copied()
                .filter(|k| k.has_content(&resume))
                .collect();
            assert_eq!(rendered.sections, declared, "template {id}");
        }
    }

    #[test]
    fn test_minimal_leaves_out_undeclared_sections() {
        let rendered = render_with(&sample_resume(), "minimal");
        assert!(!rendered.sections.contains(&SectionKind::Projects));
        assert!(!rendered.sections.contains(&SectionKind::CustomSections));
        assert_eq!(rendered.sections.first(), Some(&SectionKind::Links));
    }

    #[test]
    fn test_empty_document_renders_no_sections() {
        let rendered = render(&Resume::default());
        assert!(rendered.sections.is_empty());
        assert!(rendered.blocks.is_empty());
    }

    #[test]
    fn test_render_is_pure() {
        let resume = sample_resume();
        let before = resume.clone();
        let a = render(&resume);
        let b = render(&resume);
        assert_eq!(a.blocks, b.blocks);
        assert_eq!(a.html, b.html);
        assert_eq!(resume, before);
    }

    #[test]
    fn test_accent_color_comes_from_catalog() {
        assert_eq!(render_with(&sample_resume(), "modern").accent_color, "#2a9d8f");
    }
}

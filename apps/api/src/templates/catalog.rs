//! The template gallery. Only some entries have a renderer of their own; the
//! rest preview and render as Classic.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Accent colour as a CSS hex value.
    pub color: &'static str,
    pub is_modern: bool,
    pub is_minimal: bool,
    pub is_professional: bool,
    pub is_creative: bool,
}

pub static CATALOG: [TemplateInfo; 10] = [
    TemplateInfo {
        id: "classic",
        name: "Classic",
        description: "Traditional and ATS-friendly template with a clean layout",
        color: "#0072b1",
        is_modern: false,
        is_minimal: true,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "modern",
        name: "Modern",
        description: "Contemporary design with a professional touch",
        color: "#2a9d8f",
        is_modern: true,
        is_minimal: false,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "minimal",
        name: "Minimal",
        description: "Clean and simple design focusing on content",
        color: "#6c757d",
        is_modern: false,
        is_minimal: true,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "professional",
        name: "Professional",
        description: "Structured layout with clear section dividers",
        color: "#000000",
        is_modern: false,
        is_minimal: false,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "executive",
        name: "Executive",
        description: "Sophisticated template for senior positions",
        color: "#343a40",
        is_modern: false,
        is_minimal: false,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "creative",
        name: "Creative",
        description: "Unique layout for design and creative fields",
        color: "#e76f51",
        is_modern: true,
        is_minimal: false,
        is_professional: false,
        is_creative: true,
    },
    TemplateInfo {
        id: "corporate",
        name: "Corporate",
        description: "Professional template ideal for business positions",
        color: "#1d3557",
        is_modern: false,
        is_minimal: false,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "simple",
        name: "Simple",
        description: "Direct and clean layout focusing on experience",
        color: "#495057",
        is_modern: false,
        is_minimal: true,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "tech",
        name: "Tech",
        description: "Tech-focused template highlighting skills",
        color: "#3a86ff",
        is_modern: true,
        is_minimal: false,
        is_professional: true,
        is_creative: false,
    },
    TemplateInfo {
        id: "elegant",
        name: "Elegant",
        description: "Sophisticated design with elegant typography",
        color: "#7209b7",
        is_modern: true,
        is_minimal: false,
        is_professional: true,
        is_creative: true,
    },
];

pub fn find_template(id: &str) -> Option<&'static TemplateInfo> {
    CATALOG.iter().find(|t| t.id == id)
}

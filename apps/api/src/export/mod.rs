//! Export planning.
//!
//! The server does not rasterize. It renders the snapshot, paginates the
//! block layout and hands the client an `ExportPlan`: file name, MIME type,
//! canvas size at the configured scale, the page bands to slice and the HTML
//! to draw. PDF gets one band per page; PNG gets a single band spanning the
//! whole layout.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::layout::{paginate, BlockPlacement, PageBand, PageConfig};
use crate::models::Resume;
use crate::templates::render;

// ────────────────────────────────────────────────────────────────────────────
// Formats and errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Png,
    Docx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
            ExportFormat::Docx => "docx",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Png => "image/png",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Png => "PNG",
            ExportFormat::Docx => "Word",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "png" | "image" => Ok(ExportFormat::Png),
            "docx" | "word" => Ok(ExportFormat::Docx),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown export format '{0}'")]
    UnknownFormat(String),

    #[error("{0} export will be available in a future update")]
    NotSupported(ExportFormat),

    #[error("The resume has no content to export")]
    EmptyLayout,

    #[error("Export scale must be between 1 and 4, got {0}")]
    InvalidScale(u32),
}

// ────────────────────────────────────────────────────────────────────────────
// Plan
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportPlan {
    pub format: ExportFormat,
    pub file_name: String,
    pub mime_type: &'static str,
    pub template_id: &'static str,
    /// Device-pixel multiplier for the rasterizer.
    pub scale: u32,
    pub page_width_px: f32,
    pub page_height_px: f32,
    /// Canvas size at `scale`.
    pub canvas_width_px: f32,
    pub canvas_height_px: f32,
    pub page_count: u32,
    pub bands: Vec<PageBand>,
    pub placements: Vec<BlockPlacement>,
    pub html: String,
}

/// `{slug}-resume.{ext}`, or `resume.{ext}` when the name has no usable characters.
pub fn export_file_name(full_name: &str, format: ExportFormat) -> String {
    let mut slug = String::new();
    for c in full_name.trim().chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        format!("resume.{}", format.extension())
    } else {
        format!("{slug}-resume.{}", format.extension())
    }
}

/// Renders `resume` with its selected template and lays it out for `format`.
pub fn plan_export(
    resume: &Resume,
    format: ExportFormat,
    config: &PageConfig,
    scale: u32,
) -> Result<ExportPlan, ExportError> {
    if format == ExportFormat::Docx {
        return Err(ExportError::NotSupported(format));
    }
    if !(1..=4).contains(&scale) {
        return Err(ExportError::InvalidScale(scale));
    }

    let rendered = render(resume);
    if rendered.blocks.is_empty() {
        return Err(ExportError::EmptyLayout);
    }

    let pagination = paginate(&rendered.blocks, rendered.font, config);
    let bands = match format {
        ExportFormat::Png => vec![PageBand {
            page: 1,
            top_px: 0.0,
            height_px: pagination.content_height_px,
        }],
        _ => pagination.bands,
    };

    let factor = scale as f32;
    Ok(ExportPlan {
        format,
        file_name: export_file_name(&resume.personal.full_name, format),
        mime_type: format.mime_type(),
        template_id: rendered.template_id,
        scale,
        page_width_px: config.page_width_px,
        page_height_px: config.page_height_px,
        canvas_width_px: config.page_width_px * factor,
        canvas_height_px: pagination.content_height_px * factor,
        page_count: bands.len() as u32,
        bands,
        placements: pagination.placements,
        html: rendered.html,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

//! Pagination: estimates the height of every rendered block and slices the
//! stacked layout into fixed-height page bands.
//!
//! Heights follow the renderers' CSS (Tailwind sizes at 72 DPI): 14 px body
//! text, 16 px entry titles, 18 px headings, 24 px names. Widths come from the
//! static font-metric tables, so wrapping is estimated, not measured.

use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::{get_metrics, FontFamily, FontMetricTable, PageConfig};
use crate::templates::Block;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Where one block lands in the stacked layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockPlacement {
    /// Index into the rendered block list.
    pub index: usize,
    pub top_px: f32,
    pub height_px: f32,
    /// 1-based page the block starts on.
    pub page: u32,
}

/// A horizontal slice of the layout that becomes one output page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBand {
    pub page: u32,
    pub top_px: f32,
    pub height_px: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Full layout height including the top and bottom padding.
    pub content_height_px: f32,
    pub page_count: u32,
    pub bands: Vec<PageBand>,
    pub placements: Vec<BlockPlacement>,
    /// How much of the last page is used, 0.0-1.0.
    pub last_page_fill: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Sizes
// ────────────────────────────────────────────────────────────────────────────

const NAME_PX: f32 = 24.0;
const TITLE_PX: f32 = 18.0;
const HEADING_PX: f32 = 18.0;
const ENTRY_TITLE_PX: f32 = 16.0;
const HEADER_GAP_PX: f32 = 24.0;
const HEADING_RULE_PX: f32 = 12.0;
const SECTION_GAP_PX: f32 = 16.0;
const ENTRY_GAP_PX: f32 = 12.0;
const CHIP_LINE_PX: f32 = 30.0;
const CHIP_PADDING_PX: f32 = 24.0;
const CHIP_GAP_PX: f32 = 8.0;
const BULLET_INDENT_PX: f32 = 20.0;
const DIVIDER_PX: f32 = 33.0;

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Estimated rendered height of `block` in px.
pub fn block_height(block: &Block, font: FontFamily, config: &PageConfig) -> f32 {
    let metrics = get_metrics(&font);
    let body = config.body_size_px;
    let width_px = config.content_width_px();
    let text_lines = |s: &str, size: f32, width: f32| metrics.estimated_lines(s, width / size);

    match block {
        Block::Header {
            name,
            title,
            contacts,
            separator,
        } => {
            let name_h = config.lines_px(text_lines(name, NAME_PX, width_px), NAME_PX);
            let title_h = config.lines_px(text_lines(title, TITLE_PX, width_px), TITLE_PX);
            let gap_em = metrics.measure_str(separator).max(1.0);
            let contact_lines = metrics.run_lines(
                contacts.iter().map(String::as_str),
                gap_em,
                width_px / body,
            );
            name_h + title_h + config.lines_px(contact_lines, body) + HEADER_GAP_PX
        }
        Block::Heading { text } => {
            SECTION_GAP_PX
                + config.lines_px(text_lines(text, HEADING_PX, width_px), HEADING_PX)
                + HEADING_RULE_PX
        }
        Block::Entry {
            title,
            subtitle,
            dates,
            detail,
        } => {
            // Dates share the title line and narrow it.
            let dates_px = dates
                .as_deref()
                .map(|d| metrics.measure_str(d) * body + 8.0)
                .unwrap_or(0.0);
            let title_w = (width_px - dates_px).max(width_px / 2.0);
            let title_lines = text_lines(title, ENTRY_TITLE_PX, title_w).max(1);
            let mut h = config.lines_px(title_lines, ENTRY_TITLE_PX);
            for line in [subtitle, detail].into_iter().flatten() {
                h += config.lines_px(text_lines(line, body, width_px), body);
            }
            h + ENTRY_GAP_PX / 2.0
        }
        Block::Text { plain, .. } => {
            config.lines_px(text_lines(plain, body, width_px), body) + ENTRY_GAP_PX / 2.0
        }
        Block::Bullets { items } => {
            let inner = width_px - BULLET_INDENT_PX;
            let lines = items
                .iter()
                .map(|i| text_lines(i, body, inner).max(1))
                .fold(0u16, u16::saturating_add);
            config.lines_px(lines, body) + 4.0 * items.len() as f32 + ENTRY_GAP_PX / 2.0
        }
        Block::Inline { items } => chip_height(metrics, items.iter().map(String::as_str), config),
        Block::Links { items } => {
            chip_height(metrics, items.iter().map(|l| l.label.as_str()), config)
        }
        Block::Meter { .. } => config.lines_px(1, body) + ENTRY_GAP_PX / 2.0,
        Block::Note { text } => config.lines_px(text_lines(text, body, width_px).max(1), body),
        Block::Divider => DIVIDER_PX,
    }
}

/// Chips: padded items separated by a gap, wrapped as whole items.
fn chip_height<'a>(
    metrics: &FontMetricTable,
    items: impl Iterator<Item = &'a str>,
    config: &PageConfig,
) -> f32 {
    let body = config.body_size_px;
    let padding_em = CHIP_PADDING_PX / body;
    let lines = metrics.run_lines(
        items,
        padding_em + CHIP_GAP_PX / body,
        config.width_em(body) - padding_em,
    );
    lines as f32 * CHIP_LINE_PX + ENTRY_GAP_PX / 2.0
}

/// Slices `total_height_px` into consecutive bands of `band_height_px`; the
/// last band holds the remainder. Always at least one band.
pub fn slice_bands(total_height_px: f32, band_height_px: f32) -> Vec<PageBand> {
    let total = total_height_px.max(0.0);
    if band_height_px <= 0.0 {
        return vec![PageBand {
            page: 1,
            top_px: 0.0,
            height_px: total,
        }];
    }
    let count = ((total / band_height_px).ceil() as u32).max(1);

    (0..count)
        .map(|i| {
            let top = i as f32 * band_height_px;
            PageBand {
                page: i + 1,
                top_px: top,
                height_px: (total - top).min(band_height_px),
            }
        })
        .collect()
}

/// Stacks `blocks` from the top padding down and slices the result into
/// pages of `config.page_height_px`.
pub fn paginate(blocks: &[Block], font: FontFamily, config: &PageConfig) -> Pagination {
    let page_h = config.page_height_px;
    let mut top = config.padding_px;
    let mut placements = Vec::with_capacity(blocks.len());

    for (index, block) in blocks.iter().enumerate() {
        let height = block_height(block, font, config);
        placements.push(BlockPlacement {
            index,
            top_px: top,
            height_px: height,
            page: (top / page_h).floor() as u32 + 1,
        });
        top += height;
    }

    let content_height_px = top + config.padding_px;
    let bands = slice_bands(content_height_px, page_h);
    let page_count = bands.len() as u32;
    let last_page_fill = bands
        .last()
        .map(|b| (b.height_px / page_h).clamp(0.0, 1.0))
        .unwrap_or(0.0);

    Pagination {
        content_height_px,
        page_count,
        bands,
        placements,
        last_page_fill,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::a4_page_config;

    fn paragraph(words: usize) -> Block {
        let plain = "resilient ".repeat(words).trim_end().to_string();
        Block::Text {
            html: plain.clone(),
            plain,
        }
    }

    #[test]
    fn test_slice_bands_exact_multiple() {
        let bands = slice_bands(1684.0, 842.0);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[1].top_px, 842.0);
        assert_eq!(bands[1].height_px, 842.0);
    }

    #[test]
    fn test_slice_bands_remainder_on_last_page() {
        let bands = slice_bands(2000.0, 842.0);
        assert_eq!(bands.len(), 3);
        assert_eq!(bands[2].page, 3);
        assert!((bands[2].height_px - 316.0).abs() < 1e-3);
    }

    #[test]
    fn test_slice_bands_short_layout_is_one_page() {
        let bands = slice_bands(300.0, 842.0);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].height_px, 300.0);
    }

    #[test]
    fn test_longer_text_is_taller() {
        let config = a4_page_config();
        let short = block_height(&paragraph(5), FontFamily::Inter, &config);
        let long = block_height(&paragraph(200), FontFamily::Inter, &config);
        assert!(long > short * 5.0);
    }

    #[test]
    fn test_serif_wraps_sooner() {
        let config = a4_page_config();
        let block = paragraph(300);
        assert!(
            block_height(&block, FontFamily::Merriweather, &config)
                > block_height(&block, FontFamily::Inter, &config)
        );
    }

    #[test]
    fn test_placements_are_stacked_and_paged() {
        let config = a4_page_config();
        let blocks: Vec<Block> = (0..12).map(|_| paragraph(120)).collect();
        let pagination = paginate(&blocks, FontFamily::Inter, &config);

        assert_eq!(pagination.placements.len(), 12);
        assert_eq!(pagination.placements[0].top_px, config.padding_px);
        assert_eq!(pagination.placements[0].page, 1);
        for pair in pagination.placements.windows(2) {
            let expected = pair[0].top_px + pair[0].height_px;
            assert!((pair[1].top_px - expected).abs() < 1e-3);
            assert!(pair[1].page >= pair[0].page);
        }
        assert!(pagination.page_count >= 2);
        assert_eq!(pagination.bands.len() as u32, pagination.page_count);
        let last = pagination.placements.last().unwrap();
        assert!(last.page <= pagination.page_count);
        assert!(pagination.last_page_fill > 0.0 && pagination.last_page_fill <= 1.0);
    }

    #[test]
    fn test_huge_line_counts_do_not_overflow() {
        let config = a4_page_config();
        let entry = Block::Entry {
            title: "a\n".repeat(70_000),
            subtitle: None,
            dates: None,
            detail: None,
        };
        assert!(block_height(&entry, FontFamily::Inter, &config) > 100_000.0);

        let bullets = Block::Bullets {
            items: vec!["a\n".repeat(40_000), "b\n".repeat(40_000)],
        };
        assert!(block_height(&bullets, FontFamily::Inter, &config) > 100_000.0);
    }

    #[test]
    fn test_empty_layout_is_one_padded_page() {
        let config = a4_page_config();
        let pagination = paginate(&[], FontFamily::Inter, &config);
        assert_eq!(pagination.page_count, 1);
        assert_eq!(pagination.content_height_px, 2.0 * config.padding_px);
    }
}

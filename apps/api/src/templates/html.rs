//! HTML serialization of a block layout. Interpolated document strings are
//! escaped by maud; rich text arrives already sanitized.

use maud::{html, Markup, PreEscaped};

use crate::layout::FontFamily;
use crate::templates::Block;

pub fn to_html(blocks: &[Block], template_id: &str, font: FontFamily, accent: &str) -> String {
    html! {
        article
            class={ "resume template-" (template_id) }
            style={ "font-family: " (font.css_stack()) "; --accent: " (accent) ";" }
        {
            @for block in blocks {
                (block_markup(block))
            }
        }
    }
    .into_string()
}

fn block_markup(block: &Block) -> Markup {
    match block {
        Block::Header {
            name,
            title,
            contacts,
            separator,
        } => html! {
            header class="resume-header" {
                @if !name.is_empty() {
                    h1 { (name) }
                }
                @if !title.is_empty() {
                    p class="job-title" { (title) }
                }
                @if !contacts.is_empty() {
                    p class="contacts" {
                        @for (i, contact) in contacts.iter().enumerate() {
                            @if i > 0 {
                                (separator)
                            }
                            span { (contact) }
                        }
                    }
                }
            }
        },
        Block::Heading { text } => html! {
            h2 class="section-heading" { (text) }
        },
        Block::Entry {
            title,
            subtitle,
            dates,
            detail,
        } => html! {
            div class="entry" {
                div class="entry-head" {
                    h3 { (title) }
                    @if let Some(dates) = dates {
                        span class="dates" { (dates) }
                    }
                }
                @if let Some(subtitle) = subtitle {
                    p class="subtitle" { (subtitle) }
                }
                @if let Some(detail) = detail {
                    p class="detail" { (detail) }
                }
            }
        },
        Block::Text { html: markup, .. } => html! {
            div class="rich-text" { (PreEscaped(markup)) }
        },
        Block::Bullets { items } => html! {
            ul class="bullets" {
                @for item in items {
                    li { (item) }
                }
            }
        },
        Block::Inline { items } => html! {
            ul class="inline-list" {
                @for item in items {
                    li { (item) }
                }
            }
        },
        Block::Links { items } => html! {
            ul class="links" {
                @for link in items {
                    @if is_web_url(&link.url) {
                        li {
                            a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.label) }
                        }
                    } @else {
                        li { (link.label) }
                    }
                }
            }
        },
        Block::Meter { label, level } => html! {
            div class="meter" {
                span class="label" { (label) }
                span class="bar" {
                    span class="fill" style={ "width: " (u32::from(*level) * 20) "%" } {}
                }
            }
        },
        Block::Note { text } => html! {
            p class="note" { (text) }
        },
        Block::Divider => html! { hr; },
    }
}

/// Only http(s) links become anchors.
fn is_web_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

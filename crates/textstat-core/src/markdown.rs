//! Markdown preprocessing.
//!
//! Statistics over a markdown file should describe what a reader sees, not
//! the markup. Parsing uses pulldown-cmark so fenced code, reference links and
//! entities are handled the way a renderer would handle them.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Render markdown to plain prose for counting.
///
/// Dropped: YAML frontmatter, code blocks, inline code, raw HTML, image alt
/// text, link destinations and emphasis markers.
///
/// Every block (paragraph, heading, list, blockquote, table) is followed by a
/// blank line, so [`count_paragraphs`](crate::metrics::count_paragraphs) still
/// sees one paragraph per block. List items and table rows end with a single
/// newline and stay inside their block.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_YAML_STYLE_METADATA_BLOCKS;
    let parser = Parser::new_ext(text, options);

    let mut out = String::with_capacity(text.len());
    let mut skip_depth: usize = 0;
    let mut list_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Image { .. } | Tag::MetadataBlock(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Image | TagEnd::MetadataBlock(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => out.push('\n'),

            Event::Start(Tag::List(_)) => {
                list_depth += 1;
                end_line(&mut out);
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    close_block(&mut out);
                } else {
                    end_line(&mut out);
                }
            }
            Event::Start(Tag::Item) => end_line(&mut out),

            Event::End(TagEnd::TableCell) => out.push(' '),
            Event::End(TagEnd::Item | TagEnd::TableHead | TagEnd::TableRow) => {
                end_line(&mut out);
            }
            Event::End(
                TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::BlockQuote(_) | TagEnd::Table,
            ) => close_block(&mut out),

            _ => {}
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// End the current line unless it is already ended.
fn end_line(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Terminate the current block with a blank line.
fn close_block(out: &mut String) {
    if out.is_empty() {
        return;
    }
    while !out.ends_with("\n\n") {
        out.push('\n');
    }
}

//! Markdown rendering of Notion blocks
//!
//! Each supported block kind maps to a fixed template; unsupported kinds
//! produce nothing. Rendering is a pure function of the block list.

use crate::types::Block;

/// Render a block list to a Markdown string
///
/// | block | output |
/// |---|---|
/// | paragraph | `text\n\n` |
/// | heading 1/2/3 | `# text\n\n`, `## text\n\n`, `### text\n\n` |
/// | bulleted item | `* text\n` |
/// | numbered item | `1. text\n` |
/// | code | `` ```lang\ntext\n```\n\n `` |
///
/// Numbered items always use the literal ordinal `1.`; Markdown renderers
/// renumber the list.
///
/// # Examples
///
/// ```
/// use notion_notes::render::render_markdown;
/// use notion_notes::types::Block;
///
/// let blocks = vec![Block::Paragraph(vec!["Hello".into()])];
/// assert_eq!(render_markdown(&blocks), "Hello\n\n");
/// ```
#[must_use]
pub fn render_markdown(blocks: &[Block]) -> String {
    let mut markdown = String::new();
    for block in blocks {
        render_block(block, &mut markdown);
    }
    markdown
}

fn render_block(block: &Block, out: &mut String) {
    let text = block.plain_text();
    match block {
        Block::Paragraph(_) => {
            out.push_str(&text);
            out.push_str("\n\n");
        }
        Block::Heading1(_) => push_heading(out, 1, &text),
        Block::Heading2(_) => push_heading(out, 2, &text),
        Block::Heading3(_) => push_heading(out, 3, &text),
        Block::BulletedListItem(_) => {
            out.push_str("* ");
            out.push_str(&text);
            out.push('\n');
        }
        Block::NumberedListItem(_) => {
            out.push_str("1. ");
            out.push_str(&text);
            out.push('\n');
        }
        Block::Code { language, .. } => {
            out.push_str("```");
            out.push_str(language.as_deref().unwrap_or(""));
            out.push('\n');
            out.push_str(&text);
            out.push_str("\n```\n\n");
        }
        Block::Unsupported { .. } => {}
    }
}

fn push_heading(out: &mut String, level: usize, text: &str) {
    out.push_str(&"#".repeat(level));
    out.push(' ');
    out.push_str(text);
    out.push_str("\n\n");
}

//! Notion API response shapes and their conversion to domain types

use crate::error::{Error, Result};
use crate::types::{Block, Document, DocumentId, RichText, UNTITLED};
use serde::Deserialize;
use std::collections::HashMap;

/// Property names checked for a page title, in priority order
pub const TITLE_PROPERTIES: [&str; 4] = ["Title", "标题", "名称", "Name"];

/// Paginated list envelope shared by the query and children endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Error body returned with non-2xx responses
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RichTextObject {
    #[serde(default)]
    pub plain_text: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PropertyValue {
    #[serde(default)]
    pub title: Option<Vec<RichTextObject>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageObject {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl PageObject {
    /// First title property whose first fragment is non-empty, else "Untitled"
    pub fn resolve_title(&self) -> String {
        TITLE_PROPERTIES
            .iter()
            .filter_map(|key| self.properties.get(*key))
            .filter_map(|value| value.title.as_ref()?.first())
            .map(|fragment| fragment.plain_text.as_str())
            .find(|text| !text.is_empty())
            .unwrap_or(UNTITLED)
            .to_string()
    }
}

impl From<PageObject> for Document {
    fn from(page: PageObject) -> Self {
        let title = page.resolve_title();
        Document {
            id: DocumentId(page.id),
            title,
            blocks: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TextBody {
    #[serde(default)]
    pub rich_text: Vec<RichTextObject>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CodeBody {
    #[serde(default)]
    pub rich_text: Vec<RichTextObject>,
    #[serde(default)]
    pub language: Option<String>,
}

/// A block object; only the payload matching `type` is populated
#[derive(Debug, Deserialize)]
pub(crate) struct BlockObject {
    #[serde(rename = "type")]
    pub kind: String,
    pub paragraph: Option<TextBody>,
    pub heading_1: Option<TextBody>,
    pub heading_2: Option<TextBody>,
    pub heading_3: Option<TextBody>,
    pub bulleted_list_item: Option<TextBody>,
    pub numbered_list_item: Option<TextBody>,
    pub code: Option<CodeBody>,
}

fn runs(body: Vec<RichTextObject>) -> Vec<RichText> {
    body.into_iter().map(|t| RichText(t.plain_text)).collect()
}

fn missing_payload(kind: &str) -> Error {
    Error::Serialization(<serde_json::Error as serde::de::Error>::custom(format!(
        "{kind} block is missing its `{kind}` payload"
    )))
}

impl TryFrom<BlockObject> for Block {
    type Error = Error;

    fn try_from(block: BlockObject) -> Result<Self> {
        let text = |body: Option<TextBody>| {
            body.map(|b| runs(b.rich_text))
                .ok_or_else(|| missing_payload(&block.kind))
        };
        let converted = match block.kind.as_str() {
            "paragraph" => Block::Paragraph(text(block.paragraph)?),
            "heading_1" => Block::Heading1(text(block.heading_1)?),
            "heading_2" => Block::Heading2(text(block.heading_2)?),
            "heading_3" => Block::Heading3(text(block.heading_3)?),
            "bulleted_list_item" => Block::BulletedListItem(text(block.bulleted_list_item)?),
            "numbered_list_item" => Block::NumberedListItem(text(block.numbered_list_item)?),
            "code" => {
                let code = block.code.ok_or_else(|| missing_payload("code"))?;
                Block::Code {
                    text: runs(code.rich_text),
                    language: code.language.filter(|l| !l.is_empty()),
                }
            }
            other => Block::Unsupported {
                kind: other.to_string(),
            },
        };
        Ok(converted)
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(properties: serde_json::Value) -> PageObject {
        serde_json::from_value(json!({ "id": "p1", "properties": properties })).unwrap()
    }

    fn title_prop(text: &str) -> serde_json::Value {
        json!({ "id": "title", "type": "title", "title": [{ "plain_text": text }] })
    }

    fn block(value: serde_json::Value) -> Result<Block> {
        Block::try_from(serde_json::from_value::<BlockObject>(value).unwrap())
    }

    #[test]
    fn test_title_from_name_property() {
        let page = page(json!({ "Name": title_prop("Groceries") }));
        assert_eq!(page.resolve_title(), "Groceries");
    }

    #[test]
    fn test_title_priority_order() {
        let page = page(json!({
            "Name": title_prop("from name"),
            "名称": title_prop("from mingcheng"),
            "标题": title_prop("from biaoti"),
        }));
        assert_eq!(page.resolve_title(), "from biaoti");

        let page = page_with_title_and_name();
        assert_eq!(page.resolve_title(), "from title");
    }

    fn page_with_title_and_name() -> PageObject {
        page(json!({ "Name": title_prop("from name"), "Title": title_prop("from title") }))
    }

    #[test]
    fn test_title_skips_empty_first_fragment() {
        let page = page(json!({
            "Title": { "type": "title", "title": [{ "plain_text": "" }] },
            "Name": title_prop("Fallback"),
        }));
        assert_eq!(page.resolve_title(), "Fallback");
    }

    #[test]
    fn test_title_uses_only_first_fragment() {
        let page = page(json!({
            "Name": { "type": "title", "title": [{ "plain_text": "Part one" }, { "plain_text": " and two" }] },
        }));
        assert_eq!(page.resolve_title(), "Part one");
    }

    #[test]
    fn test_title_defaults_to_untitled() {
        assert_eq!(page(json!({})).resolve_title(), "Untitled");

        let page = page(json!({
            "Tags": { "type": "multi_select", "multi_select": [] },
            "Name": { "type": "title", "title": [] },
            "Title": { "type": "rich_text", "rich_text": [{ "plain_text": "not a title" }] },
        }));
        assert_eq!(page.resolve_title(), "Untitled");
    }

    #[test]
    fn test_page_converts_to_document_without_blocks() {
        let document = Document::from(page(json!({ "Title": title_prop("Doc") })));
        assert_eq!(document.id, DocumentId::new("p1"));
        assert_eq!(document.title, "Doc");
        assert!(document.blocks.is_empty());
    }

    #[test]
    fn test_paragraph_block() {
        let converted = block(json!({
            "object": "block",
            "type": "paragraph",
            "paragraph": { "rich_text": [{ "plain_text": "Hel" }, { "plain_text": "lo" }], "color": "default" }
        }))
        .unwrap();
        assert_eq!(converted.plain_text(), "Hello");
        assert!(matches!(converted, Block::Paragraph(_)));
    }

    #[test]
    fn test_heading_and_list_blocks() {
        let kinds = [
            ("heading_1", Block::Heading1(vec!["x".into()])),
            ("heading_2", Block::Heading2(vec!["x".into()])),
            ("heading_3", Block::Heading3(vec!["x".into()])),
            ("bulleted_list_item", Block::BulletedListItem(vec!["x".into()])),
            ("numbered_list_item", Block::NumberedListItem(vec!["x".into()])),
        ];
        for (kind, expected) in kinds {
            let mut value = json!({ "type": kind });
            value[kind] = json!({ "rich_text": [{ "plain_text": "x" }] });
            assert_eq!(block(value).unwrap(), expected, "kind {kind}");
        }
    }

    #[test]
    fn test_code_block_language() {
        let converted = block(json!({
            "type": "code",
            "code": { "rich_text": [{ "plain_text": "let x=1;" }], "language": "javascript" }
        }))
        .unwrap();
        assert_eq!(
            converted,
            Block::Code {
                text: vec!["let x=1;".into()],
                language: Some("javascript".to_string()),
            }
        );

        let converted = block(json!({
            "type": "code",
            "code": { "rich_text": [], "language": "" }
        }))
        .unwrap();
        assert!(matches!(converted, Block::Code { language: None, .. }));
    }

    #[test]
    fn test_unknown_block_kind_is_unsupported() {
        let converted = block(json!({
            "type": "image",
            "image": { "type": "external", "external": { "url": "https://example.com/a.png" } }
        }))
        .unwrap();
        assert_eq!(
            converted,
            Block::Unsupported {
                kind: "image".to_string()
            }
        );
    }

    #[test]
    fn test_missing_payload_is_serialization_error() {
        let result = block(json!({ "type": "paragraph" }));
        match result {
            Err(Error::Serialization(e)) => assert!(e.to_string().contains("paragraph")),
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_response_defaults() {
        let list: ListResponse<PageObject> =
            serde_json::from_value(json!({ "object": "list" })).unwrap();
        assert!(list.results.is_empty());
        assert!(!list.has_more);
        assert!(list.next_cursor.is_none());
    }
}

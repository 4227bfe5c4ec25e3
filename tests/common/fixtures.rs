//! Notion API JSON fixtures

use serde_json::{Value, json};

/// A page object whose title lives under `property`
pub fn page(id: &str, property: &str, title: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            property: {
                "id": "title",
                "type": "title",
                "title": [{ "type": "text", "plain_text": title }]
            },
            "Tags": { "id": "tags", "type": "multi_select", "multi_select": [] }
        }
    })
}

/// A page object with no recognised title property
pub fn untitled_page(id: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Status": { "id": "s", "type": "select", "select": null }
        }
    })
}

/// A text-carrying block of `kind` with one run per entry in `texts`
pub fn text_block(kind: &str, texts: &[&str]) -> Value {
    let runs: Vec<Value> = texts
        .iter()
        .map(|t| json!({ "type": "text", "plain_text": t }))
        .collect();
    let mut block = json!({ "object": "block", "type": kind, "has_children": false });
    block[kind] = json!({ "rich_text": runs, "color": "default" });
    block
}

/// A code block
pub fn code_block(language: &str, text: &str) -> Value {
    json!({
        "object": "block",
        "type": "code",
        "code": {
            "rich_text": [{ "type": "text", "plain_text": text }],
            "language": language
        }
    })
}

/// A block kind with no Markdown template
pub fn divider_block() -> Value {
    json!({ "object": "block", "type": "divider", "divider": {} })
}

/// Wrap results in a Notion list envelope
pub fn list(results: Vec<Value>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "next_cursor": null,
        "has_more": false
    })
}

/// Notion error body
pub fn api_error(status: u16, code: &str, message: &str) -> Value {
    json!({ "object": "error", "status": status, "code": code, "message": message })
}

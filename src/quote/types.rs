use serde::{Deserialize, Serialize};

/// One quote as returned by the upstream random-quote API.
///
/// Only `content` survives past the fetch; the remaining fields mirror the
/// upstream JSON contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "authorSlug")]
    pub author_slug: String,
    pub length: u32,
    #[serde(rename = "dateAdded")]
    pub date_added: String,
    #[serde(rename = "dateModified")]
    pub date_modified: String,
}

impl Quote {
    /// Build a quote carrying only the fields the service consumes.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            id: String::new(),
            author: String::new(),
            tags: Vec::new(),
            author_slug: String::new(),
            length: content.chars().count() as u32,
            date_added: String::new(),
            date_modified: String::new(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_upstream_shape() {
        let body = r#"{
            "_id": "2xpHvSOQMD",
            "content": "Be yourself.",
            "author": "Oscar Wilde",
            "tags": ["famous-quotes"],
            "authorSlug": "oscar-wilde",
            "length": 12,
            "dateAdded": "2019-07-25",
            "dateModified": "2023-04-14"
        }"#;

        let quote: Quote = serde_json::from_str(body).unwrap();

        assert_eq!(quote.id, "2xpHvSOQMD");
        assert_eq!(quote.content, "Be yourself.");
        assert_eq!(quote.author, "Oscar Wilde");
        assert_eq!(quote.tags, vec!["famous-quotes"]);
        assert_eq!(quote.author_slug, "oscar-wilde");
        assert_eq!(quote.length, 12);
    }

    #[test]
    fn test_deserialize_tolerates_missing_tags() {
        let body = r#"{
            "_id": "x",
            "content": "c",
            "author": "a",
            "authorSlug": "a",
            "length": 1,
            "dateAdded": "2019-07-25",
            "dateModified": "2023-04-14"
        }"#;

        let quote: Quote = serde_json::from_str(body).unwrap();
        assert!(quote.tags.is_empty());
    }

    #[test]
    fn test_with_content_counts_chars_not_bytes() {
        let quote = Quote::with_content("héllo");
        assert_eq!(quote.length, 5);
        assert_eq!(quote.content, "héllo");
    }
}

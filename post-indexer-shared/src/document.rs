//! Search index document type.
//!
//! `PostDocument` is the JSON shape accepted by the index's update handler.
//! It is built from a [`PostRecord`] by a pure field-for-field conversion.

use serde::{Deserialize, Serialize};

use crate::record::PostRecord;

/// A post as stored in the search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDocument {
    pub id: i64,
    #[serde(rename = "threadId")]
    pub thread_id: String,
    #[serde(rename = "parentThreadId")]
    pub parent_thread_id: String,
    #[serde(rename = "parentAuthor")]
    pub parent_author: String,
    pub author: String,
    pub category: String,
    #[serde(rename = "postDate")]
    pub post_date: String,
    pub body_md: String,
    pub author_normalized: String,
    pub body_normalized: String,
}

impl From<PostRecord> for PostDocument {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            thread_id: record.thread_id,
            parent_thread_id: record.parent_thread_id,
            parent_author: record.parent_author,
            author: record.author,
            category: record.category,
            post_date: record.date,
            body_md: record.body,
            author_normalized: record.author_normalized,
            body_normalized: record.body_normalized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn full_record() -> PostRecord {
        PostRecord {
            id: 42,
            thread_id: "t-1".to_string(),
            parent_thread_id: "t-0".to_string(),
            author: "alice".to_string(),
            parent_author: "bob".to_string(),
            category: "ontopic".to_string(),
            date: "2014-03-01 12:00:00".to_string(),
            body: "**hi**".to_string(),
            body_normalized: "hi".to_string(),
            author_normalized: "alice".to_string(),
        }
    }

    #[test]
    fn test_mapping_moves_every_field() {
        let doc = PostDocument::from(full_record());

        assert_eq!(doc.id, 42);
        assert_eq!(doc.thread_id, "t-1");
        assert_eq!(doc.parent_thread_id, "t-0");
        assert_eq!(doc.author, "alice");
        assert_eq!(doc.parent_author, "bob");
        assert_eq!(doc.category, "ontopic");
        assert_eq!(doc.post_date, "2014-03-01 12:00:00");
        assert_eq!(doc.body_md, "**hi**");
        assert_eq!(doc.body_normalized, "hi");
        assert_eq!(doc.author_normalized, "alice");
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(PostDocument::from(full_record())).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "author",
                "author_normalized",
                "body_md",
                "body_normalized",
                "category",
                "id",
                "parentAuthor",
                "parentThreadId",
                "postDate",
                "threadId",
            ]
        );
        assert_eq!(object["postDate"], Value::from("2014-03-01 12:00:00"));
    }

    #[test]
    fn test_root_post_maps_to_empty_parent_author() {
        let doc = PostDocument::from(PostRecord::new(7).with_author("carol"));

        assert_eq!(doc.parent_author, "");
        assert_eq!(doc.author, "carol");

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["parentAuthor"], Value::from(""));
    }
}

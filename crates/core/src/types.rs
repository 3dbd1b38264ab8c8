/// Document identifiers are opaque strings. Server-generated ids are UUID text.
pub type DocId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh document identifier.
pub fn new_doc_id() -> DocId {
    uuid::Uuid::new_v4().to_string()
}

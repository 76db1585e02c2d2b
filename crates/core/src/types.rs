/// Feedback record identifiers are opaque server-assigned strings.
pub type FeedbackId = String;

/// Wire timestamps are always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

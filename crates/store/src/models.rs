//! Typed records for the store collections.
//!
//! Documents are stored as camelCase JSON, the shape the admin tooling
//! reads and writes. Serde renames keep the Rust field names idiomatic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A contact-form message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Generated id (`msg-<n>`).
    pub id: String,
    /// Sender's full name.
    pub full_name: String,
    /// Sender's email address.
    pub email: String,
    /// Sender's phone number.
    pub phone_number: String,
    /// Project the sender is asking about (e.g. "Kitchen").
    pub project_type: String,
    /// Free-text message body.
    pub message: String,
    /// Starts unread; advanced by admin tooling only, never by submission.
    pub status: MessageStatus,
    /// Creation timestamp, ISO-8601.
    pub created_at: String,
    /// Set when an admin opens the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_at: Option<String>,
    /// Set when an admin replies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replied_at: Option<String>,
}

/// Lifecycle status of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Unread,
    Read,
    Replied,
}

/// An admin-inbox notification derived from a site event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Generated id (`notif-<n>`).
    pub id: String,
    /// Short heading; for contact messages this is the project type.
    pub title: String,
    /// Human-readable summary shown in the inbox.
    pub message: String,
    /// Event category.
    #[serde(rename = "type")]
    pub kind: NotificationType,
    /// Display priority.
    pub priority: NotificationPriority,
    /// Inbox status.
    pub status: NotificationStatus,
    /// Creation timestamp, ISO-8601.
    pub created_at: String,
    /// Empty string until read. The stored documents use a sentinel here
    /// rather than omitting the field.
    #[serde(default)]
    pub read_at: String,
    /// Set when the notification is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<String>,
    /// What produced this notification.
    pub source: NotificationSource,
}

/// Category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
    Message,
    System,
}

/// Display priority of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Inbox status of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Unread,
    Read,
    Archived,
}

/// Back-reference from a notification to the entity that caused it.
///
/// The link is advisory: the store does not enforce that `source_id`
/// still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSource {
    /// Kind of originating entity.
    #[serde(rename = "type")]
    pub kind: SourceType,
    /// Id of the originating entity (message id, user id, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
}

/// Kind of entity a notification points back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    ContactForm,
    GalleryUpload,
    System,
    UserAction,
    Error,
}

/// A portfolio gallery entry.
///
/// The gallery collection is owned by the admin tooling, so reads are
/// lenient: missing fields fall back to defaults and unrecognized fields
/// pass through verbatim instead of failing the listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryItem {
    /// Document id, merged in from the store key when listing.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image URL or storage path.
    pub image: String,
    /// Free-text category; clients filter on it case-insensitively.
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
    /// Any additional admin-written fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Social platform links (`settings/social`): platform name to URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocialLinks(pub BTreeMap<String, String>);

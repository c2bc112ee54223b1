//! Contact message submission.
//!
//! One message write, then one derived notification write for the admin
//! inbox. The two writes are sequential and not transactional: a failed
//! message write aborts before the notification is attempted, and a failed
//! notification write leaves the message in place.

use serde::Deserialize;

use store::{
    iso_now, message, notification, DocumentStore, IdGenerator, IdKind, Message, MessageStatus,
    Notification, NotificationPriority, NotificationSource, NotificationStatus, NotificationType,
    SourceType,
};

/// A contact form payload.
///
/// All fields are required strings; any format validation belongs to the
/// frontend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub project_type: String,
    pub message: String,
}

/// Submit a contact message.
///
/// Returns the new message id; the notification written second carries it
/// as `source.sourceId`.
pub async fn submit(
    store: &dyn DocumentStore,
    ids: &dyn IdGenerator,
    form: ContactForm,
) -> store::Result<String> {
    let message_id = ids.generate(IdKind::Message);
    let notification_id = ids.generate(IdKind::Notification);

    let msg = Message {
        id: message_id.clone(),
        full_name: form.full_name,
        email: form.email,
        phone_number: form.phone_number,
        project_type: form.project_type,
        message: form.message,
        status: MessageStatus::Unread,
        created_at: iso_now(),
        read_at: None,
        replied_at: None,
    };
    message::create_message(store, &msg).await?;

    let note = Notification {
        id: notification_id,
        title: msg.project_type.clone(),
        message: format!("One new message from {}", msg.full_name),
        kind: NotificationType::Message,
        priority: NotificationPriority::Urgent,
        status: NotificationStatus::Unread,
        // Captured independently of the message timestamp.
        created_at: iso_now(),
        read_at: String::new(),
        archived_at: None,
        source: NotificationSource {
            kind: SourceType::ContactForm,
            source_id: Some(message_id.clone()),
        },
    };
    notification::create_notification(store, &note).await?;

    Ok(message_id)
}

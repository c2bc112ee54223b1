//! Contact message operations.

use crate::error::{Result, StoreError};
use crate::models::{Message, MessageStatus};
use crate::{iso_now, DocumentStore};

/// Collection holding contact messages.
pub const COLLECTION: &str = "messages";

/// Write a message document at its id.
pub async fn create_message(store: &dyn DocumentStore, message: &Message) -> Result<()> {
    let data = serde_json::to_value(message)?;
    store.set(COLLECTION, &message.id, &data).await
}

/// Get a message by id.
pub async fn get_message(store: &dyn DocumentStore, id: &str) -> Result<Message> {
    let data = store
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            entity: "Message",
            id: id.to_string(),
        })?;

    Ok(serde_json::from_value(data)?)
}

/// List all messages in store order.
pub async fn list_messages(store: &dyn DocumentStore) -> Result<Vec<Message>> {
    store
        .list(COLLECTION)
        .await?
        .into_iter()
        .map(|doc| Ok(serde_json::from_value(doc.data)?))
        .collect()
}

/// Mark a message as read, stamping `readAt`. Admin-side operation.
pub async fn mark_read(store: &dyn DocumentStore, id: &str) -> Result<Message> {
    let mut message = get_message(store, id).await?;
    message.status = MessageStatus::Read;
    message.read_at = Some(iso_now());
    create_message(store, &message).await?;

    Ok(message)
}

/// Mark a message as replied, stamping `repliedAt`. Admin-side operation.
pub async fn mark_replied(store: &dyn DocumentStore, id: &str) -> Result<Message> {
    let mut message = get_message(store, id).await?;
    message.status = MessageStatus::Replied;
    message.replied_at = Some(iso_now());
    create_message(store, &message).await?;

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;

    async fn test_store() -> Store {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn sample_message() -> Message {
        Message {
            id: "msg-77".to_string(),
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: "0811234567".to_string(),
            project_type: "Kitchen".to_string(),
            message: "Need a quote".to_string(),
            status: MessageStatus::Unread,
            created_at: iso_now(),
            read_at: None,
            replied_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_message() {
        let store = test_store().await;

        let message = sample_message();
        create_message(&store, &message).await.unwrap();

        let fetched = get_message(&store, "msg-77").await.unwrap();
        assert_eq!(fetched, message);
    }

    #[tokio::test]
    async fn test_get_missing_message() {
        let store = test_store().await;

        let result = get_message(&store, "msg-1").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_mark_read_then_replied() {
        let store = test_store().await;
        create_message(&store, &sample_message()).await.unwrap();

        let read = mark_read(&store, "msg-77").await.unwrap();
        assert_eq!(read.status, MessageStatus::Read);
        assert!(read.read_at.is_some());

        let replied = mark_replied(&store, "msg-77").await.unwrap();
        assert_eq!(replied.status, MessageStatus::Replied);
        assert!(replied.replied_at.is_some());
        // The read stamp survives the second update
        assert!(replied.read_at.is_some());
    }

    #[tokio::test]
    async fn test_list_messages() {
        let store = test_store().await;

        let mut second = sample_message();
        second.id = "msg-78".to_string();

        create_message(&store, &sample_message()).await.unwrap();
        create_message(&store, &second).await.unwrap();

        let messages = list_messages(&store).await.unwrap();
        assert_eq!(messages.len(), 2);
    }
}

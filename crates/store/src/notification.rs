//! Admin-inbox notification operations.

use crate::error::{Result, StoreError};
use crate::models::{Notification, NotificationStatus};
use crate::{iso_now, DocumentStore};

/// Collection holding notifications.
pub const COLLECTION: &str = "notifications";

/// Write a notification document at its id.
pub async fn create_notification(
    store: &dyn DocumentStore,
    notification: &Notification,
) -> Result<()> {
    let data = serde_json::to_value(notification)?;
    store.set(COLLECTION, &notification.id, &data).await
}

/// Get a notification by id.
pub async fn get_notification(store: &dyn DocumentStore, id: &str) -> Result<Notification> {
    let data = store
        .get(COLLECTION, id)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            entity: "Notification",
            id: id.to_string(),
        })?;

    Ok(serde_json::from_value(data)?)
}

/// List all notifications in store order.
pub async fn list_notifications(store: &dyn DocumentStore) -> Result<Vec<Notification>> {
    store
        .list(COLLECTION)
        .await?
        .into_iter()
        .map(|doc| Ok(serde_json::from_value(doc.data)?))
        .collect()
}

/// Mark a notification as read, replacing the empty `readAt` sentinel with
/// a timestamp. Admin-side operation.
pub async fn mark_read(store: &dyn DocumentStore, id: &str) -> Result<Notification> {
    let mut notification = get_notification(store, id).await?;
    notification.status = NotificationStatus::Read;
    notification.read_at = iso_now();
    create_notification(store, &notification).await?;

    Ok(notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        NotificationPriority, NotificationSource, NotificationType, SourceType,
    };
    use crate::Store;

    async fn test_store() -> Store {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    fn sample_notification() -> Notification {
        Notification {
            id: "notif-9".to_string(),
            title: "Kitchen".to_string(),
            message: "One new message from Jane Doe".to_string(),
            kind: NotificationType::Message,
            priority: NotificationPriority::Urgent,
            status: NotificationStatus::Unread,
            created_at: iso_now(),
            read_at: String::new(),
            archived_at: None,
            source: NotificationSource {
                kind: SourceType::ContactForm,
                source_id: Some("msg-77".to_string()),
            },
        }
    }

    #[tokio::test]
    async fn test_create_and_get_notification() {
        let store = test_store().await;

        let notification = sample_notification();
        create_notification(&store, &notification).await.unwrap();

        let fetched = get_notification(&store, "notif-9").await.unwrap();
        assert_eq!(fetched, notification);
        assert_eq!(fetched.read_at, "");
    }

    #[tokio::test]
    async fn test_get_missing_notification() {
        let store = test_store().await;

        let result = get_notification(&store, "notif-1").await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_mark_read_replaces_sentinel() {
        let store = test_store().await;
        create_notification(&store, &sample_notification()).await.unwrap();

        let read = mark_read(&store, "notif-9").await.unwrap();
        assert_eq!(read.status, NotificationStatus::Read);
        assert!(!read.read_at.is_empty());
    }

    #[tokio::test]
    async fn test_list_notifications() {
        let store = test_store().await;

        create_notification(&store, &sample_notification()).await.unwrap();

        let notifications = list_notifications(&store).await.unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].source.source_id.as_deref(),
            Some("msg-77")
        );
    }
}

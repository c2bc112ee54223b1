//! Gallery collection reads.
//!
//! Gallery items are created and edited by the admin tooling; the site
//! only enumerates them.

use crate::error::Result;
use crate::models::GalleryItem;
use crate::DocumentStore;

/// Collection holding gallery items.
pub const COLLECTION: &str = "gallery";

/// List all gallery items, each with its store id merged into its fields.
pub async fn list_items(store: &dyn DocumentStore) -> Result<Vec<GalleryItem>> {
    store
        .list(COLLECTION)
        .await?
        .into_iter()
        .map(|doc| {
            let mut item: GalleryItem = serde_json::from_value(doc.data)?;
            // A stored id field takes precedence over the document key.
            if item.id.is_empty() {
                item.id = doc.id;
            }
            Ok(item)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Store;
    use serde_json::json;

    async fn test_store() -> Store {
        let store = Store::connect("sqlite::memory:").await.unwrap();
        store.migrate().await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_empty_collection_lists_empty() {
        let store = test_store().await;

        let items = list_items(&store).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_list_merges_store_id() {
        let store = test_store().await;

        store
            .set(
                COLLECTION,
                "a1b2c3",
                &json!({
                    "title": "Modern kitchen",
                    "description": "Full renovation",
                    "image": "https://cdn.example.com/kitchen.jpg",
                    "category": "Kitchen",
                    "createdAt": "2026-01-12T08:30:00.000Z",
                    "updatedAt": "2026-01-12T08:30:00.000Z"
                }),
            )
            .await
            .unwrap();

        let items = list_items(&store).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "a1b2c3");
        assert_eq!(items[0].category, "Kitchen");
    }

    #[tokio::test]
    async fn test_stored_id_field_wins_over_document_key() {
        let store = test_store().await;

        store
            .set(COLLECTION, "key-1", &json!({"id": "legacy-7", "title": "Deck"}))
            .await
            .unwrap();

        let items = list_items(&store).await.unwrap();
        assert_eq!(items[0].id, "legacy-7");
    }

    #[tokio::test]
    async fn test_unknown_fields_pass_through() {
        let store = test_store().await;

        store
            .set(
                COLLECTION,
                "x9",
                &json!({"title": "Wardrobe", "featured": true}),
            )
            .await
            .unwrap();

        let items = list_items(&store).await.unwrap();
        assert_eq!(items[0].extra["featured"], true);
    }
}

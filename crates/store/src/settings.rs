//! Site settings documents.

use crate::error::{Result, StoreError};
use crate::models::SocialLinks;
use crate::DocumentStore;

/// Collection holding settings documents.
pub const COLLECTION: &str = "settings";

/// Fixed id of the social links document.
pub const SOCIAL_DOC: &str = "social";

/// Fetch the social links settings document.
///
/// A missing document is reported as [`StoreError::NotFound`]; the site
/// cannot render social links that were never configured.
pub async fn social_links(store: &dyn DocumentStore) -> Result<SocialLinks> {
    let data = store
        .get(COLLECTION, SOCIAL_DOC)
        .await?
        .ok_or_else(|| StoreError::NotFound {
            entity: "Settings",
            id: SOCIAL_DOC.to_string(),
        })?;

    Ok(serde_json::from_value(data)?)
}

/// Write the social links settings document. Used for seeding and by the
/// admin tooling.
pub async fn set_social_links(store: &dyn DocumentStore, links: &SocialLinks) -> Result<()> {
    let data = serde_json::to_value(links)?;
    store.set(COLLECTION, SOCIAL_DOC, &data).await
}

use crate::domain::model::{
    AnimationSlot, AssetRefs, ContactSettings, Experience, Profile, Project,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only access to the page content.
pub trait ContentProvider: Send + Sync {
    fn page_title(&self) -> &str;
    fn page_icon(&self) -> Option<&str>;
    fn profile(&self) -> &Profile;
    fn projects(&self) -> &[Project];
    fn experience(&self) -> &[Experience];
    fn assets(&self) -> &AssetRefs;
    fn animations(&self) -> &[AnimationSlot];
    fn contact(&self) -> &ContactSettings;
}

pub trait AssetSource: Send + Sync {
    fn read_asset(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Best-effort fetch of a decorative animation payload.
///
/// Returns `None` for anything other than a 200 response with a JSON body.
#[async_trait]
pub trait AnimationSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<serde_json::Value>;
}

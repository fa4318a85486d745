use crate::domain::document::{HeaderGraphic, ReportDocument};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn delete_file(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Looks up the optional header graphic.
///
/// `None` means no graphic is configured. `Some(Err(MissingAsset))` means one
/// is configured but cannot be used; the renderer carries on without it.
pub trait AssetSource: Send + Sync {
    fn header_graphic(&self) -> Option<Result<HeaderGraphic>>;
}

/// Turns an ordered block list into downloadable bytes, preserving block order.
#[async_trait]
pub trait DocumentEncoder: Send + Sync {
    fn extension(&self) -> &'static str;
    fn media_type(&self) -> &'static str;
    async fn encode(&self, document: &ReportDocument) -> Result<Vec<u8>>;
}

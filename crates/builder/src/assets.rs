//! Asset store contract. Uploading is a collaborator concern; the core
//! only ever holds the resulting durable reference.

use launchgrid_core::types::AssetRef;
use launchgrid_core::LaunchResult;

/// Uploads creative files and returns durable references. Implemented
/// by the hosting application against real object storage.
pub trait AssetStore: Send + Sync {
    fn upload(&self, file_name: &str, bytes: &[u8]) -> LaunchResult<AssetRef>;
}

/// Test/development implementation that fabricates stable URLs without
/// storing anything.
#[derive(Debug, Default)]
pub struct MemoryAssetStore;

impl AssetStore for MemoryAssetStore {
    fn upload(&self, file_name: &str, _bytes: &[u8]) -> LaunchResult<AssetRef> {
        Ok(AssetRef {
            file_name: file_name.to_string(),
            url: format!("memory://{file_name}"),
            thumbnail_url: Some(format!("memory://thumb/{file_name}")),
        })
    }
}

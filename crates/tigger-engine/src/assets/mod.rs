//! Asset identity shared by loadable GPU resources.

use std::path::Path;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AssetType {
    Shader,
}

/// A resource loaded from a file.
///
/// Release is tied to `Drop`; there is no separate dispose contract.
pub trait Asset {
    fn file_path(&self) -> &Path;

    fn asset_type(&self) -> AssetType;

    /// File name without extension.
    fn name(&self) -> &str {
        self.file_path()
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

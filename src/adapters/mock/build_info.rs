//! Fixed build metadata for testing.

use crate::traits::BuildInfoProvider;

/// Build-info provider returning fixed strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticBuildInfo {
    name: String,
    version: String,
}

impl StaticBuildInfo {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl BuildInfoProvider for StaticBuildInfo {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn version(&self) -> String {
        self.version.clone()
    }
}

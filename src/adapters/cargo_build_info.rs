//! Build metadata from Cargo.

use crate::traits::BuildInfoProvider;

/// Name and version of this crate, fixed at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CargoBuildInfo;

impl BuildInfoProvider for CargoBuildInfo {
    fn name(&self) -> String {
        env!("CARGO_PKG_NAME").to_string()
    }

    fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

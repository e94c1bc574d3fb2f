//! Build-metadata provider trait abstraction.

/// Supplies the application name and version baked in at build time.
pub trait BuildInfoProvider: Send + Sync {
    fn name(&self) -> String;

    fn version(&self) -> String;

    /// Application identity string sent to the backend: `name/version`.
    fn app_identity(&self) -> String {
        format!("{}/{}", self.name(), self.version())
    }
}

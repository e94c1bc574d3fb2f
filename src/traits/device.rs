//! Device/platform identity provider trait abstraction.

/// Supplies per-install identity facts.
///
/// Reads are synchronous. A `None` device id means the install has no
/// usable identity, which the session cache treats as fatal.
pub trait DeviceInfoProvider: Send + Sync {
    /// Stable identifier for this installation.
    fn device_id(&self) -> Option<String>;

    /// Platform/OS version string, e.g. `"linux 6.8 (x86_64)"`.
    fn os_version(&self) -> String;
}

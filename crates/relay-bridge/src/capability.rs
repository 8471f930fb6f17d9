//! Platform capability resolution for receiver registration.

use serde::{Deserialize, Serialize};

use relay_bus::RegistrationMode;

/// First platform API level supporting the not-exported receiver
/// declaration.
pub const SCOPED_RECEIVER_MIN_API: u32 = 33;

/// Platform capabilities the bridge registers under.
///
/// Resolved to a [`RegistrationMode`] once per attach, not branched
/// inline at the registration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCaps {
    /// Platform API level of the hosting device.
    pub api_level: u32,
}

impl PlatformCaps {
    /// The registration mode this platform supports.
    #[must_use]
    pub const fn registration_mode(self) -> RegistrationMode {
        if self.api_level >= SCOPED_RECEIVER_MIN_API {
            RegistrationMode::Restricted
        } else {
            RegistrationMode::Open
        }
    }
}

impl Default for PlatformCaps {
    fn default() -> Self {
        Self { api_level: 34 }
    }
}

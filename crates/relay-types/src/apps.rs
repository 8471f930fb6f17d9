//! The fixed allow-list of monitored financial applications.

use serde::{Deserialize, Serialize};

/// A financial application whose notifications are relayed.
///
/// The allow-list is closed and compiled in: membership is decided by
/// [`SourceApp::from_package`], and any package identifier outside this
/// enumeration is silently discarded upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceApp {
    /// Google Pay (`com.google.android.apps.nbu.paisa.user`).
    GooglePay,
    /// PhonePe (`com.phonepe.app`).
    PhonePe,
    /// Paytm (`net.one97.paytm`).
    Paytm,
    /// Amazon Pay, bundled in the shopping app (`in.amazon.mShop.android.shopping`).
    AmazonPay,
    /// WhatsApp Payments (`com.whatsapp`).
    WhatsAppPayments,
    /// Freecharge (`com.freecharge.android`).
    Freecharge,
}

impl SourceApp {
    /// Every allow-listed application.
    pub const ALL: [Self; 6] = [
        Self::GooglePay,
        Self::PhonePe,
        Self::Paytm,
        Self::AmazonPay,
        Self::WhatsAppPayments,
        Self::Freecharge,
    ];

    /// The platform package identifier for this application.
    #[must_use]
    pub const fn package_id(self) -> &'static str {
        match self {
            Self::GooglePay => "com.google.android.apps.nbu.paisa.user",
            Self::PhonePe => "com.phonepe.app",
            Self::Paytm => "net.one97.paytm",
            Self::AmazonPay => "in.amazon.mShop.android.shopping",
            Self::WhatsAppPayments => "com.whatsapp",
            Self::Freecharge => "com.freecharge.android",
        }
    }

    /// Allow-list membership test.
    ///
    /// Returns `None` for any package identifier outside the fixed set.
    #[must_use]
    pub fn from_package(package: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|app| app.package_id() == package)
    }
}

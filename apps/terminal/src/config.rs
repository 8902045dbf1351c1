//! # Configuration
//!
//! Application configuration loaded at startup: defaults overridden by
//! `ISOKO_*` environment variables. Read-only after initialization.

use serde::{Deserialize, Serialize};

use isoko_core::{TaxRate, CURRENCY_CODE, VAT_RATE_BPS};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Store name shown in the banner and receipts.
    pub store_name: String,

    /// Display currency (ISO 4217). Fixed format; money rendering
    /// always prefixes this code.
    pub currency_code: String,

    /// VAT rate in basis points (1800 = 18%).
    pub vat_rate_bps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_name: "SuperMarket POS".to_string(),
            currency_code: CURRENCY_CODE.to_string(),
            vat_rate_bps: VAT_RATE_BPS,
        }
    }
}

impl Config {
    /// Creates a Config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `ISOKO_STORE_NAME`: override the store name
    /// - `ISOKO_VAT_RATE_BPS`: override the VAT rate in basis points
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(store_name) = std::env::var("ISOKO_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(bps_str) = std::env::var("ISOKO_VAT_RATE_BPS") {
            if let Ok(bps) = bps_str.parse::<u32>() {
                config.vat_rate_bps = bps;
            }
        }

        config
    }

    /// The VAT rate as a typed rate.
    #[inline]
    pub fn vat_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.vat_rate_bps)
    }
}

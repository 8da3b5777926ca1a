//! The license-lifecycle state machine over the record store.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use tracing::{info, warn};

use keygate_core::error::AppError;
use keygate_core::result::AppResult;
use keygate_core::traits::record_store::RecordStore;
use keygate_entity::license::License;
use keygate_store::keys;

/// Default validity of an admin-created license, in days.
const DEFAULT_LICENSE_DAYS: u64 = 14;

/// Validity of a trial license, in days.
const TEST_LICENSE_DAYS: u64 = 7;

/// Outcome of a successful validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The license was unbound and is now bound to the presented device.
    BoundNow,
    /// The license was already bound to the presented device.
    Valid,
}

impl ValidationOutcome {
    /// Human-readable outcome text returned to the client.
    pub fn message(&self) -> &'static str {
        match self {
            Self::BoundNow => "License valid and bound to this device",
            Self::Valid => "License valid",
        }
    }
}

/// Which date an extension was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionBasis {
    /// The license was still active; days were added to its expiration.
    PreviousExpiration,
    /// The license had already expired; days were added to today.
    Today,
}

impl ExtensionBasis {
    /// Wire form of the basis, reported for observability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreviousExpiration => "previous_expiration",
            Self::Today => "today",
        }
    }
}

/// License creation, binding, expiration checks, and extension
/// arithmetic, operating against the record store port.
///
/// The service holds no state of its own; every operation is a plain
/// read-then-write sequence against the store.
#[derive(Debug, Clone)]
pub struct LicenseService {
    /// Record store port.
    store: Arc<dyn RecordStore>,
}

impl LicenseService {
    /// Create a license service over a record store.
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Create an unbound license.
    ///
    /// The expiration defaults to 14 days from now; an explicit override
    /// must be a real calendar date in `YYYY-MM-DD` form.
    pub async fn create(&self, expiration_override: Option<&str>) -> AppResult<License> {
        let expiration = match expiration_override {
            Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                AppError::validation(format!(
                    "Invalid expiration date '{raw}', expected YYYY-MM-DD"
                ))
            })?,
            None => Self::today() + Days::new(DEFAULT_LICENSE_DAYS),
        };

        let license = License::new(expiration);
        self.save(&license).await?;

        info!(key = %license.key, expiration = %license.expiration_string(), "License created");
        Ok(license)
    }

    /// Create a 7-day trial license pre-bound to a device.
    ///
    /// Fails with a conflict when any stored license is already bound to
    /// the device.
    pub async fn create_test(&self, mac: &str) -> AppResult<License> {
        if self.device_has_license(mac).await? {
            return Err(AppError::conflict("This device already has a license"));
        }

        let mut license = License::new(Self::today() + Days::new(TEST_LICENSE_DAYS));
        license.bound_mac = Some(mac.to_string());
        license.is_test = true;
        self.save(&license).await?;

        info!(key = %license.key, "Test license created");
        Ok(license)
    }

    /// Create a paid license with its payment provenance.
    pub async fn create_from_payment(
        &self,
        tx_hash: &str,
        amount_usdt: f64,
        days: u32,
        mac: Option<String>,
    ) -> AppResult<License> {
        let mut license = License::new(Self::today() + Days::new(u64::from(days)));
        license.bound_mac = mac;
        license.purchase_date = Some(Utc::now());
        license.tx_hash = Some(tx_hash.to_string());
        license.amount_usdt = Some(amount_usdt);
        self.save(&license).await?;

        info!(key = %license.key, days, "Paid license created");
        Ok(license)
    }

    /// Validate a license for a device, binding it on first use.
    pub async fn validate(&self, key: &str, mac: &str) -> AppResult<ValidationOutcome> {
        let mut license = self
            .load(key)
            .await?
            .ok_or_else(|| AppError::not_found("Invalid license key"))?;

        if license.is_expired(Utc::now()) {
            return Err(AppError::expired("License expired"));
        }

        match license.bound_mac.as_deref() {
            None => {
                license.bound_mac = Some(mac.to_string());
                self.save(&license).await?;
                info!(key, mac, "License bound to device");
                Ok(ValidationOutcome::BoundNow)
            }
            Some(bound) if bound == mac => Ok(ValidationOutcome::Valid),
            Some(_) => Err(AppError::authorization("License invalid for this device")),
        }
    }

    /// Extend a license by `days`, recording the extension provenance.
    ///
    /// The new expiration is computed from whichever is later: the
    /// current expiration or today. The expiration never moves backward.
    pub async fn extend(
        &self,
        key: &str,
        days: u32,
        tx_hash: &str,
        amount_usdt: f64,
    ) -> AppResult<(License, ExtensionBasis)> {
        let mut license = self
            .load(key)
            .await?
            .ok_or_else(|| AppError::not_found("License not found"))?;

        let now = Utc::now();
        let (base, basis) = if license.is_expired(now) {
            (now.date_naive(), ExtensionBasis::Today)
        } else {
            (license.expiration, ExtensionBasis::PreviousExpiration)
        };

        license.expiration = base + Days::new(u64::from(days));
        license.last_extended = Some(now);
        license.extension_tx_hash = Some(tx_hash.to_string());
        license.extension_amount = Some(amount_usdt);
        self.save(&license).await?;

        info!(
            key,
            days,
            basis = basis.as_str(),
            new_expiration = %license.expiration_string(),
            "License extended"
        );
        Ok((license, basis))
    }

    /// Read-only lookup for the status projection.
    pub async fn check(&self, key: &str) -> AppResult<License> {
        self.load(key)
            .await?
            .ok_or_else(|| AppError::not_found("License not found"))
    }

    /// Whether any stored license is bound to the device.
    ///
    /// O(total licenses): the store offers only a flat key listing, so
    /// every record is fetched and inspected.
    async fn device_has_license(&self, mac: &str) -> AppResult<bool> {
        for key in self.store.list_keys().await? {
            if keys::is_tx_marker(&key) {
                continue;
            }
            let Some(json) = self.store.get(&key).await? else {
                continue;
            };
            match serde_json::from_str::<License>(&json) {
                Ok(license) => {
                    if license.bound_mac.as_deref() == Some(mac) {
                        return Ok(true);
                    }
                }
                Err(e) => {
                    warn!(key, error = %e, "Skipping unparseable record in device scan");
                }
            }
        }
        Ok(false)
    }

    async fn load(&self, key: &str) -> AppResult<Option<License>> {
        match self.store.get(key).await? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, license: &License) -> AppResult<()> {
        let json = serde_json::to_string(license)?;
        self.store.put(&license.key, &json).await
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}

// src/asset.rs
use crate::error::Result;
use crate::precision::Precision;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata of a single RGB20 fungible asset.
///
/// Built once from external data and never mutated afterwards. All amounts are
/// in atomic units; `fractional_bits` says where the decimal point goes.
///
/// `known_circulating <= issue_limit` is expected but not enforced, see
/// [`Rgb20Asset::is_within_issue_limit`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rgb20Asset {
    genesis: String,
    id: String,
    ticker: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    fractional_bits: Precision,
    date: String,
    known_circulating: u64,
    issue_limit: u64,
}

impl Rgb20Asset {
    pub fn builder(
        genesis: impl Into<String>,
        id: impl Into<String>,
        ticker: impl Into<String>,
        name: impl Into<String>,
    ) -> AssetBuilder {
        AssetBuilder {
            genesis: genesis.into(),
            id: id.into(),
            ticker: ticker.into(),
            name: name.into(),
            description: None,
            fractional_bits: 0,
            date: String::new(),
            known_circulating: 0,
            issue_limit: 0,
        }
    }

    pub fn genesis(&self) -> &str {
        &self.genesis
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fractional_bits(&self) -> u8 {
        self.fractional_bits.bits()
    }

    pub fn precision(&self) -> Precision {
        self.fractional_bits
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn known_circulating(&self) -> u64 {
        self.known_circulating
    }

    pub fn issue_limit(&self) -> u64 {
        self.issue_limit
    }

    /// `10^fractional_bits`
    pub fn fractional_divider(&self) -> u64 {
        self.fractional_bits.divider()
    }

    /// Circulating supply with the decimal point applied.
    pub fn known_circulating_assets(&self) -> f64 {
        self.fractional_bits.to_display(self.known_circulating)
    }

    /// Issue limit with the decimal point applied.
    pub fn issue_limit_assets(&self) -> f64 {
        self.fractional_bits.to_display(self.issue_limit)
    }

    /// Any atomic amount of this asset with the decimal point applied.
    pub fn to_display(&self, amount: u64) -> f64 {
        self.fractional_bits.to_display(amount)
    }

    pub fn to_internal(&self, display_amount: f64) -> u64 {
        self.fractional_bits.to_internal(display_amount)
    }

    /// Atomic units that can still be issued, zero if already over the limit.
    pub fn remaining_issuance(&self) -> u64 {
        self.issue_limit.saturating_sub(self.known_circulating)
    }

    pub fn is_within_issue_limit(&self) -> bool {
        self.known_circulating <= self.issue_limit
    }

    /// Best-effort reading of `date`: RFC 3339, or a bare `YYYY-MM-DD` taken
    /// as midnight UTC. Anything else is `None`.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        let date = self.date.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
            return Some(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
    }
}

impl fmt::Display for Rgb20Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.ticker, self.name)
    }
}

/// Collects the fields of an [`Rgb20Asset`]. Precision is checked in
/// [`AssetBuilder::build`].
#[derive(Debug, Clone)]
pub struct AssetBuilder {
    genesis: String,
    id: String,
    ticker: String,
    name: String,
    description: Option<String>,
    fractional_bits: u8,
    date: String,
    known_circulating: u64,
    issue_limit: u64,
}

impl AssetBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn fractional_bits(mut self, bits: u8) -> Self {
        self.fractional_bits = bits;
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn known_circulating(mut self, amount: u64) -> Self {
        self.known_circulating = amount;
        self
    }

    pub fn issue_limit(mut self, amount: u64) -> Self {
        self.issue_limit = amount;
        self
    }

    pub fn build(self) -> Result<Rgb20Asset> {
        let fractional_bits = Precision::new(self.fractional_bits)?;
        Ok(Rgb20Asset {
            genesis: self.genesis,
            id: self.id,
            ticker: self.ticker,
            name: self.name,
            description: self.description,
            fractional_bits,
            date: self.date,
            known_circulating: self.known_circulating,
            issue_limit: self.issue_limit,
        })
    }
}

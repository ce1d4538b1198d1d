// src/precision.rs
use crate::error::{AssetError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest supported number of fractional bits. `10^19` is the largest power
/// of ten that fits into `u64`.
pub const MAX_FRACTIONAL_BITS: u8 = 19;

/// `10^0` through `10^19`, indexed by fractional bits.
pub static POWERS_OF_TEN: [u64; MAX_FRACTIONAL_BITS as usize + 1] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
    10_000_000_000,
    100_000_000_000,
    1_000_000_000_000,
    10_000_000_000_000,
    100_000_000_000_000,
    1_000_000_000_000_000,
    10_000_000_000_000_000,
    100_000_000_000_000_000,
    1_000_000_000_000_000_000,
    10_000_000_000_000_000_000,
];

/// Number of decimal places used to turn atomic integer amounts into
/// human-readable quantities.
///
/// Invariant: the wrapped value is always within `0..=MAX_FRACTIONAL_BITS`,
/// so every lookup into [`POWERS_OF_TEN`] is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Precision(u8);

impl Precision {
    pub const ZERO: Precision = Precision(0);
    pub const MAX: Precision = Precision(MAX_FRACTIONAL_BITS);

    pub fn new(bits: u8) -> Result<Self> {
        if bits > MAX_FRACTIONAL_BITS {
            tracing::warn!(bits, "rejected out-of-range fractional bits");
            return Err(AssetError::InvalidPrecision(bits));
        }
        Ok(Self(bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// `10^bits`, exact.
    pub fn divider(self) -> u64 {
        POWERS_OF_TEN[self.0 as usize]
    }

    /// Atomic amount to display quantity. Lossy past 2^53.
    pub fn to_display(self, amount: u64) -> f64 {
        amount as f64 / self.divider() as f64
    }

    /// Display quantity to atomic amount, rounded to the nearest unit.
    /// Negative and NaN inputs give 0; values past `u64::MAX` saturate.
    pub fn to_internal(self, display_amount: f64) -> u64 {
        (display_amount * self.divider() as f64).round() as u64
    }

    /// Exact decimal rendering of an atomic amount, padded to the full
    /// number of fractional digits (`123456789000` at 8 bits is `"1234.56789000"`).
    pub fn format_amount(self, amount: u64) -> String {
        let divider = self.divider();
        let whole = amount / divider;
        if self.0 == 0 {
            return whole.to_string();
        }
        let fraction = amount % divider;
        format!("{}.{:0width$}", whole, fraction, width = self.0 as usize)
    }
}

impl TryFrom<u8> for Precision {
    type Error = AssetError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `10^bits` for an unvalidated bit count.
pub fn fractional_divider(bits: u8) -> Result<u64> {
    Precision::new(bits).map(Precision::divider)
}

/// `known_circulating / 10^bits` for an unvalidated bit count.
pub fn known_circulating_assets(known_circulating: u64, bits: u8) -> Result<f64> {
    Precision::new(bits).map(|precision| precision.to_display(known_circulating))
}

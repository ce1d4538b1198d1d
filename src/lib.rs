//! # rgb20-asset
//!
//! Metadata for RGB20 fungible assets: ticker, name, issuance limits and
//! the fractional precision used to read atomic amounts.
//!
//! Amounts are always carried as `u64` atomic units. The decimal point is
//! applied only for display, through a fixed table of powers of ten, so the
//! divider is exact for every supported precision (`0..=19`).
//!
//! ```rust
//! use rgb20_asset::Rgb20Asset;
//!
//! let asset = Rgb20Asset::builder("genesis1...", "rgb1...", "TKN", "Token")
//!     .fractional_bits(8)
//!     .known_circulating(123_456_789_000)
//!     .issue_limit(1_000_000_000_000)
//!     .build()?;
//!
//! assert_eq!(asset.fractional_divider(), 100_000_000);
//! assert_eq!(asset.precision().format_amount(asset.known_circulating()), "1234.56789000");
//! # Ok::<(), rgb20_asset::AssetError>(())
//! ```
//!
//! Precision is checked once, when the descriptor is built or decoded. An
//! out-of-range value is rejected with [`AssetError::InvalidPrecision`], so
//! the accessors on a built [`Rgb20Asset`] never fail.
//!
//! ## Feature flags
//!
//! | Flag      | Default | Description                          |
//! |-----------|---------|--------------------------------------|
//! | `msgpack` |         | MessagePack codec via `rmp-serde`    |
//! | `full`    |         | Everything above                     |

pub mod asset;
pub mod codec;
pub mod error;
pub mod precision;

pub use asset::{AssetBuilder, Rgb20Asset};
pub use codec::{decode_asset_list, encode_asset_list, from_json, to_json};
#[cfg(feature = "msgpack")]
pub use codec::{from_msgpack, to_msgpack};
pub use error::{AssetError, Result};
pub use precision::{
    MAX_FRACTIONAL_BITS, POWERS_OF_TEN, Precision, fractional_divider, known_circulating_assets,
};

// src/codec.rs
//! Structured encodings of [`Rgb20Asset`].
//!
//! Records use the camelCase field names wallets exchange
//! (`fractionalBits`, `knownCirculating`, `issueLimit`). A missing
//! `description` is left out of the record rather than written as `null`.
use crate::asset::Rgb20Asset;
use crate::error::{AssetError, Result};
use metrics::counter;

fn decoded(format: &'static str) {
    counter!("rgb20.codec.decoded", "format" => format).increment(1);
}

fn rejected(format: &'static str, error: &dyn std::fmt::Display) -> AssetError {
    tracing::warn!(format, error = %error, "rejected asset record");
    counter!("rgb20.codec.rejected", "format" => format).increment(1);
    AssetError::Deserialize(error.to_string())
}

pub fn to_json(asset: &Rgb20Asset) -> Result<String> {
    serde_json::to_string(asset).map_err(|e| AssetError::Serialize(e.to_string()))
}

pub fn from_json(json: &str) -> Result<Rgb20Asset> {
    let asset = serde_json::from_str(json).map_err(|e| rejected("json", &e))?;
    decoded("json");
    Ok(asset)
}

pub fn encode_asset_list(assets: &[Rgb20Asset]) -> Result<String> {
    serde_json::to_string(assets).map_err(|e| AssetError::Serialize(e.to_string()))
}

/// Decode a JSON array of asset records, as returned by a wallet's asset
/// listing. One bad record fails the whole list.
pub fn decode_asset_list(json: &str) -> Result<Vec<Rgb20Asset>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(json).map_err(|e| rejected("json", &e))?;

    let mut assets = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let asset = serde_json::from_value(record)
            .map_err(|e| rejected("json", &format!("record {}: {}", index, e)))?;
        assets.push(asset);
    }

    tracing::debug!(count = assets.len(), "decoded asset list");
    counter!("rgb20.codec.decoded", "format" => "json").increment(assets.len() as u64);
    Ok(assets)
}

/// MessagePack with named fields, so records stay readable by map-based
/// decoders and `description` may be omitted.
#[cfg(feature = "msgpack")]
pub fn to_msgpack(asset: &Rgb20Asset) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(asset).map_err(|e| AssetError::Serialize(e.to_string()))
}

#[cfg(feature = "msgpack")]
pub fn from_msgpack(bytes: &[u8]) -> Result<Rgb20Asset> {
    let asset = rmp_serde::from_slice(bytes).map_err(|e| rejected("msgpack", &e))?;
    decoded("msgpack");
    Ok(asset)
}

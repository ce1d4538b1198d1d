// tests/integration_tests.rs
use rgb20_asset::{
    AssetError, MAX_FRACTIONAL_BITS, Precision, Rgb20Asset, decode_asset_list, encode_asset_list,
    fractional_divider, from_json, known_circulating_assets, to_json,
};

fn tether(description: Option<&str>) -> Rgb20Asset {
    let builder = Rgb20Asset::builder(
        "genesis1qyfe883hey6jrgj2xvk5g3dfmfqfzm7a4wez4pd2krf7ltsxffd6u6nrvjvqe",
        "rgb1a6jpv5ahxz8y2gxgqaqk8uxm4rjzlx6ptqq7y0",
        "USDT",
        "Tether",
    )
    .fractional_bits(8)
    .date("2021-02-02")
    .known_circulating(123_456_789_000)
    .issue_limit(1_000_000_000_000);

    match description {
        Some(text) => builder.description(text).build().unwrap(),
        None => builder.build().unwrap(),
    }
}

#[test]
fn test_divider_is_exact_power_of_ten() {
    for bits in 0..=MAX_FRACTIONAL_BITS {
        assert_eq!(fractional_divider(bits), Ok(10u64.pow(bits as u32)));
    }
    assert_eq!(fractional_divider(0), Ok(1));
    assert_eq!(fractional_divider(19), Ok(10_000_000_000_000_000_000));
}

#[test]
fn test_known_circulating_assets() {
    let asset = tether(None);
    assert_eq!(asset.fractional_divider(), 100_000_000);
    assert!((asset.known_circulating_assets() - 1234.56789).abs() < f64::EPSILON * 1234.56789);
    assert_eq!(
        known_circulating_assets(123_456_789_000, 8),
        Ok(asset.known_circulating_assets())
    );
}

#[test]
fn test_zero_circulating() {
    for bits in 0..=MAX_FRACTIONAL_BITS {
        assert_eq!(known_circulating_assets(0, bits), Ok(0.0));
    }
}

#[test]
fn test_zero_precision_is_identity() {
    for amount in [0u64, 1, 42, 9_007_199_254_740_992] {
        assert_eq!(known_circulating_assets(amount, 0), Ok(amount as f64));
    }
}

#[test]
fn test_precision_twenty_is_rejected() {
    let built = Rgb20Asset::builder("g", "id", "T", "N")
        .fractional_bits(20)
        .build();
    assert_eq!(built, Err(AssetError::InvalidPrecision(20)));
    assert_eq!(fractional_divider(20), Err(AssetError::InvalidPrecision(20)));
    assert_eq!(Precision::try_from(20u8), Err(AssetError::InvalidPrecision(20)));
}

#[test]
fn test_json_round_trip() {
    for asset in [tether(None), tether(Some("")), tether(Some("USD stablecoin"))] {
        let json = to_json(&asset).unwrap();
        let decoded = from_json(&json).unwrap();
        assert_eq!(decoded, asset);
        assert_eq!(decoded.description(), asset.description());
    }
}

#[test]
fn test_asset_list_round_trip() {
    let assets = vec![tether(None), tether(Some("USD stablecoin"))];
    let json = encode_asset_list(&assets).unwrap();
    assert_eq!(decode_asset_list(&json).unwrap(), assets);
    assert!(decode_asset_list("[]").unwrap().is_empty());
}

#[test]
fn test_asset_list_rejects_non_array() {
    assert!(matches!(
        decode_asset_list("{}"),
        Err(AssetError::Deserialize(_))
    ));
}

#[test]
fn test_msgpack_named_round_trip() {
    for asset in [tether(None), tether(Some("USD stablecoin"))] {
        let bytes = rmp_serde::to_vec_named(&asset).unwrap();
        let decoded: Rgb20Asset = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded, asset);
    }
}

#[cfg(feature = "msgpack")]
#[test]
fn test_msgpack_codec() {
    let asset = tether(Some("USD stablecoin"));
    let bytes = rgb20_asset::to_msgpack(&asset).unwrap();
    assert_eq!(rgb20_asset::from_msgpack(&bytes).unwrap(), asset);
    assert!(matches!(
        rgb20_asset::from_msgpack(&[0xc1]),
        Err(AssetError::Deserialize(_))
    ));
}

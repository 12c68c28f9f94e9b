//! Integration tests for the version byte calculator and its CLI front end

use b58prefix::cli::{run, Cli};
use b58prefix::codec::{b58enc, check_decode};
use b58prefix::{asciidec, b58dec, compute_version_bytes, PrefixError};
use clap::Parser;
use num_bigint::BigUint;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_documented_values() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(b58dec("1")?, BigUint::from(0u32));
    assert_eq!(b58dec("mv1")?, BigUint::from(151090u32));
    assert_eq!(asciidec(&BigUint::from(375492u32)), vec![5, 186, 196]);
    assert_eq!(asciidec(&BigUint::from(797373u32)), vec![12, 42, 189]);

    assert_eq!(compute_version_bytes("edpk", 32)?, (54, vec![13, 15, 37, 191]));
    assert_eq!(compute_version_bytes("mv2", 20)?, (36, vec![5, 186, 199]));
    assert_eq!(compute_version_bytes("mv1", 20)?, (36, vec![5, 186, 196]));
    Ok(())
}

#[test]
fn test_round_trip_and_idempotence() -> Result<(), Box<dyn std::error::Error>> {
    let mut value = BigUint::from(0u32);
    for i in 0u32..64 {
        assert_eq!(b58dec(&b58enc(&value))?, value);
        value = value * 256u32 + (i * 31 + 7);
    }

    for (prefix, length) in [("mv1", 20), ("edpk", 32), ("KT1", 20)] {
        assert_eq!(
            compute_version_bytes(prefix, length)?,
            compute_version_bytes(prefix, length)?
        );
    }
    Ok(())
}

#[test]
fn test_invalid_alphabet_is_rejected() {
    assert!(matches!(
        b58dec("mv10"),
        Err(PrefixError::InvalidCharacter { character: '0', position: 3 })
    ));
    assert!(matches!(
        compute_version_bytes("tzO", 20),
        Err(PrefixError::InvalidCharacter { character: 'O', .. })
    ));
}

#[test]
fn test_real_addresses_carry_computed_version_bytes() -> Result<(), Box<dyn std::error::Error>> {
    let cases = [
        ("mv1E7Ms4p1e3jV2WMehLB3FBFwbV56GiRQfe", "mv1", 20),
        ("mv2RKxcrsHm8FsDSZdu8aYrNxgBewfvQudq1", "mv2", 20),
        ("mv3JVYv3uSuDmxcsfj1fqkusda7qgpcHc1AH", "mv3", 20),
        ("KT1BuEZtb68c1Q4yjtckcNjGELqWt56Xyesc", "KT1", 20),
        ("sppk7Zik17H7AxECMggqD1FyXUQdrGRFtz9X7aR8W2BhaJoWwSnPEGA", "sppk", 33),
        ("p2pk67VpBjWwoPULwXCpayec6rFxaAKv8VjJ8cVMHmLDCYARu31zx5Z", "p2pk", 33),
    ];
    for (encoded, prefix, length) in cases {
        let (encoded_length, version_bytes) = compute_version_bytes(prefix, length)?;
        let data = check_decode(encoded)?;
        assert_eq!(encoded.len(), encoded_length, "{}", encoded);
        assert_eq!(data.len(), version_bytes.len() + length, "{}", encoded);
        assert!(data.starts_with(&version_bytes), "{}", encoded);
    }
    Ok(())
}

#[test]
fn test_cli_reads_config_file() -> Result<(), Box<dyn std::error::Error>> {
    colored::control::set_override(false);
    let dir = TempDir::new()?;
    let path = dir.path().join("b58prefix.toml");
    fs::write(
        &path,
        r#"
        [search]
        max_version_bytes = 3

        [[prefixes]]
        name = "tz1 account"
        prefix = "tz1"
        payload_length = 20
        "#,
    )?;
    let config_arg = path.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["b58-prefix", "--config", &config_arg, "--json", "catalog"])?;
    let mut out = Vec::new();
    assert!(run(&cli, &mut out)?);
    let listed: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(listed[0]["name"], "tz1 account");
    assert_eq!(listed[0]["version_bytes"], serde_json::json!([6, 161, 159]));

    // The configured limit of three bytes applies to compute as well.
    let cli = Cli::try_parse_from([
        "b58-prefix", "--config", &config_arg, "compute", "--prefix", "edpk", "--length", "32",
    ])?;
    let err = run(&cli, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, PrefixError::NoSolutionFound { max_version_bytes: 3, .. }));
    Ok(())
}

#[test]
fn test_cli_missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("absent.toml");
    let missing = missing.to_string_lossy().to_string();

    let cli = Cli::try_parse_from(["b58-prefix", "--config", &missing, "decode", "mv1"])?;
    let err = run(&cli, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, PrefixError::Io(_)));
    Ok(())
}

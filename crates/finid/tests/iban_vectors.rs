//! End-to-end IBAN vectors: one published sample per supported country,
//! the documented error cases, and generation round trips.

use finid::{Iban, ParseOptions, Registry, ValidationError, Verdict};

/// One published registry sample per supported country.
const SAMPLES: &[&str] = &[
    "AT611904300234573201",
    "BE68539007547034",
    "BG80BNBG96611020345678",
    "CH9300762011623852957",
    "CY17002001280000001200527600",
    "CZ6508000000192000145399",
    "DE89370400440532013000",
    "DK5000400440116243",
    "EE382200221020145685",
    "ES9121000418450200051332",
    "FI2112345600000785",
    "FR1420041010050500013M02606",
    "GB29NWBK60161331926819",
    "GR1601101250000000012300695",
    "HR1210010051863000160",
    "HU42117730161111101800000000",
    "IE29AIBK93115212345678",
    "IS140159260076545510730339",
    "IT60X0542811101000000123456",
    "LT121000011101001000",
    "LU280019400644750000",
    "LV80BANK0000435195001",
    "MC5811222000010123456789030",
    "MT84MALT011000012345MTLCAST001S",
    "NL91ABNA0417164300",
    "NO9386011117947",
    "PL61109010140000071219812874",
    "PT50000201231234567890154",
    "RO49AAAA1B31007593840000",
    "SE4550000000058398257466",
    "SI56263300012039086",
    "SK3112000000198742637541",
    "SM86U0322509800000000270100",
];

#[test]
fn every_supported_country_parses_its_published_sample() {
    let registry = Registry::builtin();
    for sample in SAMPLES {
        let iban = Iban::parse(sample)
            .unwrap_or_else(|e| panic!("sample {sample} failed to parse: {e}"));
        let spec = registry.spec(iban.country_code()).unwrap();
        assert_eq!(iban.len(), spec.iban_length(), "length mismatch for {sample}");
        assert!(iban.bank_code().is_some(), "no bank code in {sample}");
        assert!(iban.account_code().is_some(), "no account code in {sample}");
    }
}

#[test]
fn sample_count_matches_registry_coverage() {
    assert_eq!(SAMPLES.len(), Registry::builtin().country_specs().count());
}

#[test]
fn formatting_round_trips_for_every_sample() {
    for sample in SAMPLES {
        let iban = Iban::parse(sample).unwrap();
        let formatted = iban.formatted();
        assert!(!formatted.ends_with(' '), "trailing space in {formatted:?}");
        assert!(!formatted.contains("  "), "double space in {formatted:?}");
        let reparsed = Iban::parse(&formatted).unwrap();
        assert_eq!(iban, reparsed, "format round trip broke {sample}");
    }
}

#[test]
fn known_vector_decomposes_as_documented() {
    let iban = Iban::parse("DE89 3704 0044 0532 0130 00").unwrap();
    assert_eq!(iban.country_code(), "DE");
    assert_eq!(iban.bank_code(), Some("37040044"));
    assert_eq!(iban.account_code(), Some("0532013000"));
    assert_eq!(iban.len(), 22);
}

#[test]
fn documented_error_vectors() {
    assert!(matches!(
        Iban::parse("DX89370400440532013000").unwrap_err(),
        ValidationError::InvalidCountryCode { .. }
    ));
    assert!(matches!(
        Iban::parse("DE99370400440532013000").unwrap_err(),
        ValidationError::InvalidChecksumDigits { .. }
    ));
    assert!(matches!(
        Iban::parse_with(
            "DE20 2909 0900 8840 0170 00",
            ParseOptions::with_national_checksum()
        )
        .unwrap_err(),
        ValidationError::InvalidBbanChecksum { .. }
    ));
}

#[test]
fn national_checksums_hold_for_covered_samples() {
    let opts = ParseOptions::with_national_checksum();
    for sample in [
        "DE89370400440532013000",
        "IT60X0542811101000000123456",
        "SM86U0322509800000000270100",
        "BE68539007547034",
        "FR1420041010050500013M02606",
        "MC5811222000010123456789030",
    ] {
        assert!(
            Iban::parse_with(sample, opts).is_ok(),
            "national checksum rejected {sample}"
        );
    }
}

#[test]
fn national_checksum_failures_are_detected() {
    let opts = ParseOptions::with_national_checksum();
    // Deliberately wrong CIN / check digits / RIB key, with freshly
    // computed mod-97 digits so only the national stage can fail.
    for broken in [
        "IT64Y0542811101000000123456",
        "BE59539007547099",
        "FR2130006000011234567890112",
    ] {
        assert!(
            matches!(
                Iban::parse_with(broken, opts).unwrap_err(),
                ValidationError::InvalidBbanChecksum { .. }
            ),
            "expected national checksum failure for {broken}"
        );
    }
}

#[test]
fn unsupported_national_checksums_are_skipped_not_failed() {
    let opts = ParseOptions::with_national_checksum();
    // Spain declares national check digits but registers no algorithm.
    let iban = Iban::parse_with("ES9121000418450200051332", opts).unwrap();
    assert_eq!(iban.national_check_digits(), Some("45"));
    match iban.validate_national_in(Registry::builtin()).unwrap_err() {
        ValidationError::UnsupportedChecksum { country, .. } => assert_eq!(country, "ES"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn generation_matches_checksum_recomputation() {
    let iban = Iban::generate("DE", "10010010", None, "12345").unwrap();
    assert_eq!(iban.as_str(), "DE40100100100000012345");
    let recomputed =
        finid_core::mod97::compute_check_digits(iban.country_code(), iban.bban()).unwrap();
    assert_eq!(iban.check_digits(), recomputed);

    let without_spaces = iban.formatted().replace(' ', "");
    assert_eq!(Iban::parse(&without_spaces).unwrap(), iban);
}

#[test]
fn generated_national_checksums_validate() {
    let opts = ParseOptions::with_national_checksum();
    for (country, bank, branch, account) in [
        ("IT", "05428", Some("11101"), "123456"),
        ("SM", "03225", Some("09800"), "270100"),
        ("BE", "539", None, "0075470"),
        ("FR", "30006", Some("00001"), "12345678901"),
        ("MC", "11222", Some("00001"), "1234567890"),
    ] {
        let iban = Iban::generate(country, bank, branch, account).unwrap();
        assert!(
            Iban::parse_with(iban.as_str(), opts).is_ok(),
            "generated {iban} fails its own national checksum"
        );
    }
}

#[test]
fn parsed_bban_exposes_national_checksum_verdict() {
    use finid::Bban;

    let registry = Registry::builtin();
    let checked = Bban::parse("IT", "X0542811101000000123456").unwrap();
    assert_eq!(
        checked.national_checksum_in(registry).unwrap(),
        Verdict::Passed
    );
    let unchecked = Bban::parse("SE", "50000000058398257466").unwrap();
    assert_eq!(
        unchecked.national_checksum_in(registry).unwrap(),
        Verdict::Unsupported
    );
}

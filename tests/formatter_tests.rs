use currency_format::{
    CurrencyError, FormatCurrencyOptions, NegativeFormat, NegativeStyle, RoundingMode,
    format_currency, format_currency_default, parse_currency_string,
};

#[test]
fn test_default_options() {
    assert_eq!(format_currency_default(1000000).unwrap(), "1.000.000");
    assert_eq!(format_currency_default(0).unwrap(), "0");
    assert_eq!(format_currency_default(999).unwrap(), "999");
    assert_eq!(format_currency_default(1500.7).unwrap(), "1.500");
}

#[test]
fn test_string_input_is_parsed() {
    assert_eq!(format_currency_default("Rp 15.300.000").unwrap(), "15.300.000");
    assert_eq!(format_currency_default("1,121,234.56").unwrap(), "1.121.234");

    let options = FormatCurrencyOptions::default().with_decimal(true);
    assert_eq!(format_currency("1.121.234,56", &options).unwrap(), "1.121.234,56");
    assert_eq!(format_currency("(1.234,56)", &options).unwrap(), "-1.234,56");
}

#[test]
fn test_round_trip_grouping() {
    for text in ["15.300.000", "1.000", "999", "2.000.000.000"] {
        let parsed = parse_currency_string(text);
        assert_eq!(format_currency_default(parsed).unwrap(), text);
    }

    let comma = FormatCurrencyOptions::default().with_separator(",");
    assert_eq!(
        format_currency(parse_currency_string("7,654,321"), &comma).unwrap(),
        "7,654,321"
    );
}

#[test]
fn test_rounding_modes() {
    let base = FormatCurrencyOptions::default()
        .with_decimal(true)
        .with_total_decimal(2);

    let ceil = base.clone().with_rounding(RoundingMode::Ceil);
    assert_eq!(format_currency(2.345, &ceil).unwrap(), "2,35");

    let floor = base.clone().with_rounding(RoundingMode::Floor);
    assert_eq!(format_currency(2.345, &floor).unwrap(), "2,34");

    let round = base.clone().with_rounding(RoundingMode::Round);
    assert_eq!(format_currency(1234.567, &round).unwrap(), "1.234,57");

    let truncate = base.with_rounding(RoundingMode::Truncate);
    assert_eq!(format_currency(1234.567, &truncate).unwrap(), "1.234,56");
    assert_eq!(format_currency(5, &truncate).unwrap(), "5,00");
}

#[test]
fn test_rounding_modes_large_amounts() {
    let base = FormatCurrencyOptions::default().with_decimal(true);
    let floor = base.clone().with_rounding(RoundingMode::Floor);
    let ceil = base.clone().with_rounding(RoundingMode::Ceil);

    assert_eq!(format_currency(15300000.759, &floor).unwrap(), "15.300.000,75");
    assert_eq!(format_currency(10000000.555, &floor).unwrap(), "10.000.000,55");
    assert_eq!(format_currency(50000000.001, &ceil).unwrap(), "50.000.000,01");
    assert_eq!(
        format_currency(12345678901.2345, &ceil).unwrap(),
        "12.345.678.901,24"
    );
    assert_eq!(format_currency(-15300000.759, &floor).unwrap(), "-15.300.000,75");
}

#[test]
fn test_huge_values() {
    let options = FormatCurrencyOptions::default().with_decimal(true);
    assert!(matches!(
        format_currency("9".repeat(400), &options),
        Err(CurrencyError::InvalidValue(_))
    ));

    let fifteen = options.with_total_decimal(15);
    let text = format_currency(1e300, &fifteen).unwrap();
    assert!(text.starts_with("1.000.000"));
    assert!(text.ends_with(&format!(",{}", "0".repeat(15))));
    assert!(!text.contains("inf"));
}

#[test]
fn test_total_decimal_zero_hides_decimals() {
    let options = FormatCurrencyOptions::default()
        .with_decimal(true)
        .with_total_decimal(0);
    assert_eq!(format_currency(1234.5, &options).unwrap(), "1.235");
}

#[test]
fn test_decimal_suffix() {
    let options = FormatCurrencyOptions::default()
        .with_decimal(true)
        .with_suffix_decimal(".-");
    assert_eq!(format_currency(1500, &options).unwrap(), "1.500,00.-");

    let no_end = options.with_end_decimal(false);
    assert_eq!(format_currency(1500, &no_end).unwrap(), "1.500,00");
}

#[test]
fn test_currency_prefix() {
    let options = FormatCurrencyOptions::default().with_currency("Rp ");
    assert_eq!(format_currency(25000, &options).unwrap(), "Rp 25.000");

    let blank = FormatCurrencyOptions::default().with_currency("   ");
    assert_eq!(format_currency(25000, &blank).unwrap(), "25.000");
}

#[test]
fn test_negative_styles() {
    assert_eq!(format_currency_default(-1500).unwrap(), "-1.500");

    let brackets = FormatCurrencyOptions::default().with_negative_format(NegativeStyle::Brackets);
    assert_eq!(format_currency(-1500, &brackets).unwrap(), "(1.500)");

    let spaced_dash =
        FormatCurrencyOptions::default().with_negative_format(NegativeFormat::spaced(NegativeStyle::Dash));
    assert_eq!(format_currency(-1500, &spaced_dash).unwrap(), "- 1.500");

    let abs = FormatCurrencyOptions::default().with_negative_format(NegativeStyle::Abs);
    assert_eq!(format_currency(-1500, &abs).unwrap(), "1.500");

    // Positive values never get a marker
    assert_eq!(format_currency(1500, &brackets).unwrap(), "1.500");
}

#[test]
fn test_negative_wraps_currency_and_decimals() {
    let options = FormatCurrencyOptions::default()
        .with_currency("Rp ")
        .with_decimal(true)
        .with_negative_format(NegativeStyle::Brackets);
    assert_eq!(format_currency(-1234.5, &options).unwrap(), "(Rp 1.234,50)");
}

#[test]
fn test_custom_negative_format() {
    let options = FormatCurrencyOptions::default()
        .with_negative_format(NegativeFormat::custom(|s| Some(format!("{s} CR"))));
    assert_eq!(format_currency(-1500, &options).unwrap(), "1.500 CR");
    assert_eq!(format_currency(1500, &options).unwrap(), "1.500");

    let refusing = FormatCurrencyOptions::default().with_negative_format(NegativeFormat::custom(|_| None));
    assert_eq!(format_currency(-1, &refusing), Err(CurrencyError::CustomFormat));
    // The callback only runs for negative values
    assert_eq!(format_currency(1, &refusing).unwrap(), "1");
}

#[test]
fn test_indian_format() {
    let options = FormatCurrencyOptions::default()
        .with_indian_format(true)
        .with_separator(" ");
    assert_eq!(format_currency(1234567, &options).unwrap(), "12,34,567");
    assert_eq!(format_currency(123, &options).unwrap(), "123");

    let with_decimals = options.with_decimal(true).with_separator_decimals(";");
    assert_eq!(
        format_currency(123456789.5, &with_decimals).unwrap(),
        "12,34,56,789.50"
    );
}

#[test]
fn test_invalid_value() {
    assert!(matches!(
        format_currency_default("abc"),
        Err(CurrencyError::InvalidValue(_))
    ));
    assert!(matches!(
        format_currency_default(""),
        Err(CurrencyError::InvalidValue(_))
    ));
    assert!(matches!(
        format_currency_default(f64::NAN),
        Err(CurrencyError::InvalidValue(_))
    ));
    assert!(matches!(
        format_currency_default(f64::INFINITY),
        Err(CurrencyError::InvalidValue(_))
    ));
}

#[test]
fn test_invalid_options_fail_before_value() {
    let options = FormatCurrencyOptions::default().with_total_decimal(99);
    // Option errors win even when the value is also bad
    assert!(matches!(
        format_currency("abc", &options),
        Err(CurrencyError::InvalidOption {
            option: "total_decimal",
            ..
        })
    ));
}

#[test]
fn test_error_messages() {
    let err = "bad".parse::<RoundingMode>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid option `rounded_decimal`: expected round, ceil, floor or false, got 'bad'"
    );
    assert_eq!(
        CurrencyError::CustomFormat.to_string(),
        "custom negative formatter did not return a string"
    );
}

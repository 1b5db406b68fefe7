use crate::store::{ConstantRegistry, ConstantValue, RegistryResult};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Fractional digits of the mantissa. `None` keeps the shortest round-trip digits.
    pub precision: Option<usize>,
    /// Placed between the number and a non-empty unit.
    pub separator: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { precision: None, separator: " ".to_string() }
    }
}

/// Renders `value unit`, or the bare number for dimensionless constants.
pub fn format_constant(constant: &ConstantValue, options: &FormatOptions) -> String {
    let mut out = format_number(constant.value(), options.precision);
    if !constant.unit().is_empty() {
        out.push_str(&options.separator);
        out.push_str(constant.unit());
    }
    out
}

/// `%g`-style: scientific notation when the decimal exponent is below -4
/// or at least 6, plain decimal otherwise.
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let shortest = format!("{:e}", value);
    let exponent = decimal_exponent(&shortest);

    if !(-4..6).contains(&exponent) {
        let scientific = match precision {
            Some(p) => format!("{:.*e}", p, value),
            None => shortest,
        };
        signed_exponent(&scientific)
    } else {
        match precision {
            Some(p) => format!("{:.*}", p, value),
            None => value.to_string(),
        }
    }
}

fn decimal_exponent(scientific: &str) -> i32 {
    scientific
        .rsplit_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

// "2.99792458e8" -> "2.99792458e+08"
fn signed_exponent(scientific: &str) -> String {
    match scientific.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => scientific.to_string(),
    }
}

/// One `Name = value unit` line per constant, in declaration order.
pub fn format_listing(registry: &ConstantRegistry) -> RegistryResult<String> {
    let options = FormatOptions::default();
    let mut out = String::new();
    for entry in registry.iter() {
        let (name, constant) = entry?;
        let _ = writeln!(out, "{} = {}", name, format_constant(constant, &options));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(9.1093837139e-31, "kg", "9.1093837139e-31 kg")]
    #[case(299792458.0, "m/s", "2.99792458e+08 m/s")]
    #[case(6.02214076e23, "1/mol", "6.02214076e+23 1/mol")]
    #[case(25812.80745, "\u{03A9}", "25812.80745 Ω")]
    #[case(123456.0, "", "123456")]
    #[case(1e6, "", "1e+06")]
    #[case(0.0001, "", "0.0001")]
    #[case(0.00001, "", "1e-05")]
    #[case(0.5, "", "0.5")]
    #[case(0.0, "m", "0 m")]
    fn test_default_rendering(#[case] value: f64, #[case] unit: &str, #[case] expected: &str) {
        let constant = ConstantValue::new(value, unit);
        assert_eq!(format_constant(&constant, &FormatOptions::default()), expected);
        assert_eq!(constant.to_string(), expected);
    }

    #[rstest]
    #[case(9.1093837139e-31, 3, "9.109e-31")]
    #[case(1836.15267343, 2, "1836.15")]
    #[case(6.62607015e-34, 0, "7e-34")]
    fn test_fixed_precision(#[case] value: f64, #[case] precision: usize, #[case] expected: &str) {
        assert_eq!(format_number(value, Some(precision)), expected);
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number(f64::NAN, None), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY, None), "-inf");
        assert_eq!(format_number(f64::INFINITY, Some(3)), "inf");
    }

    #[test]
    fn test_custom_separator() {
        let options = FormatOptions { precision: None, separator: "\t".into() };
        assert_eq!(format_constant(&ConstantValue::new(2.0, "C"), &options), "2\tC");
    }

    #[test]
    fn test_listing_follows_declaration_order() {
        let mut reg = ConstantRegistry::new();
        reg.declare_base("Alpha", 0.5, "").unwrap();
        reg.declare_base("C", 299792458.0, "m/s").unwrap();
        assert!(format_listing(&reg).is_err());

        reg.resolve().unwrap();
        assert_eq!(format_listing(&reg).unwrap(), "Alpha = 0.5\nC = 2.99792458e+08 m/s\n");
    }
}

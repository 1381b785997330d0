//! Plain-text rendering of the per-step table.
//!
//! Numbers are written the way C's `%g` conversion writes them: six
//! significant digits, trailing zeros dropped, and scientific notation
//! when the decimal exponent is below −4 or at least 6.

use std::io::{self, Write};

use crate::stats::StepSummary;

/// Significant digits, as in `%g` without an explicit precision.
const PRECISION: usize = 6;

/// Formats `value` like C's `printf("%g", value)`.
///
/// # Examples
/// ```
/// use u_percolation::output::format_g;
/// assert_eq!(format_g(0.25), "0.25");
/// assert_eq!(format_g(4.0), "4");
/// assert_eq!(format_g(1.0 / 3.0), "0.333333");
/// assert_eq!(format_g(1234567.0), "1.23457e+06");
/// assert_eq!(format_g(0.00001), "1e-05");
/// ```
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // Round to the target precision first; the exponent after rounding
    // picks the style.
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exp) = sci.split_once('e').expect("exponent marker");
    let exp: i32 = exp.parse().expect("integer exponent");

    if exp < -4 || exp >= PRECISION as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.unsigned_abs())
    } else {
        let decimals = (PRECISION as i32 - 1 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Writes one `fraction mean stderr` line per step.
pub fn write_table<W: Write>(mut out: W, table: &[StepSummary]) -> io::Result<()> {
    for row in table {
        writeln!(
            out,
            "{} {} {}",
            format_g(row.fraction),
            format_g(row.mean),
            format_g(row.std_error)
        )?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_g(1.0), "1");
        assert_eq!(format_g(10.0), "10");
        assert_eq!(format_g(100000.0), "100000");
        assert_eq!(format_g(1000000.0), "1e+06");
        assert_eq!(format_g(-3.0), "-3");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_g(0.5), "0.5");
        assert_eq!(format_g(0.75), "0.75");
        assert_eq!(format_g(2.0 / 3.0), "0.666667");
        assert_eq!(format_g(123.456789), "123.457");
        assert_eq!(format_g(0.0001), "0.0001");
        assert_eq!(format_g(0.000123456), "0.000123456");
        assert_eq!(format_g(-2.5), "-2.5");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(format_g(9.9999996), "10");
        assert_eq!(format_g(999999.7), "1e+06");
        assert_eq!(format_g(0.000099999999), "0.0001");
    }

    #[test]
    fn test_scientific() {
        assert_eq!(format_g(1.5e-7), "1.5e-07");
        assert_eq!(format_g(2.5e10), "2.5e+10");
        assert_eq!(format_g(1e100), "1e+100");
        assert_eq!(format_g(-1.234567e-9), "-1.23457e-09");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(-0.0), "-0");
        assert_eq!(format_g(f64::NAN), "nan");
        assert_eq!(format_g(f64::INFINITY), "inf");
        assert_eq!(format_g(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_write_table() {
        let table = [
            StepSummary {
                step: 1,
                fraction: 0.5,
                mean: 1.0,
                std_error: 0.0,
            },
            StepSummary {
                step: 2,
                fraction: 1.0,
                mean: 1.5,
                std_error: 0.5,
            },
        ];
        let mut out = Vec::new();
        write_table(&mut out, &table).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0.5 1 0\n1 1.5 0.5\n");
    }
}

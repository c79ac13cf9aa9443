/// Parses the leading number of a field value.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"3.5m"` reads as 3.5. `Infinity` is recognised. Anything without a
/// numeric prefix, including an empty value, reads as NaN.
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_float("3.0"), 3.0);
        assert_eq!(parse_float("  5.2"), 5.2);
        assert_eq!(parse_float("-0.5"), -0.5);
        assert_eq!(parse_float("+7"), 7.0);
        assert_eq!(parse_float(".25"), 0.25);
        assert_eq!(parse_float("4."), 4.0);
        assert_eq!(parse_float("1.5e3"), 1500.0);
    }

    #[test]
    fn stops_at_first_non_numeric_character() {
        assert_eq!(parse_float("3.5m"), 3.5);
        assert_eq!(parse_float("200 mm"), 200.0);
        assert_eq!(parse_float("1.2.3"), 1.2);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("2e+"), 2.0);
    }

    #[test]
    fn recognises_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn non_numeric_input_is_nan() {
        for input in ["", "   ", "abc", ".", "-", "m3.5", "inf", "NaN"] {
            assert!(parse_float(input).is_nan(), "{input:?}");
        }
    }
}

//! Reading and writing numbers as text.
//!
//! Criteria read numbers the lenient way web input is usually read: a
//! measurement takes the longest numeric prefix of its digit run, while an
//! element coerces the whole string and yields NaN on anything else. Output
//! uses the shortest round-trip form, switching to exponent notation outside
//! `1e-6..1e21`.

/// Reads the longest decimal prefix of `run` (digits with at most one dot).
///
/// Returns `None` when the prefix holds no digit, e.g. for `"."`.
pub fn leading_float(run: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    let mut seen_digit = false;

    for (idx, c) in run.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = idx + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    run[..end].parse().ok()
}

/// Coerces a whole string to a number.
///
/// - surrounding whitespace is ignored; blank text is `0`
/// - `0x`, `0o` and `0b` prefixes read unsigned integers in that radix
/// - `Infinity` with an optional sign is infinite
/// - decimal literals with optional sign, fraction and exponent
///
/// Anything else is NaN.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(n) = radix_literal(trimmed) {
        return n;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let mut value = 0.0_f64;
    for c in text[2..].chars() {
        let Some(digit) = c.to_digit(radix) else {
            return Some(f64::NAN);
        };
        value = value * f64::from(radix) + f64::from(digit);
    }
    Some(value)
}

fn is_decimal_literal(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !digits(int_part) || !digits(frac_part) || int_part.len() + frac_part.len() == 0 {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !exp.is_empty() && digits(exp)
        }
    }
}

/// Shortest text form of a number.
pub fn js_number_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => formatted,
        };
    }

    n.to_string()
}

/// Formats a number with no fraction digits, rounding halves away from zero.
pub fn to_fixed0(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.abs() >= 1e21 {
        return js_number_string(n);
    }
    if n < 0.0 {
        format!("-{}", (-n).round())
    } else {
        format!("{}", n.round().abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("12"), Some(12.0));
        assert_eq!(leading_float("1.5"), Some(1.5));
        assert_eq!(leading_float(".5"), Some(0.5));
        assert_eq!(leading_float("5."), Some(5.0));
        assert_eq!(leading_float("1.2.3"), Some(1.2));
        assert_eq!(leading_float("."), None);
        assert_eq!(leading_float(""), None);
    }

    #[test]
    fn test_coerce_decimal() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number("  -3.5  "), -3.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("+.5"), 0.5);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn test_coerce_radix_and_infinity() {
        assert_eq!(coerce_number("0x1f"), 31.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("0xZZ").is_nan());
    }

    #[test]
    fn test_coerce_rejects_non_numeric() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12px").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("nan").is_nan());
        assert!(coerce_number("1e").is_nan());
        assert!(coerce_number(".").is_nan());
    }

    #[test]
    fn test_js_number_string() {
        assert_eq!(js_number_string(5.0), "5");
        assert_eq!(js_number_string(1.5), "1.5");
        assert_eq!(js_number_string(-0.0), "0");
        assert_eq!(js_number_string(f64::NAN), "NaN");
        assert_eq!(js_number_string(f64::INFINITY), "Infinity");
        assert_eq!(js_number_string(1e21), "1e+21");
        assert_eq!(js_number_string(1.5e-7), "1.5e-7");
        assert_eq!(js_number_string(123456.789), "123456.789");
    }

    #[test]
    fn test_to_fixed0() {
        assert_eq!(to_fixed0(1.5), "2");
        assert_eq!(to_fixed0(2.5), "3");
        assert_eq!(to_fixed0(2.4), "2");
        assert_eq!(to_fixed0(0.005), "0");
        assert_eq!(to_fixed0(-0.4), "-0");
        assert_eq!(to_fixed0(-0.0), "0");
        assert_eq!(to_fixed0(-2.5), "-3");
        assert_eq!(to_fixed0(1500.0), "1500");
        assert_eq!(to_fixed0(f64::NAN), "NaN");
    }
}

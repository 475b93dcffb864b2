use super::models::Rgb;

/// Returned whenever no hex digits can be scanned from the input.
pub const FALLBACK_GRAY: Rgb = Rgb {
    r: 0.5,
    g: 0.5,
    b: 0.5,
};

/// Parse a hex-ish color string into a normalized RGB triple.
///
/// Total over all inputs: non-alphanumerics are stripped, the longest
/// leading run of hex digits (after an optional `0x`) is read as an
/// integer, and the low 24 bits become the channels. Inputs with no
/// scannable hex digits fall back to [`FALLBACK_GRAY`]. Short inputs are
/// not rejected; `"ff"` is a legal value and comes out mostly black.
#[must_use]
pub fn parse_hex(hex: &str) -> Rgb {
    let cleaned: String = hex.chars().filter(char::is_ascii_alphanumeric).collect();
    match scan_hex_u64(&cleaned) {
        Some(v) => Rgb {
            r: ((v >> 16) & 0xFF) as f64 / 255.0,
            g: ((v >> 8) & 0xFF) as f64 / 255.0,
            b: (v & 0xFF) as f64 / 255.0,
        },
        None => FALLBACK_GRAY,
    }
}

/// Scan the longest leading run of hex digits, skipping an optional
/// `0x`/`0X` prefix. Returns `None` when no digit can be scanned. Runs
/// longer than 16 digits saturate to `u64::MAX` instead of failing.
fn scan_hex_u64(s: &str) -> Option<u64> {
    let rest = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if digits.is_empty() {
        return None;
    }
    if digits.len() > 16 {
        return Some(u64::MAX);
    }
    u64::from_str_radix(digits, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn six_digit_hex_is_exact() {
        let red = parse_hex("#FF0000");
        assert!(close(red.r, 1.0) && close(red.g, 0.0) && close(red.b, 0.0));

        let green = parse_hex("00ff00");
        assert!(close(green.r, 0.0) && close(green.g, 1.0) && close(green.b, 0.0));

        let c = parse_hex("#4B0082");
        assert!(close(c.r, 75.0 / 255.0));
        assert!(close(c.g, 0.0));
        assert!(close(c.b, 130.0 / 255.0));
    }

    #[test]
    fn short_hex_parses_from_low_bits() {
        let c = parse_hex("ff");
        assert!(close(c.r, 0.0) && close(c.g, 0.0) && close(c.b, 1.0));

        let c = parse_hex("#1");
        assert!(close(c.b, 1.0 / 255.0));
    }

    #[test]
    fn non_hex_input_falls_back_to_gray() {
        assert_eq!(parse_hex(""), FALLBACK_GRAY);
        assert_eq!(parse_hex("ghij"), FALLBACK_GRAY);
        assert_eq!(parse_hex("###"), FALLBACK_GRAY);
        assert_eq!(parse_hex("zzz not a color"), FALLBACK_GRAY);
    }

    #[test]
    fn trailing_garbage_after_hex_run_is_ignored() {
        // Scans "12", stops at 'G'.
        let c = parse_hex("12GG34");
        assert!(close(c.b, 18.0 / 255.0));
        assert!(close(c.r, 0.0) && close(c.g, 0.0));
    }

    #[test]
    fn punctuation_is_stripped_before_scanning() {
        assert_eq!(parse_hex("#FF-00-00"), parse_hex("FF0000"));
        assert_eq!(parse_hex(" 00 ff 00 "), parse_hex("00ff00"));
    }

    #[test]
    fn oversized_input_saturates_to_white() {
        let c = parse_hex("FFFFFFFFFFFFFFFFFFFF");
        assert!(close(c.r, 1.0) && close(c.g, 1.0) && close(c.b, 1.0));
    }

    #[test]
    fn leading_0x_prefix_is_accepted() {
        assert_eq!(parse_hex("0xFF0000"), parse_hex("FF0000"));
    }

    #[test]
    fn all_channels_stay_in_unit_range() {
        for input in ["", "#", "deadbeef", "0x0", "FFFFFFFFFFFFFFFFF", "q", "#ABC"] {
            let c = parse_hex(input);
            for ch in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&ch), "{input}: channel {ch} out of range");
            }
        }
    }
}

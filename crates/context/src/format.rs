//! Human-readable number formatting (1500 → "1.5k").

use tracing::warn;

const SUFFIXES: [&str; 5] = ["", "k", "M", "B", "T"];

/// Format a magnitude as an abbreviated human-readable string.
///
/// The value is rounded to 3 significant figures first, then divided by 1000
/// while its absolute value is at least 1000, walking the suffix table
/// ("", k, M, B, T). Trailing zeros and a trailing decimal point are
/// stripped: `1500` → `"1.5k"`, `1000000` → `"1M"`, `999` → `"999"`.
///
/// Magnitudes beyond the table clamp at "T" with an out-of-range multiplier
/// (1e16 → "10000T"); a warning is logged since such values usually mean a
/// caller passed the wrong unit.
pub fn human_format(num: f64) -> String {
    let mut num = round_to_sig_figs(num, 3);
    let mut magnitude = 0usize;

    while num.abs() >= 1000.0 && magnitude < SUFFIXES.len() - 1 {
        magnitude += 1;
        num /= 1000.0;
    }
    if num.abs() >= 1000.0 {
        warn!(value = num, "Magnitude exceeds suffix table, clamping at \"T\"");
    }

    let fixed = format!("{num:.6}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", trimmed, SUFFIXES[magnitude])
}

/// Round to `figures` significant figures, ties to even.
///
/// Goes through scientific-notation formatting and back: the standard
/// formatter rounds the exact decimal value half-to-even, with none of the
/// drift a multiply-round-divide by powers of ten would introduce near ties.
fn round_to_sig_figs(num: f64, figures: usize) -> f64 {
    if num == 0.0 || !num.is_finite() {
        return num;
    }
    let prec = figures - 1;
    format!("{num:.prec$e}").parse().unwrap_or(num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_get_k_suffix() {
        assert_eq!(human_format(1500.0), "1.5k");
    }

    #[test]
    fn millions_get_m_suffix() {
        assert_eq!(human_format(1_000_000.0), "1M");
    }

    #[test]
    fn below_thousand_unchanged() {
        assert_eq!(human_format(999.0), "999");
    }

    #[test]
    fn zero_is_zero() {
        assert_eq!(human_format(0.0), "0");
    }

    #[test]
    fn rounds_to_three_significant_figures() {
        assert_eq!(human_format(1_234_567.0), "1.23M");
        assert_eq!(human_format(123_456.0), "123k");
    }

    #[test]
    fn rounding_can_promote_magnitude() {
        // 999.9 rounds to 1000 at 3 sig figs, then divides into the k range.
        assert_eq!(human_format(999.9), "1k");
    }

    #[test]
    fn exact_ties_round_half_even() {
        // The significant-figure rounding breaks ties to even, so a value
        // exactly between two 3-digit mantissas rounds down or up by parity.
        assert_eq!(human_format(1_005_000.0), "1M");
        assert_eq!(human_format(1015.0), "1.02k");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(human_format(-1500.0), "-1.5k");
    }

    #[test]
    fn billions_and_trillions() {
        assert_eq!(human_format(2_500_000_000.0), "2.5B");
        assert_eq!(human_format(3_000_000_000_000.0), "3T");
    }

    #[test]
    fn beyond_table_clamps_at_t() {
        assert_eq!(human_format(1e16), "10000T");
    }
}

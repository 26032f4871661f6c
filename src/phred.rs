/// The quality character which encodes a Phred score of 0 (Phred+33).
pub const SENTINEL: char = '!';

/// Decodes a single quality character into its Phred score.
///
/// # Notes
/// Characters with a code point below `!` are not rejected: they decode to a negative score,
/// which is passed through unchanged rather than clamped to 0.
pub fn score(c: char) -> i32 {
    c as i32 - SENTINEL as i32
}

/// Converts a Phred score into the probability that the base call is wrong, `10^(-q/10)`.
///
/// Defined for any real score. Negative scores give probabilities above 1.
pub fn error_probability(q: f64) -> f64 {
    10.0_f64.powf(-q / 10.0)
}

/// Converts an error probability back into a (fractional) Phred score, `-10 * log10(p)`.
pub fn phred_from_probability(p: f64) -> f64 {
    let q = -10.0 * p.log10();
    // p == 1 gives -0.0, which would be printed with a sign
    if q == 0.0 {
        0.0
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_zero() {
        assert_eq!(score('!'), 0);
        assert_eq!(score('"'), 1);
        assert_eq!(score('+'), 10);
        assert_eq!(score('I'), 40);
    }

    #[test]
    fn below_sentinel_is_negative() {
        assert_eq!(score(' '), -1);
        assert_eq!(score('\t'), -24);
    }

    #[test]
    fn probabilities() {
        assert!((error_probability(0.0) - 1.0).abs() < 1e-12);
        assert!((error_probability(10.0) - 0.1).abs() < 1e-12);
        assert!((error_probability(20.0) - 0.01).abs() < 1e-12);
        assert!((error_probability(-10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn probability_decreases_with_score() {
        let probs = (-5..=93)
            .map(|q| error_probability(q as f64))
            .collect::<Vec<_>>();

        for pair in probs.windows(2) {
            assert!(pair[0] > pair[1], "{} should exceed {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn back_to_phred() {
        assert!((phred_from_probability(0.1) - 10.0).abs() < 1e-9);
        assert_eq!(phred_from_probability(1.0).to_string(), "0");
        assert!((phred_from_probability(error_probability(37.0)) - 37.0).abs() < 1e-9);
    }
}

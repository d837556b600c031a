//! Rewards cheaper colleges.

use crate::exams::StudentSignals;
use crate::traits::ScoringFactor;
use catalog::CollegeRecord;

const MAX_POINTS: f64 = 10.0;

/// Buckets total fees (in lakhs) into points.
///
/// | fees (lakhs) | points |
/// |--------------|--------|
/// | <= 5         | 10     |
/// | <= 15        | 7      |
/// | <= 25        | 4      |
/// | > 25         | 1      |
/// | unparseable  | 0      |
pub struct AffordabilityFactor;

impl AffordabilityFactor {
    fn bracket(lakhs: f64) -> f64 {
        if lakhs <= 5.0 {
            10.0
        } else if lakhs <= 15.0 {
            7.0
        } else if lakhs <= 25.0 {
            4.0
        } else {
            1.0
        }
    }
}

impl ScoringFactor for AffordabilityFactor {
    fn name(&self) -> &'static str {
        "affordability"
    }

    fn max_points(&self) -> f64 {
        MAX_POINTS
    }

    fn score(&self, college: &CollegeRecord, _signals: &StudentSignals) -> f64 {
        college
            .fees
            .as_deref()
            .and_then(parse_fees)
            .map(Self::bracket)
            .unwrap_or(0.0)
    }
}

/// Extract the first decimal number from a free-text fee string.
///
/// Example: "₹21.5 Lakhs (4 years)" -> Some(21.5)
///          "Fees not available"    -> None
///
/// Scans runs of digits and dots; the first run that starts with a valid
/// decimal wins, so stray dots ("approx. ₹5 L") are skipped. Anything after
/// the leading decimal in a run ("1.2.3" -> 1.2) is ignored.
pub fn parse_fees(fees: &str) -> Option<f64> {
    fees.split(|c: char| !(c.is_ascii_digit() || c == '.'))
        .filter(|run| !run.is_empty())
        .find_map(leading_decimal)
}

fn leading_decimal(run: &str) -> Option<f64> {
    let int_len = run.bytes().take_while(u8::is_ascii_digit).count();
    let frac_len = match run[int_len..].strip_prefix('.') {
        Some(rest) => rest.bytes().take_while(u8::is_ascii_digit).count(),
        None => 0,
    };
    if int_len + frac_len == 0 {
        return None;
    }
    let end = if frac_len > 0 { int_len + 1 + frac_len } else { int_len };
    run[..end].parse().ok()
}

//! Rate resolution and payment amortization.
//!
//! Rate tables are LTV-banded: an entry's band is a ceiling, and the client
//! takes the tightest band that still covers their LTV. A client at 72% LTV
//! prices off a 75% band entry, not a 70% one.

use log::debug;

use crate::catalog::RateEntry;
use crate::profile::FixedTerm;

/// The rate selected for a tier, with the band it came from
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRate {
    /// Annual rate in percent
    pub rate: f64,

    /// Ceiling of the covering LTV band
    pub ltv_band: f64,

    /// Fixed-rate term the entry prices
    pub term: FixedTerm,

    /// Product/incentive label from the rate entry
    pub product: Option<String>,
}

/// Select the cheapest rate for the requested term whose LTV band covers the
/// client.
///
/// Among entries for `term`, the covering band is the smallest ceiling that is
/// still >= `ltv`; within that band the lowest rate wins. `None` when no band
/// covers the client's LTV, in which case the tier is excluded from results
/// even if it passed eligibility.
pub fn resolve_rate(entries: &[RateEntry], term: FixedTerm, ltv: f64) -> Option<ResolvedRate> {
    let mut best: Option<&RateEntry> = None;

    for entry in entries {
        if entry.term != term || entry.ltv_band < ltv {
            continue;
        }
        best = match best {
            None => Some(entry),
            Some(current) => {
                if entry.ltv_band < current.ltv_band
                    || (entry.ltv_band == current.ltv_band && entry.rate < current.rate)
                {
                    Some(entry)
                } else {
                    Some(current)
                }
            }
        };
    }

    if best.is_none() {
        debug!(
            "no {} rate band covers LTV {:.1}% across {} entries",
            term.as_str(),
            ltv,
            entries.len()
        );
    }

    best.map(|entry| ResolvedRate {
        rate: entry.rate,
        ltv_band: entry.ltv_band,
        term: entry.term,
        product: entry.product.clone(),
    })
}

/// Standard fixed-rate reducing-balance amortization.
///
/// `payment = loan * r(1+r)^n / ((1+r)^n - 1)` with `r = rate/100/12` and
/// `n = years * 12`; a zero rate degenerates to straight-line repayment.
pub fn monthly_payment(loan_amount: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    let n = (term_years * 12) as f64;
    if n == 0.0 {
        return 0.0;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    if r == 0.0 {
        return loan_amount / n;
    }
    let growth = (1.0 + r).powf(n);
    loan_amount * r * growth / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entry(term: FixedTerm, ltv_band: f64, rate: f64) -> RateEntry {
        RateEntry {
            term,
            ltv_band,
            rate,
            product: None,
        }
    }

    #[test]
    fn test_tightest_covering_band_wins() {
        let entries = vec![
            entry(FixedTerm::FiveYear, 70.0, 6.99),
            entry(FixedTerm::FiveYear, 75.0, 7.39),
            entry(FixedTerm::FiveYear, 80.0, 7.59),
        ];

        // 72% LTV: the 70 band does not cover, 75 is the tightest that does
        let resolved = resolve_rate(&entries, FixedTerm::FiveYear, 72.0).unwrap();
        assert_eq!(resolved.ltv_band, 75.0);
        assert_relative_eq!(resolved.rate, 7.39);

        // Exactly on a ceiling takes that band
        let resolved = resolve_rate(&entries, FixedTerm::FiveYear, 80.0).unwrap();
        assert_eq!(resolved.ltv_band, 80.0);
    }

    #[test]
    fn test_no_covering_band_is_none() {
        let entries = vec![entry(FixedTerm::FiveYear, 75.0, 7.39)];
        assert_eq!(resolve_rate(&entries, FixedTerm::FiveYear, 85.0), None);
    }

    #[test]
    fn test_term_filter() {
        let entries = vec![
            entry(FixedTerm::TwoYear, 80.0, 6.99),
            entry(FixedTerm::FiveYear, 80.0, 7.59),
        ];
        let resolved = resolve_rate(&entries, FixedTerm::TwoYear, 78.0).unwrap();
        assert_relative_eq!(resolved.rate, 6.99);
        assert_eq!(resolve_rate(&entries, FixedTerm::ThreeYear, 78.0), None);
    }

    #[test]
    fn test_lowest_rate_wins_within_band() {
        // Multiple incentive variants priced on the same band
        let entries = vec![
            entry(FixedTerm::TwoYear, 75.0, 7.19),
            entry(FixedTerm::TwoYear, 75.0, 6.89),
            entry(FixedTerm::TwoYear, 75.0, 7.49),
        ];
        let resolved = resolve_rate(&entries, FixedTerm::TwoYear, 72.0).unwrap();
        assert_relative_eq!(resolved.rate, 6.89);
    }

    #[test]
    fn test_amortization_reference_value() {
        // 5% over 25 years on £280,000 -> ~£1,636/month
        let payment = monthly_payment(280_000.0, 5.0, 25);
        assert!((payment - 1_636.0).abs() < 1.0, "payment was {payment:.2}");
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        assert_relative_eq!(monthly_payment(120_000.0, 0.0, 10), 1_000.0);
    }
}

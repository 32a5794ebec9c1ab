//! Eligibility gate engine.
//!
//! Each lender tier is checked with an ordered battery of gates: bounds,
//! override rules, employment, then one block per adverse-credit category
//! present in the profile. The first disqualifying condition short-circuits;
//! reasons accumulated before it are discarded because the tier is out
//! regardless.

use crate::catalog::{EligibilityCriteria, LenderProduct, Tier};
use crate::engine::ScoringConfig;
use crate::profile::{
    months_since, years_since, ClientProfile, CreditCategory, CreditEvent, DerivedMetrics,
};

/// Outcome of running the gate battery for one tier
#[derive(Debug, Clone, PartialEq)]
pub struct TierEvaluation {
    pub eligible: bool,

    /// Sum of penalties (negative) and bonuses applied to the base score
    pub score_delta: i32,

    /// Positive reasons, in gate order
    pub reasons: Vec<String>,

    /// Rejection reasons; a disqualified tier carries exactly the gate that
    /// failed first
    pub rejections: Vec<String>,
}

impl TierEvaluation {
    fn rejected(reason: String) -> Self {
        Self {
            eligible: false,
            score_delta: 0,
            reasons: Vec::new(),
            rejections: vec![reason],
        }
    }
}

/// Format a currency amount with thousands separators for reason strings
pub(crate) fn fmt_pounds(amount: f64) -> String {
    let whole = amount.round().abs() as i64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0.0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Run the full gate battery for one lender tier.
///
/// Pure function of its inputs; safe to call from parallel workers.
pub fn evaluate_tier(
    lender: &LenderProduct,
    tier: &Tier,
    profile: &ClientProfile,
    metrics: &DerivedMetrics,
    scoring: &ScoringConfig,
) -> TierEvaluation {
    let mut delta = 0i32;
    let mut reasons = Vec::new();

    // 1. Bounds gates
    if metrics.ltv > tier.max_ltv {
        return TierEvaluation::rejected(format!(
            "LTV {:.1}% exceeds max {}%",
            metrics.ltv_display(),
            tier.max_ltv
        ));
    }
    if let Some(min_ltv) = tier.min_ltv {
        if metrics.ltv < min_ltv {
            return TierEvaluation::rejected(format!(
                "LTV {:.1}% below min {}%",
                metrics.ltv_display(),
                min_ltv
            ));
        }
    }
    reasons.push(format!("LTV {:.1}% within limit", metrics.ltv_display()));

    if let Some(min_loan) = tier.min_loan {
        if metrics.loan_amount < min_loan {
            return TierEvaluation::rejected(format!(
                "Loan £{} below min £{}",
                fmt_pounds(metrics.loan_amount),
                fmt_pounds(min_loan)
            ));
        }
    }
    if let Some(max_loan) = tier.max_loan {
        if metrics.loan_amount > max_loan {
            return TierEvaluation::rejected(format!(
                "Loan £{} exceeds max £{}",
                fmt_pounds(metrics.loan_amount),
                fmt_pounds(max_loan)
            ));
        }
    }
    if let Some(min_value) = tier.min_property_value {
        if metrics.property_value < min_value {
            return TierEvaluation::rejected(format!(
                "Property value £{} below minimum £{}",
                fmt_pounds(metrics.property_value),
                fmt_pounds(min_value)
            ));
        }
    }

    // 2. Override rules: institution-level first, then tier-level
    for rule in lender.overrides.iter().chain(tier.overrides.iter()) {
        if !rule.predicate.is_satisfied(metrics) {
            return TierEvaluation::rejected(rule.rejection.clone());
        }
    }

    // 3. Employment
    if profile.is_self_employed() {
        if tier.accepts_self_employed == Some(false) {
            return TierEvaluation::rejected("Does not accept self-employed applicants".into());
        }
        delta -= scoring.self_employed_penalty;
        reasons.push("Accepts self-employed".into());
    }

    // 4. Category gates
    for (&category, events) in &profile.credit_events {
        if events.is_empty() {
            continue;
        }
        let criteria = tier.criteria_for(category);
        match check_category(category, events, &criteria, metrics, scoring) {
            CategoryOutcome::Rejected(reason) => return TierEvaluation::rejected(reason),
            CategoryOutcome::Passed {
                score_delta,
                reason,
            } => {
                delta += score_delta;
                reasons.push(reason);
            }
        }
    }

    // 5. Clean-profile bonus
    if profile.is_clean() {
        delta += scoring.clean_profile_bonus;
        reasons.push("Clean credit profile".into());
    }

    TierEvaluation {
        eligible: true,
        score_delta: delta,
        reasons,
        rejections: Vec::new(),
    }
}

enum CategoryOutcome {
    Rejected(String),
    Passed { score_delta: i32, reason: String },
}

fn check_category(
    category: CreditCategory,
    events: &[CreditEvent],
    criteria: &EligibilityCriteria,
    metrics: &DerivedMetrics,
    scoring: &ScoringConfig,
) -> CategoryOutcome {
    let label = category.label();

    if !criteria.accepts_clients {
        return CategoryOutcome::Rejected(format!(
            "Does not accept {} (you have {})",
            label,
            events.len()
        ));
    }

    // Balance and sub-type exemptions come off before anything is counted
    let counted: Vec<(usize, &CreditEvent)> = events
        .iter()
        .enumerate()
        .filter(|(_, event)| {
            event.amount >= criteria.min_balance
                && !criteria.subtype_exempt(event.subtype.as_deref())
        })
        .collect();
    let exempt_count = events.len() - counted.len();

    if criteria.must_be_satisfied && counted.iter().any(|(_, event)| !event.settled) {
        return CategoryOutcome::Rejected(format!("{} must be satisfied", label));
    }

    // Rolling-window count; events without a known age never count
    if let Some(max_in_period) = criteria.max_in_period {
        let window = criteria.window_months();
        let in_window = count_in_window(category, &counted, metrics, window);
        if in_window > max_in_period {
            return CategoryOutcome::Rejected(format!(
                "Too many {}: {} in {} months (max {})",
                label, in_window, window, max_in_period
            ));
        }
    }

    // Stricter nested sub-window can disqualify even when the outer passes
    if let (Some(recent_max), Some(recent_window)) =
        (criteria.recent_max, criteria.recent_period_months)
    {
        let in_recent = count_in_window(category, &counted, metrics, recent_window);
        if in_recent > recent_max {
            return CategoryOutcome::Rejected(format!(
                "Too many recent {}: {} in {} months (max {})",
                label, in_recent, recent_window, recent_max
            ));
        }
    }

    // A satisfied-age requirement implies satisfaction itself: an event that
    // was never satisfied fails it outright
    if let Some(min_months) = criteria.min_months_since_satisfied {
        if counted.iter().any(|(_, event)| !event.settled) {
            return CategoryOutcome::Rejected(format!(
                "{} not yet satisfied (needs {}+ months since satisfaction)",
                label, min_months
            ));
        }
        let latest_settled = counted.iter().filter_map(|(_, event)| event.date_settled).max();
        if let Some(months) = latest_settled.and_then(|date| months_since(Some(date), metrics.now)) {
            if months < min_months {
                return CategoryOutcome::Rejected(format!(
                    "{} satisfied too recently (needs {}+ months, currently {})",
                    label, min_months, months
                ));
            }
        }
    }

    // Discharge-age thresholds measure the most recent discharge on record;
    // events with no discharge date on file never count against the client
    let latest_discharge = counted
        .iter()
        .filter_map(|(_, event)| event.discharge_date())
        .max();
    if let Some(date) = latest_discharge {
        if let Some(min_months) = criteria.min_months_since_discharge {
            if let Some(months) = months_since(Some(date), metrics.now) {
                if months < min_months {
                    return CategoryOutcome::Rejected(format!(
                        "{} too recent (needs {}+ months since discharge, currently {})",
                        label, min_months, months
                    ));
                }
            }
        }
        if let Some(min_years) = criteria.min_years_since_discharge {
            let years = years_since(date, metrics.now);
            if years < min_years {
                return CategoryOutcome::Rejected(format!(
                    "{} must be discharged {}+ years ago (currently {:.1})",
                    label, min_years, years
                ));
            }
        }
    }

    // Cap on concurrently active events (payday-loan style)
    if let Some(max_active) = criteria.max_currently_active {
        let active = counted.iter().filter(|(_, event)| !event.settled).count() as u32;
        if active > max_active {
            return CategoryOutcome::Rejected(format!(
                "Too many active {}: {} (max {})",
                label, active, max_active
            ));
        }
    }

    let score_delta = scoring.category_delta(category, counted.len());
    let reason = if exempt_count > 0 {
        format!(
            "Accepts {} ({} counted, {} exempt)",
            label,
            counted.len(),
            exempt_count
        )
    } else {
        format!("Accepts {} ({} total)", label, counted.len())
    };

    CategoryOutcome::Passed {
        score_delta,
        reason,
    }
}

fn count_in_window(
    category: CreditCategory,
    counted: &[(usize, &CreditEvent)],
    metrics: &DerivedMetrics,
    window_months: u32,
) -> u32 {
    counted
        .iter()
        .filter(|(idx, _)| {
            matches!(metrics.event_age(category, *idx), Some(age) if age < window_months)
        })
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OverridePredicate, OverrideRule};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> NaiveDate {
        date(2026, 8, 1)
    }

    fn event(amount: f64, registered: Option<NaiveDate>) -> CreditEvent {
        CreditEvent {
            amount,
            date_registered: registered,
            settled: false,
            date_settled: None,
            subtype: None,
        }
    }

    fn profile_with(events: Vec<(CreditCategory, Vec<CreditEvent>)>) -> ClientProfile {
        ClientProfile {
            property_value: 350_000.0,
            deposit: 70_000.0,
            term_years: 25,
            preferred_fixed_term: Default::default(),
            basic_salary: 45_000.0,
            other_income: 0.0,
            employment: Default::default(),
            credit_events: events.into_iter().collect(),
        }
    }

    fn open_tier() -> Tier {
        Tier {
            name: "Open".into(),
            description: None,
            max_ltv: 85.0,
            min_ltv: None,
            min_loan: None,
            max_loan: None,
            min_property_value: None,
            accepts_self_employed: None,
            criteria: BTreeMap::new(),
            rates: vec![],
            overrides: vec![],
        }
    }

    fn lender(tier: Tier) -> LenderProduct {
        LenderProduct {
            lender_name: "Test Lender".into(),
            lender_type: None,
            overrides: vec![],
            tiers: vec![tier],
        }
    }

    fn evaluate(tier: Tier, profile: &ClientProfile) -> TierEvaluation {
        let metrics = DerivedMetrics::derive(profile, now()).unwrap();
        let lender = lender(tier.clone());
        evaluate_tier(&lender, &tier, profile, &metrics, &ScoringConfig::default())
    }

    #[test]
    fn test_clean_profile_gets_bonus() {
        let profile = profile_with(vec![]);
        let eval = evaluate(open_tier(), &profile);
        assert!(eval.eligible);
        assert_eq!(eval.score_delta, 10);
        assert!(eval.reasons.iter().any(|r| r.contains("Clean credit")));
        assert!(eval.rejections.is_empty());
    }

    #[test]
    fn test_ltv_bound_rejects_and_discards_reasons() {
        let mut tier = open_tier();
        tier.max_ltv = 75.0;
        let eval = evaluate(tier, &profile_with(vec![]));
        assert!(!eval.eligible);
        assert_eq!(eval.rejections, vec!["LTV 80.0% exceeds max 75%"]);
        assert!(eval.reasons.is_empty());
        assert_eq!(eval.score_delta, 0);
    }

    #[test]
    fn test_loan_bounds() {
        let mut tier = open_tier();
        tier.min_loan = Some(300_000.0);
        let eval = evaluate(tier, &profile_with(vec![]));
        assert_eq!(eval.rejections, vec!["Loan £280,000 below min £300,000"]);

        let mut tier = open_tier();
        tier.max_loan = Some(250_000.0);
        let eval = evaluate(tier, &profile_with(vec![]));
        assert_eq!(eval.rejections, vec!["Loan £280,000 exceeds max £250,000"]);
    }

    #[test]
    fn test_min_property_value() {
        let mut tier = open_tier();
        tier.min_property_value = Some(400_000.0);
        let eval = evaluate(tier, &profile_with(vec![]));
        assert!(!eval.eligible);
        assert!(eval.rejections[0].contains("below minimum £400,000"));
    }

    #[test]
    fn test_override_rule_rejects_after_bounds() {
        let mut tier = open_tier();
        tier.max_ltv = 95.0;
        tier.overrides.push(OverrideRule {
            predicate: OverridePredicate::LtvAtLeast { pct: 90.0 },
            rejection: "Deposit Unlock requires 90%+ LTV".into(),
        });
        let eval = evaluate(tier, &profile_with(vec![]));
        assert!(!eval.eligible);
        assert_eq!(eval.rejections, vec!["Deposit Unlock requires 90%+ LTV"]);
    }

    #[test]
    fn test_category_not_accepted() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Ccj,
            EligibilityCriteria {
                accepts_clients: false,
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::Ccj,
            vec![event(2_000.0, Some(date(2026, 6, 1)))],
        )]);
        let eval = evaluate(tier, &profile);
        assert_eq!(eval.rejections, vec!["Does not accept CCJs (you have 1)"]);
    }

    #[test]
    fn test_disqualifying_ccj_window() {
        // One unsatisfied £2,000 CCJ registered 2 months ago against a
        // zero-tolerance 36-month window
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Ccj,
            EligibilityCriteria {
                max_in_period: Some(0),
                period_months: Some(36),
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::Ccj,
            vec![event(2_000.0, Some(date(2026, 6, 1)))],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(!eval.eligible);
        assert_eq!(
            eval.rejections,
            vec!["Too many CCJs: 1 in 36 months (max 0)"]
        );
    }

    #[test]
    fn test_recent_subwindow_rejects_even_when_outer_passes() {
        // 3-in-24 satisfied, but the nested 0-in-3 is violated
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Default,
            EligibilityCriteria {
                max_in_period: Some(3),
                period_months: Some(24),
                recent_max: Some(0),
                recent_period_months: Some(3),
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::Default,
            vec![event(800.0, Some(date(2026, 7, 1)))],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(!eval.eligible);
        assert_eq!(
            eval.rejections,
            vec!["Too many recent defaults: 1 in 3 months (max 0)"]
        );
    }

    #[test]
    fn test_min_balance_exemption() {
        // £150 utilities default against a £500 floor never counts
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Default,
            EligibilityCriteria {
                max_in_period: Some(0),
                period_months: Some(24),
                min_balance: 500.0,
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::Default,
            vec![CreditEvent {
                subtype: Some("utilities".into()),
                ..event(150.0, Some(date(2026, 5, 1)))
            }],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(eval.eligible);
        assert_eq!(eval.score_delta, 0);
        assert!(eval
            .reasons
            .iter()
            .any(|r| r == "Accepts defaults (0 counted, 1 exempt)"));
    }

    #[test]
    fn test_subtype_exemption_regardless_of_amount() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Default,
            EligibilityCriteria {
                max_in_period: Some(0),
                period_months: Some(24),
                exempt_subtypes: vec!["utilit".into()],
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::Default,
            vec![CreditEvent {
                subtype: Some("Utilities".into()),
                ..event(2_500.0, Some(date(2026, 5, 1)))
            }],
        )]);
        assert!(evaluate(tier, &profile).eligible);
    }

    #[test]
    fn test_unknown_date_never_counts_in_window() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Ccj,
            EligibilityCriteria {
                max_in_period: Some(0),
                period_months: Some(36),
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(CreditCategory::Ccj, vec![event(2_000.0, None)])]);
        let eval = evaluate(tier, &profile);
        assert!(eval.eligible);
        // The event still attracts a penalty even though it is outside any window
        assert_eq!(eval.score_delta, -5);
    }

    #[test]
    fn test_must_be_satisfied() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Ccj,
            EligibilityCriteria {
                must_be_satisfied: true,
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::Ccj,
            vec![event(2_000.0, Some(date(2024, 1, 1)))],
        )]);
        let eval = evaluate(tier, &profile);
        assert_eq!(eval.rejections, vec!["CCJs must be satisfied"]);
    }

    #[test]
    fn test_min_months_since_satisfied_rejects_unsatisfied_event() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Ccj,
            EligibilityCriteria {
                min_months_since_satisfied: Some(12),
                ..EligibilityCriteria::permissive()
            },
        );
        // Never satisfied: stricter than satisfied-too-recently, not laxer
        let profile = profile_with(vec![(
            CreditCategory::Ccj,
            vec![event(2_000.0, Some(date(2024, 1, 1)))],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(!eval.eligible);
        assert_eq!(
            eval.rejections,
            vec!["CCJs not yet satisfied (needs 12+ months since satisfaction)"]
        );
    }

    #[test]
    fn test_min_months_since_satisfied_age_threshold() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Ccj,
            EligibilityCriteria {
                min_months_since_satisfied: Some(12),
                ..EligibilityCriteria::permissive()
            },
        );
        // Satisfied 11 months ago: below the threshold
        let profile = profile_with(vec![(
            CreditCategory::Ccj,
            vec![CreditEvent {
                settled: true,
                date_settled: Some(date(2025, 9, 1)),
                ..event(2_000.0, Some(date(2024, 1, 1)))
            }],
        )]);
        let eval = evaluate(tier.clone(), &profile);
        assert!(!eval.eligible);
        assert!(eval.rejections[0].contains("satisfied too recently"));

        // Satisfied two years ago: passes with the usual penalty
        let profile = profile_with(vec![(
            CreditCategory::Ccj,
            vec![CreditEvent {
                settled: true,
                date_settled: Some(date(2024, 8, 1)),
                ..event(2_000.0, Some(date(2023, 1, 1)))
            }],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(eval.eligible);
        assert_eq!(eval.score_delta, -5);
    }

    #[test]
    fn test_discharge_age_gates() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Bankruptcy,
            EligibilityCriteria {
                min_months_since_discharge: Some(36),
                ..EligibilityCriteria::permissive()
            },
        );
        // Discharged 12 months ago: too recent
        let profile = profile_with(vec![(
            CreditCategory::Bankruptcy,
            vec![CreditEvent {
                settled: true,
                date_settled: Some(date(2025, 8, 1)),
                ..event(0.0, Some(date(2023, 1, 1)))
            }],
        )]);
        let eval = evaluate(tier.clone(), &profile);
        assert!(!eval.eligible);
        assert!(eval.rejections[0].contains("needs 36+ months"));

        // Discharged 4 years ago: passes with the flat bankruptcy penalty
        let profile = profile_with(vec![(
            CreditCategory::Bankruptcy,
            vec![CreditEvent {
                settled: true,
                date_settled: Some(date(2022, 8, 1)),
                ..event(0.0, Some(date(2020, 1, 1)))
            }],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(eval.eligible);
        assert_eq!(eval.score_delta, -15);
    }

    #[test]
    fn test_discharge_gate_uses_most_recent_discharge() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Default,
            EligibilityCriteria {
                min_months_since_discharge: Some(36),
                ..EligibilityCriteria::permissive()
            },
        );
        // Listed newest-first: the recent discharge must govern regardless of
        // the order the events arrive in
        let profile = profile_with(vec![(
            CreditCategory::Default,
            vec![
                CreditEvent {
                    settled: true,
                    date_settled: Some(date(2025, 8, 1)),
                    ..event(800.0, Some(date(2023, 1, 1)))
                },
                CreditEvent {
                    settled: true,
                    date_settled: Some(date(2021, 8, 1)),
                    ..event(500.0, Some(date(2019, 1, 1)))
                },
            ],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(!eval.eligible);
        assert!(eval.rejections[0].contains("needs 36+ months since discharge"));
    }

    #[test]
    fn test_years_since_discharge_gate() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::Iva,
            EligibilityCriteria {
                min_years_since_discharge: Some(6.0),
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::Iva,
            vec![CreditEvent {
                settled: true,
                date_settled: Some(date(2023, 8, 1)),
                ..event(0.0, Some(date(2021, 1, 1)))
            }],
        )]);
        let eval = evaluate(tier, &profile);
        assert!(!eval.eligible);
        assert!(eval.rejections[0].contains("6+ years"));
    }

    #[test]
    fn test_max_currently_active() {
        let mut tier = open_tier();
        tier.criteria.insert(
            CreditCategory::PaydayLoan,
            EligibilityCriteria {
                max_currently_active: Some(1),
                ..EligibilityCriteria::permissive()
            },
        );
        let profile = profile_with(vec![(
            CreditCategory::PaydayLoan,
            vec![
                event(300.0, Some(date(2026, 3, 1))),
                event(250.0, Some(date(2026, 5, 1))),
            ],
        )]);
        let eval = evaluate(tier, &profile);
        assert_eq!(
            eval.rejections,
            vec!["Too many active payday loans: 2 (max 1)"]
        );
    }

    #[test]
    fn test_category_penalties_accumulate() {
        let tier = open_tier();
        let profile = profile_with(vec![
            (
                CreditCategory::Ccj,
                vec![
                    event(1_000.0, Some(date(2024, 1, 1))),
                    event(500.0, Some(date(2023, 6, 1))),
                ],
            ),
            (
                CreditCategory::Default,
                vec![event(800.0, Some(date(2024, 3, 1)))],
            ),
        ]);
        let eval = evaluate(tier, &profile);
        assert!(eval.eligible);
        // 2 CCJs at -5 each, 1 default at -5
        assert_eq!(eval.score_delta, -15);
        assert_eq!(eval.reasons.len(), 3); // LTV + two category reasons
    }

    #[test]
    fn test_self_employed_gate() {
        use crate::profile::EmploymentStatus;

        let mut profile = profile_with(vec![]);
        profile.employment = EmploymentStatus::SelfEmployed;

        let mut tier = open_tier();
        tier.accepts_self_employed = Some(false);
        let eval = evaluate(tier, &profile);
        assert_eq!(
            eval.rejections,
            vec!["Does not accept self-employed applicants"]
        );

        let eval = evaluate(open_tier(), &profile);
        assert!(eval.eligible);
        // -5 self-employed, +10 clean profile
        assert_eq!(eval.score_delta, 5);
    }

    #[test]
    fn test_fmt_pounds() {
        assert_eq!(fmt_pounds(280_000.0), "280,000");
        assert_eq!(fmt_pounds(75_000.0), "75,000");
        assert_eq!(fmt_pounds(999.0), "999");
        assert_eq!(fmt_pounds(1_234_567.0), "1,234,567");
    }
}

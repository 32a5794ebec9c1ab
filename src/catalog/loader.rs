//! Load lender catalogs and client profiles from files.
//!
//! Catalog documents are JSON as exported from the product database; criteria
//! objects inside them are normalized leniently (see `criteria::normalize`).
//! Rate sheets arrive separately as CSV and can be merged onto a tier.

use std::error::Error;
use std::path::Path;

use csv::Reader;
use serde_json::Value;

use super::criteria::EligibilityCriteria;
use super::data::{LenderProduct, OverrideRule, RateEntry, Tier};
use crate::profile::{ClientProfile, CreditCategory, FixedTerm};

/// Raw CSV row matching the rate-sheet format circulated by lenders
#[derive(Debug, serde::Deserialize)]
struct RateSheetRow {
    #[serde(rename = "Term")]
    term: String,
    #[serde(rename = "MaxLTV")]
    ltv_band: f64,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "Product")]
    product: Option<String>,
}

impl RateSheetRow {
    fn to_entry(self) -> Result<RateEntry, Box<dyn Error>> {
        let term = match self.term.as_str() {
            "2yr" => FixedTerm::TwoYear,
            "3yr" => FixedTerm::ThreeYear,
            "5yr" => FixedTerm::FiveYear,
            other => return Err(format!("Unknown Term: {}", other).into()),
        };

        Ok(RateEntry {
            term,
            ltv_band: self.ltv_band,
            rate: self.rate,
            product: self.product.filter(|p| !p.is_empty()),
        })
    }
}

/// Load rate entries from a CSV rate sheet
pub fn load_rate_sheet<P: AsRef<Path>>(path: P) -> Result<Vec<RateEntry>, Box<dyn Error>> {
    load_rate_sheet_from_reader(std::fs::File::open(path)?)
}

/// Load rate entries from any reader (e.g. string buffer, network stream)
pub fn load_rate_sheet_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<RateEntry>, Box<dyn Error>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut entries = Vec::new();

    for result in csv_reader.deserialize() {
        let row: RateSheetRow = result?;
        entries.push(row.to_entry()?);
    }

    Ok(entries)
}

/// Load a full lender catalog from a JSON array of product documents
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<LenderProduct>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    parse_catalog(&text)
}

/// Parse a lender catalog from JSON text
pub fn parse_catalog(text: &str) -> Result<Vec<LenderProduct>, Box<dyn Error>> {
    let raw: Value = serde_json::from_str(text)?;
    let Some(documents) = raw.as_array() else {
        return Err("catalog must be a JSON array of lender products".into());
    };

    documents.iter().map(parse_product).collect()
}

/// Load the most recently completed client profile from a JSON file
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<ClientProfile, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn parse_product(doc: &Value) -> Result<LenderProduct, Box<dyn Error>> {
    let lender_name = doc
        .get("lenderName")
        .and_then(Value::as_str)
        .ok_or("lender document missing lenderName")?
        .to_string();

    let lender_type = doc
        .get("lenderType")
        .and_then(Value::as_str)
        .map(str::to_string);

    let overrides = parse_overrides(doc.get("overrides"))?;

    // Two document shapes exist: a product with an explicit tiers array, and
    // the older single-tier document where tier fields sit at the top level.
    let tiers = match doc.get("tiers").and_then(Value::as_array) {
        Some(raw_tiers) => raw_tiers
            .iter()
            .map(|t| parse_tier(&lender_name, t))
            .collect::<Result<Vec<_>, _>>()?,
        None => vec![parse_tier(&lender_name, doc)?],
    };

    Ok(LenderProduct {
        lender_name,
        lender_type,
        overrides,
        tiers,
    })
}

fn parse_tier(lender_name: &str, doc: &Value) -> Result<Tier, Box<dyn Error>> {
    let name = doc
        .get("tierName")
        .or_else(|| doc.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("Standard")
        .to_string();

    let max_ltv = doc
        .get("maxLTV")
        .and_then(Value::as_f64)
        .ok_or_else(|| format!("{lender_name} tier '{name}' missing maxLTV"))?;

    let mut criteria = std::collections::BTreeMap::new();
    if let Some(raw_criteria) = doc.get("tierCriteria").and_then(Value::as_object) {
        for (key, value) in raw_criteria {
            let Ok(category) = serde_json::from_value::<CreditCategory>(Value::String(key.clone()))
            else {
                log::warn!("{lender_name} tier '{name}': unknown criteria category '{key}'");
                continue;
            };
            let context = format!("{lender_name} tier '{name}' {key}");
            criteria.insert(category, EligibilityCriteria::normalize(value, &context));
        }
    }

    let rates = match doc.get("rates") {
        Some(raw) => serde_json::from_value(raw.clone())?,
        None => Vec::new(),
    };

    Ok(Tier {
        name,
        description: doc
            .get("description")
            .and_then(Value::as_str)
            .map(str::to_string),
        max_ltv,
        min_ltv: doc.get("minLTV").and_then(Value::as_f64),
        min_loan: doc.get("minLoan").and_then(Value::as_f64),
        max_loan: doc.get("maxLoan").and_then(Value::as_f64),
        min_property_value: doc.get("minPropertyValue").and_then(Value::as_f64),
        accepts_self_employed: doc.get("acceptsSelfEmployed").and_then(Value::as_bool),
        criteria,
        rates,
        overrides: parse_overrides(doc.get("overrides"))?,
    })
}

fn parse_overrides(raw: Option<&Value>) -> Result<Vec<OverrideRule>, Box<dyn Error>> {
    match raw {
        Some(value) => Ok(serde_json::from_value(value.clone())?),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CATALOG: &str = r#"[
        {
            "lenderName": "Tandem Bank",
            "lenderType": "Adverse Credit Specialist",
            "tierName": "Tandem Three (T3)",
            "description": "80% LTV - heavy adverse",
            "maxLTV": 80,
            "minLoan": 75000,
            "maxLoan": 500000,
            "tierCriteria": {
                "ccjs": {
                    "acceptsClients": true,
                    "maxInPeriod": 3,
                    "periodMonths": 24,
                    "recentMax": 0,
                    "recentPeriodMonths": 3,
                    "minBalance": 350,
                    "exemptSubtypes": ["utilities", "communications"]
                },
                "bankruptcy": {
                    "acceptsClients": true,
                    "minMonthsSinceDischarge": 36
                },
                "paydayLoans": "accepted"
            },
            "rates": [
                { "term": "2yr", "ltv_band": 75.0, "rate": 6.99 },
                { "term": "5yr", "ltv_band": 80.0, "rate": 7.59 }
            ]
        },
        {
            "lenderName": "Bluestone Mortgages",
            "tiers": [
                {
                    "tierName": "Deposit Unlock",
                    "maxLTV": 95,
                    "overrides": [
                        {
                            "predicate": { "kind": "ltv_at_least", "pct": 90.0 },
                            "rejection": "Deposit Unlock requires 90%+ LTV"
                        }
                    ]
                }
            ]
        }
    ]"#;

    #[test]
    fn test_parse_catalog_both_shapes() {
        let catalog = parse_catalog(SAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let tandem = &catalog[0];
        assert_eq!(tandem.lender_name, "Tandem Bank");
        assert_eq!(tandem.tiers.len(), 1);
        let tier = &tandem.tiers[0];
        assert_eq!(tier.name, "Tandem Three (T3)");
        assert_eq!(tier.max_ltv, 80.0);
        assert_eq!(tier.min_loan, Some(75_000.0));
        assert_eq!(tier.rates.len(), 2);

        let ccjs = tier.criteria_for(CreditCategory::Ccj);
        assert_eq!(ccjs.max_in_period, Some(3));
        assert_eq!(ccjs.recent_period_months, Some(3));
        assert!(ccjs.subtype_exempt(Some("utilities")));

        // Malformed paydayLoans entry degrades to permissive, not an error
        let payday = tier.criteria_for(CreditCategory::PaydayLoan);
        assert_eq!(payday, EligibilityCriteria::permissive());

        let bluestone = &catalog[1];
        assert_eq!(bluestone.tiers[0].overrides.len(), 1);
    }

    #[test]
    fn test_load_rate_sheet_from_reader() {
        let csv = "Term,MaxLTV,Rate,Product\n\
                   2yr,70,6.99,2-year fixed\n\
                   2yr,75,6.99,\n\
                   5yr,80,7.59,5-year fixed\n";
        let entries = load_rate_sheet_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].term, FixedTerm::TwoYear);
        assert_eq!(entries[1].product, None);
        assert_eq!(entries[2].ltv_band, 80.0);
    }

    #[test]
    fn test_rate_sheet_rejects_unknown_term() {
        let csv = "Term,MaxLTV,Rate,Product\n10yr,70,6.99,\n";
        assert!(load_rate_sheet_from_reader(csv.as_bytes()).is_err());
    }
}

//! Validation and conversion from catalog DTOs to domain types.
//!
//! Structure is checked on the raw JSON value first so that errors can name
//! the exact record and key at fault; the typed DTOs are then converted into
//! validated domain values.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::domain::{ExchangeRateTable, PortCode, Rate, RateMap, Sailing, SailingCode};

use super::error::DataError;
use super::types::{AmountDto, CatalogDocument, RateDto, SailingDto};

const TOP_LEVEL_KEYS: [&str; 3] = ["sailings", "rates", "exchange_rates"];
const SAILING_KEYS: [&str; 5] = [
    "origin_port",
    "destination_port",
    "departure_date",
    "arrival_date",
    "sailing_code",
];
const RATE_KEYS: [&str; 3] = ["sailing_code", "rate", "rate_currency"];

/// Check that `records` is an array of objects each carrying `keys`.
fn validate_records(
    data: &serde_json::Map<String, Value>,
    name: &str,
    keys: &[&str],
) -> Result<(), DataError> {
    let records = data
        .get(name)
        .and_then(Value::as_array)
        .ok_or_else(|| DataError::shape(format!("{name} must be an array")))?;

    for (i, record) in records.iter().enumerate() {
        let record = record
            .as_object()
            .ok_or_else(|| DataError::shape(format!("{name}[{i}] must be an object")))?;
        if let Some(key) = keys.iter().find(|key| !record.contains_key(**key)) {
            return Err(DataError::shape(format!("{name}[{i}] missing key: {key}")));
        }
    }

    Ok(())
}

/// Validate the structure of a parsed data file.
///
/// Checks the top-level keys and their types, that every sailing and rate
/// record carries its required keys (values may still be `null` for dates),
/// and that each exchange-rate date maps to an object.
pub fn validate_shape(value: &Value) -> Result<(), DataError> {
    let data = value
        .as_object()
        .ok_or_else(|| DataError::shape("input data must be a JSON object"))?;

    if let Some(key) = TOP_LEVEL_KEYS.iter().find(|key| !data.contains_key(**key)) {
        return Err(DataError::shape(format!("missing key: {key}")));
    }

    validate_records(data, "sailings", &SAILING_KEYS)?;
    validate_records(data, "rates", &RATE_KEYS)?;

    let exchange_rates = data
        .get("exchange_rates")
        .and_then(Value::as_object)
        .ok_or_else(|| DataError::shape("exchange_rates must be an object"))?;

    for (date, rates) in exchange_rates {
        if !rates.is_object() {
            return Err(DataError::shape(format!(
                "exchange_rates for {date} must be an object"
            )));
        }
    }

    Ok(())
}

/// Parse a decimal amount, accepting plain and scientific notation.
pub fn parse_amount(amount: &AmountDto) -> Option<Decimal> {
    let text = amount.as_text();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

fn convert_sailing(index: usize, dto: &SailingDto) -> Result<Sailing, DataError> {
    let field = |name: &str| format!("sailings[{index}].{name}");

    let code = SailingCode::new(dto.sailing_code.trim())
        .map_err(|e| DataError::value(field("sailing_code"), e))?;
    let origin = PortCode::parse(dto.origin_port.trim())
        .map_err(|e| DataError::value(field("origin_port"), e))?;
    let destination = PortCode::parse(dto.destination_port.trim())
        .map_err(|e| DataError::value(field("destination_port"), e))?;

    Ok(Sailing {
        code,
        origin,
        destination,
        departure_date: dto.departure_date.clone(),
        arrival_date: dto.arrival_date.clone(),
    })
}

fn convert_rate(index: usize, dto: &RateDto) -> Result<Rate, DataError> {
    let field = |name: &str| format!("rates[{index}].{name}");

    let code = SailingCode::new(dto.sailing_code.trim())
        .map_err(|e| DataError::value(field("sailing_code"), e))?;

    let amount = parse_amount(&dto.rate).ok_or_else(|| {
        DataError::value(field("rate"), format!("not a decimal: {}", dto.rate.as_text()))
    })?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DataError::value(field("rate"), "must not be negative"));
    }

    let currency = dto.rate_currency.trim();
    if currency.is_empty() {
        return Err(DataError::value(field("rate_currency"), "must not be empty"));
    }

    Ok(Rate::new(code, amount, currency))
}

/// Everything the planner needs, converted from a [`CatalogDocument`].
pub struct Converted {
    pub sailings: Vec<Arc<Sailing>>,
    pub rates: RateMap,
    pub exchange_rates: ExchangeRateTable,
}

/// Convert a document into domain values.
///
/// Rates for the same sailing code overwrite earlier ones.
pub fn convert_document(doc: &CatalogDocument) -> Result<Converted, DataError> {
    let sailings = doc
        .sailings
        .iter()
        .enumerate()
        .map(|(i, dto)| convert_sailing(i, dto).map(Arc::new))
        .collect::<Result<Vec<_>, _>>()?;

    let rates = doc
        .rates
        .iter()
        .enumerate()
        .map(|(i, dto)| convert_rate(i, dto))
        .collect::<Result<RateMap, _>>()?;

    let mut exchange_rates = ExchangeRateTable::new();
    for (date, quotes) in &doc.exchange_rates {
        exchange_rates.insert_date(date.as_str());
        for (currency, amount) in quotes {
            let rate = parse_amount(amount).ok_or_else(|| {
                DataError::value(
                    format!("exchange_rates.{date}.{currency}"),
                    format!("not a decimal: {}", amount.as_text()),
                )
            })?;
            exchange_rates.insert(date.as_str(), currency, rate);
        }
    }

    Ok(Converted {
        sailings,
        rates,
        exchange_rates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "sailings": [{
                "origin_port": "CNSHA",
                "destination_port": "NLRTM",
                "departure_date": "2022-01-29",
                "arrival_date": "2022-02-12",
                "sailing_code": "ABCD"
            }],
            "rates": [{ "sailing_code": "ABCD", "rate": "589.30", "rate_currency": "USD" }],
            "exchange_rates": { "2022-01-29": { "usd": 1.1138, "jpy": 130.85 } }
        })
    }

    fn shape_message(value: &Value) -> String {
        match validate_shape(value) {
            Err(DataError::Shape(message)) => message,
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn valid_shape_passes() {
        assert!(validate_shape(&valid()).is_ok());
    }

    #[test]
    fn top_level_must_be_object() {
        assert_eq!(shape_message(&json!([])), "input data must be a JSON object");
    }

    #[test]
    fn missing_top_level_key() {
        assert_eq!(shape_message(&json!({})), "missing key: sailings");

        let mut value = valid();
        value.as_object_mut().unwrap().remove("exchange_rates");
        assert_eq!(shape_message(&value), "missing key: exchange_rates");
    }

    #[test]
    fn wrong_container_types() {
        let mut value = valid();
        value["sailings"] = json!({});
        assert_eq!(shape_message(&value), "sailings must be an array");

        let mut value = valid();
        value["rates"] = json!("none");
        assert_eq!(shape_message(&value), "rates must be an array");

        let mut value = valid();
        value["exchange_rates"] = json!([]);
        assert_eq!(shape_message(&value), "exchange_rates must be an object");

        let mut value = valid();
        value["exchange_rates"]["2022-01-29"] = json!(1.0);
        assert_eq!(
            shape_message(&value),
            "exchange_rates for 2022-01-29 must be an object"
        );
    }

    #[test]
    fn record_missing_key_is_named() {
        let mut value = valid();
        value["sailings"][0]
            .as_object_mut()
            .unwrap()
            .remove("arrival_date");
        assert_eq!(shape_message(&value), "sailings[0] missing key: arrival_date");

        let mut value = valid();
        value["rates"][0].as_object_mut().unwrap().remove("rate");
        assert_eq!(shape_message(&value), "rates[0] missing key: rate");

        let mut value = valid();
        value["rates"] = json!([42]);
        assert_eq!(shape_message(&value), "rates[0] must be an object");
    }

    #[test]
    fn null_dates_pass_shape_check() {
        let mut value = valid();
        value["sailings"][0]["departure_date"] = Value::Null;
        assert!(validate_shape(&value).is_ok());
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(
            parse_amount(&AmountDto::Text("589.30".into())),
            Some(dec!(589.30))
        );
        assert_eq!(parse_amount(&AmountDto::Text("1e2".into())), Some(dec!(100)));
        assert_eq!(parse_amount(&AmountDto::Text("cheap".into())), None);
    }

    #[test]
    fn converts_document() {
        let doc: CatalogDocument = serde_json::from_value(valid()).unwrap();
        let converted = convert_document(&doc).unwrap();

        assert_eq!(converted.sailings.len(), 1);
        assert_eq!(converted.sailings[0].code.as_str(), "ABCD");

        let rate = converted
            .rates
            .get(&SailingCode::new("ABCD").unwrap())
            .unwrap();
        assert_eq!(rate.amount, dec!(589.30));
        assert_eq!(rate.currency, "USD");

        assert_eq!(
            converted.exchange_rates.rate("2022-01-29", "USD").unwrap(),
            dec!(1.1138)
        );
    }

    #[test]
    fn later_rate_overwrites_earlier() {
        let mut value = valid();
        value["rates"] = json!([
            { "sailing_code": "ABCD", "rate": "100", "rate_currency": "USD" },
            { "sailing_code": "ABCD", "rate": "90", "rate_currency": "EUR" }
        ]);
        let doc: CatalogDocument = serde_json::from_value(value).unwrap();
        let converted = convert_document(&doc).unwrap();

        assert_eq!(converted.rates.len(), 1);
        let rate = converted
            .rates
            .get(&SailingCode::new("ABCD").unwrap())
            .unwrap();
        assert_eq!(rate.amount, dec!(90));
        assert_eq!(rate.currency, "EUR");
    }

    #[test]
    fn rejects_bad_values() {
        let mut value = valid();
        value["rates"][0]["rate"] = json!("-5");
        let doc: CatalogDocument = serde_json::from_value(value).unwrap();
        assert_eq!(
            convert_document(&doc).err().unwrap().to_string(),
            "invalid rates[0].rate: must not be negative"
        );

        let mut value = valid();
        value["sailings"][0]["origin_port"] = json!("");
        let doc: CatalogDocument = serde_json::from_value(value).unwrap();
        assert!(matches!(
            convert_document(&doc),
            Err(DataError::Value { field, .. }) if field == "sailings[0].origin_port"
        ));

        let mut value = valid();
        value["exchange_rates"]["2022-01-29"]["usd"] = json!("lots");
        let doc: CatalogDocument = serde_json::from_value(value).unwrap();
        assert!(matches!(
            convert_document(&doc),
            Err(DataError::Value { field, .. }) if field == "exchange_rates.2022-01-29.usd"
        ));
    }

    #[test]
    fn empty_date_is_kept() {
        let mut value = valid();
        value["exchange_rates"]["2022-02-01"] = json!({});
        let doc: CatalogDocument = serde_json::from_value(value).unwrap();
        let converted = convert_document(&doc).unwrap();

        assert_eq!(converted.exchange_rates.len(), 2);
        assert_eq!(
            converted
                .exchange_rates
                .rate("2022-02-01", "USD")
                .unwrap_err()
                .to_string(),
            "no rate for USD on 2022-02-01"
        );
    }
}

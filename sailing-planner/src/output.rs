//! Result rendering.
//!
//! Routes are printed as JSON arrays of legs, each leg carrying its freight
//! rate as quoted (not converted). By default only the presented route is
//! printed; in multi-route mode every tied winner is printed as an array of
//! routes.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::round_money;
use crate::domain::{RateMap, Route, SailingCode};

/// Errors from rendering search results.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The format name is not recognised
    #[error("unknown output format '{0}' (allowed: json, csv, xml)")]
    UnknownFormat(String),

    /// The format is recognised but cannot be produced
    #[error("{0} output is not supported")]
    Unsupported(OutputFormat),

    /// A leg has no freight rate to print
    #[error("no rate found for sailing code {sailing_code} while rendering route [{route}]")]
    MissingRate {
        sailing_code: SailingCode,
        route: String,
    },

    /// Serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Xml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xml => "xml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = OutputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "xml" => Ok(OutputFormat::Xml),
            _ => Err(OutputError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One leg as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegView<'a> {
    pub origin_port: &'a str,
    pub destination_port: &'a str,
    pub departure_date: Option<&'a str>,
    pub arrival_date: Option<&'a str>,
    pub sailing_code: &'a str,
    /// Quoted amount with exactly two decimals.
    pub rate: String,
    pub rate_currency: &'a str,
}

/// Format an amount with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(2);
    rounded.to_string()
}

/// Build the printed legs of a route.
///
/// # Errors
///
/// Returns [`OutputError::MissingRate`] if any leg has no freight rate.
pub fn route_view<'a>(route: &'a Route, rates: &'a RateMap) -> Result<Vec<LegView<'a>>, OutputError> {
    route
        .legs()
        .iter()
        .map(|sailing| {
            let rate = rates.get(&sailing.code).ok_or_else(|| OutputError::MissingRate {
                sailing_code: sailing.code.clone(),
                route: route
                    .sailing_codes()
                    .map(SailingCode::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

            Ok(LegView {
                origin_port: sailing.origin.as_str(),
                destination_port: sailing.destination.as_str(),
                departure_date: sailing.departure_date.as_deref(),
                arrival_date: sailing.arrival_date.as_deref(),
                sailing_code: sailing.code.as_str(),
                rate: format_amount(rate.amount),
                rate_currency: &rate.currency,
            })
        })
        .collect()
}

/// Render search results.
///
/// With `multiple` unset, only the first route is printed (an empty array
/// when there is none). With it set, every route is printed as an array of
/// leg arrays.
pub fn render(
    routes: &[Route],
    rates: &RateMap,
    format: OutputFormat,
    multiple: bool,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => {}
        OutputFormat::Csv | OutputFormat::Xml => return Err(OutputError::Unsupported(format)),
    }

    if multiple {
        let views = routes
            .iter()
            .map(|route| route_view(route, rates))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(serde_json::to_string_pretty(&views)?)
    } else {
        let view = match routes.first() {
            Some(route) => route_view(route, rates)?,
            None => Vec::new(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PortCode, Rate, Sailing};
    use rust_decimal_macros::dec;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn sailing(code: &str, from: &str, to: &str, dep: &str, arr: &str) -> Arc<Sailing> {
        Arc::new(Sailing::new(
            SailingCode::new(code).unwrap(),
            PortCode::parse(from).unwrap(),
            PortCode::parse(to).unwrap(),
            dep,
            arr,
        ))
    }

    fn rates() -> RateMap {
        [
            Rate::new(SailingCode::new("ERXQ").unwrap(), dec!(261.96), "EUR"),
            Rate::new(SailingCode::new("ETRF").unwrap(), dec!(70.9), "USD"),
            Rate::new(SailingCode::new("ABCD").unwrap(), dec!(589), "USD"),
        ]
        .into_iter()
        .collect()
    }

    fn transfer() -> Route {
        Route::new(vec![
            sailing("ERXQ", "CNSHA", "ESBCN", "2022-01-29", "2022-02-12"),
            sailing("ETRF", "ESBCN", "NLRTM", "2022-02-16", "2022-02-20"),
        ])
        .unwrap()
    }

    fn direct() -> Route {
        Route::new(vec![sailing("ABCD", "CNSHA", "NLRTM", "2022-02-01", "2022-03-01")]).unwrap()
    }

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn parse_format() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!(" xml ".parse::<OutputFormat>().unwrap(), OutputFormat::Xml);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(OutputError::UnknownFormat(_))
        ));
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(dec!(589)), "589.00");
        assert_eq!(format_amount(dec!(70.9)), "70.90");
        assert_eq!(format_amount(dec!(261.96)), "261.96");
        assert_eq!(format_amount(dec!(1.005)), "1.01");
    }

    #[test]
    fn single_route_document() {
        let out = render(&[transfer()], &rates(), OutputFormat::Json, false).unwrap();

        assert_eq!(
            parse(&out),
            json!([
                {
                    "origin_port": "CNSHA",
                    "destination_port": "ESBCN",
                    "departure_date": "2022-01-29",
                    "arrival_date": "2022-02-12",
                    "sailing_code": "ERXQ",
                    "rate": "261.96",
                    "rate_currency": "EUR"
                },
                {
                    "origin_port": "ESBCN",
                    "destination_port": "NLRTM",
                    "departure_date": "2022-02-16",
                    "arrival_date": "2022-02-20",
                    "sailing_code": "ETRF",
                    "rate": "70.90",
                    "rate_currency": "USD"
                }
            ])
        );
    }

    #[test]
    fn single_mode_prints_first_route_only() {
        let out = render(&[direct(), transfer()], &rates(), OutputFormat::Json, false).unwrap();
        let value = parse(&out);

        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["sailing_code"], "ABCD");
        assert_eq!(value[0]["rate"], "589.00");
    }

    #[test]
    fn multiple_mode_prints_every_route() {
        let out = render(&[direct(), transfer()], &rates(), OutputFormat::Json, true).unwrap();
        let value = parse(&out);

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0].as_array().unwrap().len(), 1);
        assert_eq!(value[1].as_array().unwrap().len(), 2);
        assert_eq!(value[1][1]["sailing_code"], "ETRF");
    }

    #[test]
    fn no_route_is_empty_array() {
        let out = render(&[], &rates(), OutputFormat::Json, false).unwrap();
        assert_eq!(parse(&out), json!([]));

        let out = render(&[], &rates(), OutputFormat::Json, true).unwrap();
        assert_eq!(parse(&out), json!([]));
    }

    #[test]
    fn missing_rate_names_route() {
        let rates: RateMap = [Rate::new(SailingCode::new("ERXQ").unwrap(), dec!(1), "EUR")]
            .into_iter()
            .collect();

        let err = render(&[transfer()], &rates, OutputFormat::Json, false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no rate found for sailing code ETRF while rendering route [ERXQ, ETRF]"
        );
    }

    #[test]
    fn csv_and_xml_unsupported() {
        for format in [OutputFormat::Csv, OutputFormat::Xml] {
            let err = render(&[direct()], &rates(), format, false).unwrap_err();
            assert!(matches!(err, OutputError::Unsupported(f) if f == format));
        }
        assert_eq!(
            OutputError::Unsupported(OutputFormat::Csv).to_string(),
            "csv output is not supported"
        );
    }

    #[test]
    fn null_dates_render_as_null() {
        let route = Route::new(vec![Arc::new(Sailing {
            code: SailingCode::new("ABCD").unwrap(),
            origin: PortCode::parse("CNSHA").unwrap(),
            destination: PortCode::parse("NLRTM").unwrap(),
            departure_date: None,
            arrival_date: Some("2022-03-01".into()),
        })])
        .unwrap();

        let out = render(&[route], &rates(), OutputFormat::Json, false).unwrap();
        let value = parse(&out);
        assert!(value[0]["departure_date"].is_null());
    }
}

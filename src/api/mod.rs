use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    FilingStatus, calculate_estate_taxes, calculate_minimum_remaining_taxes_for_heir,
    calculate_savers_credit, calculate_taxes, fully_tax_deductible_ira,
};

#[derive(Parser, Debug)]
#[command(
    name = "fedtax",
    about = "US federal tax calculators: income + capital gains, estate, savers' credit, inherited-account RMDs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Federal income tax on ordinary income plus long-term capital gains
    Income {
        #[arg(long)]
        agi: f64,
        #[arg(long)]
        married: bool,
        #[arg(long, default_value_t = 0.0)]
        ltcg: f64,
        #[arg(long, help = "Report only the capital gains component")]
        just_ltcg: bool,
        #[arg(long, help = "Print the per-bracket trace")]
        debug: bool,
    },
    /// Federal estate tax after the $11.7M exemption
    Estate {
        #[arg(long)]
        estate: f64,
    },
    /// Retirement savings contributions credit
    SaversCredit {
        #[arg(long)]
        agi: f64,
        #[arg(long)]
        contributions: f64,
        #[arg(long)]
        married: bool,
    },
    /// Total income tax an heir owes draining an inherited tax-deferred account
    Heir {
        #[arg(long)]
        value: f64,
        #[arg(long)]
        age: u32,
    },
    /// Whether traditional IRA contributions are fully deductible at this AGI
    Ira {
        #[arg(long)]
        agi: f64,
        #[arg(long)]
        married: bool,
    },
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Income {
            agi,
            married,
            ltcg,
            just_ltcg,
            debug,
        } => {
            let agi = check_non_negative("--agi", agi)?;
            let ltcg = check_non_negative("--ltcg", ltcg)?;
            let tax = calculate_taxes(
                agi,
                FilingStatus::from_married(married),
                ltcg,
                just_ltcg,
                debug,
            );
            println!("${tax:.2}");
        }
        Command::Estate { estate } => {
            let estate = check_positive("--estate", estate)?;
            println!("${:.2}", calculate_estate_taxes(estate));
        }
        Command::SaversCredit {
            agi,
            contributions,
            married,
        } => {
            let agi = check_non_negative("--agi", agi)?;
            let contributions = check_non_negative("--contributions", contributions)?;
            let credit =
                calculate_savers_credit(agi, contributions, FilingStatus::from_married(married));
            println!("${credit:.2}");
        }
        Command::Heir { value, age } => {
            let value = check_positive("--value", value)?;
            println!("${:.2}", calculate_minimum_remaining_taxes_for_heir(value, age));
        }
        Command::Ira { agi, married } => {
            let agi = check_non_negative("--agi", agi)?;
            let deductible = fully_tax_deductible_ira(agi, FilingStatus::from_married(married));
            println!(
                "{}",
                if deductible {
                    "fully deductible"
                } else {
                    "not fully deductible"
                }
            );
        }
    }
    Ok(())
}

fn require<T>(name: &str, value: Option<T>) -> Result<T, String> {
    value.ok_or_else(|| format!("{name} is required"))
}

fn check_non_negative(name: &str, value: f64) -> Result<f64, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{name} must be >= 0"));
    }
    Ok(value)
}

fn check_positive(name: &str, value: f64) -> Result<f64, String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{name} must be > 0"));
    }
    Ok(value)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct TaxesPayload {
    agi: Option<f64>,
    married: Option<bool>,
    ltcg: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct TaxesRequest {
    agi: f64,
    status: FilingStatus,
    ltcg: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TaxesResponse {
    income_tax: f64,
    ltcg_tax: f64,
    total_tax: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct EstatePayload {
    estate: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstateResponse {
    estate_tax: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct SaversCreditPayload {
    agi: Option<f64>,
    married: Option<bool>,
    contributions: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaversCreditResponse {
    credit: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct HeirPayload {
    value: Option<f64>,
    age: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HeirResponse {
    total_tax: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct IraPayload {
    agi: Option<f64>,
    married: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IraResponse {
    fully_deductible: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn taxes_request_from_payload(payload: TaxesPayload) -> Result<TaxesRequest, String> {
    let agi = check_non_negative("agi", require("agi", payload.agi)?)?;
    let ltcg = check_non_negative("ltcg", payload.ltcg.unwrap_or(0.0))?;
    let status = FilingStatus::from_married(payload.married.unwrap_or(false));
    Ok(TaxesRequest { agi, status, ltcg })
}

fn estate_request_from_payload(payload: EstatePayload) -> Result<f64, String> {
    check_positive("estate", require("estate", payload.estate)?)
}

fn savers_credit_request_from_payload(
    payload: SaversCreditPayload,
) -> Result<(f64, f64, FilingStatus), String> {
    let agi = check_non_negative("agi", require("agi", payload.agi)?)?;
    let contributions =
        check_non_negative("contributions", require("contributions", payload.contributions)?)?;
    let status = FilingStatus::from_married(payload.married.unwrap_or(false));
    Ok((agi, contributions, status))
}

fn heir_request_from_payload(payload: HeirPayload) -> Result<(f64, u32), String> {
    let value = check_positive("value", require("value", payload.value)?)?;
    let age = require("age", payload.age)?;
    Ok((value, age))
}

fn ira_request_from_payload(payload: IraPayload) -> Result<(f64, FilingStatus), String> {
    let agi = check_non_negative("agi", require("agi", payload.agi)?)?;
    let status = FilingStatus::from_married(payload.married.unwrap_or(false));
    Ok((agi, status))
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = Router::new()
        .route("/api/taxes", get(taxes_get_handler).post(taxes_post_handler))
        .route(
            "/api/estate-taxes",
            get(estate_get_handler).post(estate_post_handler),
        )
        .route(
            "/api/savers-credit",
            get(savers_credit_get_handler).post(savers_credit_post_handler),
        )
        .route("/api/heir-taxes", get(heir_get_handler).post(heir_post_handler))
        .route("/api/ira-deduction", get(ira_get_handler).post(ira_post_handler))
        .fallback(not_found_handler);

    let listener = TcpListener::bind(addr).await?;
    println!("fedtax HTTP API listening on http://{addr}");
    println!("Local access: http://127.0.0.1:{port}/");

    axum::serve(listener, app).await
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn taxes_get_handler(Query(payload): Query<TaxesPayload>) -> Response {
    taxes_handler_impl(payload)
}

async fn taxes_post_handler(Json(payload): Json<TaxesPayload>) -> Response {
    taxes_handler_impl(payload)
}

fn taxes_handler_impl(payload: TaxesPayload) -> Response {
    let request = match taxes_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    let ltcg_tax = calculate_taxes(request.agi, request.status, request.ltcg, true, false);
    let total_tax = calculate_taxes(request.agi, request.status, request.ltcg, false, false);
    json_response(
        StatusCode::OK,
        TaxesResponse {
            income_tax: total_tax - ltcg_tax,
            ltcg_tax,
            total_tax,
        },
    )
}

async fn estate_get_handler(Query(payload): Query<EstatePayload>) -> Response {
    estate_handler_impl(payload)
}

async fn estate_post_handler(Json(payload): Json<EstatePayload>) -> Response {
    estate_handler_impl(payload)
}

fn estate_handler_impl(payload: EstatePayload) -> Response {
    let estate = match estate_request_from_payload(payload) {
        Ok(estate) => estate,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(
        StatusCode::OK,
        EstateResponse {
            estate_tax: calculate_estate_taxes(estate),
        },
    )
}

async fn savers_credit_get_handler(Query(payload): Query<SaversCreditPayload>) -> Response {
    savers_credit_handler_impl(payload)
}

async fn savers_credit_post_handler(Json(payload): Json<SaversCreditPayload>) -> Response {
    savers_credit_handler_impl(payload)
}

fn savers_credit_handler_impl(payload: SaversCreditPayload) -> Response {
    let (agi, contributions, status) = match savers_credit_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(
        StatusCode::OK,
        SaversCreditResponse {
            credit: calculate_savers_credit(agi, contributions, status),
        },
    )
}

async fn heir_get_handler(Query(payload): Query<HeirPayload>) -> Response {
    heir_handler_impl(payload)
}

async fn heir_post_handler(Json(payload): Json<HeirPayload>) -> Response {
    heir_handler_impl(payload)
}

fn heir_handler_impl(payload: HeirPayload) -> Response {
    let (value, age) = match heir_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(
        StatusCode::OK,
        HeirResponse {
            total_tax: calculate_minimum_remaining_taxes_for_heir(value, age),
        },
    )
}

async fn ira_get_handler(Query(payload): Query<IraPayload>) -> Response {
    ira_handler_impl(payload)
}

async fn ira_post_handler(Json(payload): Json<IraPayload>) -> Response {
    ira_handler_impl(payload)
}

fn ira_handler_impl(payload: IraPayload) -> Response {
    let (agi, status) = match ira_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => return error_response(StatusCode::BAD_REQUEST, &msg),
    };
    json_response(
        StatusCode::OK,
        IraResponse {
            fully_deductible: fully_tax_deductible_ira(agi, status),
        },
    )
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

#[cfg(test)]
fn taxes_request_from_json(json: &str) -> Result<TaxesRequest, String> {
    let payload = serde_json::from_str::<TaxesPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    taxes_request_from_payload(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn taxes_request_parses_web_keys() {
        let json = r#"{
          "agi": 100000,
          "married": true,
          "ltcg": 25000
        }"#;
        let request = taxes_request_from_json(json).expect("json should parse");
        assert_approx(request.agi, 100_000.0);
        assert_approx(request.ltcg, 25_000.0);
        assert_eq!(request.status, FilingStatus::Married);
    }

    #[test]
    fn taxes_request_defaults_status_and_gains() {
        let request = taxes_request_from_json(r#"{"agi": 50000}"#).expect("json should parse");
        assert_approx(request.ltcg, 0.0);
        assert_eq!(request.status, FilingStatus::Single);
    }

    #[test]
    fn taxes_request_requires_agi() {
        let err = taxes_request_from_json("{}").expect_err("must require agi");
        assert!(err.contains("agi is required"));
    }

    #[test]
    fn taxes_request_rejects_negative_amounts() {
        let err = taxes_request_from_json(r#"{"agi": -1}"#).expect_err("must reject agi");
        assert!(err.contains("agi must be >= 0"));

        let err = taxes_request_from_json(r#"{"agi": 1, "ltcg": -5}"#)
            .expect_err("must reject ltcg");
        assert!(err.contains("ltcg must be >= 0"));
    }

    #[test]
    fn estate_request_rejects_non_positive_estate() {
        let err = estate_request_from_payload(EstatePayload { estate: Some(0.0) })
            .expect_err("must reject zero estate");
        assert!(err.contains("estate must be > 0"));

        let err = estate_request_from_payload(EstatePayload::default())
            .expect_err("must require estate");
        assert!(err.contains("estate is required"));
    }

    #[test]
    fn savers_credit_request_requires_contributions() {
        let payload = SaversCreditPayload {
            agi: Some(10_000.0),
            married: None,
            contributions: None,
        };
        let err = savers_credit_request_from_payload(payload)
            .expect_err("must require contributions");
        assert!(err.contains("contributions is required"));
    }

    #[test]
    fn heir_request_requires_value_and_age() {
        let (value, age) = heir_request_from_payload(HeirPayload {
            value: Some(250_000.0),
            age: Some(55),
        })
        .expect("valid payload");
        assert_approx(value, 250_000.0);
        assert_eq!(age, 55);

        let err = heir_request_from_payload(HeirPayload {
            value: Some(250_000.0),
            age: None,
        })
        .expect_err("must require age");
        assert!(err.contains("age is required"));
    }

    #[test]
    fn ira_request_defaults_to_single() {
        let (agi, status) =
            ira_request_from_payload(IraPayload { agi: Some(64_999.0), married: None })
                .expect("valid payload");
        assert_approx(agi, 64_999.0);
        assert_eq!(status, FilingStatus::Single);
    }

    #[test]
    fn taxes_response_serializes_camel_case() {
        let response = TaxesResponse {
            income_tax: 8_629.0,
            ltcg_tax: 0.0,
            total_tax: 8_629.0,
        };
        let value = serde_json::to_value(&response).expect("serializes");
        assert_eq!(value["incomeTax"], 8_629.0);
        assert_eq!(value["ltcgTax"], 0.0);
        assert_eq!(value["totalTax"], 8_629.0);
    }
}

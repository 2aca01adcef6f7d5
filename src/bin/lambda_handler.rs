//! AWS Lambda handler for the payoff calculator
//!
//! Accepts loan terms as JSON and returns the standard vs accelerated
//! comparison with the presentation aggregates the browser front end shows.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use aws_lambda_events::event::lambda_function_urls::{LambdaFunctionUrlRequest, LambdaFunctionUrlResponse};
use http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use mortgage_payoff::{
    amortization::{AmortizationEngine, AmortizationResult},
    currency::{currency_symbol, format_currency, DEFAULT_CURRENCY},
    insight::{InsightAdvisor, StaticInsightProvider},
    loan::{ExtraPaymentMode, LoanInputs},
    savings::{PeriodicSavings, TimeSaved},
};
use serde::{Deserialize, Serialize};

/// Input loan terms; omitted fields take the calculator's starting values
#[derive(Debug, Deserialize)]
pub struct PayoffRequest {
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Annual rate in percent (default: 6.5)
    #[serde(default = "default_rate")]
    pub annual_rate_percent: f64,

    #[serde(default = "default_term")]
    pub term_years: u32,

    #[serde(default = "default_extra")]
    pub extra_payment_amount: f64,

    #[serde(default = "default_mode")]
    pub extra_payment_mode: ExtraPaymentMode,

    /// ISO code for the formatted figures
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_principal() -> f64 { 350_000.0 }
fn default_rate() -> f64 { 6.5 }
fn default_term() -> u32 { 30 }
fn default_extra() -> f64 { 500.0 }
fn default_mode() -> ExtraPaymentMode { ExtraPaymentMode::Monthly }
fn default_currency() -> String { DEFAULT_CURRENCY.to_string() }

impl PayoffRequest {
    fn to_inputs(&self) -> LoanInputs {
        LoanInputs::new(
            self.principal,
            self.annual_rate_percent,
            self.term_years,
            self.extra_payment_amount,
            self.extra_payment_mode,
        )
    }
}

/// Output from the comparison
#[derive(Debug, Serialize)]
pub struct PayoffResponse {
    pub inputs: LoanInputs,
    pub result: AmortizationResult,
    pub periodic_savings: PeriodicSavings,
    pub time_saved: TimeSaved,
    pub formatted: FormattedFigures,
    pub insight: String,
    pub execution_time_ms: u64,
}

/// Headline figures already formatted for display
#[derive(Debug, Serialize)]
pub struct FormattedFigures {
    pub currency_symbol: String,
    pub standard_monthly_payment: String,
    pub total_savings: String,
    pub total_interest_standard: String,
    pub total_interest_accelerated: String,
    pub time_saved: String,
}

impl FormattedFigures {
    fn new(result: &AmortizationResult, time_saved: TimeSaved, currency: &str) -> Self {
        Self {
            currency_symbol: currency_symbol(currency),
            standard_monthly_payment: format_currency(result.standard_monthly_payment, currency, 2),
            total_savings: format_currency(result.total_savings, currency, 0),
            total_interest_standard: format_currency(result.total_interest_standard, currency, 0),
            total_interest_accelerated: format_currency(result.total_interest_accelerated, currency, 0),
            time_saved: time_saved.to_string(),
        }
    }
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("POST, OPTIONS"));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    headers
}

fn response(status: i64, body: Option<String>) -> LambdaFunctionUrlResponse {
    let mut headers = cors_headers();
    if body.is_some() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    LambdaFunctionUrlResponse {
        status_code: status,
        headers,
        body,
        is_base64_encoded: false,
        cookies: Vec::new(),
    }
}

fn error_response(status: i64, message: &str) -> LambdaFunctionUrlResponse {
    let body = serde_json::json!({ "error": message }).to_string();
    response(status, Some(body))
}

/// Lambda handler function
async fn handler(event: LambdaEvent<LambdaFunctionUrlRequest>) -> Result<LambdaFunctionUrlResponse, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    // Handle CORS preflight
    if request.request_context.http.method.as_deref() == Some("OPTIONS") {
        return Ok(response(200, None));
    }

    if request.is_base64_encoded {
        return Ok(error_response(400, "base64-encoded bodies are not supported"));
    }

    let body = request.body.as_deref().unwrap_or("{}");
    let payload: PayoffRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
    };

    let inputs = payload.to_inputs();
    let result = match AmortizationEngine::default().try_compute(&inputs) {
        Ok(r) => r,
        Err(e) => return Ok(error_response(400, &e.to_string())),
    };

    let periodic_savings = PeriodicSavings::from_result(&result, inputs.term_years);
    let time_saved = TimeSaved::from_months(result.months_saved);
    let formatted = FormattedFigures::new(&result, time_saved, &payload.currency);
    let insight = InsightAdvisor::new(StaticInsightProvider).advise(&inputs, &result);

    log::info!(
        "Computed payoff: {} months saved, {:.2} interest saved",
        result.months_saved,
        result.total_savings
    );

    let body = PayoffResponse {
        inputs,
        result,
        periodic_savings,
        time_saved,
        formatted,
        insight,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(response(200, Some(serde_json::to_string(&body)?)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::{json, Value};

    /// Function URL event as delivered by AWS
    fn url_event(method: &str, body: Option<&str>) -> LambdaEvent<LambdaFunctionUrlRequest> {
        let request: LambdaFunctionUrlRequest = serde_json::from_value(json!({
            "version": "2.0",
            "rawPath": "/",
            "rawQueryString": "",
            "headers": { "content-type": "application/json" },
            "requestContext": {
                "accountId": "anonymous",
                "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef",
                "apiId": "abcdefgh",
                "domainName": "abcdefgh.lambda-url.us-east-1.on.aws",
                "domainPrefix": "abcdefgh",
                "time": "17/Oct/2026:12:00:00 +0000",
                "timeEpoch": 1792238400000i64,
                "http": {
                    "method": method,
                    "path": "/",
                    "protocol": "HTTP/1.1",
                    "sourceIp": "127.0.0.1",
                    "userAgent": "curl/8.0"
                }
            },
            "body": body,
            "isBase64Encoded": false
        }))
        .unwrap();
        LambdaEvent::new(request, Context::default())
    }

    fn body_json(resp: &LambdaFunctionUrlResponse) -> Value {
        serde_json::from_str(resp.body.as_deref().unwrap()).unwrap()
    }

    #[tokio::test]
    async fn test_preflight_has_no_body() {
        let resp = handler(url_event("OPTIONS", None)).await.unwrap();
        assert_eq!(resp.status_code, 200);
        assert!(resp.body.is_none());
        assert_eq!(resp.headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert!(resp.headers.get(CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let resp = handler(url_event("POST", Some("not json"))).await.unwrap();
        assert_eq!(resp.status_code, 400);
        let error = body_json(&resp)["error"].as_str().unwrap().to_string();
        assert!(error.starts_with("Invalid JSON"));
    }

    #[tokio::test]
    async fn test_zero_term_is_rejected() {
        let resp = handler(url_event("POST", Some(r#"{"term_years": 0}"#))).await.unwrap();
        assert_eq!(resp.status_code, 400);
        let error = body_json(&resp)["error"].as_str().unwrap().to_string();
        assert!(error.contains("loan term"), "unexpected error: {}", error);
    }

    #[tokio::test]
    async fn test_out_of_range_term_is_rejected() {
        let resp = handler(url_event("POST", Some(r#"{"term_years": 1000000000}"#))).await.unwrap();
        assert_eq!(resp.status_code, 400);
        assert!(body_json(&resp)["error"].as_str().unwrap().contains("1000000000"));
    }

    #[tokio::test]
    async fn test_valid_request_computes_comparison() {
        let body = r#"{"principal": 300000, "annual_rate_percent": 6.5, "term_years": 30,
                       "extra_payment_amount": 500, "extra_payment_mode": "monthly"}"#;
        let resp = handler(url_event("POST", Some(body))).await.unwrap();
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.headers.get(CONTENT_TYPE).unwrap(), "application/json");

        let json = body_json(&resp);
        let months_saved = json["result"]["months_saved"].as_u64().unwrap();
        let months_to_payoff = json["result"]["months_to_payoff"].as_u64().unwrap();
        assert!(months_saved > 0);
        assert_eq!(months_saved + months_to_payoff, 360);
        assert!(json["result"]["total_savings"].as_f64().unwrap() > 0.0);
        assert_eq!(json["formatted"]["currency_symbol"], "$");
        assert!(!json["insight"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_body_uses_defaults() {
        let resp = handler(url_event("POST", None)).await.unwrap();
        assert_eq!(resp.status_code, 200);
        assert_eq!(body_json(&resp)["inputs"]["principal"], 350_000.0);
    }

    #[test]
    fn test_request_defaults() {
        let request: PayoffRequest = serde_json::from_str("{}").unwrap();
        let inputs = request.to_inputs();
        assert_eq!(inputs, LoanInputs::default());
        assert_eq!(request.currency, "USD");
    }

    #[test]
    fn test_request_mode_names() {
        let request: PayoffRequest =
            serde_json::from_str(r#"{"extra_payment_mode": "one_time", "extra_payment_amount": 10000}"#).unwrap();
        assert_eq!(request.extra_payment_mode, ExtraPaymentMode::OneTime);
        assert_eq!(request.extra_payment_amount, 10_000.0);
    }

    #[test]
    fn test_error_response_shape() {
        let resp = error_response(400, "bad");
        assert_eq!(resp.status_code, 400);
        assert_eq!(resp.body.as_deref(), Some(r#"{"error":"bad"}"#));
        assert_eq!(resp.headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }
}

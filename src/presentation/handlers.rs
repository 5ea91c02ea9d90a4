// HTTP request handlers
use crate::domain::report::ReportRequest;
use crate::infrastructure::http_response::{error_status, pdf_response};
use crate::infrastructure::pdf_canvas::PdfCanvas;
use crate::presentation::app_state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters of the summary-report endpoint. Periods are seconds,
/// tick overrides milliseconds, the end an epoch timestamp.
#[derive(Deserialize)]
pub struct SummaryQuery {
    pub period: Option<i64>,
    #[serde(rename = "majorTicks")]
    pub major_ticks: Option<i64>,
    #[serde(rename = "minorTicks")]
    pub minor_ticks: Option<i64>,
    pub end: Option<i64>,
    pub pdf_name: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Render the summary report and ship it as an inline PDF.
///
/// Every series is fetched before the document opens: the canvas is not
/// `Send`, so it is created only after the last await.
pub async fn summary_report(
    Query(query): Query<SummaryQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let request = ReportRequest::new(
        query.period,
        query.major_ticks,
        query.minor_ticks,
        query.end,
        query.pdf_name,
    );

    let prepared = match state.report_service.prepare(&request).await {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!("Preparing summary report failed: {}", e);
            return error_status(&e).into_response();
        }
    };

    let canvas = match PdfCanvas::new(&request.report_name) {
        Ok(canvas) => canvas,
        Err(e) => {
            tracing::error!("Opening report document failed: {}", e);
            return error_status(&e).into_response();
        }
    };

    match prepared.render(canvas) {
        Ok(report) => match pdf_response(report) {
            Ok(response) => response.into_response(),
            Err(status) => status.into_response(),
        },
        Err(e) => {
            tracing::error!("Drawing summary report failed: {}", e);
            error_status(&e).into_response()
        }
    }
}

/// List the full statistic names the backend currently knows.
pub async fn list_meters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.report_service.catalog_names().await {
        Ok(names) => Json(names).into_response(),
        Err(e) => {
            tracing::error!("Listing meters failed: {}", e);
            error_status(&e).into_response()
        }
    }
}

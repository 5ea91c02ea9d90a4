// HTTP response wrapping for rendered reports
use axum::{
    body::Body,
    http::{HeaderValue, Response, StatusCode, header},
};

use crate::application::report_service::{RenderedReport, ReportError};

/// Wraps sealed report bytes into an inline PDF response with an exact
/// content length.
pub fn pdf_response(report: RenderedReport) -> Result<Response<Body>, StatusCode> {
    let disposition = format!("inline; filename=\"{}.pdf\"", report.page_name);
    let disposition = HeaderValue::from_str(&disposition).map_err(|e| {
        tracing::error!("Report name not usable in a header: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/pdf")
        .header(
            header::CONTENT_LENGTH,
            HeaderValue::from_str(&report.bytes.len().to_string()).unwrap(),
        )
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from(report.bytes))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

/// Fatal report errors map to a status before any body byte is committed.
pub fn error_status(error: &ReportError) -> StatusCode {
    match error {
        ReportError::CatalogUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        ReportError::ClockUnavailable | ReportError::Draw(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

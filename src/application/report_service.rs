// Report service - plans the window, resolves series, drives layout and drawing

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;
use thiserror::Error;

use crate::application::graph_renderer::render_graph;
use crate::application::report_canvas::ReportCanvas;
use crate::application::series_resolver::SeriesResolver;
use crate::application::statistics_catalog::StatisticsCatalog;
use crate::domain::graph::ResolvedGraph;
use crate::domain::layout::{GraphSize, PAGE_HEIGHT, PAGE_WIDTH, PageCursor};
use crate::domain::report::ReportRequest;
use crate::domain::ticks::plan_ticks;
use crate::domain::window::{TimeWindow, end_label};
use crate::infrastructure::config::GraphPagesConfig;

/// Conditions that abort a report before any response byte is produced.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The statistics backend is absent or refused the pre-flight probe.
    #[error("statistics backend unavailable: {0}")]
    CatalogUnavailable(String),
    /// Wall clock or timezone offset could not be captured.
    #[error("system clock unavailable")]
    ClockUnavailable,
    /// Drawing or serialization failed; the report is abandoned whole.
    #[error("report drawing failed: {0}")]
    Draw(String),
}

/// Successful render outcome: the sealed document plus the literal "ok"
/// sentinel an external watchdog inspects.
#[derive(Debug)]
pub struct RenderedReport {
    pub page_name: String,
    pub bytes: Vec<u8>,
    pub status: &'static str,
}

/// Captured wall clock: epoch seconds plus the local UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    pub epoch_secs: i64,
    pub utc_offset_secs: i64,
}

pub fn wall_clock() -> Result<WallClock, ReportError> {
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| ReportError::ClockUnavailable)?;
    let utc_offset_secs = i64::from(Local::now().offset().local_minus_utc());
    Ok(WallClock {
        epoch_secs: epoch.as_secs() as i64,
        utc_offset_secs,
    })
}

#[derive(Clone)]
pub struct ReportService {
    catalog: Arc<dyn StatisticsCatalog>,
    pages: GraphPagesConfig,
    server_index: u32,
}

impl ReportService {
    pub fn new(catalog: Arc<dyn StatisticsCatalog>, pages: GraphPagesConfig, server_index: u32) -> Self {
        Self {
            catalog,
            pages,
            server_index,
        }
    }

    /// Names known to the backend, for operator discovery of meter names.
    pub async fn catalog_names(&self) -> Result<Vec<String>, ReportError> {
        self.catalog
            .statistics_names()
            .await
            .map_err(|e| ReportError::CatalogUnavailable(e.to_string()))
    }

    /// Stages one summary report: plans the window, probes the backend and
    /// fetches every configured meter's series.
    ///
    /// All backend traffic happens here so the drawing surface, which is
    /// not `Send`, never has to live across an await.
    pub async fn prepare(&self, request: &ReportRequest) -> Result<PreparedReport, ReportError> {
        let ticks = plan_ticks(
            request.period_secs,
            request.major_ticks_ms,
            request.minor_ticks_ms,
        );
        let clock = wall_clock()?;
        let window = TimeWindow::resolve(
            request.period_secs,
            ticks,
            request.end_secs,
            clock.epoch_secs,
            clock.utc_offset_secs,
        );

        // Pre-flight: a missing backend must fail before any drawing starts.
        let names = self.catalog_names().await?;

        let page = self.pages.page(&request.report_name);
        let resolver = SeriesResolver::new(self.catalog.as_ref(), &names, self.server_index);

        tracing::debug!(
            "Preparing report {} with {} graphs over {}..{}",
            page.name,
            page.graphs.len(),
            window.start,
            window.end
        );

        let mut graphs = Vec::with_capacity(page.graphs.len());
        for graph in &page.graphs {
            graphs.push(resolver.resolve_graph(graph, &window).await);
        }

        Ok(PreparedReport {
            page_name: page.name,
            graph_size: page.graph_size,
            graphs,
            window,
            utc_offset_secs: clock.utc_offset_secs,
        })
    }
}

/// A report staged for drawing: the resolved window plus every graph's
/// fetched series. Plain data, so it can cross task boundaries freely.
#[derive(Debug)]
pub struct PreparedReport {
    page_name: String,
    graph_size: GraphSize,
    graphs: Vec<ResolvedGraph>,
    window: TimeWindow,
    utc_offset_secs: i64,
}

impl PreparedReport {
    /// Draws the staged report onto the supplied canvas and seals it.
    ///
    /// Graphs land two to a physical page in configured order; the header
    /// appears on the first page only, the footer on every page. A meter
    /// without data renders as an empty graph instead of failing, while a
    /// broken drawing surface abandons the report whole.
    pub fn render<C: ReportCanvas>(self, mut canvas: C) -> Result<RenderedReport, ReportError> {
        canvas.begin_page(PAGE_WIDTH, PAGE_HEIGHT);
        canvas.draw_header(
            &self.page_name,
            &end_label(self.window.end, self.utc_offset_secs),
        );
        canvas.draw_footer();

        let mut cursor = PageCursor::new();
        for resolved in &self.graphs {
            let placement = cursor.advance();
            if placement.turn_before {
                canvas.end_page();
                canvas.begin_page(PAGE_WIDTH, PAGE_HEIGHT);
                canvas.draw_footer();
            }

            render_graph(
                &mut canvas,
                resolved,
                &self.window,
                placement.position.origin(),
                self.graph_size,
                self.utc_offset_secs,
            );
        }
        canvas.end_page();

        let bytes = canvas.finalize()?;
        tracing::info!(
            "Report {} rendered on {} pages ({} bytes)",
            self.page_name,
            cursor.pages_opened(),
            bytes.len()
        );

        Ok(RenderedReport {
            page_name: self.page_name,
            bytes,
            status: "ok",
        })
    }
}

//! Application state owned by one authority, advanced by pure transitions.
//!
//! Every UI action is an [`Action`]; [`AppState::apply`] returns the next
//! state and never touches the previous one. Derived summaries and chart
//! geometry are recomputed from the state on demand.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::chart::{self, ChartGeometry, Viewport};
use crate::config::{Config, ConfigError};
use crate::core::services::{
    AggregateView, CategoryService, RangeSelector, SummaryService, TrendService, ViewFilter,
};
use crate::domain::{BudgetConfig, Category, SavingsGoal, TransactionDraft, TransactionKind};
use crate::errors::LedgerError;
use crate::ledger::Ledger;

/// Which main panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum View {
    #[default]
    List,
    Report,
}

/// Trend point under the pointer, for the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoveredPoint {
    pub index: usize,
    pub date: NaiveDate,
    pub value: f64,
}

/// Pie slice under the pointer, for the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HoveredSlice {
    pub category: Category,
    pub amount: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTransaction(TransactionDraft),
    DeleteTransaction(Uuid),
    ClearRecords,
    SetMonthlyLimit(f64),
    SetSavingsGoal { title: String, target: f64 },
    SetSearch(String),
    SetRange(RangeSelector),
    SetReportKind(TransactionKind),
    SetView(View),
    /// Pointer moved over the trend chart at `pointer_x` pixels.
    HoverTrend { pointer_x: f64, viewport: Viewport },
    /// Pointer moved over the drawn pie chart, in its `(-1, -1, 2, 2)` viewBox.
    HoverSlice { x: f64, y: f64 },
    ClearHover,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub ledger: Ledger,
    pub budget: BudgetConfig,
    pub goal: SavingsGoal,
    pub search: String,
    pub range: RangeSelector,
    pub report_kind: TransactionKind,
    pub view: View,
    pub hovered_point: Option<HoveredPoint>,
    pub hovered_slice: Option<HoveredSlice>,
}

impl AppState {
    /// Initial state seeded from user preferences.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            budget: config.budget()?,
            goal: config.goal()?,
            range: config.default_range,
            report_kind: config.default_report_kind,
            ..Self::default()
        })
    }

    pub fn with_ledger(mut self, ledger: Ledger) -> Self {
        self.ledger = ledger;
        self
    }

    /// Computes the state that follows `action`.
    ///
    /// A rejected action returns the error and leaves `self` as the current
    /// state.
    pub fn apply(&self, action: Action) -> Result<AppState, LedgerError> {
        let mut next = self.clone();
        match action {
            Action::AddTransaction(draft) => {
                let id = next.ledger.submit(draft).map_err(|err| {
                    warn!(error = %err, "entry rejected");
                    err
                })?;
                next.clear_hover();
                debug!(%id, count = next.ledger.len(), "entry recorded");
            }
            Action::DeleteTransaction(id) => {
                next.ledger.remove_transaction(id)?;
                next.clear_hover();
            }
            Action::ClearRecords => {
                next.ledger.clear();
                next.clear_hover();
            }
            Action::SetMonthlyLimit(limit) => {
                next.budget = BudgetConfig::new(limit)?;
            }
            Action::SetSavingsGoal { title, target } => {
                next.goal = SavingsGoal::new(title, target)?;
            }
            Action::SetSearch(search) => next.search = search,
            Action::SetRange(range) => next.range = range,
            Action::SetReportKind(kind) => {
                next.report_kind = kind;
                next.hovered_slice = None;
            }
            Action::SetView(view) => next.view = view,
            Action::HoverTrend {
                pointer_x,
                viewport,
            } => {
                next.hovered_point = next.locate_trend_point(pointer_x, &viewport);
            }
            Action::HoverSlice { x, y } => {
                next.hovered_slice = next.locate_pie_slice(x, y);
            }
            Action::ClearHover => next.clear_hover(),
        }
        Ok(next)
    }

    pub fn view_filter(&self) -> ViewFilter {
        ViewFilter {
            search: self.search.clone(),
            range: self.range,
            report_kind: self.report_kind,
        }
    }

    /// Summary, report and list data for this state.
    pub fn aggregate_view(&self, reference: DateTime<Utc>) -> AggregateView {
        SummaryService::aggregate(
            self.ledger.transactions(),
            &self.budget,
            &self.goal,
            &self.view_filter(),
            reference,
        )
    }

    /// Trend curve and pie slices for the selected report kind.
    pub fn chart_geometry(&self, viewport: &Viewport) -> ChartGeometry {
        let transactions = self.ledger.transactions();
        let series = TrendService::cumulative_series(transactions);
        let breakdown = CategoryService::breakdown(transactions, self.report_kind);
        let total = SummaryService::totals(transactions).for_kind(self.report_kind);
        ChartGeometry::build(&series, &breakdown, total, viewport)
    }

    fn locate_trend_point(&self, pointer_x: f64, viewport: &Viewport) -> Option<HoveredPoint> {
        let series = TrendService::cumulative_series(self.ledger.transactions());
        let index =
            chart::locate_nearest_index(pointer_x, viewport.width, viewport.padding, series.len())?;
        series.get(index).map(|point| HoveredPoint {
            index,
            date: point.date,
            value: point.value,
        })
    }

    fn locate_pie_slice(&self, x: f64, y: f64) -> Option<HoveredSlice> {
        let transactions = self.ledger.transactions();
        let breakdown = CategoryService::breakdown(transactions, self.report_kind);
        let total = SummaryService::totals(transactions).for_kind(self.report_kind);
        let slices = chart::build_pie_slices(&breakdown, total);
        let (x, y) = chart::unrotate_display_point(x, y);
        let index = chart::locate_slice(&slices, x, y)?;
        slices.get(index).map(|slice| HoveredSlice {
            category: slice.category,
            amount: slice.amount,
            percent: slice.percent(),
        })
    }

    fn clear_hover(&mut self) {
        self.hovered_point = None;
        self.hovered_slice = None;
    }
}

mod common;

use common::{date, reference, sample_ledger};
use spendwise_core::{
    chart::{SliceShape, Viewport},
    config::Config,
    core::services::RangeSelector,
    domain::{Category, TransactionDraft, TransactionKind},
    errors::LedgerError,
    state::{Action, AppState, View},
};

fn seeded_state() -> AppState {
    AppState::from_config(&Config::default())
        .expect("default config is valid")
        .with_ledger(sample_ledger())
}

#[test]
fn submitted_entry_lands_first_and_moves_totals() {
    let state = seeded_state();
    let draft = TransactionDraft::new(
        "  Coffee ",
        "120.50",
        Category::Food,
        TransactionKind::Expense,
        date(2024, 1, 31),
    );
    let next = state.apply(Action::AddTransaction(draft)).expect("valid draft");

    let first = &next.ledger.transactions()[0];
    assert_eq!(first.title, "Coffee");
    assert_eq!(first.amount, 120.5);
    let view = next.aggregate_view(reference());
    assert_eq!(view.total_expense, 18120.5);
    assert_eq!(state.aggregate_view(reference()).total_expense, 18000.0);
}

#[test]
fn invalid_drafts_never_enter_the_ledger() {
    let state = seeded_state();
    for (title, amount) in [("", "10"), ("Snack", "abc"), ("Snack", "-4"), ("Snack", "0")] {
        let draft = TransactionDraft::new(
            title,
            amount,
            Category::Food,
            TransactionKind::Expense,
            date(2024, 1, 31),
        );
        assert!(state.apply(Action::AddTransaction(draft)).is_err());
    }
    assert_eq!(state.ledger.len(), 7);
}

#[test]
fn delete_and_clear_remove_records() {
    let state = seeded_state();
    let id = state.ledger.transactions()[0].id;
    let next = state.apply(Action::DeleteTransaction(id)).unwrap();
    assert_eq!(next.ledger.len(), 6);
    assert!(next.ledger.transaction(id).is_none());

    assert!(matches!(
        next.apply(Action::DeleteTransaction(id)),
        Err(LedgerError::TransactionNotFound(missing)) if missing == id
    ));

    let cleared = next.apply(Action::ClearRecords).unwrap();
    assert!(cleared.ledger.is_empty());
    let view = cleared.aggregate_view(reference());
    assert_eq!(view.total_income, 0.0);
    assert!(view.cumulative_series.is_empty());
}

#[test]
fn filters_flow_into_the_aggregate_view() {
    let state = seeded_state()
        .apply(Action::SetRange(RangeSelector::Last7Days))
        .unwrap()
        .apply(Action::SetSearch("metro".into()))
        .unwrap()
        .apply(Action::SetView(View::Report))
        .unwrap();
    let view = state.aggregate_view(reference());
    assert_eq!(view.visible.len(), 1);
    assert_eq!(view.visible[0].title, "Metro card");
    // totals ignore list filters
    assert_eq!(view.total_expense, 18000.0);
    assert_eq!(state.view, View::Report);
}

#[test]
fn budget_warning_trips_above_ninety_percent() {
    let state = seeded_state()
        .apply(Action::SetMonthlyLimit(19000.0))
        .unwrap();
    let view = state.aggregate_view(reference());
    assert!(view.budget_warning);
    assert_eq!(view.budget_remaining, 1000.0);
    assert!(state.apply(Action::SetMonthlyLimit(f64::NAN)).is_err());
}

#[test]
fn report_kind_switches_pie_and_clears_slice_hover() {
    let state = seeded_state()
        .apply(Action::SetReportKind(TransactionKind::Income))
        .unwrap();
    let geometry = state.chart_geometry(&Viewport::default());
    assert_eq!(geometry.pie_slices.len(), 2);
    assert_eq!(geometry.pie_slices[0].category, Category::Salary);

    // Salary covers the first 60000 / 68000 of the turn, clockwise from the top
    let hovered = state.apply(Action::HoverSlice { x: 0.5, y: 0.1 }).unwrap();
    let slice = hovered.hovered_slice.expect("slice under pointer");
    assert_eq!(slice.category, Category::Salary);
    assert_eq!(slice.amount, 60000.0);
    assert!((slice.percent - 60000.0 / 68000.0 * 100.0).abs() < 1e-9);

    // just left of 12 o'clock is the tail of the turn
    let tail = state.apply(Action::HoverSlice { x: -0.1, y: -0.8 }).unwrap();
    assert_eq!(tail.hovered_slice.map(|slice| slice.category), Some(Category::Other));
    let outside = state.apply(Action::HoverSlice { x: 2.0, y: 0.0 }).unwrap();
    assert_eq!(outside.hovered_slice, None);

    let switched = hovered
        .apply(Action::SetReportKind(TransactionKind::Expense))
        .unwrap();
    assert_eq!(switched.hovered_slice, None);
    assert!(matches!(
        switched.chart_geometry(&Viewport::default()).pie_slices[0].shape,
        SliceShape::Sector { .. }
    ));
}

#[test]
fn trend_geometry_has_one_anchor_per_date() {
    let state = seeded_state();
    let geometry = state.chart_geometry(&Viewport::default());
    assert_eq!(geometry.trend_path.anchors().len(), 6);

    let hovered = state
        .apply(Action::HoverTrend {
            pointer_x: 40.0,
            viewport: Viewport::default(),
        })
        .unwrap();
    let point = hovered.hovered_point.expect("leftmost point");
    assert_eq!(point.index, 0);
    assert_eq!(point.date, date(2024, 1, 1));
    assert_eq!(point.value, -59600.0);
}

#[test]
fn ledger_edits_drop_hover_state() {
    let state = seeded_state();
    let id = state.ledger.transactions()[0].id;
    let hovered = state
        .apply(Action::HoverTrend {
            pointer_x: 40.0,
            viewport: Viewport::default(),
        })
        .unwrap()
        .apply(Action::HoverSlice { x: 0.1, y: -0.5 })
        .unwrap();
    assert!(hovered.hovered_point.is_some());
    assert!(hovered.hovered_slice.is_some());

    let deleted = hovered.apply(Action::DeleteTransaction(id)).unwrap();
    assert_eq!(deleted.hovered_point, None);
    assert_eq!(deleted.hovered_slice, None);

    let cleared = hovered.apply(Action::ClearRecords).unwrap();
    assert_eq!(cleared.hovered_point, None);
    assert_eq!(cleared.hovered_slice, None);
}

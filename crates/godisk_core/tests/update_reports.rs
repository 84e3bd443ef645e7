use godisk_core::{update, AppState, CatalogStatus, Effect, Msg, RequestId, Severity};
use pretty_assertions::assert_eq;

fn init_logging() {
    console_logging::initialize_for_tests();
}

fn request_id(effects: &[Effect]) -> RequestId {
    match effects {
        [Effect::RefreshReports { request_id }] => *request_id,
        other => panic!("expected a single refresh effect, got {other:?}"),
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn opening_the_browser_starts_loading() {
    init_logging();
    let state = AppState::new();
    assert_eq!(state.catalog().status(), &CatalogStatus::Idle);

    let (state, effects) = update(state, Msg::ReportsOpened);
    request_id(&effects);
    assert!(state.view().reports_open);
    assert_eq!(state.catalog().status(), &CatalogStatus::Loading);
}

#[test]
fn successful_list_preserves_engine_order() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ReportsOpened);
    let (state, effects) = update(
        state,
        Msg::ReportListLoaded {
            request_id: request_id(&effects),
            result: Ok(names(&["mbr1.jpg", "tree1.jpg"])),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.catalog().status(),
        &CatalogStatus::Ready(names(&["mbr1.jpg", "tree1.jpg"]))
    );
    assert_eq!(state.catalog().entries(), ["mbr1.jpg", "tree1.jpg"]);
}

#[test]
fn empty_list_is_ready_not_failed() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ReportsOpened);
    let (state, _) = update(
        state,
        Msg::ReportListLoaded {
            request_id: request_id(&effects),
            result: Ok(Vec::new()),
        },
    );

    assert_eq!(state.catalog().status(), &CatalogStatus::Ready(Vec::new()));
    assert!(state.view().notice.is_none());
}

#[test]
fn failed_list_clears_entries_and_does_not_retry() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ReportsOpened);
    let (state, _) = update(
        state,
        Msg::ReportListLoaded {
            request_id: request_id(&effects),
            result: Ok(names(&["mbr1.jpg"])),
        },
    );

    let (state, effects) = update(state, Msg::ReportsRefreshClicked);
    let (state, effects) = update(
        state,
        Msg::ReportListLoaded {
            request_id: request_id(&effects),
            result: Err("network error".into()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(
        state.catalog().status(),
        &CatalogStatus::Failed("network error".into())
    );
    assert!(state.catalog().entries().is_empty());
    let notice = state.view().notice.expect("failure notice");
    assert_eq!(notice.severity, Severity::Error);
}

#[test]
fn stale_list_does_not_override_newer_refresh() {
    init_logging();
    let (state, first) = update(AppState::new(), Msg::ReportsOpened);
    let (state, second) = update(state, Msg::ReportsRefreshClicked);

    let (state, _) = update(
        state,
        Msg::ReportListLoaded {
            request_id: request_id(&first),
            result: Err("old failure".into()),
        },
    );
    assert_eq!(state.catalog().status(), &CatalogStatus::Loading);
    assert!(state.view().notice.is_none());

    let (state, _) = update(
        state,
        Msg::ReportListLoaded {
            request_id: request_id(&second),
            result: Ok(names(&["disk.jpg"])),
        },
    );
    assert_eq!(state.catalog().entries(), ["disk.jpg"]);
}

#[test]
fn closing_keeps_catalog() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::ReportsOpened);
    let (state, _) = update(
        state,
        Msg::ReportListLoaded {
            request_id: request_id(&effects),
            result: Ok(names(&["sb.jpg"])),
        },
    );
    let (state, effects) = update(state, Msg::ReportsClosed);

    assert!(effects.is_empty());
    assert!(!state.view().reports_open);
    assert_eq!(state.catalog().entries(), ["sb.jpg"]);
}

#[test]
fn view_and_download_requests_become_effects() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::ReportViewRequested {
            filename: "mbr1.jpg".into(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::OpenReport {
            filename: "mbr1.jpg".into()
        }]
    );

    let (state, effects) = update(
        state,
        Msg::ReportDownloadRequested {
            filename: "tree1.jpg".into(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DownloadReport {
            filename: "tree1.jpg".into()
        }]
    );

    let (state, _) = update(
        state,
        Msg::ReportDownloadFinished {
            filename: "tree1.jpg".into(),
            result: Err("http status 404".into()),
        },
    );
    let notice = state.view().notice.expect("notice");
    assert_eq!(notice.severity, Severity::Error);
    assert!(notice.text.contains("tree1.jpg"));
    assert!(state.transcript().is_empty());
}

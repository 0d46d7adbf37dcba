use eventos_portal::routes::{RouteDef, RouteParams, RouteTable, app_routes};
use eventos_portal::views::View;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn resolves_root_path() {
    let table = app_routes();
    let resolved = table.resolve("/").expect("root must resolve");
    assert_eq!(resolved.route.name(), "home");
    assert!(resolved.params.is_empty());
}

#[test]
fn binds_event_id_as_string() {
    let table = app_routes();
    let resolved = table.resolve("/events/42").expect("event detail must resolve");
    assert_eq!(resolved.route.name(), "event-detail");
    assert_eq!(resolved.params.get("id").map(String::as_str), Some("42"));
}

#[test]
fn literal_segment_shadows_parameter() {
    // "/events/new" is declared before "/events/:id"; first match must win,
    // so "new" never binds as an event id.
    let table = app_routes();
    let resolved = table.resolve("/events/new").expect("create event must resolve");
    assert_eq!(resolved.route.name(), "create-event");
    assert!(resolved.params.is_empty());
}

#[test]
fn trailing_slash_is_equivalent() {
    let table = app_routes();
    let resolved = table.resolve("/events/").expect("trailing slash must resolve");
    assert_eq!(resolved.route.name(), "events");
}

#[test]
fn binds_param_in_nested_route() {
    let table = app_routes();
    let resolved = table
        .resolve("/events/7/manage-schedule")
        .expect("manage schedule must resolve");
    assert_eq!(resolved.route.name(), "manage-schedule");
    assert_eq!(resolved.params.get("id").map(String::as_str), Some("7"));
}

#[test]
fn unknown_paths_resolve_to_none() {
    let table = app_routes();
    assert!(table.resolve("/does-not-exist").is_none());
    // Segment count is exact: extra segments never match a shorter pattern.
    assert!(table.resolve("/events/1/2/3").is_none());
    assert!(table.resolve("/dashboard/extra").is_none());
}

#[test]
fn access_flags_match_the_application_table() {
    let table = app_routes();

    let guarded = [
        "/dashboard",
        "/events/new",
        "/events/1/submit",
        "/events/1/manage-schedule",
        "/events/1/edit",
        "/my-inscriptions",
        "/my-submissions",
        "/my-organized-events",
    ];
    for path in guarded {
        let resolved = table.resolve(path).expect(path);
        assert!(resolved.route.requires_auth(), "{path} must be guarded");
    }

    let public = [
        "/",
        "/login",
        "/register",
        "/events",
        "/events/1",
        "/termos-de-uso",
        "/politica-de-privacidade",
    ];
    for path in public {
        let resolved = table.resolve(path).expect(path);
        assert!(!resolved.route.requires_auth(), "{path} must be public");
    }
}

// --- Lazy view loading ---

static LOADS: AtomicUsize = AtomicUsize::new(0);

struct CountedView;

impl View for CountedView {
    fn render(&self, _params: &RouteParams) -> String {
        "counted".to_string()
    }
}

fn counted_loader() -> Box<dyn View> {
    LOADS.fetch_add(1, Ordering::SeqCst);
    Box::new(CountedView)
}

#[test]
fn view_loader_runs_once_on_first_navigation() {
    let table = RouteTable::new(vec![RouteDef::public("/once", "once", counted_loader)]);

    // Declaring the route must not construct the view.
    assert_eq!(LOADS.load(Ordering::SeqCst), 0);

    let resolved = table.resolve("/once").expect("route must resolve");
    resolved.route.view().render(&RouteParams::new());
    resolved.route.view().render(&RouteParams::new());

    assert_eq!(LOADS.load(Ordering::SeqCst), 1);
}

use super::table::{RouteDef, RouteTable};
use crate::views;

/// app_routes
///
/// The complete route table of the event-management portal. Declaration order
/// is load-bearing: `/events/new` must precede `/events/:id`, otherwise the
/// literal segment would bind as an event id.
///
/// Routes without the guard flag are reachable anonymously; guarded routes
/// re-verify the session on every navigation.
pub fn app_routes() -> RouteTable {
    RouteTable::new(vec![
        // Landing page.
        RouteDef::public("/", "home", views::home),
        // Session entry points.
        RouteDef::public("/login", "login", views::login),
        RouteDef::public("/register", "register", views::register),
        // Per-user overview of inscriptions, submissions and organized events.
        RouteDef::guarded("/dashboard", "dashboard", views::dashboard),
        // Public event catalogue.
        RouteDef::public("/events", "events", views::events),
        // Event creation, declared before the `:id` routes so "new" is never
        // captured as an event id.
        RouteDef::guarded("/events/new", "create-event", views::create_event),
        // Public detail page for a single event; `id` binds into the view.
        RouteDef::public("/events/:id", "event-detail", views::event_detail),
        // Talk/proposal submission for an event.
        RouteDef::guarded("/events/:id/submit", "submission-form", views::submission_form),
        // Organizer tooling for a single event.
        RouteDef::guarded(
            "/events/:id/manage-schedule",
            "manage-schedule",
            views::manage_schedule,
        ),
        RouteDef::guarded("/events/:id/edit", "edit-event", views::edit_event),
        // Per-user listings.
        RouteDef::guarded("/my-inscriptions", "my-inscriptions", views::my_inscriptions),
        RouteDef::guarded("/my-submissions", "my-submissions", views::my_submissions),
        RouteDef::guarded(
            "/my-organized-events",
            "my-organized-events",
            views::my_organized_events,
        ),
        // Legal pages.
        RouteDef::public("/termos-de-uso", "terms-of-use", views::terms_of_use),
        RouteDef::public(
            "/politica-de-privacidade",
            "privacy-policy",
            views::privacy_policy,
        ),
    ])
}

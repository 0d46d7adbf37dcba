/// Router Module Index
///
/// Organizes the portal's routing logic: the generic route-table machinery
/// (descriptor records, pattern matching, parameter binding) and the concrete
/// application table.
///
/// Access control is declared per route via the `requires_auth` flag rather
/// than per module, because matching is ordered and first-match-wins: a
/// guarded literal route (`/events/new`) must be able to precede a public
/// parameterized one (`/events/:id`) in the same list.

/// Route descriptors, the ordered table, and path-pattern matching.
pub mod table;

/// The concrete route table of the event-management application.
pub mod app;

pub use app::app_routes;
pub use table::{ResolvedRoute, RouteDef, RouteParams, RouteTable};

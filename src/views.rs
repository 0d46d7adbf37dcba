use crate::routes::RouteParams;

/// View
///
/// The rendering contract for every page the portal serves. A view receives
/// the parameters bound from the request path and produces a complete HTML
/// document. The visual design of the pages lives elsewhere; these shells
/// only carry the page identity and its bound parameters.
pub trait View: Send + Sync {
    fn render(&self, params: &RouteParams) -> String;
}

/// ViewFactory
///
/// An on-demand loader for a route's view. The route table calls the factory
/// on the first navigation that reaches the route and caches the result, so
/// pages that are never visited are never constructed.
pub type ViewFactory = fn() -> Box<dyn View>;

/// Page
///
/// The generic page shell. Bound path parameters are exposed as
/// `data-param-*` attributes on the page root so the client-side layer can
/// pick them up.
struct Page {
    title: &'static str,
}

impl View for Page {
    fn render(&self, params: &RouteParams) -> String {
        // Sorted for deterministic output.
        let mut pairs: Vec<_> = params.iter().collect();
        pairs.sort();

        let mut attrs = String::new();
        for (key, value) in pairs {
            attrs.push_str(&format!(" data-param-{}=\"{}\"", key, escape(value)));
        }

        format!(
            "<!doctype html>\n<html lang=\"pt-BR\">\n<head><meta charset=\"utf-8\"><title>{title} · Eventos</title></head>\n<body>\n<main id=\"app\"{attrs}>\n<h1>{title}</h1>\n</main>\n</body>\n</html>\n",
            title = escape(self.title),
            attrs = attrs,
        )
    }
}

/// escape
///
/// Minimal HTML escaping for text and attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// --- Loaders ---
// One factory per route, mirroring the application's page set.

pub fn home() -> Box<dyn View> {
    Box::new(Page { title: "Home" })
}

pub fn login() -> Box<dyn View> {
    Box::new(Page { title: "Login" })
}

pub fn register() -> Box<dyn View> {
    Box::new(Page { title: "Register" })
}

pub fn dashboard() -> Box<dyn View> {
    Box::new(Page { title: "Dashboard" })
}

pub fn events() -> Box<dyn View> {
    Box::new(Page { title: "Events" })
}

pub fn create_event() -> Box<dyn View> {
    Box::new(Page { title: "Create Event" })
}

pub fn event_detail() -> Box<dyn View> {
    Box::new(Page { title: "Event Detail" })
}

pub fn submission_form() -> Box<dyn View> {
    Box::new(Page { title: "Submission Form" })
}

pub fn manage_schedule() -> Box<dyn View> {
    Box::new(Page { title: "Manage Schedule" })
}

pub fn edit_event() -> Box<dyn View> {
    Box::new(Page { title: "Edit Event" })
}

pub fn my_inscriptions() -> Box<dyn View> {
    Box::new(Page { title: "My Inscriptions" })
}

pub fn my_submissions() -> Box<dyn View> {
    Box::new(Page { title: "My Submissions" })
}

pub fn my_organized_events() -> Box<dyn View> {
    Box::new(Page { title: "My Organized Events" })
}

pub fn terms_of_use() -> Box<dyn View> {
    Box::new(Page { title: "Termos de Uso" })
}

pub fn privacy_policy() -> Box<dyn View> {
    Box::new(Page { title: "Política de Privacidade" })
}

/// Served for paths no route matches.
pub fn not_found() -> Box<dyn View> {
    Box::new(Page {
        title: "Page Not Found",
    })
}

//! HTML page templates.
//!
//! Every page shares one layout: a header with the brand and category links,
//! the page body, and a footer. Styling lives in `assets/style.css`; syntax
//! highlighting is done client-side by Prism loaded from a CDN.

use std::fmt::Write;

use cdocs_renderer::escape_html;

use crate::index::{DocDescriptor, DocRef, Navigation};
use crate::site::{HighlightConfig, SiteConfig};

/// Route of the embedded stylesheet.
pub const STYLESHEET_PATH: &str = "/assets/style.css";

/// Stylesheet served at [`STYLESHEET_PATH`].
pub const STYLESHEET: &str = include_str!("../assets/style.css");

const TAGLINE: &str = "A comprehensive collection of frontend development concepts, \
                       from basic JavaScript methods to advanced React patterns.";

const ICON_PREV: &str = "M15 19l-7-7 7-7";
const ICON_NEXT: &str = "M9 5l7 7-7 7";
const ICON_ARROW: &str = "M13 7l5 5m0 0l-5 5m5-5H6";
const ICON_CHECK: &str = "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z";
const ICON_BOLT: &str = "M13 10V3L4 14h7v7l9-11h-7z";
const ICON_BOOK: &str = "M12 6.253v13m0-13C10.832 5.477 9.246 5 7.5 5S4.168 5.477 3 6.253v13C4.168 \
                         18.477 5.754 18 7.5 18s3.332.477 4.5 1.253m0-13C13.168 5.477 14.754 5 16.5 \
                         5c1.747 0 3.332.477 4.5 1.253v13C19.832 18.477 18.247 18 16.5 18c-1.746 0-3.332.477-4.5 1.253";

/// Landing page feature cards: (icon, heading, text).
const FEATURES: [(&str, &str, &str); 3] = [
    (
        ICON_CHECK,
        "Basic Concepts",
        "Core JavaScript methods and fundamental programming concepts",
    ),
    (
        ICON_BOLT,
        "Advanced Patterns",
        "Complex React patterns and modern frontend techniques",
    ),
    (
        ICON_BOOK,
        "Comprehensive",
        "Detailed explanations with practical examples and use cases",
    ),
];

/// Values shared by every page of one render.
pub(crate) struct Chrome<'a> {
    pub site: &'a SiteConfig,
    /// First document of each non-empty category, in category order.
    pub category_links: &'a [DocDescriptor],
    /// Year shown in the footer.
    pub year: i32,
}

/// Render a document page: article plus prev/next strip.
pub(crate) fn render_doc_page(
    chrome: &Chrome<'_>,
    title: &str,
    description: Option<&str>,
    article_html: &str,
    navigation: &Navigation,
) -> String {
    let mut body = String::with_capacity(article_html.len() + 1024);
    body.push_str("<div class=\"doc-container\">\n");
    body.push_str("<article class=\"prose\">\n");
    body.push_str(article_html);
    body.push_str("\n</article>\n");
    render_doc_navigation(&mut body, navigation);
    body.push_str("</div>\n");

    let page_title = format!("{title} - {}", documentation_title(chrome.site));
    render_layout(chrome, &page_title, description, &body)
}

/// Render the landing page.
///
/// The "Get Started" link is omitted when there is no document to start from.
pub(crate) fn render_home(chrome: &Chrome<'_>, get_started: Option<&DocDescriptor>) -> String {
    let mut body = String::with_capacity(4096);

    body.push_str("<section class=\"hero\">\n<div class=\"hero-inner\">\n");
    let _ = writeln!(body, "<h1 class=\"hero-title\">{}</h1>", escape_html(&chrome.site.title));
    let _ = writeln!(body, "<p class=\"hero-tagline\">{TAGLINE}</p>");
    if let Some(doc) = get_started {
        let _ = writeln!(
            body,
            "<a href=\"{}\" class=\"button\">Get Started{}</a>",
            escape_html(&doc.href()),
            icon("button-icon", ICON_ARROW),
        );
    }
    body.push_str("</div>\n</section>\n");

    body.push_str("<section class=\"features\">\n<div class=\"features-grid\">\n");
    for (path, heading, text) in FEATURES {
        body.push_str("<div class=\"feature\">\n");
        let _ = writeln!(
            body,
            "<div class=\"feature-icon\">{}</div>",
            icon("feature-svg", path)
        );
        let _ = writeln!(body, "<h3 class=\"feature-title\">{heading}</h3>");
        let _ = writeln!(body, "<p class=\"feature-text\">{text}</p>");
        body.push_str("</div>\n");
    }
    body.push_str("</div>\n</section>\n");

    render_layout(chrome, &documentation_title(chrome.site), None, &body)
}

/// Render a page holding a single error message.
pub(crate) fn render_message_page(chrome: &Chrome<'_>, message: &str) -> String {
    let mut body = String::with_capacity(512);
    body.push_str("<div class=\"doc-container\">\n<div class=\"doc-error\">\n");
    let _ = writeln!(body, "<p>{}</p>", escape_html(message));
    body.push_str("</div>\n</div>\n");

    let page_title = format!("{message} - {}", documentation_title(chrome.site));
    render_layout(chrome, &page_title, None, &body)
}

fn documentation_title(site: &SiteConfig) -> String {
    format!("{} Documentation", site.title)
}

/// Wrap a page body in the shared layout.
fn render_layout(
    chrome: &Chrome<'_>,
    page_title: &str,
    description: Option<&str>,
    body: &str,
) -> String {
    let site = chrome.site;
    let mut html = String::with_capacity(body.len() + 2048);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(page_title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        escape_html(description.unwrap_or(&site.description))
    );
    let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{STYLESHEET_PATH}\">");
    if site.highlight.enabled {
        let _ = writeln!(
            html,
            "<link rel=\"stylesheet\" href=\"{}/themes/prism.min.css\">",
            escape_html(cdn_base(&site.highlight))
        );
    }
    html.push_str("</head>\n<body>\n<div class=\"page\">\n");

    render_header(&mut html, chrome);

    html.push_str("<main class=\"main\">\n");
    html.push_str(body);
    html.push_str("</main>\n");

    html.push_str("<footer class=\"site-footer\">\n");
    let _ = writeln!(
        html,
        "<p>{} &copy; {}</p>",
        escape_html(&documentation_title(site)),
        chrome.year
    );
    html.push_str("</footer>\n</div>\n");

    if site.highlight.enabled {
        render_highlight_scripts(&mut html, &site.highlight);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(html: &mut String, chrome: &Chrome<'_>) {
    html.push_str("<header class=\"site-header\">\n<div class=\"header-inner\">\n");
    let _ = writeln!(
        html,
        "<a href=\"/\" class=\"brand\">{}</a>",
        escape_html(&chrome.site.brand)
    );
    html.push_str("<nav class=\"header-nav\">\n");
    for doc in chrome.category_links {
        let _ = writeln!(
            html,
            "<a href=\"{}\">{}</a>",
            escape_html(&doc.href()),
            doc.category.label()
        );
    }
    html.push_str("</nav>\n</div>\n</header>\n");
}

/// Prev/next strip. A missing neighbour keeps its slot with an empty `<div>`.
fn render_doc_navigation(html: &mut String, navigation: &Navigation) {
    html.push_str("<nav class=\"doc-nav\">\n");
    match &navigation.prev {
        Some(prev) => render_nav_link(html, prev, "doc-nav-prev", true),
        None => html.push_str("<div></div>\n"),
    }
    match &navigation.next {
        Some(next) => render_nav_link(html, next, "doc-nav-next", false),
        None => html.push_str("<div></div>\n"),
    }
    html.push_str("</nav>\n");
}

fn render_nav_link(html: &mut String, doc: &DocRef, class: &str, is_prev: bool) {
    let title = escape_html(&doc.title);
    let (before, after) = if is_prev {
        (icon("doc-nav-icon", ICON_PREV), String::new())
    } else {
        (String::new(), icon("doc-nav-icon", ICON_NEXT))
    };
    let _ = writeln!(
        html,
        "<a href=\"{}\" class=\"doc-nav-link {class}\">{before}{title}{after}</a>",
        escape_html(&doc.href()),
    );
}

fn render_highlight_scripts(html: &mut String, highlight: &HighlightConfig) {
    let base = escape_html(cdn_base(highlight));
    let _ = writeln!(html, "<script src=\"{base}/prism.min.js\"></script>");
    for language in &highlight.languages {
        let _ = writeln!(
            html,
            "<script src=\"{base}/components/prism-{}.min.js\"></script>",
            escape_html(language)
        );
    }
}

fn cdn_base(highlight: &HighlightConfig) -> &str {
    highlight.cdn_url.trim_end_matches('/')
}

/// Inline stroke icon.
fn icon(class: &str, path: &str) -> String {
    format!(
        "<svg class=\"{class}\" fill=\"none\" stroke=\"currentColor\" viewBox=\"0 0 24 24\">\
         <path stroke-linecap=\"round\" stroke-linejoin=\"round\" stroke-width=\"2\" d=\"{path}\"/></svg>"
    )
}

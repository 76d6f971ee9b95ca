//! HTML pages served by the web front end.
//!
//! Templates are compiled into the binary; `{name}`-style placeholders are
//! substituted with escaped values.

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const HELLO_TEMPLATE: &str = include_str!("../templates/hello.html");

/// Index page with the lookup and greeting forms.
pub fn render_index() -> String {
    INDEX_TEMPLATE.to_string()
}

/// Greeting page for `name`.
pub fn render_hello(name: &str) -> String {
    HELLO_TEMPLATE.replace("{name}", &html_escape(name))
}

fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

//! Admin widget page
//!
//! A single HTML panel with two buttons that call the trigger routes for one
//! product and print the JSON they return.

use axum::extract::Path;
use axum::response::Html;

const TEMPLATE: &str = include_str!("widget.html");

/// GET /admin/products/{id}/widget
pub async fn page(Path(id): Path<String>) -> Html<String> {
    Html(render(&id))
}

/// Render the widget for `product_id`
pub fn render(product_id: &str) -> String {
    TEMPLATE.replace("{{product_id}}", &escape_html(product_id))
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_embeds_product_id() {
        let html = render("prod_ABC");
        assert!(html.contains(r#"data-product-id="prod_ABC""#));
        assert!(!html.contains("{{product_id}}"));
        assert!(html.contains("Trigger update workflow"));
        assert!(html.contains("Query product"));
    }

    #[test]
    fn test_render_escapes() {
        let html = render(r#"x"><script>alert(1)</script>"#);
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&quot;&gt;&lt;script&gt;"));
    }
}

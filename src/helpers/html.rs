//! HTML fragment builders

use crate::config::CreditsConfig;

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate a span, optionally with a class
///
/// # Examples
/// ```ignore
/// span("Hello", Some("lead")) // -> <span class="lead">Hello</span>
/// ```
pub fn span(text: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(
            r#"<span class="{}">{}</span>"#,
            html_escape(class),
            html_escape(text)
        ),
        None => format!("<span>{}</span>", html_escape(text)),
    }
}

/// Generate an anchor tag
///
/// # Examples
/// ```ignore
/// link_to("#about", "About", true) // -> <a href="#about" class="active">About</a>
/// ```
pub fn link_to(href: &str, text: &str, active: bool) -> String {
    let class = if active { r#" class="active""# } else { "" };
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        html_escape(href),
        class,
        html_escape(text)
    )
}

/// Navigation menu entry
pub fn nav_item(href: &str, text: &str, active: bool) -> String {
    format!("<li>{}</li>", link_to(href, text, active))
}

/// Headline followed by a highlighted span
///
/// # Examples
/// ```ignore
/// headline("Welcome to", "BizLand") // -> Welcome to <span>BizLand</span>
/// ```
pub fn headline(title: &str, highlight: &str) -> String {
    format!("{} {}", html_escape(title), span(highlight, None))
}

/// Section subtitle: plain part and highlighted description title
pub fn section_subtitle(subtitle: &str, highlight: &str) -> String {
    format!(
        "{} {}",
        span(subtitle, None),
        span(highlight, Some("description-title"))
    )
}

/// Price with currency superscript and billing period
///
/// # Examples
/// ```ignore
/// price_tag("29", "month") // -> <sup>$</sup>29<span> / month</span>
/// ```
pub fn price_tag(price: &str, period: &str) -> String {
    format!(
        "<sup>$</sup>{}<span> / {}</span>",
        html_escape(price),
        html_escape(period)
    )
}

/// Footer copyright line
pub fn copyright_line(text: &str, company: &str, rights: &str) -> String {
    format!(
        r#"© {} <strong class="px-1 sitename">{}</strong> {}"#,
        span(text, None),
        html_escape(company),
        span(rights, None)
    )
}

/// Footer credits line
pub fn credits_line(credits: &CreditsConfig) -> String {
    format!(
        r#"{} <a href="{}">{}</a>"#,
        html_escape(&credits.text),
        html_escape(&credits.url),
        html_escape(&credits.name)
    )
}

/// Bootstrap icon class list: `bi`, the icon name, then any extra classes
///
/// # Examples
/// ```ignore
/// icon_class("bi-activity", Some("icon")) // -> bi bi-activity icon
/// ```
pub fn icon_class(icon: &str, extra: Option<&str>) -> String {
    ["bi", icon.trim(), extra.unwrap_or("")]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Badge prepended to advanced pricing plans
pub fn badge(label: &str) -> String {
    span(label, Some("advanced"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_link_to() {
        assert_eq!(link_to("#hero", "Home", true), r##"<a href="#hero" class="active">Home</a>"##);
        assert_eq!(link_to("#about", "About", false), r##"<a href="#about">About</a>"##);
    }

    #[test]
    fn test_section_subtitle() {
        assert_eq!(
            section_subtitle("Check our", "Services"),
            r#"<span>Check our</span> <span class="description-title">Services</span>"#
        );
    }

    #[test]
    fn test_price_tag() {
        assert_eq!(price_tag("29", "month"), "<sup>$</sup>29<span> / month</span>");
    }

    #[test]
    fn test_headline_escapes_content() {
        assert_eq!(headline("A < B", "C"), "A &lt; B <span>C</span>");
    }

    #[test]
    fn test_icon_class() {
        assert_eq!(icon_class("bi-activity", Some("icon")), "bi bi-activity icon");
        assert_eq!(icon_class("bi-cart", None), "bi bi-cart");
        assert_eq!(icon_class("", None), "bi");
    }

    #[test]
    fn test_credits_line() {
        let credits = CreditsConfig::default();
        assert_eq!(
            credits_line(&credits),
            r#"Designed by <a href="https://bootstrapmade.com/">BootstrapMade</a>"#
        );
    }
}

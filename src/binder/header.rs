//! Page head, header navigation and hero banner

use kuchikiki::NodeRef;

use super::fields::Fields;
use super::report::SectionReport;
use super::section;
use crate::content::{Hero, Navigation, SiteInfo};
use crate::dom::{self, Document};
use crate::helpers;

/// Title, meta tags, header contact details and every `.sitename`
pub(super) fn site_info(document: &Document, site: &SiteInfo) -> SectionReport {
    let root = document.root();
    let mut fields = Fields::new(section::SITE);

    if document.set_title(&format!("{} - {}", site.title, site.description)) {
        fields.touch();
    }

    fields.attr(
        root,
        r#"meta[name="description"]"#,
        "content",
        &site.description,
    );
    fields.attr(root, r#"meta[name="keywords"]"#, "content", &site.keywords);

    if let Some(email) = dom::find(root, r#".contact-info a[href^="mailto:"]"#) {
        fields.set_attr(&email, "href", &format!("mailto:{}", site.contact.email));
        fields.set_text(&email, &site.contact.email);
    }
    fields.text(root, ".contact-info span", &site.contact.phone);

    for node in dom::find_all(root, ".sitename") {
        fields.set_text(&node, &site.title);
    }

    fields.finish()
}

/// Rebuild the menu. Every `li` that is not a dropdown goes, including the
/// entries nested inside dropdowns.
pub(super) fn navigation(root: &NodeRef, nav: &Navigation) -> SectionReport {
    let mut fields = Fields::new(section::NAVIGATION);
    let Some(menu) = dom::find(root, "#navmenu ul") else {
        return fields.finish();
    };

    for item in dom::find_all(&menu, "li:not(.dropdown)") {
        dom::remove(&item);
        fields.touch();
    }

    for entry in &nav.menu {
        for node in dom::parse_fragment(&helpers::nav_item(&entry.href, &entry.text, entry.active)) {
            dom::append(&menu, node);
        }
        fields.bound();
        fields.touch();
    }

    fields.finish()
}

pub(super) fn hero(root: &NodeRef, hero: &Hero) -> SectionReport {
    let mut fields = Fields::new(section::HERO);

    fields.markup(
        root,
        "#hero h1",
        &helpers::headline(&hero.title, &hero.highlight),
    );
    fields.text(root, "#hero p", &hero.subtitle);
    fields.text(root, "#hero .btn-get-started", &hero.buttons.primary);
    fields.text(root, "#hero .btn-watch-video span", &hero.buttons.secondary);

    fields.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HeroButtons, MenuItem, SiteContact};

    const HEADER: &str = r##"<!DOCTYPE html>
<html><head>
  <title>Index - BizLand Bootstrap Template</title>
  <meta name="description" content="">
  <meta name="keywords" content="">
</head>
<body>
  <div class="contact-info">
    <i class="bi bi-envelope"><a href="mailto:contact@example.com">contact@example.com</a></i>
    <i class="bi bi-phone"><span>+1 5589 55488 55</span></i>
  </div>
  <a href="index.html" class="logo"><h1 class="sitename">BizLand</h1></a>
  <nav id="navmenu" class="navmenu">
    <ul>
      <li><a href="#hero" class="active">Home</a></li>
      <li><a href="#about">About</a></li>
      <li class="dropdown"><a href="#"><span>Dropdown</span></a>
        <ul><li><a href="#">Dropdown 1</a></li></ul>
      </li>
      <li><a href="#contact">Contact</a></li>
    </ul>
  </nav>
  <section id="hero">
    <h1>Welcome to <span>BizLand</span></h1>
    <p>We are team of talented designers</p>
    <a href="#about" class="btn-get-started">Get Started</a>
    <a href="#" class="btn-watch-video"><i class="bi bi-play-circle"></i><span>Watch Video</span></a>
  </section>
  <footer><strong class="px-1 sitename">BizLand</strong></footer>
</body></html>"##;

    fn site() -> SiteInfo {
        SiteInfo {
            title: "Acme".to_string(),
            description: "Consulting done right".to_string(),
            keywords: "acme,consulting".to_string(),
            contact: SiteContact {
                email: "hello@acme.test".to_string(),
                phone: "+1 555 0100".to_string(),
            },
        }
    }

    #[test]
    fn test_site_info() {
        let doc = Document::parse(HEADER);
        let report = site_info(&doc, &site());
        let root = doc.root();

        assert_eq!(
            dom::text(&dom::find(root, "title").unwrap()),
            "Acme - Consulting done right"
        );
        let meta = dom::find(root, r#"meta[name="keywords"]"#).unwrap();
        assert_eq!(dom::attr(&meta, "content").unwrap(), "acme,consulting");

        let email = dom::find(root, ".contact-info a").unwrap();
        assert_eq!(dom::attr(&email, "href").unwrap(), "mailto:hello@acme.test");
        assert_eq!(dom::text(&email), "hello@acme.test");
        assert_eq!(
            dom::text(&dom::find(root, ".contact-info span").unwrap()),
            "+1 555 0100"
        );

        let names: Vec<String> = dom::find_all(root, ".sitename")
            .iter()
            .map(dom::text)
            .collect();
        assert_eq!(names, vec!["Acme", "Acme"]);
        // title, 2 meta, href + text, phone, 2 sitenames
        assert_eq!(report.writes, 8);
    }

    #[test]
    fn test_navigation_replaces_entries() {
        let doc = Document::parse(HEADER);
        let nav = Navigation {
            menu: vec![
                MenuItem {
                    text: "Start".to_string(),
                    href: "#hero".to_string(),
                    active: true,
                },
                MenuItem {
                    text: "Pricing".to_string(),
                    href: "#pricing".to_string(),
                    active: false,
                },
            ],
        };
        let report = navigation(doc.root(), &nav);
        assert_eq!(report.nodes, 2);

        let menu = dom::find(doc.root(), "#navmenu ul").unwrap();
        let items = dom::child_elements(&menu);
        assert_eq!(items.len(), 3);
        assert!(dom::has_class(&items[0], "dropdown"));
        assert!(dom::find_all(&items[0], "li").is_empty());
        assert!(dom::find(&items[0], "ul").is_some());

        let first = dom::find(&items[1], "a").unwrap();
        assert_eq!(dom::text(&first), "Start");
        assert!(dom::has_class(&first, "active"));
        let second = dom::find(&items[2], "a").unwrap();
        assert_eq!(dom::attr(&second, "href").unwrap(), "#pricing");
        assert!(dom::attr(&second, "class").is_none());
    }

    #[test]
    fn test_navigation_without_menu() {
        let doc = Document::parse("<html><body></body></html>");
        let report = navigation(doc.root(), &Navigation::default());
        assert_eq!(report.writes, 0);
    }

    #[test]
    fn test_hero() {
        let doc = Document::parse(HEADER);
        let data = Hero {
            title: "Grow with".to_string(),
            highlight: "Acme".to_string(),
            subtitle: "Small team, big results".to_string(),
            buttons: HeroButtons {
                primary: "Begin".to_string(),
                secondary: "Play".to_string(),
            },
        };
        hero(doc.root(), &data);
        let root = doc.root();

        let h1 = dom::find(root, "#hero h1").unwrap();
        assert_eq!(dom::inner_html(&h1), "Grow with <span>Acme</span>");
        assert_eq!(
            dom::text(&dom::find(root, "#hero p").unwrap()),
            "Small team, big results"
        );
        assert_eq!(
            dom::text(&dom::find(root, "#hero .btn-get-started").unwrap()),
            "Begin"
        );
        let watch = dom::find(root, "#hero .btn-watch-video").unwrap();
        assert_eq!(dom::text(&watch), "Play");
        assert!(dom::find(&watch, "i.bi-play-circle").is_some());
    }
}

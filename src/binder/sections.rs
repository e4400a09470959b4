//! Feature and service sections: featured services, about, skills,
//! stats and services

use kuchikiki::NodeRef;

use super::fields::Fields;
use super::report::SectionReport;
use super::section;
use crate::content::{About, FeaturedServices, Services, Skills, Stats};
use crate::dom;
use crate::helpers::icon_class;

pub(super) fn featured_services(root: &NodeRef, featured: &FeaturedServices) -> SectionReport {
    let mut fields = Fields::new(section::FEATURED_SERVICES);

    for (item, service) in fields.each(
        root,
        "#featured-services .service-item",
        &featured.services,
    ) {
        fields.class_name(&item, ".icon i", &icon_class(&service.icon, Some("icon")));
        fields.text(&item, "h4 a", &service.title);
        fields.text(&item, "p", &service.description);
    }

    fields.finish()
}

pub(super) fn about(root: &NodeRef, about: &About) -> SectionReport {
    let mut fields = Fields::new(section::ABOUT);

    fields.heading(root, "#about", &about.heading);
    fields.text(root, "#about h3", &about.main_heading);
    fields.text(root, "#about .fst-italic", &about.intro_text);

    for (item, feature) in fields.each(root, "#about ul li", &about.features) {
        fields.class_name(&item, "i", &icon_class(&feature.icon, None));
        fields.text(&item, "h4", &feature.title);
        fields.text(&item, "p", &feature.description);
    }

    fields.text(root, "#about .about-content p:last-child", &about.conclusion);

    fields.finish()
}

/// Skill name, percentage label and progress bar width
pub(super) fn skills(root: &NodeRef, skills: &Skills) -> SectionReport {
    let mut fields = Fields::new(section::SKILLS);

    for (item, skill) in fields.each(root, "#skills .progress", &skills.skills) {
        let percent = format!("{}%", skill.percentage);
        fields.text(&item, ".skill span", &skill.name);
        fields.text(&item, ".skill i", &percent);
        if let Some(bar) = dom::find(&item, ".progress-bar") {
            fields.set_style(&bar, "width", &percent);
            fields.set_attr(&bar, "aria-valuenow", &skill.percentage);
        }
    }

    fields.finish()
}

pub(super) fn stats(root: &NodeRef, stats: &Stats) -> SectionReport {
    let mut fields = Fields::new(section::STATS);

    for (item, stat) in fields.each(root, "#stats .col-lg-3", &stats.stats) {
        fields.class_name(&item, "i", &icon_class(&stat.icon, None));
        if let Some(counter) = dom::find(&item, ".purecounter") {
            fields.set_attr(&counter, "data-purecounter-end", &stat.number);
            fields.set_text(&counter, &stat.number);
        }
        fields.text(&item, "p", &stat.label);
    }

    fields.finish()
}

pub(super) fn services(root: &NodeRef, services: &Services) -> SectionReport {
    let mut fields = Fields::new(section::SERVICES);

    fields.heading(root, "#services", &services.heading);

    for (item, service) in fields.each(root, "#services .service-item", &services.services) {
        fields.class_name(&item, ".icon i", &icon_class(&service.icon, None));
        fields.text(&item, "h3", &service.title);
        fields.text(&item, "p", &service.description);
    }

    fields.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{IconCard, SectionHeading, Skill, Stat};
    use crate::dom::Document;

    fn card(icon: &str, title: &str) -> IconCard {
        IconCard {
            icon: icon.to_string(),
            title: title.to_string(),
            description: format!("{} description", title),
        }
    }

    const SERVICES: &str = r#"<html><body>
<section id="services">
  <div class="section-title"><h2>Services</h2><p><span>Check Our</span> <span class="description-title">Services</span></p></div>
  <div class="service-item"><div class="icon"><i class="bi bi-activity"></i></div><h3>Nesciunt Mete</h3><p>Provident nihil</p></div>
  <div class="service-item"><div class="icon"><i class="bi bi-broadcast"></i></div><h3>Eosle Commodi</h3><p>Ut autem aut</p></div>
  <div class="service-item"><div class="icon"><i class="bi bi-easel"></i></div><h3>Ledo Markt</h3><p>Ut excepturi</p></div>
</section>
</body></html>"#;

    #[test]
    fn test_services_fewer_entries_than_nodes() {
        let doc = Document::parse(SERVICES);
        let data = Services {
            heading: SectionHeading {
                title: "What we do".to_string(),
                subtitle: "Our".to_string(),
                highlight: "Offer".to_string(),
            },
            services: vec![card("bi-cart", "Retail"), card("bi-bank", "Finance")],
        };
        let report = services(doc.root(), &data);
        assert_eq!(report.nodes, 2);

        let items = dom::find_all(doc.root(), "#services .service-item");
        assert_eq!(dom::text(&dom::find(&items[0], "h3").unwrap()), "Retail");
        assert_eq!(
            dom::attr(&dom::find(&items[1], ".icon i").unwrap(), "class").unwrap(),
            "bi bi-bank"
        );
        assert_eq!(dom::text(&dom::find(&items[2], "h3").unwrap()), "Ledo Markt");
        assert_eq!(dom::text(&dom::find(&items[2], "p").unwrap()), "Ut excepturi");

        let subtitle = dom::find(doc.root(), "#services .section-title p").unwrap();
        assert_eq!(
            dom::inner_html(&subtitle),
            r#"<span>Our</span> <span class="description-title">Offer</span>"#
        );
    }

    #[test]
    fn test_services_more_entries_than_nodes() {
        let doc = Document::parse(SERVICES);
        let data = Services {
            services: (0..5).map(|i| card("bi-x", &format!("S{}", i))).collect(),
            ..Default::default()
        };
        let report = services(doc.root(), &data);
        assert_eq!(report.nodes, 3);
        assert_eq!(dom::find_all(doc.root(), ".service-item").len(), 3);
        assert!(!doc.to_html().contains("S3"));
    }

    #[test]
    fn test_featured_services_icon_class() {
        let doc = Document::parse(
            r#"<section id="featured-services"><div class="service-item">
<div class="icon"><i class="bi bi-activity icon"></i></div><h4><a href="">Lorem</a></h4><p>Voluptatum</p>
</div></section>"#,
        );
        let data = FeaturedServices {
            services: vec![card("bi-bounding-box-circles", "Sed ut")],
        };
        featured_services(doc.root(), &data);
        let icon = dom::find(doc.root(), ".icon i").unwrap();
        assert_eq!(
            dom::attr(&icon, "class").unwrap(),
            "bi bi-bounding-box-circles icon"
        );
        assert_eq!(dom::text(&dom::find(doc.root(), "h4 a").unwrap()), "Sed ut");
    }

    #[test]
    fn test_about() {
        let doc = Document::parse(
            r#"<section id="about">
<div class="section-title"><h2>About</h2><p></p></div>
<h3>Voluptatem dignissimos</h3>
<div class="about-content">
  <p class="fst-italic">Lorem ipsum</p>
  <ul>
    <li><i class="bi bi-diagram-3"></i><div><h4>Ullamco</h4><p>Magnam</p></div></li>
    <li><i class="bi bi-fullscreen-exit"></i><div><h4>Magnam</h4><p>Quidem</p></div></li>
  </ul>
  <p>Ullamco laboris nisi</p>
</div></section>"#,
        );
        let data = About {
            main_heading: "Who we are".to_string(),
            intro_text: "Since 1999".to_string(),
            features: vec![card("bi-star", "Quality")],
            conclusion: "Thanks".to_string(),
            ..Default::default()
        };
        let report = about(doc.root(), &data);
        assert_eq!(report.nodes, 1);

        let root = doc.root();
        assert_eq!(dom::text(&dom::find(root, "#about h3").unwrap()), "Who we are");
        assert_eq!(dom::text(&dom::find(root, ".fst-italic").unwrap()), "Since 1999");
        let items = dom::find_all(root, "#about ul li");
        assert_eq!(dom::attr(&dom::find(&items[0], "i").unwrap(), "class").unwrap(), "bi bi-star");
        assert_eq!(dom::text(&dom::find(&items[1], "h4").unwrap()), "Magnam");
        assert_eq!(
            dom::text(&dom::find(root, ".about-content p:last-child").unwrap()),
            "Thanks"
        );
    }

    #[test]
    fn test_skills_and_stats() {
        let doc = Document::parse(
            r#"<section id="skills"><div class="progress">
<span class="skill"><span>HTML</span> <i class="val">100%</i></span>
<div class="progress-bar-wrap"><div class="progress-bar" role="progressbar" aria-valuenow="100" style="width: 1%"></div></div>
</div></section>
<section id="stats"><div class="col-lg-3"><i class="bi bi-emoji-smile"></i>
<span data-purecounter-end="232" class="purecounter"></span><p>Happy Clients</p></div></section>"#,
        );
        let skill_data = Skills {
            skills: vec![Skill {
                name: "Rust".to_string(),
                percentage: "85".to_string(),
            }],
        };
        let stat_data = Stats {
            stats: vec![Stat {
                icon: "bi-journal-richtext".to_string(),
                number: "521".to_string(),
                label: "Projects".to_string(),
            }],
        };
        skills(doc.root(), &skill_data);
        stats(doc.root(), &stat_data);

        let root = doc.root();
        assert_eq!(dom::text(&dom::find(root, ".skill span").unwrap()), "Rust");
        assert_eq!(dom::text(&dom::find(root, ".skill i").unwrap()), "85%");
        let bar = dom::find(root, ".progress-bar").unwrap();
        assert_eq!(dom::attr(&bar, "style").unwrap(), "width: 85%;");
        assert_eq!(dom::attr(&bar, "aria-valuenow").unwrap(), "85");

        let counter = dom::find(root, ".purecounter").unwrap();
        assert_eq!(dom::attr(&counter, "data-purecounter-end").unwrap(), "521");
        assert_eq!(dom::text(&counter), "521");
        assert_eq!(dom::text(&dom::find(root, "#stats p").unwrap()), "Projects");
        assert_eq!(
            dom::attr(&dom::find(root, "#stats i").unwrap(), "class").unwrap(),
            "bi bi-journal-richtext"
        );
    }
}

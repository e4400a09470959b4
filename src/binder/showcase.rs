//! People and work: testimonials, portfolio and team

use kuchikiki::NodeRef;

use super::fields::Fields;
use super::report::SectionReport;
use super::section;
use crate::content::{Portfolio, Team, Testimonials};

pub(super) fn testimonials(root: &NodeRef, testimonials: &Testimonials) -> SectionReport {
    let mut fields = Fields::new(section::TESTIMONIALS);

    for (slide, testimonial) in fields.each(
        root,
        "#testimonials .swiper-slide",
        &testimonials.testimonials,
    ) {
        fields.attr(&slide, ".testimonial-img", "src", &testimonial.image);
        fields.text(&slide, "h3", &testimonial.name);
        fields.text(&slide, "h4", &testimonial.position);
        fields.text(&slide, "p span", &testimonial.text);
    }

    fields.finish()
}

/// Filter buttons and gallery items. Filters marked active gain
/// `filter-active`; items gain their category class.
pub(super) fn portfolio(root: &NodeRef, portfolio: &Portfolio) -> SectionReport {
    let mut fields = Fields::new(section::PORTFOLIO);

    fields.heading(root, "#portfolio", &portfolio.heading);

    for (node, filter) in fields.each(
        root,
        "#portfolio .portfolio-filters li",
        &portfolio.filters,
    ) {
        fields.set_text(&node, &filter.name);
        fields.set_attr(&node, "data-filter", &filter.filter);
        if filter.active {
            fields.add_class(&node, "filter-active");
        }
    }

    for (node, item) in fields.each(root, "#portfolio .portfolio-item", &portfolio.items) {
        fields.attr(&node, "img", "src", &item.image);
        fields.text(&node, ".portfolio-info h4", &item.title);
        fields.text(&node, ".portfolio-info p", &item.description);
        fields.add_class(&node, &item.category);
    }

    fields.finish()
}

pub(super) fn team(root: &NodeRef, team: &Team) -> SectionReport {
    let mut fields = Fields::new(section::TEAM);

    fields.heading(root, "#team", &team.heading);

    for (node, member) in fields.each(root, "#team .team-member", &team.members) {
        fields.attr(&node, ".member-img img", "src", &member.image);
        fields.text(&node, ".member-info h4", &member.name);
        fields.text(&node, ".member-info span", &member.position);
    }

    fields.finish()
}

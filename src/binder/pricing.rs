//! Pricing plans and FAQ

use kuchikiki::NodeRef;

use super::fields::Fields;
use super::report::SectionReport;
use super::section;
use crate::config::LabelsConfig;
use crate::content::{Faq, Pricing};
use crate::dom;
use crate::helpers;

/// Plan name, price, feature rows, buy button, `featured` class and the
/// advanced badge.
///
/// Feature row `j` is bound to `plan.features[j]` and carries `na` exactly
/// when `j` is listed in `plan.excluded`. Rows without a feature string are
/// left alone. The badge is inserted once; an existing `.advanced` child is
/// kept as is.
pub(super) fn pricing(root: &NodeRef, pricing: &Pricing, labels: &LabelsConfig) -> SectionReport {
    let mut fields = Fields::new(section::PRICING);

    fields.heading(root, "#pricing", &pricing.heading);

    for (item, plan) in fields.each(root, "#pricing .pricing-item", &pricing.plans) {
        fields.text(&item, "h3", &plan.name);
        fields.markup(&item, "h4", &helpers::price_tag(&plan.price, &plan.period));
        fields.text(&item, ".btn-buy", &labels.buy_button);

        let rows = dom::find_all(&item, "ul li");
        for (index, (row, feature)) in rows.iter().zip(&plan.features).enumerate() {
            if feature.is_empty() {
                continue;
            }
            fields.set_text(row, feature);
            fields.toggle_class(row, "na", plan.is_excluded(index));
        }

        fields.toggle_class(&item, "featured", plan.featured);

        if plan.advanced && dom::find(&item, ".advanced").is_none() {
            for badge in dom::parse_fragment(&helpers::badge(&labels.advanced_badge)) {
                dom::prepend(&item, badge);
            }
            fields.touch();
        }
    }

    fields.finish()
}

pub(super) fn faq(root: &NodeRef, faq: &Faq) -> SectionReport {
    let mut fields = Fields::new(section::FAQ);

    fields.heading(root, "#faq", &faq.heading);

    for (item, entry) in fields.each(root, "#faq .faq-item", &faq.items) {
        fields.text(&item, "h3", &entry.question);
        fields.text(&item, ".faq-content p", &entry.answer);
        fields.toggle_class(&item, "faq-active", entry.active);
    }

    fields.finish()
}

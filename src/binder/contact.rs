//! Contact section and page footer

use kuchikiki::NodeRef;

use super::fields::Fields;
use super::report::SectionReport;
use super::section;
use crate::config::CreditsConfig;
use crate::content::{Contact, Footer, InfoBlock, LinkGroup};
use crate::dom;
use crate::helpers;

pub(super) fn contact(root: &NodeRef, contact: &Contact) -> SectionReport {
    let mut fields = Fields::new(section::CONTACT);

    fields.heading(root, "#contact", &contact.heading);

    let blocks: [&InfoBlock; 3] = [&contact.info.address, &contact.info.phone, &contact.info.email];
    for (position, block) in blocks.into_iter().enumerate() {
        let selector = format!("#contact .info-item:nth-child({})", position + 1);
        if let Some(info) = dom::find(root, &selector) {
            fields.text(&info, "h3", &block.title);
            fields.text(&info, "p", &block.text);
        }
    }

    let form = &contact.form;
    fields.text(root, r#"#contact label[for="name-field"]"#, &form.name);
    fields.text(root, r#"#contact label[for="email-field"]"#, &form.email);
    fields.text(root, r#"#contact label[for="subject-field"]"#, &form.subject);
    fields.text(root, r#"#contact label[for="message-field"]"#, &form.message);
    fields.text(root, r#"#contact button[type="submit"]"#, &form.submit);

    fields.finish()
}

pub(super) fn footer(root: &NodeRef, footer: &Footer, credits: &CreditsConfig) -> SectionReport {
    let mut fields = Fields::new(section::FOOTER);

    fields.text(root, ".footer-newsletter h4", &footer.newsletter.title);
    fields.text(root, ".footer-newsletter p", &footer.newsletter.description);

    if let Some(about) = dom::find(root, ".footer-about") {
        let info = &footer.about;
        fields.text(&about, ".footer-contact p:nth-child(1)", &info.description);
        fields.text(&about, ".footer-contact p:nth-child(2)", &info.address);
        fields.text(&about, ".footer-contact p:nth-child(3) span", &info.phone);
        fields.text(&about, ".footer-contact p:nth-child(4) span", &info.email);
    }

    link_column(&mut fields, root, ".footer-links:nth-child(2)", &footer.links.useful);
    link_column(&mut fields, root, ".footer-links:nth-child(3)", &footer.links.services);

    if let Some(social) = dom::find(root, ".footer-top .col-lg-4:last-child") {
        fields.text(&social, "h4", &footer.social.title);
        fields.text(&social, "p", &footer.social.description);
    }

    let copyright = &footer.copyright;
    fields.markup(
        root,
        ".copyright p",
        &helpers::copyright_line(&copyright.text, &copyright.company, &copyright.rights),
    );
    fields.markup(root, ".credits", &helpers::credits_line(credits));

    fields.finish()
}

/// Column title and its positional list of links
fn link_column(fields: &mut Fields, root: &NodeRef, selector: &str, group: &LinkGroup) {
    let Some(column) = dom::find(root, selector) else {
        return;
    };

    fields.text(&column, "h4", &group.title);
    for (row, link) in fields.each(&column, "ul li", &group.items) {
        if let Some(anchor) = dom::find(&row, "a") {
            fields.set_text(&anchor, &link.text);
            fields.set_attr(&anchor, "href", &link.href);
        }
    }
}

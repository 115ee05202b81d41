//! Contact form → mail client hand-off.
//!
//! Submitting never posts anywhere: the three fields are read raw, folded
//! into a `mailto:` URI, and the page navigates to it so the OS mail
//! handler takes over. Delivery cannot be confirmed.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use crate::dom::Dom;
use crate::page;
use crate::util::mailto::{self, ContactMessage};

pub struct ContactForm<D: Dom> {
    dom: D,
    form: D::Node,
    recipient: String,
}

impl<D: Dom> ContactForm<D> {
    /// `None` when the page has no contact form.
    pub fn attach(dom: D, recipient: &str) -> Option<Self> {
        let Some(form) = dom.query(page::CONTACT_FORM) else {
            log::debug!("contact form: not on page, skipping");
            return None;
        };
        Some(Self { dom, form, recipient: recipient.to_owned() })
    }

    pub fn form(&self) -> &D::Node {
        &self.form
    }

    /// Current field values; `None` if any of the three is missing.
    pub fn read(&self) -> Option<ContactMessage> {
        let field = |selector: &str| self.dom.query(selector).and_then(|node| self.dom.value(&node));
        Some(ContactMessage {
            name: field(page::CONTACT_NAME)?,
            email: field(page::CONTACT_EMAIL)?,
            message: field(page::CONTACT_MESSAGE)?,
        })
    }

    /// Hand the message off and clear the form. Returns the navigated URI,
    /// or `None` (and leaves the form alone) when a field is missing.
    pub fn submit(&self) -> Option<String> {
        let Some(message) = self.read() else {
            log::debug!("contact form: missing field, submit ignored");
            return None;
        };
        let href = mailto::compose(&self.recipient, &message);
        self.dom.navigate(&href);
        self.dom.reset_form(&self.form);
        Some(href)
    }
}

//! `mailto:` hand-off URIs for the contact form.
//!
//! Query values are percent-encoded, with spaces as `%20` rather than the
//! form-encoding `+`, which mail clients would show literally.

#[cfg(test)]
#[path = "mailto_test.rs"]
mod mailto_test;

use url::form_urlencoded;

/// Raw contact-form input. Nothing is validated; empty strings pass through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn subject(&self) -> String {
        format!("Website Contact by {}", self.name)
    }
}

/// Percent-encode one query component.
pub fn encode_component(raw: &str) -> String {
    // `byte_serialize` escapes a literal `+` as `%2B`, so every `+` left in
    // its output stands for a space.
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// `mailto:{to}?cc={email}&subject=Website Contact by {name}&body={message}`.
pub fn compose(to: &str, message: &ContactMessage) -> String {
    format!(
        "mailto:{to}?cc={}&subject={}&body={}",
        encode_component(&message.email),
        encode_component(&message.subject()),
        encode_component(&message.message),
    )
}

use crate::constants::{MAIL_ADDRESS, MAIL_BODY, MAIL_SUBJECT};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Same unreserved set as JavaScript's encodeURIComponent.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[inline]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Fixed recipient, subject and body for the link exposed on confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailTemplate {
    pub address: String,
    pub subject: String,
    pub body: String,
}

impl Default for MailTemplate {
    fn default() -> Self {
        Self {
            address: MAIL_ADDRESS.to_string(),
            subject: MAIL_SUBJECT.to_string(),
            body: MAIL_BODY.to_string(),
        }
    }
}

impl MailTemplate {
    /// `mailto:<address>?subject=<subject>&body=<body>` with both query values encoded.
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.address,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

// DOM ids and fixed copy for the web frontend.

// Element the card is mounted into; falls back to <body>.
pub const MOUNT_ID: &str = "app";

pub const CARD_ID: &str = "card";
pub const HEADING_ID: &str = "card-heading";
pub const BUTTON_ROW_ID: &str = "card-buttons";
pub const ACCEPT_ID: &str = "card-accept";
pub const EVASIVE_ID: &str = "card-evasive";
pub const CONFIRM_ID: &str = "card-confirm";
pub const MAIL_LINK_ID: &str = "card-mail";
pub const HEART_ID: &str = "card-heart";

pub const ACCEPT_LABEL: &str = "Yes";
pub const EVASIVE_LABEL: &str = "No";
pub const CONFIRM_LABEL: &str = "Confirm";
pub const MAIL_LINK_LABEL: &str = "Send the invite ✉️";
pub const HEART: &str = "❤️";

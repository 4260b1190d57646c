// Inline styles for the card. Kept free of crate-local imports so host tests
// can include this file directly.

use card_core::Position;

// Seconds for the evasive control to glide to a new spot.
pub const POSITION_TRANSITION_SECS: f32 = 0.2;

pub const CARD_STYLE: &str = "position:relative;width:92vw;max-width:640px;aspect-ratio:7/4;\
background:#fff;border-radius:16px;box-shadow:0 10px 30px rgba(0,0,0,0.08);overflow:hidden;\
display:flex;flex-direction:column;align-items:center;justify-content:center;\
padding:24px;box-sizing:border-box;text-align:center;font-family:system-ui,sans-serif;";
pub const HEADING_STYLE: &str = "font-size:1.6rem;font-weight:700;color:#1f2937;\
margin:0 0 48px 0;user-select:none;";
pub const BUTTON_ROW_STYLE: &str = "display:flex;flex-direction:row;align-items:center;gap:24px;";
pub const ACCEPT_STYLE: &str = "background:#4CAF50;color:#fff;padding:12px 32px;border:none;\
border-radius:9999px;font-weight:600;cursor:pointer;box-shadow:0 6px 15px rgba(0,0,0,0.15);";
pub const CONFIRM_STYLE: &str = ACCEPT_STYLE;
pub const EVASIVE_BASE_STYLE: &str = "background:#F44336;color:#fff;padding:12px 32px;border:none;\
border-radius:9999px;font-weight:600;cursor:pointer;box-shadow:0 6px 15px rgba(0,0,0,0.15);\
z-index:50;";
pub const MAIL_LINK_STYLE: &str = "color:#e11d48;font-weight:600;text-decoration:underline;";
pub const HEART_STYLE: &str = "position:absolute;inset:0;display:flex;align-items:center;\
justify-content:center;pointer-events:none;font-size:4rem;padding-top:128px;opacity:0.8;";

/// Style for the evasive control: in normal flow until its first escape,
/// then absolutely placed inside the card with a short glide.
pub fn evasive_style(position: Option<Position>) -> String {
    let secs = POSITION_TRANSITION_SECS;
    match position {
        Some(p) => format!(
            "{EVASIVE_BASE_STYLE}position:absolute;top:{}px;left:{}px;\
transition:top {secs}s ease, left {secs}s ease;",
            p.top, p.left
        ),
        None => format!(
            "{EVASIVE_BASE_STYLE}position:relative;transition:transform {secs}s ease;"
        ),
    }
}

#[inline]
pub fn visibility(base: &str, shown: bool) -> String {
    if shown {
        base.to_string()
    } else {
        format!("{base}display:none;")
    }
}

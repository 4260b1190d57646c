// Interaction tuning and fixed copy shared by the web and native frontends.

// Flee tuning
pub const FLEE_DISTANCE_PX: f32 = 60.0; // flee when the pointer is strictly closer than this
pub const EDGE_PADDING_PX: i32 = 20; // minimum gap between the evasive control and the card edge

// Mail link sent on confirmation
pub const MAIL_ADDRESS: &str = "me@example.com";
pub const MAIL_SUBJECT: &str = "Dinosaur date 🦖";
pub const MAIL_BODY: &str = "Hi!\n\n\
I said yes: let's go see the dinosaurs together.\n\
Pick a day and I'll be there.\n\n\
See you soon <3";

// Heading copy per step
pub const PROMPT_HEADING: &str = "Will you come see the dinosaurs with me? 🦖";
pub const FORM_HEADING: &str = "Really? Confirm and I'll send the invite.";
pub const SUCCESS_HEADING: &str = "Yay <3";

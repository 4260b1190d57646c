pub mod constants;
pub mod controller;
pub mod geometry;
pub mod mail;
pub mod placement;

pub use constants::*;
pub use controller::*;
pub use geometry::*;
pub use mail::*;
pub use placement::*;

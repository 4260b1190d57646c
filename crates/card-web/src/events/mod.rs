pub mod pointer;
pub mod steps;
pub mod touch;

use crate::input;
use crate::view::CardView;
use card_core::{Controller, Layout, Reaction};
use std::cell::RefCell;
use std::rc::Rc;

pub use pointer::{wire_evasive_click, wire_pointerenter, wire_pointermove};
pub use steps::{wire_accept, wire_confirm};
pub use touch::wire_touchstart;

#[derive(Clone)]
pub struct CardWiring {
    pub view: Rc<CardView>,
    pub controller: Rc<RefCell<Controller>>,
}

impl CardWiring {
    /// Fresh measurement of the card and the evasive control.
    #[inline]
    pub fn layout(&self) -> Option<Layout> {
        input::measure_layout(&self.view.card, &self.view.evasive)
    }

    /// Render the outcome of a flee handler.
    pub fn apply(&self, reaction: Reaction) {
        if let Reaction::Moved(pos) = reaction {
            self.view.place_evasive(Some(pos));
        }
    }

    pub fn render(&self) {
        self.view.render(&self.controller.borrow());
    }
}

pub fn wire_card(w: CardWiring) {
    wire_pointermove(&w);
    wire_pointerenter(&w);
    wire_evasive_click(&w);
    wire_touchstart(&w);
    wire_accept(&w);
    wire_confirm(&w);
}

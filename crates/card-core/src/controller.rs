//! Step machine for the card and the flee reactions of the evasive control.
//!
//! Every input handler is synchronous and reports what it did as a
//! [`Reaction`]; the caller only has to re-render when a position changed.
//! Nothing here touches the DOM, so hosts without a browser can drive the
//! exact same logic.

use crate::constants::{
    EDGE_PADDING_PX, FLEE_DISTANCE_PX, FORM_HEADING, PROMPT_HEADING, SUCCESS_HEADING,
};
use crate::geometry::{Layout, Position};
use crate::mail::MailTemplate;
use crate::placement::Placement;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CardStep {
    #[default]
    Prompt,
    Form,
    Success,
}

/// Controls the presentation layer draws for a given step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Accept,
    Evasive,
    Confirm,
}

impl CardStep {
    /// The only forward edge out of this step, if any.
    #[inline]
    pub fn next(self) -> Option<Self> {
        match self {
            CardStep::Prompt => Some(CardStep::Form),
            CardStep::Form => Some(CardStep::Success),
            CardStep::Success => None,
        }
    }

    #[inline]
    pub fn flees(self) -> bool {
        matches!(self, CardStep::Prompt)
    }

    pub fn controls(self) -> SmallVec<[Control; 2]> {
        match self {
            CardStep::Prompt => smallvec![Control::Accept, Control::Evasive],
            CardStep::Form => smallvec![Control::Confirm],
            CardStep::Success => SmallVec::new(),
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            CardStep::Prompt => PROMPT_HEADING,
            CardStep::Form => FORM_HEADING,
            CardStep::Success => SUCCESS_HEADING,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CardStep::Prompt => "prompt",
            CardStep::Form => "form",
            CardStep::Success => "success",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Advanced { from: CardStep, to: CardStep },
    Ignored(CardStep),
}

impl Transition {
    #[inline]
    pub fn advanced(&self) -> bool {
        matches!(self, Transition::Advanced { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reaction {
    /// The control was relocated.
    Moved(Position),
    /// Pointer was not close enough.
    Stayed { distance: f32 },
    /// Flee is only active while the prompt is showing.
    Inactive,
    /// Geometry was not available; the next event retries.
    NotMeasured,
}

impl Reaction {
    #[inline]
    pub fn moved(&self) -> bool {
        matches!(self, Reaction::Moved(_))
    }

    /// Whether a touch that produced this reaction must not go on to activate
    /// the control.
    #[inline]
    pub fn suppresses_activation(&self) -> bool {
        matches!(self, Reaction::Moved(_) | Reaction::NotMeasured)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FleeParams {
    pub flee_distance: f32,
    pub padding: i32,
}

impl Default for FleeParams {
    fn default() -> Self {
        Self {
            flee_distance: FLEE_DISTANCE_PX,
            padding: EDGE_PADDING_PX,
        }
    }
}

pub struct Controller {
    pub params: FleeParams,
    placement: Placement,
    mail: MailTemplate,
    step: CardStep,
    position: Option<Position>,
    flee_count: u32,
    mail_link: Option<String>,
}

impl Controller {
    pub fn new(params: FleeParams, placement: Placement) -> Self {
        Self {
            params,
            placement,
            mail: MailTemplate::default(),
            step: CardStep::Prompt,
            position: None,
            flee_count: 0,
            mail_link: None,
        }
    }

    pub fn with_mail(mut self, mail: MailTemplate) -> Self {
        self.mail = mail;
        self
    }

    #[inline]
    pub fn step(&self) -> CardStep {
        self.step
    }

    /// Current offset of the evasive control; `None` until its first escape.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    #[inline]
    pub fn flee_count(&self) -> u32 {
        self.flee_count
    }

    /// Compose link built when the form was confirmed.
    #[inline]
    pub fn mail_link(&self) -> Option<&str> {
        self.mail_link.as_deref()
    }

    pub fn accept(&mut self) -> Transition {
        let t = self.advance_from(CardStep::Prompt);
        if t.advanced() {
            log::info!("[card] accepted after {} escapes", self.flee_count);
        }
        t
    }

    pub fn confirm(&mut self) -> Transition {
        let t = self.advance_from(CardStep::Form);
        if t.advanced() {
            let link = self.mail.to_uri();
            log::info!("[card] confirmed; mail link {} bytes", link.len());
            self.mail_link = Some(link);
        }
        t
    }

    fn advance_from(&mut self, expected: CardStep) -> Transition {
        if self.step != expected {
            log::debug!(
                "[card] ignoring action in {} (needs {})",
                self.step.name(),
                expected.name()
            );
            return Transition::Ignored(self.step);
        }
        match self.step.next() {
            Some(to) => {
                let from = self.step;
                self.step = to;
                log::info!("[card] {} -> {}", from.name(), to.name());
                Transition::Advanced { from, to }
            }
            None => Transition::Ignored(self.step),
        }
    }

    /// Pointer moved inside the container; flee when closer than the threshold.
    pub fn pointer_move(&mut self, pointer: Vec2, layout: Option<&Layout>) -> Reaction {
        if !self.step.flees() {
            return Reaction::Inactive;
        }
        let Some(layout) = layout else {
            return Reaction::NotMeasured;
        };
        let distance = layout.distance_to_element(pointer);
        if distance < self.params.flee_distance {
            self.flee(layout, "pointer")
        } else {
            Reaction::Stayed { distance }
        }
    }

    /// Touch landed on the control. Touch has no hover, so always flee.
    pub fn touch_start(&mut self, layout: Option<&Layout>) -> Reaction {
        self.flee_unconditionally(layout, "touch")
    }

    /// Pointer entered the control's box before the proximity check caught it.
    pub fn pointer_enter(&mut self, layout: Option<&Layout>) -> Reaction {
        self.flee_unconditionally(layout, "enter")
    }

    /// The control was activated anyway (keyboard, fast click). Never a decline.
    pub fn evasive_click(&mut self, layout: Option<&Layout>) -> Reaction {
        self.flee_unconditionally(layout, "click")
    }

    fn flee_unconditionally(&mut self, layout: Option<&Layout>, cause: &str) -> Reaction {
        if !self.step.flees() {
            return Reaction::Inactive;
        }
        match layout {
            Some(layout) => self.flee(layout, cause),
            None => Reaction::NotMeasured,
        }
    }

    fn flee(&mut self, layout: &Layout, cause: &str) -> Reaction {
        let pos = self.placement.place(
            layout.container.size,
            layout.element.size,
            self.params.padding,
        );
        self.position = Some(pos);
        self.flee_count = self.flee_count.saturating_add(1);
        log::debug!(
            "[flee] {} -> top={} left={} (#{})",
            cause,
            pos.top,
            pos.left,
            self.flee_count
        );
        Reaction::Moved(pos)
    }
}

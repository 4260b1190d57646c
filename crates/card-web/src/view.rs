//! DOM for the card and its per-step rendering.

use crate::constants::*;
use crate::dom;
use crate::style;
use card_core::{CardStep, Control, Controller, Position};
use web_sys as web;

pub struct CardView {
    pub card: web::Element,
    pub heading: web::Element,
    pub button_row: web::Element,
    pub accept: web::Element,
    pub evasive: web::Element,
    pub confirm: web::Element,
    pub mail_link: web::Element,
    pub heart: web::Element,
}

impl CardView {
    /// Create the card under `mount`. Elements for every step are created up
    /// front and toggled by [`CardView::render`].
    pub fn build(document: &web::Document, mount: &web::Element) -> anyhow::Result<Self> {
        let card = dom::create_element(document, "div", CARD_ID, style::CARD_STYLE)?;
        let heading = dom::create_element(document, "h1", HEADING_ID, style::HEADING_STYLE)?;
        let button_row =
            dom::create_element(document, "div", BUTTON_ROW_ID, style::BUTTON_ROW_STYLE)?;
        let accept = button(
            document,
            ACCEPT_ID,
            style::ACCEPT_STYLE,
            ACCEPT_LABEL,
            "Yes, accept",
        )?;
        let evasive = button(
            document,
            EVASIVE_ID,
            &style::evasive_style(None),
            EVASIVE_LABEL,
            "No, decline",
        )?;
        let confirm = button(
            document,
            CONFIRM_ID,
            style::CONFIRM_STYLE,
            CONFIRM_LABEL,
            "Confirm",
        )?;
        let mail_link =
            dom::create_element(document, "a", MAIL_LINK_ID, style::MAIL_LINK_STYLE)?;
        mail_link.set_text_content(Some(MAIL_LINK_LABEL));
        let heart = dom::create_element(document, "div", HEART_ID, style::HEART_STYLE)?;
        heart.set_text_content(Some(HEART));
        let _ = heart.set_attribute("aria-hidden", "true");

        dom::append(&button_row, &accept)?;
        dom::append(&button_row, &evasive)?;
        dom::append(&card, &heading)?;
        dom::append(&card, &button_row)?;
        dom::append(&card, &confirm)?;
        dom::append(&card, &mail_link)?;
        dom::append(&card, &heart)?;
        dom::append(mount, &card)?;
        log::info!("[dom] card mounted under #{}", mount.id());

        Ok(Self {
            card,
            heading,
            button_row,
            accept,
            evasive,
            confirm,
            mail_link,
            heart,
        })
    }

    pub fn render(&self, controller: &Controller) {
        let step = controller.step();
        let controls = step.controls();
        let prompt = controls.contains(&Control::Accept) || controls.contains(&Control::Evasive);
        let success = step == CardStep::Success;

        self.heading.set_text_content(Some(step.heading()));
        dom::set_style(
            &self.button_row,
            &style::visibility(style::BUTTON_ROW_STYLE, prompt),
        );
        dom::set_style(
            &self.confirm,
            &style::visibility(style::CONFIRM_STYLE, controls.contains(&Control::Confirm)),
        );
        self.place_evasive(controller.position());

        match controller.mail_link() {
            Some(href) if success => {
                let _ = self.mail_link.set_attribute("href", href);
                dom::set_style(&self.mail_link, style::MAIL_LINK_STYLE);
            }
            _ => dom::set_style(
                &self.mail_link,
                &style::visibility(style::MAIL_LINK_STYLE, false),
            ),
        }
        dom::set_style(&self.heart, &style::visibility(style::HEART_STYLE, success));
    }

    #[inline]
    pub fn place_evasive(&self, position: Option<Position>) {
        dom::set_style(&self.evasive, &style::evasive_style(position));
    }
}

fn button(
    document: &web::Document,
    id: &str,
    style: &str,
    label: &str,
    aria_label: &str,
) -> anyhow::Result<web::Element> {
    let el = dom::create_element(document, "button", id, style)?;
    let _ = el.set_attribute("type", "button");
    let _ = el.set_attribute("aria-label", aria_label);
    el.set_text_content(Some(label));
    Ok(el)
}

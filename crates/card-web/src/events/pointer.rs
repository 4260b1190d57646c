use super::CardWiring;
use crate::dom;
use crate::input;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(w: &CardWiring) {
    let w = w.clone();
    let card = w.view.card.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pointer = input::client_point(&ev);
        let layout = w.layout();
        let reaction = w.controller.borrow_mut().pointer_move(pointer, layout.as_ref());
        w.apply(reaction);
    }) as Box<dyn FnMut(_)>);

    let _ = card.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Desktop safeguard: a fast pointer can land on the control between two moves.
pub fn wire_pointerenter(w: &CardWiring) {
    let w = w.clone();
    let evasive = w.view.evasive.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let layout = w.layout();
        let reaction = w.controller.borrow_mut().pointer_enter(layout.as_ref());
        w.apply(reaction);
    }) as Box<dyn FnMut(_)>);

    let _ = evasive
        .add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_evasive_click(w: &CardWiring) {
    let w = w.clone();
    let evasive = w.view.evasive.clone();
    dom::add_click_listener(&evasive, move || {
        let layout = w.layout();
        let reaction = w.controller.borrow_mut().evasive_click(layout.as_ref());
        log::info!("[click] evasive control activated: {:?}", reaction);
        w.apply(reaction);
    });
}

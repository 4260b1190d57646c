use super::CardWiring;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_touchstart(w: &CardWiring) {
    let w = w.clone();
    let evasive = w.view.evasive.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let layout = w.layout();
        let reaction = w.controller.borrow_mut().touch_start(layout.as_ref());
        if reaction.suppresses_activation() {
            // Keeps the tap from turning into a click on the control.
            ev.prevent_default();
        }
        w.apply(reaction);
    }) as Box<dyn FnMut(_)>);

    // prevent_default is ignored on passive listeners.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    let _ = evasive.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

use super::CardWiring;
use crate::dom;

pub fn wire_accept(w: &CardWiring) {
    let w = w.clone();
    let accept = w.view.accept.clone();
    dom::add_click_listener(&accept, move || {
        let t = w.controller.borrow_mut().accept();
        if t.advanced() {
            w.render();
        }
    });
}

pub fn wire_confirm(w: &CardWiring) {
    let w = w.clone();
    let confirm = w.view.confirm.clone();
    dom::add_click_listener(&confirm, move || {
        let t = w.controller.borrow_mut().confirm();
        if t.advanced() {
            w.render();
        }
    });
}

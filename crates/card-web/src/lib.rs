#![cfg(target_arch = "wasm32")]
use card_core::{Controller, FleeParams, Placement};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod input;
mod style;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("card-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;
    let mount = dom::mount_point(&document, constants::MOUNT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{} and <body>", constants::MOUNT_ID))?;

    let view = Rc::new(view::CardView::build(&document, &mount)?);
    let controller = Rc::new(RefCell::new(Controller::new(
        FleeParams::default(),
        Placement::from_entropy(),
    )));
    {
        let c = controller.borrow();
        log::info!(
            "[card] step={} flee_distance={:.0}px padding={}px",
            c.step().name(),
            c.params.flee_distance,
            c.params.padding
        );
    }

    let wiring = events::CardWiring { view, controller };
    wiring.render();
    events::wire_card(wiring);
    Ok(())
}

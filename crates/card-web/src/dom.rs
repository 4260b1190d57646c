use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Element the card attaches to: `#id` when present, otherwise `<body>`.
pub fn mount_point(document: &web::Document, id: &str) -> Option<web::Element> {
    document
        .get_element_by_id(id)
        .or_else(|| document.body().map(web::Element::from))
}

pub fn create_element(
    document: &web::Document,
    tag: &str,
    id: &str,
    style: &str,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_id(id);
    let _ = el.set_attribute("style", style);
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map_err(|e| anyhow::anyhow!("append #{}: {:?}", child.id(), e))?;
    Ok(())
}

#[inline]
pub fn set_style(el: &web::Element, style: &str) {
    let _ = el.set_attribute("style", style);
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

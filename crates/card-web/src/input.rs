use card_core::{Layout, Rect};
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn rect_from_dom(rect: &web::DomRect) -> Rect {
    Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

// ---------------- Measurement ----------------
/// Validate a measured pair; a not-yet-rendered element yields `None` and the
/// event is skipped.
pub fn layout_from_rects(container: Rect, element: Rect) -> Option<Layout> {
    match Layout::new(container, element) {
        Ok(layout) => Some(layout),
        Err(e) => {
            log::debug!("[dom] measurement not ready: {}", e);
            None
        }
    }
}

#[inline]
pub fn measure_layout(container: &web::Element, element: &web::Element) -> Option<Layout> {
    layout_from_rects(
        rect_from_dom(&container.get_bounding_client_rect()),
        rect_from_dom(&element.get_bounding_client_rect()),
    )
}

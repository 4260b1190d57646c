//! Measured rectangles and the region the evasive control may occupy.
//!
//! Rectangles come straight from the presentation layer (client pixels, `f32`)
//! and are validated once per event. Positions are integer offsets relative to
//! the container's top-left corner.

use glam::Vec2;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum LayoutError {
    #[error("{0} rect has a non-finite coordinate")]
    NotFinite(&'static str),
    #[error("{what} rect is empty ({width}x{height})")]
    Empty {
        what: &'static str,
        width: f32,
        height: f32,
    },
}

/// Axis-aligned rectangle in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    fn check(&self, what: &'static str) -> Result<(), LayoutError> {
        if !self.origin.is_finite() || !self.size.is_finite() {
            return Err(LayoutError::NotFinite(what));
        }
        // Unrendered elements report a zero-sized box; treat them as not measured yet.
        if self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(LayoutError::Empty {
                what,
                width: self.size.x,
                height: self.size.y,
            });
        }
        Ok(())
    }
}

/// Container and evasive-control rectangles measured for a single event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub container: Rect,
    pub element: Rect,
}

impl Layout {
    pub fn new(container: Rect, element: Rect) -> Result<Self, LayoutError> {
        container.check("container")?;
        element.check("element")?;
        Ok(Self { container, element })
    }

    /// Euclidean distance from a pointer (client coordinates) to the control's center.
    #[inline]
    pub fn distance_to_element(&self, pointer: Vec2) -> f32 {
        pointer.distance(self.element.center())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub top: i32,
    pub left: i32,
}

/// Inclusive ranges a new [`Position`] is sampled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_left: i32,
    pub max_left: i32,
    pub min_top: i32,
    pub max_top: i32,
    degenerate: bool,
}

impl Bounds {
    /// Bounds for an element of size `element` inside `container`, keeping
    /// `padding` pixels clear of every edge. An axis whose range would be
    /// inverted collapses onto `padding`.
    pub fn new(container: Vec2, element: Vec2, padding: i32) -> Self {
        let (max_left, narrow) = axis_upper(container.x, element.x, padding);
        let (max_top, short) = axis_upper(container.y, element.y, padding);
        Self {
            min_left: padding,
            max_left,
            min_top: padding,
            max_top,
            degenerate: narrow || short,
        }
    }

    /// True when the container was too small on at least one axis and that
    /// axis was clamped.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        (self.min_left..=self.max_left).contains(&pos.left)
            && (self.min_top..=self.max_top).contains(&pos.top)
    }
}

#[inline]
fn axis_upper(container: f32, element: f32, padding: i32) -> (i32, bool) {
    // Floor the free space so a fractional measurement never lets the element overhang.
    // The cast saturates for huge elements; keep the subtraction saturating too.
    let upper = ((container - element).floor() as i32).saturating_sub(padding);
    if upper < padding {
        (padding, true)
    } else {
        (upper, false)
    }
}

//! Replays a scripted session against the card controller without a browser.
//!
//! The card and control sizes match the web layout at its default width. The
//! pointer sweeps from the card's left edge toward the control, chasing it
//! after every escape, then a touch, an accept and a confirm follow.
//!
//! Usage: `card-native [seed]` (default seed 42). `RUST_LOG=debug` shows every
//! reposition.

use anyhow::Context;
use card_core::{Bounds, CardStep, Controller, FleeParams, Layout, Placement, Reaction, Rect};
use glam::Vec2;

const CARD: Rect = Rect {
    origin: Vec2::new(0.0, 0.0),
    size: Vec2::new(640.0, 365.7),
};
const CONTROL_SIZE: Vec2 = Vec2::new(96.0, 44.0);
// Where the control sits in the button row before its first escape.
const CONTROL_IN_FLOW: Vec2 = Vec2::new(332.0, 226.0);
const SWEEP_STEPS: usize = 48;

#[derive(Default)]
struct Tally {
    moved: u32,
    stayed: u32,
    inactive: u32,
    not_measured: u32,
}

impl Tally {
    fn record(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::Moved(_) => self.moved += 1,
            Reaction::Stayed { .. } => self.stayed += 1,
            Reaction::Inactive => self.inactive += 1,
            Reaction::NotMeasured => self.not_measured += 1,
        }
    }
}

/// Measure the control where the controller last put it, the same way the
/// browser would report it.
fn measure(controller: &Controller) -> Option<Layout> {
    let origin = match controller.position() {
        Some(p) => CARD.origin + Vec2::new(p.left as f32, p.top as f32),
        None => CARD.origin + CONTROL_IN_FLOW,
    };
    Layout::new(CARD, Rect { origin, size: CONTROL_SIZE }).ok()
}

fn check_bounds(controller: &Controller, bounds: &Bounds) -> anyhow::Result<()> {
    if let Some(pos) = controller.position() {
        anyhow::ensure!(bounds.contains(pos), "control escaped the card: {:?}", pos);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("seed must be an unsigned integer, got {:?}", arg))?,
        None => 42,
    };
    let params = FleeParams::default();
    let bounds = Bounds::new(CARD.size, CONTROL_SIZE, params.padding);
    let mut controller = Controller::new(params, Placement::from_seed(seed));
    let mut tally = Tally::default();
    log::info!(
        "[replay] seed={} card={:.0}x{:.0} control={:.0}x{:.0} bounds=left {}..={} top {}..={}",
        seed,
        CARD.size.x,
        CARD.size.y,
        CONTROL_SIZE.x,
        CONTROL_SIZE.y,
        bounds.min_left,
        bounds.max_left,
        bounds.min_top,
        bounds.max_top
    );

    // Not measured yet: the first frame has no geometry.
    tally.record(controller.pointer_move(Vec2::ZERO, None));

    // Sweep from the left edge, re-aiming at the control's current center each step.
    let mut pointer = Vec2::new(CARD.origin.x, CARD.center().y);
    for step in 0..SWEEP_STEPS {
        let layout = measure(&controller);
        if let Some(layout) = &layout {
            let target = layout.element.center();
            let remaining = (SWEEP_STEPS - step) as f32;
            pointer += (target - pointer) / remaining;
        }
        let reaction = controller.pointer_move(pointer, layout.as_ref());
        if let Reaction::Moved(pos) = reaction {
            log::info!(
                "[replay] step {:>2}: pointer ({:.0},{:.0}) -> control to top={} left={}",
                step,
                pointer.x,
                pointer.y,
                pos.top,
                pos.left
            );
        }
        tally.record(reaction);
        check_bounds(&controller, &bounds)?;
    }

    let reaction = controller.touch_start(measure(&controller).as_ref());
    log::info!("[replay] touch: {:?}", reaction);
    tally.record(reaction);
    tally.record(controller.pointer_enter(measure(&controller).as_ref()));
    tally.record(controller.evasive_click(measure(&controller).as_ref()));
    check_bounds(&controller, &bounds)?;

    controller.accept();
    let center = measure(&controller)
        .map(|l| l.element.center())
        .unwrap_or(Vec2::ZERO);
    tally.record(controller.pointer_move(center, measure(&controller).as_ref()));
    controller.confirm();
    anyhow::ensure!(
        controller.step() == CardStep::Success,
        "replay ended in {}",
        controller.step().name()
    );

    log::info!(
        "[replay] done: moved={} stayed={} inactive={} not_measured={} escapes={}",
        tally.moved,
        tally.stayed,
        tally.inactive,
        tally.not_measured,
        controller.flee_count()
    );
    if let Some(link) = controller.mail_link() {
        println!("{}", link);
    }
    Ok(())
}

// Step machine and flee reactions, driven with fixed layouts.

use card_core::*;
use glam::Vec2;

fn make_controller() -> Controller {
    Controller::new(FleeParams::default(), Placement::from_seed(42))
}

// 640x360 card at (100, 50); 100x48 button centered at (420, 230).
fn card_layout() -> Layout {
    let container = Rect::new(100.0, 50.0, 640.0, 360.0);
    let element = Rect::new(370.0, 206.0, 100.0, 48.0);
    Layout::new(container, element).expect("valid layout")
}

fn pointer_at_distance(layout: &Layout, d: f32) -> Vec2 {
    layout.element.center() + Vec2::new(d, 0.0)
}

#[test]
fn starts_in_prompt_with_no_position() {
    let c = make_controller();
    assert_eq!(c.step(), CardStep::Prompt);
    assert_eq!(c.position(), None);
    assert_eq!(c.flee_count(), 0);
    assert!(c.mail_link().is_none());
}

#[test]
fn pointer_just_inside_threshold_moves_once() {
    let mut c = make_controller();
    let layout = card_layout();
    let r = c.pointer_move(pointer_at_distance(&layout, 59.0), Some(&layout));
    assert!(r.moved());
    assert_eq!(c.flee_count(), 1);

    let before = c.position();
    let r = c.pointer_move(pointer_at_distance(&layout, 61.0), Some(&layout));
    assert!(matches!(r, Reaction::Stayed { .. }));
    assert_eq!(c.flee_count(), 1);
    assert_eq!(c.position(), before);
}

#[test]
fn threshold_is_strict() {
    let mut c = make_controller();
    let layout = card_layout();
    let r = c.pointer_move(pointer_at_distance(&layout, 60.0), Some(&layout));
    assert_eq!(r, Reaction::Stayed { distance: 60.0 });
    assert_eq!(c.position(), None);
}

#[test]
fn distance_is_euclidean() {
    let mut c = make_controller();
    let layout = card_layout();
    // 3-4-5 triangle scaled: 36, 48 -> 60 (stays); 35, 48 -> ~59.4 (moves)
    let center = layout.element.center();
    assert!(!c.pointer_move(center + Vec2::new(36.0, 48.0), Some(&layout)).moved());
    assert!(c.pointer_move(center + Vec2::new(35.0, -48.0), Some(&layout)).moved());
}

#[test]
fn safe_distance_never_changes_position() {
    let mut c = make_controller();
    let layout = card_layout();
    c.touch_start(Some(&layout));
    let settled = c.position();
    for d in [60.0, 61.0, 75.5, 200.0, 1000.0] {
        for _ in 0..10 {
            c.pointer_move(pointer_at_distance(&layout, d), Some(&layout));
        }
    }
    assert_eq!(c.position(), settled);
    assert_eq!(c.flee_count(), 1);
}

#[test]
fn touch_always_moves_in_prompt() {
    let mut c = make_controller();
    let layout = card_layout();
    for i in 1..=5 {
        let r = c.touch_start(Some(&layout));
        assert!(r.moved());
        assert!(r.suppresses_activation());
        assert_eq!(c.flee_count(), i);
    }
}

#[test]
fn enter_and_click_move_instead_of_declining() {
    let mut c = make_controller();
    let layout = card_layout();
    assert!(c.pointer_enter(Some(&layout)).moved());
    assert!(c.evasive_click(Some(&layout)).moved());
    assert_eq!(c.step(), CardStep::Prompt);
    assert_eq!(c.flee_count(), 2);
}

#[test]
fn new_positions_respect_container_bounds() {
    let mut c = make_controller();
    let layout = card_layout();
    let bounds = Bounds::new(layout.container.size, layout.element.size, c.params.padding);
    for _ in 0..500 {
        if let Reaction::Moved(pos) = c.touch_start(Some(&layout)) {
            assert!(bounds.contains(pos), "{pos:?} outside {bounds:?}");
        } else {
            panic!("touch in prompt must move");
        }
    }
}

#[test]
fn missing_measurement_is_a_silent_no_op() {
    let mut c = make_controller();
    assert_eq!(c.pointer_move(Vec2::ZERO, None), Reaction::NotMeasured);
    let r = c.touch_start(None);
    assert_eq!(r, Reaction::NotMeasured);
    assert!(r.suppresses_activation());
    assert_eq!(c.pointer_enter(None), Reaction::NotMeasured);
    assert_eq!(c.evasive_click(None), Reaction::NotMeasured);
    assert_eq!(c.position(), None);
    assert_eq!(c.step(), CardStep::Prompt);

    // Next event with geometry succeeds.
    assert!(c.touch_start(Some(&card_layout())).moved());
}

#[test]
fn accept_then_confirm_reaches_success() {
    let mut c = make_controller();
    assert_eq!(
        c.accept(),
        Transition::Advanced {
            from: CardStep::Prompt,
            to: CardStep::Form
        }
    );
    assert_eq!(c.step(), CardStep::Form);
    assert!(c.mail_link().is_none());

    assert_eq!(
        c.confirm(),
        Transition::Advanced {
            from: CardStep::Form,
            to: CardStep::Success
        }
    );
    assert_eq!(c.step(), CardStep::Success);
    assert_eq!(c.mail_link(), Some(MailTemplate::default().to_uri().as_str()));
}

#[test]
fn flee_is_inactive_after_prompt() {
    let mut c = make_controller();
    let layout = card_layout();
    c.accept();
    let center = layout.element.center();
    assert_eq!(c.pointer_move(center, Some(&layout)), Reaction::Inactive);
    assert_eq!(c.touch_start(Some(&layout)), Reaction::Inactive);
    assert!(!c.touch_start(Some(&layout)).suppresses_activation());

    c.confirm();
    assert_eq!(c.pointer_move(center, Some(&layout)), Reaction::Inactive);
    assert_eq!(c.pointer_enter(Some(&layout)), Reaction::Inactive);
    assert_eq!(c.evasive_click(Some(&layout)), Reaction::Inactive);
    assert_eq!(c.flee_count(), 0);
    assert_eq!(c.position(), None);
}

#[test]
fn steps_never_regress() {
    let mut c = make_controller();
    // Confirm is meaningless before the form is showing.
    assert_eq!(c.confirm(), Transition::Ignored(CardStep::Prompt));
    assert_eq!(c.step(), CardStep::Prompt);

    c.accept();
    assert_eq!(c.accept(), Transition::Ignored(CardStep::Form));
    assert_eq!(c.step(), CardStep::Form);

    c.confirm();
    assert_eq!(c.accept(), Transition::Ignored(CardStep::Success));
    assert_eq!(c.confirm(), Transition::Ignored(CardStep::Success));
    assert_eq!(c.step(), CardStep::Success);
    assert_eq!(CardStep::Success.next(), None);
}

#[test]
fn position_survives_accept() {
    let mut c = make_controller();
    let layout = card_layout();
    c.touch_start(Some(&layout));
    let pos = c.position();
    c.accept();
    assert_eq!(c.position(), pos);
}

#[test]
fn controls_per_step() {
    assert_eq!(
        CardStep::Prompt.controls().as_slice(),
        &[Control::Accept, Control::Evasive]
    );
    assert_eq!(CardStep::Form.controls().as_slice(), &[Control::Confirm]);
    assert!(CardStep::Success.controls().is_empty());
    assert!(CardStep::Prompt.flees());
    assert!(!CardStep::Form.flees());
    assert!(!CardStep::Success.flees());
}

#[test]
fn custom_flee_distance_is_honored() {
    let params = FleeParams {
        flee_distance: 10.0,
        ..FleeParams::default()
    };
    let mut c = Controller::new(params, Placement::from_seed(5));
    let layout = card_layout();
    assert!(!c.pointer_move(pointer_at_distance(&layout, 30.0), Some(&layout)).moved());
    assert!(c.pointer_move(pointer_at_distance(&layout, 9.5), Some(&layout)).moved());
}

#[test]
fn custom_mail_template_is_used_on_confirm() {
    let mail = MailTemplate {
        address: "a@b.c".to_string(),
        subject: "Hi".to_string(),
        body: "x y".to_string(),
    };
    let mut c = make_controller().with_mail(mail);
    c.accept();
    c.confirm();
    assert_eq!(c.mail_link(), Some("mailto:a@b.c?subject=Hi&body=x%20y"));
}

#[test]
fn touch_on_oversized_control_lands_on_padding() {
    let mut c = make_controller();
    let container = Rect::new(0.0, 0.0, 640.0, 360.0);
    let element = Rect::new(0.0, 0.0, 1e12, 48.0);
    let layout = Layout::new(container, element).expect("finite, non-empty rects");
    match c.touch_start(Some(&layout)) {
        Reaction::Moved(pos) => assert_eq!(pos.left, 20),
        other => panic!("expected a move, got {other:?}"),
    }
}

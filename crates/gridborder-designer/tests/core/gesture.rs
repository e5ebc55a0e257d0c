use std::time::Duration;

use gridborder_core::constants::LABEL_GUTTER;
use gridborder_core::{Color, GridError};
use gridborder_designer::gesture::{
    GestureContext, GestureEffect, GestureMachine, GestureState, InputEvent, Modifiers,
    PointerButton, TimerId, TimerKind, Tool, TouchId,
};
use gridborder_designer::model::{HighlightKind, LineKey};
use gridborder_designer::viewport::{ScreenPoint, Viewport};
use gridborder_designer::Document;

const RED: Color = Color::rgb(255, 0, 0);

/// Screen position of grid point `(gx, gy)` at the default 25px cell size.
fn px(gx: f64, gy: f64) -> ScreenPoint {
    ScreenPoint::new(LABEL_GUTTER + gx * 25.0, LABEL_GUTTER + gy * 25.0)
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

struct Fixture {
    document: Document,
    viewport: Viewport,
    machine: GestureMachine,
}

impl Fixture {
    fn new(width: i32, height: i32) -> Self {
        Self {
            document: Document::new(width, height).unwrap(),
            viewport: Viewport::new(400.0, 400.0),
            machine: GestureMachine::default(),
        }
    }

    fn send(&mut self, event: InputEvent) -> Vec<GestureEffect> {
        let mut ctx = GestureContext::new(&mut self.document, &mut self.viewport);
        self.machine.handle(event, &mut ctx)
    }

    fn poll(&mut self, now: Duration) -> Vec<GestureEffect> {
        let mut ctx = GestureContext::new(&mut self.document, &mut self.viewport);
        self.machine.poll_timers(now, &mut ctx)
    }

    fn down(&mut self, position: ScreenPoint, button: PointerButton, modifiers: Modifiers) -> Vec<GestureEffect> {
        self.send(InputEvent::PointerDown {
            position,
            button,
            modifiers,
            at: ms(0),
        })
    }

    fn click(&mut self, position: ScreenPoint, button: PointerButton, modifiers: Modifiers) -> Vec<GestureEffect> {
        let effects = self.down(position, button, modifiers);
        self.send(InputEvent::PointerUp { position, at: ms(10) });
        effects
    }

    fn move_to(&mut self, position: ScreenPoint) -> Vec<GestureEffect> {
        self.send(InputEvent::PointerMove { position, at: ms(5) })
    }

    fn touch_start(&mut self, id: TouchId, position: ScreenPoint, at: u64) -> Vec<GestureEffect> {
        self.send(InputEvent::TouchStart {
            id,
            position,
            at: ms(at),
        })
    }

    fn touch_move(&mut self, id: TouchId, position: ScreenPoint, at: u64) -> Vec<GestureEffect> {
        self.send(InputEvent::TouchMove {
            id,
            position,
            at: ms(at),
        })
    }

    fn touch_end(&mut self, id: TouchId, at: u64) -> Vec<GestureEffect> {
        self.send(InputEvent::TouchEnd { id, at: ms(at) })
    }

    fn tap(&mut self, position: ScreenPoint, start: u64, end: u64) -> Vec<GestureEffect> {
        self.touch_start(1, position, start);
        self.touch_end(1, end)
    }

    fn outline_cell(&mut self, x: i32, y: i32) {
        for key in [
            LineKey::horizontal(x, y),
            LineKey::horizontal(x, y + 1),
            LineKey::vertical(x, y),
            LineKey::vertical(x + 1, y),
        ] {
            self.document.add_line(key).unwrap();
        }
    }
}

fn timer_id(effects: &[GestureEffect], wanted: TimerKind) -> TimerId {
    effects
        .iter()
        .find_map(|effect| match effect {
            GestureEffect::ScheduleTimer { id, kind, .. } if *kind == wanted => Some(*id),
            _ => None,
        })
        .expect("timer was scheduled")
}

fn changed(effects: &[GestureEffect]) -> bool {
    effects.contains(&GestureEffect::DocumentChanged)
}

// Pointer

#[test]
fn test_click_toggles_line() {
    let mut f = Fixture::new(4, 4);
    let effects = f.down(px(1.5, 1.0), PointerButton::Primary, Modifiers::NONE);

    assert!(changed(&effects));
    assert!(f.document.has_line(&LineKey::horizontal(1, 1)));
    assert_eq!(f.machine.state(), GestureState::Drawing);

    f.send(InputEvent::PointerUp {
        position: px(1.5, 1.0),
        at: ms(20),
    });
    assert_eq!(f.machine.state(), GestureState::Idle);
}

#[test]
fn test_repeated_hits_are_noops() {
    let mut f = Fixture::new(4, 4);
    f.down(px(1.5, 1.0), PointerButton::Primary, Modifiers::NONE);
    let effects = f.move_to(px(1.6, 1.0));
    assert!(effects.is_empty());
    assert_eq!(f.document.revision(), 1);
}

#[test]
fn test_horizontal_drag_ignores_column_boundaries() {
    let mut f = Fixture::new(6, 6);
    f.down(px(0.5, 1.0), PointerButton::Primary, Modifiers::NONE);
    f.move_to(px(0.9, 1.0));
    f.move_to(px(1.5, 1.0));
    // Closer to column boundary 2 than to row boundary 1.
    f.move_to(px(2.02, 1.1));
    f.send(InputEvent::PointerUp {
        position: px(2.02, 1.1),
        at: ms(30),
    });

    let stats = f.document.statistics();
    assert_eq!(stats.horizontal, 3);
    assert_eq!(stats.vertical, 0);
    for x in 0..3 {
        assert!(f.document.has_line(&LineKey::horizontal(x, 1)));
    }
}

#[test]
fn test_shift_click_extends() {
    let mut f = Fixture::new(10, 10);
    f.document.add_line(LineKey::horizontal(2, 5)).unwrap();
    f.document.add_line(LineKey::horizontal(7, 5)).unwrap();

    let effects = f.click(px(4.5, 5.0), PointerButton::Primary, Modifiers::shift());
    assert!(changed(&effects));
    assert!(f.document.has_line(&LineKey::horizontal(3, 5)));
    assert!(f.document.has_line(&LineKey::horizontal(4, 5)));
    assert!(!f.document.has_line(&LineKey::horizontal(5, 5)));
    assert_eq!(f.machine.state(), GestureState::Idle);
}

#[test]
fn test_shift_click_without_target_is_silent() {
    let mut f = Fixture::new(10, 10);
    let effects = f.click(px(4.5, 5.0), PointerButton::Primary, Modifiers::shift());
    assert!(effects.is_empty());
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_ctrl_click_fills_closed_cell() {
    let mut f = Fixture::new(4, 4);
    f.outline_cell(1, 1);
    f.document.set_active_color(RED);

    let effects = f.click(px(1.5, 1.5), PointerButton::Primary, Modifiers::ctrl());
    assert!(changed(&effects));
    assert_eq!(f.document.lines().len(), 4);
    assert!(f.document.lines().iter().all(|line| line.color == RED));
}

#[test]
fn test_ctrl_click_on_open_region_reports_failure() {
    let mut f = Fixture::new(5, 5);
    f.outline_cell(1, 1);
    let before = f.document.snapshot();

    let effects = f.click(px(3.5, 3.5), PointerButton::Primary, Modifiers::ctrl());
    assert_eq!(effects.len(), 1);
    assert!(matches!(
        effects[0],
        GestureEffect::FillFailed(GridError::ContourOpen { .. })
    ));
    assert_eq!(f.document.snapshot(), before);
}

#[test]
fn test_secondary_drag_erases() {
    let mut f = Fixture::new(4, 4);
    f.document.add_line(LineKey::horizontal(0, 1)).unwrap();
    f.document.add_line(LineKey::horizontal(1, 1)).unwrap();

    f.down(px(0.5, 1.0), PointerButton::Secondary, Modifiers::NONE);
    assert_eq!(f.machine.state(), GestureState::Erasing);
    f.move_to(px(1.5, 1.0));

    assert!(f.document.lines().is_empty());
}

#[test]
fn test_eraser_tool() {
    let mut f = Fixture::new(4, 4);
    f.document.add_line(LineKey::vertical(2, 2)).unwrap();
    f.machine.set_tool(Tool::Eraser);

    f.click(px(2.0, 2.5), PointerButton::Primary, Modifiers::NONE);
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_row_number_click_toggles_highlight() {
    let mut f = Fixture::new(4, 4);
    let label = ScreenPoint::new(10.0, LABEL_GUTTER + 2.5 * 25.0);

    let effects = f.click(label, PointerButton::Primary, Modifiers::NONE);
    assert!(changed(&effects));
    assert_eq!(f.document.highlight_at(0, 2), Some(Color::BLACK));

    f.click(label, PointerButton::Primary, Modifiers::NONE);
    assert_eq!(f.document.highlight_at(0, 2), None);

    f.click(label, PointerButton::Primary, Modifiers::NONE);
    f.click(label, PointerButton::Secondary, Modifiers::NONE);
    assert!(f.document.highlights().is_empty());
}

#[test]
fn test_column_tail_click_fills_column() {
    let mut f = Fixture::new(4, 4);
    let tail = ScreenPoint::new(LABEL_GUTTER + 3.0 * 25.0, 10.0);

    f.click(tail, PointerButton::Primary, Modifiers::NONE);
    assert_eq!(f.document.statistics().vertical, 4);
    assert!(f.document.has_line(&LineKey::vertical(3, 0)));

    f.click(tail, PointerButton::Secondary, Modifiers::NONE);
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_middle_button_pans() {
    let mut f = Fixture::new(4, 4);
    f.down(ScreenPoint::new(200.0, 200.0), PointerButton::Middle, Modifiers::NONE);
    assert_eq!(f.machine.state(), GestureState::Panning);

    let effects = f.move_to(ScreenPoint::new(210.0, 195.0));
    assert_eq!(effects, vec![GestureEffect::ViewportChanged]);
    assert!((f.viewport.offset_x() - 10.0).abs() < 1e-9);
    assert!((f.viewport.offset_y() + 5.0).abs() < 1e-9);
    assert!(f.document.lines().is_empty());

    f.send(InputEvent::PointerLeave { at: ms(50) });
    assert_eq!(f.machine.state(), GestureState::Idle);
}

#[test]
fn test_wheel_pans_and_zooms() {
    let mut f = Fixture::new(4, 4);
    f.send(InputEvent::Wheel {
        position: ScreenPoint::new(100.0, 100.0),
        delta_x: 0.0,
        delta_y: 20.0,
        modifiers: Modifiers::NONE,
        at: ms(0),
    });
    assert!((f.viewport.offset_y() + 20.0).abs() < 1e-9);

    let effects = f.send(InputEvent::Wheel {
        position: ScreenPoint::new(100.0, 100.0),
        delta_x: 0.0,
        delta_y: -1.0,
        modifiers: Modifiers::ctrl(),
        at: ms(10),
    });
    assert_eq!(effects, vec![GestureEffect::ViewportChanged]);
    assert!((f.viewport.cell_size() - 30.0).abs() < 1e-9);
}

// Touch

#[test]
fn test_touch_start_schedules_timers() {
    let mut f = Fixture::new(4, 4);
    let effects = f.touch_start(1, px(1.5, 1.0), 0);

    assert_eq!(f.machine.state(), GestureState::Pending);
    assert!(effects.contains(&GestureEffect::ScheduleTimer {
        id: timer_id(&effects, TimerKind::DrawDelay),
        kind: TimerKind::DrawDelay,
        deadline: ms(80),
    }));
    assert!(effects.contains(&GestureEffect::ScheduleTimer {
        id: timer_id(&effects, TimerKind::LongPress),
        kind: TimerKind::LongPress,
        deadline: ms(500),
    }));
    assert_eq!(f.machine.next_deadline(), Some(ms(80)));
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_tap_toggles_line() {
    let mut f = Fixture::new(4, 4);
    let effects = f.tap(px(1.5, 1.0), 0, 50);

    assert!(changed(&effects));
    assert!(f.document.has_line(&LineKey::horizontal(1, 1)));
    let cancelled = effects
        .iter()
        .filter(|e| matches!(e, GestureEffect::CancelTimer { .. }))
        .count();
    assert_eq!(cancelled, 2);
    assert_eq!(f.machine.state(), GestureState::Idle);
    assert_eq!(f.machine.next_deadline(), None);
}

#[test]
fn test_touch_drag_draws_after_delay() {
    let mut f = Fixture::new(6, 6);
    let start = f.touch_start(1, px(0.5, 1.0), 0);
    let delay = timer_id(&start, TimerKind::DrawDelay);

    let effects = f.send(InputEvent::TimerFired { id: delay, at: ms(80) });
    assert!(effects.is_empty());
    assert_eq!(f.machine.state(), GestureState::Pending);

    let effects = f.touch_move(1, px(1.5, 1.0), 120);
    assert!(changed(&effects));
    assert_eq!(f.machine.state(), GestureState::Drawing);
    assert!(f.document.has_line(&LineKey::horizontal(0, 1)));
    assert!(f.document.has_line(&LineKey::horizontal(1, 1)));

    f.touch_end(1, 200);
    assert_eq!(f.machine.state(), GestureState::Idle);
}

#[test]
fn test_touch_move_before_delay_waits() {
    let mut f = Fixture::new(6, 6);
    f.touch_start(1, px(0.5, 1.0), 0);

    f.touch_move(1, px(1.5, 1.0), 40);
    assert_eq!(f.machine.state(), GestureState::Pending);
    assert!(f.document.lines().is_empty());

    f.touch_move(1, px(2.5, 1.0), 100);
    assert_eq!(f.machine.state(), GestureState::Drawing);
    assert!(f.document.has_line(&LineKey::horizontal(0, 1)));
    assert!(f.document.has_line(&LineKey::horizontal(2, 1)));
}

#[test]
fn test_long_press_erases() {
    let mut f = Fixture::new(4, 4);
    f.document.add_line(LineKey::horizontal(1, 1)).unwrap();
    f.touch_start(1, px(1.5, 1.0), 0);

    assert!(f.poll(ms(200)).is_empty());
    let effects = f.poll(ms(500));
    assert!(effects.contains(&GestureEffect::Haptic));
    assert!(changed(&effects));
    assert_eq!(f.machine.state(), GestureState::Erasing);
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_moved_touch_draws_instead_of_long_press() {
    let mut f = Fixture::new(6, 6);
    f.touch_start(1, px(0.5, 1.0), 0);
    f.touch_move(1, px(1.5, 1.0), 30);

    let effects = f.poll(ms(500));
    assert!(!effects.contains(&GestureEffect::Haptic));
    assert_eq!(f.machine.state(), GestureState::Drawing);
    assert_eq!(f.document.lines().len(), 2);
}

#[test]
fn test_double_tap_fills() {
    let mut f = Fixture::new(5, 5);
    f.outline_cell(1, 1);
    f.document.set_active_color(RED);

    let first = f.tap(px(1.5, 1.5), 0, 50);
    assert!(!changed(&first));

    let second = f.tap(px(1.6, 1.6), 150, 200);
    assert!(changed(&second));
    assert!(f.document.lines().iter().all(|line| line.color == RED));
}

#[test]
fn test_double_tap_on_open_region_reports_failure() {
    let mut f = Fixture::new(5, 5);
    f.tap(px(3.5, 3.5), 0, 40);
    let effects = f.tap(px(3.5, 3.5), 100, 140);
    assert!(effects
        .iter()
        .any(|e| matches!(e, GestureEffect::FillFailed(GridError::ContourOpen { .. }))));
}

#[test]
fn test_slow_second_tap_is_not_double() {
    let mut f = Fixture::new(5, 5);
    f.outline_cell(1, 1);
    f.document.set_active_color(RED);

    f.tap(px(1.5, 1.5), 0, 50);
    let effects = f.tap(px(1.5, 1.5), 420, 450);
    assert!(!changed(&effects));
    assert!(f.document.lines().iter().all(|line| line.color == Color::BLACK));
}

#[test]
fn test_two_finger_tap_is_undo() {
    let mut f = Fixture::new(4, 4);
    f.touch_start(1, px(1.5, 1.5), 0);
    f.touch_start(2, px(2.5, 2.5), 20);
    assert_eq!(f.machine.state(), GestureState::PanZoom);

    assert!(f.touch_end(1, 100).is_empty());
    let effects = f.touch_end(2, 120);
    assert!(effects.contains(&GestureEffect::Undo));
    assert_eq!(f.machine.state(), GestureState::Idle);
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_three_finger_tap_is_redo() {
    let mut f = Fixture::new(4, 4);
    f.touch_start(1, px(0.5, 0.5), 0);
    f.touch_start(2, px(1.5, 1.5), 10);
    f.touch_start(3, px(2.5, 2.5), 20);
    f.touch_end(3, 100);
    f.touch_end(2, 110);
    let effects = f.touch_end(1, 120);
    assert!(effects.contains(&GestureEffect::Redo));
}

#[test]
fn test_slow_two_finger_touch_is_not_undo() {
    let mut f = Fixture::new(4, 4);
    f.touch_start(1, px(1.5, 1.5), 0);
    f.touch_start(2, px(2.5, 2.5), 20);
    f.touch_end(1, 380);
    let effects = f.touch_end(2, 400);
    assert!(!effects.contains(&GestureEffect::Undo));
}

#[test]
fn test_second_finger_cancels_pending_draw() {
    let mut f = Fixture::new(4, 4);
    f.touch_start(1, px(1.5, 1.0), 0);
    let effects = f.touch_start(2, px(3.0, 3.0), 30);

    let cancelled = effects
        .iter()
        .filter(|e| matches!(e, GestureEffect::CancelTimer { .. }))
        .count();
    assert_eq!(cancelled, 2);
    assert_eq!(f.machine.next_deadline(), None);
    assert_eq!(f.machine.state(), GestureState::PanZoom);

    f.touch_end(2, 60);
    f.touch_end(1, 70);
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_pinch_zooms_around_midpoint() {
    let mut f = Fixture::new(10, 10);
    f.touch_start(1, ScreenPoint::new(100.0, 200.0), 0);
    f.touch_start(2, ScreenPoint::new(200.0, 200.0), 0);
    let anchor = f.viewport.screen_to_grid(ScreenPoint::new(150.0, 200.0));

    let effects = f.touch_move(2, ScreenPoint::new(300.0, 200.0), 50);
    assert_eq!(effects, vec![GestureEffect::ViewportChanged]);
    assert!((f.viewport.cell_size() - 50.0).abs() < 1e-9);

    // The grid point between the fingers follows the new midpoint.
    let after = f.viewport.screen_to_grid(ScreenPoint::new(200.0, 200.0));
    assert!((after.x - anchor.x).abs() < 1e-9);
    assert!((after.y - anchor.y).abs() < 1e-9);

    f.touch_end(1, 100);
    let effects = f.touch_end(2, 120);
    assert!(!effects.contains(&GestureEffect::Undo));
}

#[test]
fn test_stale_timer_is_ignored() {
    let mut f = Fixture::new(4, 4);
    let start = f.touch_start(1, px(1.5, 1.0), 0);
    let long_press = timer_id(&start, TimerKind::LongPress);
    f.touch_end(1, 50);

    let effects = f.send(InputEvent::TimerFired {
        id: long_press,
        at: ms(500),
    });
    assert!(effects.is_empty());
    assert_eq!(f.machine.state(), GestureState::Idle);
}

#[test]
fn test_touch_cancel_returns_to_idle() {
    let mut f = Fixture::new(4, 4);
    f.touch_start(1, px(1.5, 1.0), 0);
    let effects = f.send(InputEvent::TouchCancel { at: ms(30) });

    assert_eq!(f.machine.state(), GestureState::Idle);
    assert_eq!(effects.len(), 2);
    assert!(f.poll(ms(1000)).is_empty());
    assert!(f.document.lines().is_empty());
}

#[test]
fn test_tap_on_column_number_highlights() {
    let mut f = Fixture::new(4, 4);
    f.document.set_active_color(RED);
    f.tap(ScreenPoint::new(LABEL_GUTTER + 1.5 * 25.0, 10.0), 0, 40);
    assert_eq!(f.document.highlight_at(1, 3), Some(RED));
    assert!(f.document.highlights().find(HighlightKind::Col, 1).is_some());
}

#[test]
fn test_cancel_clears_timers() {
    let mut f = Fixture::new(4, 4);
    f.touch_start(1, px(1.5, 1.0), 0);
    let effects = f.machine.cancel();
    assert_eq!(effects.len(), 2);
    assert_eq!(f.machine.state(), GestureState::Idle);
    assert_eq!(f.machine.next_deadline(), None);
}

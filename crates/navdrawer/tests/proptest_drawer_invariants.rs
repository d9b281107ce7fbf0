//! Property-based invariant tests for the drawer state machine.
//!
//! 1. The offset never leaves `[-width(Left), width(Right)]`
//! 2. At rest, `Closed` iff the offset is zero, `Open` iff it is the active
//!    side's open bound
//! 3. The overlay is visible iff the offset is non-zero
//! 4. Two completed toggles of the same side restore the offset
//!
//! Panel widths change mid-sequence (re-measure, content removed and
//! re-added), so every bound is read from the drawer after each step.

use std::time::Duration;

use navdrawer::{
    DrawerConfig, DrawerController, DrawerState, PanelContent, PanelSide, PointerEvent,
    RecordingHost,
};
use proptest::prelude::*;

type Drawer = DrawerController<RecordingHost>;

#[derive(Debug, Clone)]
enum Op {
    Down(f32),
    Move(f32),
    Up(f32),
    Cancel(f32),
    OverlayDown(f32),
    OverlayMove(f32),
    OverlayUp(f32),
    Frame(u64),
    Open(PanelSide),
    Close(PanelSide),
    Toggle(PanelSide),
    Measure(PanelSide, f32),
    Clear(PanelSide),
    SetContent(PanelSide, f32),
}

// ── Strategies ──────────────────────────────────────────────────────────

fn side_strategy() -> impl Strategy<Value = PanelSide> {
    prop_oneof![Just(PanelSide::Left), Just(PanelSide::Right)]
}

fn x_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![
        4 => -200.0f32..600.0,
        1 => Just(f32::NAN),
        1 => Just(f32::INFINITY),
        1 => Just(-1.0e9f32),
    ]
}

fn width_strategy() -> impl Strategy<Value = f32> {
    prop_oneof![
        6 => 1.0f32..400.0,
        1 => Just(0.0f32),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => x_strategy().prop_map(Op::Down),
        6 => x_strategy().prop_map(Op::Move),
        2 => x_strategy().prop_map(Op::Up),
        1 => x_strategy().prop_map(Op::Cancel),
        1 => x_strategy().prop_map(Op::OverlayDown),
        2 => x_strategy().prop_map(Op::OverlayMove),
        1 => x_strategy().prop_map(Op::OverlayUp),
        4 => (0u64..120).prop_map(Op::Frame),
        1 => side_strategy().prop_map(Op::Open),
        1 => side_strategy().prop_map(Op::Close),
        1 => side_strategy().prop_map(Op::Toggle),
        1 => (side_strategy(), width_strategy()).prop_map(|(s, w)| Op::Measure(s, w)),
        1 => side_strategy().prop_map(Op::Clear),
        1 => (side_strategy(), width_strategy()).prop_map(|(s, w)| Op::SetContent(s, w)),
    ]
}

fn drawer(left: f32, right: f32) -> Drawer {
    let mut d = DrawerController::new(DrawerConfig::dual_side(), RecordingHost::new());
    d.set_viewport(400.0, 800.0);
    d.set_content_for(PanelSide::Left, PanelContent::new(()).with_width(left))
        .expect("left enabled");
    d.set_content_for(PanelSide::Right, PanelContent::new(()).with_width(right))
        .expect("right enabled");
    d
}

fn apply(d: &mut Drawer, op: &Op) {
    match *op {
        Op::Down(x) => {
            d.on_pointer(PointerEvent::down(x, 0.0));
        }
        Op::Move(x) => {
            d.on_pointer(PointerEvent::moved(x, 0.0));
        }
        Op::Up(x) => {
            d.on_pointer(PointerEvent::up(x, 0.0));
        }
        Op::Cancel(x) => {
            d.on_pointer(PointerEvent::cancel(x, 0.0));
        }
        Op::OverlayDown(x) => {
            d.on_overlay_pointer(PointerEvent::down(x, 0.0));
        }
        Op::OverlayMove(x) => {
            d.on_overlay_pointer(PointerEvent::moved(x, 0.0));
        }
        Op::OverlayUp(x) => {
            d.on_overlay_pointer(PointerEvent::up(x, 0.0));
        }
        Op::Frame(ms) => {
            d.host_mut().advance(Duration::from_millis(ms));
            d.on_frame();
        }
        Op::Open(side) => d.open(side),
        Op::Close(side) => d.close(side),
        Op::Toggle(side) => d.toggle(side),
        Op::Measure(side, width) => d.on_measure(side, width),
        Op::Clear(side) => {
            d.clear_content(side);
        }
        Op::SetContent(side, width) => {
            d.set_content_for(side, PanelContent::new(()).with_width(width))
                .expect("both sides enabled");
        }
    }
}

fn run_to_rest(d: &mut Drawer) {
    for _ in 0..1_000 {
        d.host_mut().advance(Duration::from_millis(16));
        if !d.on_frame() {
            return;
        }
    }
    panic!("animation never finished");
}

// ═══════════════════════════════════════════════════════════════════════
// 1–3. Offset bounds, rest states, overlay visibility
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offset_and_state_invariants_hold(
        left in 1.0f32..400.0,
        right in 1.0f32..400.0,
        ops in prop::collection::vec(op_strategy(), 1..80),
    ) {
        let mut d = drawer(left, right);
        for op in &ops {
            apply(&mut d, op);

            let offset = d.offset();
            let lo = -d.panel_width(PanelSide::Left);
            let hi = d.panel_width(PanelSide::Right);
            prop_assert!(
                offset >= lo && offset <= hi,
                "offset {} outside [{}, {}] after {:?}", offset, lo, hi, op
            );
            prop_assert_eq!(d.host().overlay_visible, offset != 0.0);
            prop_assert_eq!(d.host().last_offset(), offset);

            match d.state() {
                DrawerState::Closed => {
                    prop_assert_eq!(offset, 0.0);
                    prop_assert_eq!(d.active_side(), None);
                }
                DrawerState::Open => {
                    let side = d.active_side().expect("open drawer has an active side");
                    prop_assert_eq!(
                        offset,
                        side.sign() * d.panel_width(side),
                        "open at a stale bound after {:?}", op
                    );
                }
                DrawerState::Dragging | DrawerState::Animating => {}
            }
        }

        // Whatever happened, releasing and ticking reaches a rest state.
        d.on_pointer(PointerEvent::cancel(0.0, 0.0));
        run_to_rest(&mut d);
        prop_assert!(d.state().is_at_rest());
        prop_assert_eq!(d.is_closed(), d.state() == DrawerState::Closed);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Toggle is its own inverse
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn toggle_twice_is_identity(
        left in 1.0f32..400.0,
        right in 1.0f32..400.0,
        side in side_strategy(),
        start_open in any::<bool>(),
    ) {
        let mut d = drawer(left, right);
        if start_open {
            d.open(side);
            run_to_rest(&mut d);
        }
        let before = d.offset();

        d.toggle(side);
        run_to_rest(&mut d);
        d.toggle(side);
        run_to_rest(&mut d);

        prop_assert_eq!(d.offset(), before);
        prop_assert_eq!(d.is_open(side), start_open);
    }
}

//! Property-based tests for the narrative controller
//!
//! Random action sequences are replayed against a fake timer queue so the
//! overlay timing can be checked without a browser.

use std::time::Duration;

use proptest::prelude::*;

use crate::narrative::controller::{
    NarrativeAction, NarrativeController, NarrativeEffect, NarrativeState, RevealTicket,
};
use crate::narrative::step::Step;

const DELAY: Duration = Duration::from_millis(2_500);

/// Timers fire in due order; superseded ones still fire, like the browser's.
#[derive(Default)]
struct FakeTimers {
    now: Duration,
    queue: Vec<(Duration, RevealTicket)>,
}

impl FakeTimers {
    fn schedule(&mut self, effects: &[NarrativeEffect]) -> usize {
        let mut scheduled = 0;
        for effect in effects {
            if let NarrativeEffect::ScheduleReveal(ticket) = effect {
                self.queue.push((self.now + ticket.delay(), *ticket));
                scheduled += 1;
            }
        }
        scheduled
    }

    fn advance(&mut self, by: Duration, ctrl: &mut NarrativeController) {
        self.now += by;
        self.queue.sort_by_key(|(due, _)| *due);
        let now = self.now;
        let (due, later): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|(at, _)| *at <= now);
        self.queue = later;
        for (_, ticket) in due {
            ctrl.apply(NarrativeAction::RevealOverlay(ticket));
        }
    }
}

#[derive(Debug, Clone)]
enum Input {
    Act(NarrativeAction),
    Wait(u64),
}

fn any_action() -> impl Strategy<Value = NarrativeAction> {
    prop_oneof![
        3 => Just(NarrativeAction::ConfirmPledge),
        3 => prop_oneof![
            Just(String::new()),
            Just("   ".to_string()),
            "[ a-zA-Z]{0,12}",
        ]
        .prop_map(NarrativeAction::SubmitName),
        1 => "[a-zA-Z ]{0,8}".prop_map(NarrativeAction::SetPendingName),
        3 => Just(NarrativeAction::ConfirmSustainable),
        2 => Just(NarrativeAction::DeclineSustainable),
        3 => Just(NarrativeAction::ContinueToFinal),
        1 => Just(NarrativeAction::Reset),
    ]
}

fn any_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        3 => any_action().prop_map(Input::Act),
        1 => (0u64..4_000).prop_map(Input::Wait),
    ]
}

proptest! {
    /// Property: step never goes backwards except through reset
    #[test]
    fn test_step_is_monotonic_until_reset(actions in prop::collection::vec(any_action(), 0..40)) {
        let mut ctrl = NarrativeController::new(DELAY);
        for action in actions {
            let before = ctrl.state().step();
            let is_reset = action == NarrativeAction::Reset;
            ctrl.apply(action);
            let after = ctrl.state().step();
            if is_reset {
                prop_assert_eq!(after, Step::PledgePrompt);
            } else {
                prop_assert!(after >= before);
                prop_assert!(after.index() <= before.index() + 1);
            }
        }
    }

    /// Property: a committed name exists exactly from the sustainability question on
    #[test]
    fn test_name_present_iff_past_name_capture(actions in prop::collection::vec(any_action(), 0..40)) {
        let mut ctrl = NarrativeController::new(DELAY);
        for action in actions {
            ctrl.apply(action);
            let state = ctrl.state();
            if state.step() < Step::SustainabilityQuestion {
                prop_assert_eq!(state.user_name(), "");
            } else {
                prop_assert!(!state.user_name().is_empty());
                prop_assert_eq!(state.user_name(), state.user_name().trim());
            }
        }
    }

    /// Property: reset from anywhere gives back the initial state
    #[test]
    fn test_reset_restores_initial(actions in prop::collection::vec(any_action(), 0..40)) {
        let mut ctrl = NarrativeController::new(DELAY);
        for action in actions {
            ctrl.apply(action);
        }
        ctrl.apply(NarrativeAction::Reset);
        prop_assert_eq!(ctrl.state(), &NarrativeState::default());
    }

    /// Property: the overlay hides on every transition, reappears no
    /// earlier than the delay after the latest one, and always comes back
    #[test]
    fn test_overlay_timing(inputs in prop::collection::vec(any_input(), 0..60)) {
        let mut ctrl = NarrativeController::new(DELAY);
        let mut timers = FakeTimers::default();
        let mut last_transition: Option<Duration> = None;

        for input in inputs {
            match input {
                Input::Act(action) => {
                    let is_reset = action == NarrativeAction::Reset;
                    let visible_before = ctrl.state().overlay_visible();
                    let effects = ctrl.apply(action);
                    if timers.schedule(&effects) > 0 {
                        prop_assert!(!ctrl.state().overlay_visible());
                        last_transition = Some(timers.now);
                    } else if is_reset {
                        prop_assert!(ctrl.state().overlay_visible());
                        last_transition = None;
                    } else {
                        prop_assert_eq!(ctrl.state().overlay_visible(), visible_before);
                    }
                }
                Input::Wait(ms) => {
                    timers.advance(Duration::from_millis(ms), &mut ctrl);
                }
            }
            if let Some(at) = last_transition {
                let elapsed = timers.now - at;
                prop_assert_eq!(ctrl.state().overlay_visible(), elapsed >= DELAY);
            }
        }

        timers.advance(DELAY, &mut ctrl);
        prop_assert!(ctrl.state().overlay_visible());
    }

    /// Property: declining never moves the story or schedules a timer
    #[test]
    fn test_decline_is_inert(prefix in prop::collection::vec(any_action(), 0..20)) {
        let mut ctrl = NarrativeController::new(DELAY);
        for action in prefix {
            ctrl.apply(action);
        }
        let before = ctrl.state().clone();
        let effects = ctrl.apply(NarrativeAction::DeclineSustainable);
        prop_assert_eq!(ctrl.state(), &before);
        prop_assert!(effects
            .iter()
            .all(|e| !matches!(e, NarrativeEffect::ScheduleReveal(_))));
    }
}

#[test]
fn test_fake_timers_reveal_after_delay_only() {
    let mut ctrl = NarrativeController::new(DELAY);
    let mut timers = FakeTimers::default();

    let effects = ctrl.apply(NarrativeAction::ConfirmPledge);
    assert_eq!(timers.schedule(&effects), 1);
    timers.advance(Duration::from_millis(2_499), &mut ctrl);
    assert!(!ctrl.state().overlay_visible());
    timers.advance(Duration::from_millis(1), &mut ctrl);
    assert!(ctrl.state().overlay_visible());
}

#[test]
fn test_rapid_transitions_follow_latest_timer() {
    let mut ctrl = NarrativeController::new(DELAY);
    let mut timers = FakeTimers::default();

    let effects = ctrl.apply(NarrativeAction::ConfirmPledge);
    timers.schedule(&effects);
    timers.advance(Duration::from_millis(2_000), &mut ctrl);
    let effects = ctrl.apply(NarrativeAction::SubmitName("Kojo".into()));
    timers.schedule(&effects);

    // first timer fires here but belongs to a superseded transition
    timers.advance(Duration::from_millis(1_000), &mut ctrl);
    assert!(!ctrl.state().overlay_visible());

    timers.advance(Duration::from_millis(1_500), &mut ctrl);
    assert!(ctrl.state().overlay_visible());
    assert_eq!(ctrl.state().user_name(), "Kojo");
}

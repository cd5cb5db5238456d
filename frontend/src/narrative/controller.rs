use std::time::Duration;

use log::{debug, info};

use super::scene::SceneFlags;
use super::step::Step;

pub const DECLINE_ACKNOWLEDGEMENT: &str = "That's okay! Start thinking about it tomorrow!";

/// Everything the Ocean Rescue view renders from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeState {
    step: Step,
    user_name: String,
    pending_name_input: String,
    overlay_visible: bool,
}

impl Default for NarrativeState {
    fn default() -> Self {
        Self {
            step: Step::PledgePrompt,
            user_name: String::new(),
            pending_name_input: String::new(),
            overlay_visible: true,
        }
    }
}

impl NarrativeState {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn pending_name_input(&self) -> &str {
        &self.pending_name_input
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    pub fn scene(&self) -> SceneFlags {
        SceneFlags::for_step(self.step)
    }
}

/// Handed out by every forward transition. The timer carries it back to
/// [`NarrativeController::reveal_overlay`] once `delay` has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    generation: u64,
    delay: Duration,
}

impl RevealTicket {
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn delay_millis(&self) -> u32 {
        u32::try_from(self.delay().as_millis()).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeAction {
    ConfirmPledge,
    SetPendingName(String),
    SubmitName(String),
    ConfirmSustainable,
    DeclineSustainable,
    ContinueToFinal,
    Reset,
    RevealOverlay(RevealTicket),
}

/// Work the view has to carry out after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NarrativeEffect {
    ScheduleReveal(RevealTicket),
    Acknowledge(&'static str),
}

#[derive(Debug, Clone)]
pub struct NarrativeController {
    state: NarrativeState,
    reveal_delay: Duration,
    generation: u64,
    pending_reveal: Option<u64>,
}

impl NarrativeController {
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            state: NarrativeState::default(),
            reveal_delay,
            generation: 0,
            pending_reveal: None,
        }
    }

    pub fn state(&self) -> &NarrativeState {
        &self.state
    }

    pub fn apply(&mut self, action: NarrativeAction) -> Vec<NarrativeEffect> {
        let ticket = match action {
            NarrativeAction::ConfirmPledge => self.confirm_pledge(),
            NarrativeAction::SetPendingName(input) => {
                self.set_pending_name(input);
                None
            }
            NarrativeAction::SubmitName(name) => self.submit_name(&name),
            NarrativeAction::ConfirmSustainable => self.confirm_sustainable(),
            NarrativeAction::DeclineSustainable => {
                return self
                    .decline_sustainable()
                    .map(NarrativeEffect::Acknowledge)
                    .into_iter()
                    .collect();
            }
            NarrativeAction::ContinueToFinal => self.continue_to_final(),
            NarrativeAction::Reset => {
                self.reset();
                None
            }
            NarrativeAction::RevealOverlay(ticket) => {
                self.reveal_overlay(ticket);
                None
            }
        };
        ticket.map(NarrativeEffect::ScheduleReveal).into_iter().collect()
    }

    pub fn confirm_pledge(&mut self) -> Option<RevealTicket> {
        if !self.at(Step::PledgePrompt, "confirm_pledge") {
            return None;
        }
        self.advance(|_| {})
    }

    pub fn set_pending_name(&mut self, input: String) {
        self.state.pending_name_input = input;
    }

    pub fn can_submit_name(&self) -> bool {
        self.state.step == Step::NameCapture && !self.state.pending_name_input.trim().is_empty()
    }

    /// Blank names are ignored: no step change, no timer, overlay untouched.
    pub fn submit_name(&mut self, name: &str) -> Option<RevealTicket> {
        if !self.at(Step::NameCapture, "submit_name") {
            return None;
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            debug!("ignoring blank name submission");
            return None;
        }
        let committed = trimmed.to_string();
        self.advance(move |state| state.user_name = committed)
    }

    pub fn confirm_sustainable(&mut self) -> Option<RevealTicket> {
        if !self.at(Step::SustainabilityQuestion, "confirm_sustainable") {
            return None;
        }
        self.advance(|_| {})
    }

    /// Dead-end branch: returns the message to show, state is left alone.
    pub fn decline_sustainable(&self) -> Option<&'static str> {
        if !self.at(Step::SustainabilityQuestion, "decline_sustainable") {
            return None;
        }
        info!("player declined the sustainability question");
        Some(DECLINE_ACKNOWLEDGEMENT)
    }

    pub fn continue_to_final(&mut self) -> Option<RevealTicket> {
        if !self.at(Step::ResultReveal, "continue_to_final") {
            return None;
        }
        self.advance(|_| {})
    }

    pub fn reset(&mut self) {
        info!("narrative reset from {}", self.state.step);
        self.state = NarrativeState::default();
        self.generation += 1;
        self.pending_reveal = None;
    }

    /// Shows the card again if `ticket` is from the latest transition.
    /// Returns whether the overlay was revealed.
    pub fn reveal_overlay(&mut self, ticket: RevealTicket) -> bool {
        if self.pending_reveal != Some(ticket.generation) {
            debug!("stale reveal ticket {} ignored", ticket.generation);
            return false;
        }
        self.pending_reveal = None;
        self.state.overlay_visible = true;
        true
    }

    fn at(&self, expected: Step, action: &str) -> bool {
        if self.state.step == expected {
            true
        } else {
            debug!("{} rejected at {}", action, self.state.step);
            false
        }
    }

    /// Hide the card, mutate, move one step forward, then hand out the ticket
    /// that brings the card back.
    fn advance(&mut self, mutate: impl FnOnce(&mut NarrativeState)) -> Option<RevealTicket> {
        let target = self.state.step.next()?;
        self.state.overlay_visible = false;
        mutate(&mut self.state);
        info!("narrative {} -> {}", self.state.step, target);
        self.state.step = target;

        self.generation += 1;
        self.pending_reveal = Some(self.generation);
        Some(RevealTicket {
            generation: self.generation,
            delay: self.reveal_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(2_500);

    fn controller() -> NarrativeController {
        NarrativeController::new(DELAY)
    }

    fn at_step(step: Step) -> NarrativeController {
        let mut ctrl = controller();
        if step >= Step::NameCapture {
            ctrl.confirm_pledge();
        }
        if step >= Step::SustainabilityQuestion {
            ctrl.submit_name("Ama");
        }
        if step >= Step::ResultReveal {
            ctrl.confirm_sustainable();
        }
        if step >= Step::Farewell {
            ctrl.continue_to_final();
        }
        assert_eq!(ctrl.state().step(), step);
        ctrl
    }

    #[test]
    fn starts_in_initial_state() {
        let ctrl = controller();
        assert_eq!(ctrl.state(), &NarrativeState::default());
        assert_eq!(ctrl.state().step(), Step::PledgePrompt);
        assert!(ctrl.state().overlay_visible());
        assert_eq!(ctrl.state().user_name(), "");
    }

    #[test]
    fn transition_hides_overlay_and_moves_step_immediately() {
        let mut ctrl = controller();
        let ticket = ctrl.confirm_pledge().expect("pledge accepted at step 0");
        assert_eq!(ctrl.state().step(), Step::NameCapture);
        assert!(!ctrl.state().overlay_visible());
        assert_eq!(ticket.delay(), DELAY);
        assert_eq!(ticket.delay_millis(), 2_500);

        assert!(ctrl.reveal_overlay(ticket));
        assert!(ctrl.state().overlay_visible());
    }

    #[test]
    fn blank_names_are_ignored() {
        for blank in ["", "   ", "\t\n"] {
            let mut ctrl = at_step(Step::NameCapture);
            let before = ctrl.state().clone();
            assert!(ctrl.submit_name(blank).is_none());
            assert_eq!(ctrl.state(), &before);
        }
    }

    #[test]
    fn name_is_trimmed_and_committed() {
        let mut ctrl = at_step(Step::NameCapture);
        assert!(ctrl.submit_name("  Ama ").is_some());
        assert_eq!(ctrl.state().user_name(), "Ama");
        assert_eq!(ctrl.state().step(), Step::SustainabilityQuestion);
    }

    #[test]
    fn can_submit_follows_pending_input() {
        let mut ctrl = at_step(Step::NameCapture);
        assert!(!ctrl.can_submit_name());
        ctrl.set_pending_name("  ".to_string());
        assert!(!ctrl.can_submit_name());
        ctrl.set_pending_name("Kojo".to_string());
        assert!(ctrl.can_submit_name());
        assert_eq!(ctrl.state().pending_name_input(), "Kojo");
    }

    #[test]
    fn decline_only_acknowledges() {
        let mut ctrl = at_step(Step::SustainabilityQuestion);
        let before = ctrl.state().clone();
        let effects = ctrl.apply(NarrativeAction::DeclineSustainable);
        assert_eq!(effects, vec![NarrativeEffect::Acknowledge(DECLINE_ACKNOWLEDGEMENT)]);
        assert_eq!(ctrl.state(), &before);
    }

    #[test]
    fn decline_works_through_a_shared_borrow() {
        let ctrl = at_step(Step::SustainabilityQuestion);
        let view: &NarrativeController = &ctrl;
        assert_eq!(view.decline_sustainable(), Some(DECLINE_ACKNOWLEDGEMENT));
        assert_eq!(view.state().step(), Step::SustainabilityQuestion);
    }

    #[test]
    fn out_of_step_actions_are_no_ops() {
        let mut ctrl = controller();
        assert!(ctrl.submit_name("Ama").is_none());
        assert!(ctrl.confirm_sustainable().is_none());
        assert!(ctrl.continue_to_final().is_none());
        assert!(ctrl.decline_sustainable().is_none());
        assert_eq!(ctrl.state(), &NarrativeState::default());

        let mut ctrl = at_step(Step::Farewell);
        assert!(ctrl.confirm_pledge().is_none());
        assert_eq!(ctrl.state().step(), Step::Farewell);
    }

    #[test]
    fn superseded_ticket_does_not_reveal() {
        let mut ctrl = controller();
        let first = ctrl.confirm_pledge().unwrap();
        let second = ctrl.submit_name("Kojo").unwrap();

        assert!(!ctrl.reveal_overlay(first));
        assert!(!ctrl.state().overlay_visible());
        assert!(ctrl.reveal_overlay(second));
        assert!(ctrl.state().overlay_visible());
        assert!(!ctrl.reveal_overlay(second), "a ticket reveals at most once");
    }

    #[test]
    fn reset_restores_initial_state_from_every_step() {
        for step in Step::ALL {
            let mut ctrl = at_step(step);
            ctrl.set_pending_name("leftover".to_string());
            ctrl.reset();
            assert_eq!(ctrl.state(), &NarrativeState::default());
        }
    }

    #[test]
    fn reset_invalidates_outstanding_ticket() {
        let mut ctrl = controller();
        let ticket = ctrl.confirm_pledge().unwrap();
        ctrl.reset();
        assert!(!ctrl.reveal_overlay(ticket));
        assert!(ctrl.state().overlay_visible());
    }

    #[test]
    fn apply_reports_timer_for_forward_transitions() {
        let mut ctrl = controller();
        let effects = ctrl.apply(NarrativeAction::ConfirmPledge);
        assert!(matches!(effects.as_slice(), [NarrativeEffect::ScheduleReveal(_)]));

        assert!(ctrl.apply(NarrativeAction::SubmitName(" ".into())).is_empty());
        assert!(ctrl.apply(NarrativeAction::SetPendingName("Kojo".into())).is_empty());
        assert!(ctrl.apply(NarrativeAction::Reset).is_empty());
    }

    #[test]
    fn full_walkthrough() {
        let mut ctrl = controller();

        let t = ctrl.confirm_pledge().unwrap();
        assert_eq!(ctrl.state().step(), Step::NameCapture);
        assert!(!ctrl.state().overlay_visible());
        ctrl.reveal_overlay(t);
        assert!(ctrl.state().overlay_visible());

        let t = ctrl.submit_name("Kojo").unwrap();
        assert_eq!(ctrl.state().step(), Step::SustainabilityQuestion);
        assert_eq!(ctrl.state().user_name(), "Kojo");
        ctrl.reveal_overlay(t);

        let t = ctrl.confirm_sustainable().unwrap();
        assert_eq!(ctrl.state().step(), Step::ResultReveal);
        assert!(ctrl.state().scene().ocean_clean);
        ctrl.reveal_overlay(t);

        ctrl.continue_to_final().unwrap();
        assert_eq!(ctrl.state().step(), Step::Farewell);

        ctrl.reset();
        assert_eq!(ctrl.state(), &NarrativeState::default());
    }
}

use std::fmt;
use thiserror::Error;

/// Stage of the Ocean Rescue story, in the order the player walks through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    /// "Did you sign the #ReDress pledge?"
    #[default]
    PledgePrompt,
    /// Asks for the player's name.
    NameCapture,
    /// Personalised "did you think about sustainability today?"
    SustainabilityQuestion,
    /// A piece of waste disappears and the ocean brightens.
    ResultReveal,
    /// Thank-you card with the replay link.
    Farewell,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepError {
    #[error("step index {0} is outside 0..=4")]
    OutOfRange(u8),
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::PledgePrompt,
        Step::NameCapture,
        Step::SustainabilityQuestion,
        Step::ResultReveal,
        Step::Farewell,
    ];

    pub fn index(self) -> u8 {
        match self {
            Step::PledgePrompt => 0,
            Step::NameCapture => 1,
            Step::SustainabilityQuestion => 2,
            Step::ResultReveal => 3,
            Step::Farewell => 4,
        }
    }

    /// The step a forward transition from here lands on, `None` at the end.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::PledgePrompt => Some(Step::NameCapture),
            Step::NameCapture => Some(Step::SustainabilityQuestion),
            Step::SustainabilityQuestion => Some(Step::ResultReveal),
            Step::ResultReveal => Some(Step::Farewell),
            Step::Farewell => None,
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = StepError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Step::ALL
            .get(value as usize)
            .copied()
            .ok_or(StepError::OutOfRange(value))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::PledgePrompt => "pledge-prompt",
            Step::NameCapture => "name-capture",
            Step::SustainabilityQuestion => "sustainability-question",
            Step::ResultReveal => "result-reveal",
            Step::Farewell => "farewell",
        };
        write!(f, "{} ({})", name, self.index())
    }
}

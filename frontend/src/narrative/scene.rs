use super::step::Step;

/// What the background scene shows for a given step.
///
/// The scene keeps animating while the card is hidden, so these flags change
/// the moment a step is entered, not when the card comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneFlags {
    pub turtle_healed: bool,
    pub name_tag_visible: bool,
    pub trash_cleared: bool,
    pub ocean_clean: bool,
}

impl SceneFlags {
    pub fn for_step(step: Step) -> Self {
        Self {
            turtle_healed: step >= Step::NameCapture,
            name_tag_visible: step >= Step::SustainabilityQuestion,
            trash_cleared: step >= Step::ResultReveal,
            ocean_clean: step >= Step::ResultReveal,
        }
    }

    pub fn ocean_class(&self) -> &'static str {
        if self.ocean_clean {
            "ocean ocean-clean"
        } else {
            "ocean ocean-polluted"
        }
    }

    pub fn turtle_class(&self) -> &'static str {
        if self.turtle_healed {
            "turtle turtle-healed"
        } else {
            "turtle turtle-sick"
        }
    }

    pub fn shirt_class(&self) -> &'static str {
        if self.trash_cleared {
            "waste waste-shirt waste-cleared"
        } else {
            "waste waste-shirt"
        }
    }
}

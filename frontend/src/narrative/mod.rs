//! The Ocean Rescue story: five steps, a name prompt, and a card that hides
//! while the scene changes underneath it.

pub mod controller;
pub mod scene;
pub mod step;

#[cfg(test)]
mod property_tests;

pub use controller::{NarrativeAction, NarrativeController, NarrativeEffect, NarrativeState};
pub use step::Step;

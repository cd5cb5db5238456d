pub mod checklist;

pub use checklist::{PledgeChecklist, PLEDGES};

//! CLI command implementations: `scaffold` and `report`.

pub mod report;
pub mod scaffold;

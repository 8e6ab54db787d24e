pub mod armor;
pub mod config;
pub mod core_api;
pub mod derive;
pub mod record;

pub use armor::Armor;
pub use record::{CharacterRecord, StatKind, Stats};

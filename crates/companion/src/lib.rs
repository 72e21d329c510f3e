//! Companion AI for a third-person game, run headless.
//!
//! The companion follows the player, fetches health packs and deploys as a
//! turret on command. Its decisions come from a [`behaviour_tree`] ticked once
//! per frame by [`CompanionBehavior::update`]; everything the tree touches
//! lives in [`CompanionContext`].

pub mod behavior;
pub mod config;
pub mod context;
pub mod nodes;
pub mod timer;

pub use behavior::{CompanionBehavior, WorldView};
pub use config::{CompanionConfig, ConfigError};
pub use context::{CompanionContext, CompanionEvent, Order, Sound};
pub use timer::CountupTimer;

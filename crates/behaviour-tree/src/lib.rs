//! Reactive behaviour tree engine.
//!
//! A tree of decision and action nodes is ticked once per frame by its owner.
//! Nodes that need several frames return [`Status::Running`] and are resumed
//! on the next tick, so long-running work keeps its progress without threads
//! or async.
//!
//! - **Frame-driven**: one external [`BehaviourTree::tick`] per frame
//! - **Resumable**: composites remember which child was running
//! - **Context-passing**: every tick receives `&mut C`, the owner's domain state
//! - **Single-threaded**: nodes are plain `&mut self` state machines
//!
//! # Architecture
//!
//! - [`Behavior`]: init / update / terminate hooks implemented by every node
//! - [`Node`]: the tick lifecycle around a behaviour and its [`Status`]
//! - Composite nodes: [`Sequence`], [`Selector`], and [`CompositeBehavior`] for custom policies
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - Leaves: any [`Behavior`], plus [`Action`] and [`Shared`]
//! - [`BehaviourTree`]: the root container, itself a [`Behavior`]
//! - [`Builder`]: stack-shaped construction DSL

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod leaf;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use builder::Builder;
pub use composite::{Composite, CompositeBehavior, Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use error::BuildError;
pub use leaf::{Action, Shared};
pub use node::Node;
pub use status::Status;
pub use tree::BehaviourTree;

//! Ports (trait boundaries) between the game core and move sources.
//!
//! The session and self-play loops depend on these traits, and the adapters
//! module provides the implementations.

pub mod agent;

pub use agent::Agent;

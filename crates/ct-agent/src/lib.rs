//! `ct-agent` — agent storage and per-agent health state for `rust_contagion`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`health`]      | `HealthState`, `SpeedClass`                               |
//! | [`store`]       | `AgentStore` (SoA arena), `AgentView`                     |
//! | [`builder`]     | `AgentStoreBuilder` (random or explicit construction)     |
//! | [`error`]       | `AgentError`, `AgentResult`                               |
//!
//! Agents are created once and never removed, so an `AgentId` is a stable
//! index into every array of the store for the whole run.

pub mod builder;
pub mod error;
pub mod health;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::{AgentSpec, AgentStoreBuilder};
pub use error::{AgentError, AgentResult};
pub use health::{HealthState, SpeedClass};
pub use store::{AgentStore, AgentView};

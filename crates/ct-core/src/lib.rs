//! `ct-core` — foundational types for the `rust_contagion` grid epidemic model.
//!
//! This crate is a dependency of every other `ct-*` crate.  It has no `ct-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `GridPoint`, `Offset`, the 3×3 `MOVEMENTS` table      |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` (the single injected random source)          |
//! | [`config`]      | `EpidemicConfig`, `grid_cells`                        |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `EpidemicConfig` from a TOML file.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EpidemicConfig, grid_cells};
pub use error::{CoreError, CoreResult};
pub use geo::{GridPoint, MOVEMENTS, Offset};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{SimClock, Tick};

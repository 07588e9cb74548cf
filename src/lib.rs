#![forbid(unsafe_code)]
#![warn(clippy::missing_docs_in_private_items)]

//! Types for assembling "flow" lighting effects and encoding them into the json body a panel
//! device accepts on its effect write api.

/// Palette colors and their conversions.
pub mod color;

/// The finished effect value and its json schema.
pub mod effect;

/// Builders that produce `Effect` values.
pub mod builder;

/// Deserializable (toml) effect definitions that feed a builder.
pub mod definition;

/// The work behind the command line tool's subcommands.
pub mod cli;

pub use builder::{EffectBuilder, FlowEffectBuilder};
pub use color::Color;
pub use effect::{AnimType, Direction, Effect, WriteCommand, WriteRequest};

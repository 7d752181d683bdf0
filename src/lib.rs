//! Sprite Animation Core (engine-agnostic)
//!
//! This crate covers the three pieces a host game loop cannot improvise:
//! a pure sprite-sheet compositor, a channel-based animation player that
//! derives deterministic frame rectangles from elapsed time, and the
//! discrete input-action state machine that drives it.
//!
//! The host supplies a per-frame delta time and a raw control snapshot.
//! Within one tick, [`ActionDispatcher::tick`] fires action hooks first and
//! each sprite's [`AnimatedSprite::advance`] runs afterwards, so hook effects
//! on the active channel and flip flag are visible to the same tick's
//! playback. Rendering, asset decoding, audio, physics, and persistence live
//! in adapters, never here.

pub mod actions;
pub mod compose;
pub mod data;
pub mod error;
pub mod inputs;
pub mod pixel;
pub mod sprite;
pub mod stored_channels;

// Re-exports for consumers (adapters)
pub use actions::{ActionDispatcher, ActionHandler, ActionState, Hooks, InputAction};
pub use compose::{compose, compose_strip, Placement};
pub use data::{AnimationChannel, FrameRect, Region};
pub use error::CoreError;
pub use inputs::{ControlId, ControlSnapshot};
pub use pixel::{PixelBuffer, Rgba8};
pub use sprite::AnimatedSprite;
pub use stored_channels::{parse_channel_set_json, ChannelSet, ChannelSetError};

//! Setup-time error taxonomy.
//!
//! Every variant here is raised during construction or registration and
//! surfaces to the caller immediately; nothing partially built enters
//! service. Per-tick operations (`advance`, `set_channel`, dispatch) are
//! total over valid state and never construct one of these.

use thiserror::Error;

use crate::inputs::ControlId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("pixel data length {len} does not match {width}x{height}")]
    InvalidBufferGeometry { width: u32, height: u32, len: usize },

    #[error("channel '{channel}' has invalid geometry: {reason}")]
    InvalidChannelGeometry { channel: String, reason: String },

    #[error("duplicate channel name '{0}'")]
    DuplicateChannelName(String),

    #[error("default channel '{0}' is not registered")]
    UnknownDefaultChannel(String),

    #[error("duplicate action name '{0}'")]
    DuplicateActionName(String),

    #[error("control {0:?} is not recognized by this dispatcher")]
    UnknownControl(ControlId),
}

/// Convenience result type used across tickface.
pub type FaceResult<T> = Result<T, FaceError>;

/// Fatal error taxonomy used by setup-time APIs.
///
/// Anything returned as a [`FaceError`] aborts the operation that produced it. Runtime events
/// never surface these; they report a [`FaceWarning`] instead.
#[derive(thiserror::Error, Debug)]
pub enum FaceError {
    /// Malformed static slot descriptors or engine configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Invalid user-provided data (preferences, colors, config values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a drawing surface or rendering backend.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FaceError {
    /// Build a [`FaceError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`FaceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FaceError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FaceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

/// Non-fatal diagnostics produced while handling host events.
///
/// The engine logs these and keeps its previous valid state.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum FaceWarning {
    /// Data update for a slot id that was never registered.
    #[error("unknown complication slot {slot_id}")]
    UnknownSlot { slot_id: u32 },

    /// Data update whose type is not declared by the target slot.
    #[error("complication slot {slot_id} does not support {kind:?}")]
    UnsupportedType {
        slot_id: u32,
        kind: crate::complication::model::ComplicationType,
    },

    /// Surface reported a zero dimension; cached geometry was kept.
    #[error("degenerate surface {width}x{height}")]
    DegenerateSurface { width: u32, height: u32 },

    /// Event delivered after teardown.
    #[error("engine already destroyed")]
    EngineDestroyed,

    /// Capability report carried a second, different set of flags.
    #[error("display capabilities were already reported for this session")]
    CapabilitiesAlreadyReported,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

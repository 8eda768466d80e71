/// Why a [`crate::ViewportState`] transition was rejected.
///
/// Rejections are never fatal: the method-style transitions and [`crate::ViewportState::apply`]
/// log them and keep the previous state. [`crate::ViewportState::try_apply`] returns them so hosts
/// can observe them.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("render range flushed before the first initialize")]
    NotInitialized,

    #[error("scroll event carries a non-finite value (raw offset {0})")]
    NonFiniteOffset(f64),

    #[error("container extent must be finite and non-negative, got {0}")]
    InvalidGeometry(f64),
}

pub type TransitionResult<T> = Result<T, TransitionError>;

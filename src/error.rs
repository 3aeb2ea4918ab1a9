use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation core and its boundary layer.
///
/// Invalid indices and lifecycle misuse fail fast through these variants
/// instead of silently returning degenerate state. Numeric degeneracy
/// (a particle sitting exactly on the attractor) is deliberately *not* an
/// error: it propagates as non-finite floats, which is a documented
/// property of the force model.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid user or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Group index outside `0..count`.
    #[error("group index {index} out of range ({count} live groups)")]
    IndexOutOfRange { index: usize, count: usize },

    /// A boundary call arrived before `init` or after `destroy`.
    #[error("particle system is not initialized")]
    Uninitialized,

    /// `init` was called while an instance already exists.
    #[error("particle system is already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::IndexOutOfRange { index: 7, count: 2 };
        let msg = format!("{e}");
        assert!(msg.contains('7'));
        assert!(msg.contains("out of range"));
    }
}

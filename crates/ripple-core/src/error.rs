use thiserror::Error;

/// Configuration problems found by [`crate::RippleParameters::validate`].
///
/// These never stop rendering: the evaluator treats invalid parameters as a
/// zero field. They exist so a frontend can log a precise reason.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("ripple radius must be positive and finite, got {0}")]
    Radius(f32),
    #[error("ring thickness must be non-negative and finite, got {0}")]
    RingThickness(f32),
    #[error("ripple speed must be non-negative and finite, got {0}")]
    Speed(f32),
    #[error("ripple intensity must be non-negative and finite, got {0}")]
    Intensity(f32),
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse glTF asset: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("asset has no scene to instantiate")]
    NoScene,
    #[error("asset has more surfaces than ids available from {0}")]
    IdOverflow(u32),
}

use crate::constants::*;
use crate::error::ParamError;

/// Which coordinate space a ripple lives in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoordinateMode {
    /// Texture-coordinate space of the surface (2D).
    #[default]
    SurfaceParam,
    /// World space (3D).
    World,
}

/// How the ring radius evolves with the age of an activation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PulsePolicy {
    /// One outward pulse per activation: `age * speed`, never wrapped.
    #[default]
    SinglePulse,
    /// Repeating pulse: `(age * speed) mod radius`.
    Repeating,
}

impl PulsePolicy {
    pub fn toggled(self) -> Self {
        match self {
            PulsePolicy::SinglePulse => PulsePolicy::Repeating,
            PulsePolicy::Repeating => PulsePolicy::SinglePulse,
        }
    }
}

/// What the locator does when a surface asks for [`CoordinateMode::SurfaceParam`]
/// but carries no texture coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParamFallback {
    /// Use the world-space hit point instead.
    #[default]
    World,
    /// Leave the surface idle; hits on it still occlude other surfaces.
    Suppress,
}

/// Look and behavior of one surface's ripple.
///
/// Treated as immutable once handed to the registry: reconfigure by replacing
/// the whole value with [`crate::SurfaceRegistry::set_parameters`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleParameters {
    pub radius: f32,
    pub ring_thickness: f32,
    pub speed: f32,
    pub intensity: f32,
    pub color: [f32; 3],
    pub coordinate_mode: CoordinateMode,
    pub pulse: PulsePolicy,
}

impl Default for RippleParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            ring_thickness: DEFAULT_RING_THICKNESS,
            speed: DEFAULT_SPEED,
            intensity: DEFAULT_INTENSITY,
            color: DEFAULT_COLOR,
            coordinate_mode: CoordinateMode::SurfaceParam,
            pulse: PulsePolicy::SinglePulse,
        }
    }
}

impl RippleParameters {
    pub fn with_mode(self, coordinate_mode: CoordinateMode) -> Self {
        Self {
            coordinate_mode,
            ..self
        }
    }

    pub fn with_pulse(self, pulse: PulsePolicy) -> Self {
        Self { pulse, ..self }
    }

    /// Report the first configuration error, if any.
    ///
    /// A zero ring thickness is accepted; the evaluator floors it.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ParamError::Radius(self.radius));
        }
        if !(self.ring_thickness.is_finite() && self.ring_thickness >= 0.0) {
            return Err(ParamError::RingThickness(self.ring_thickness));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(ParamError::Speed(self.speed));
        }
        if !(self.intensity.is_finite() && self.intensity >= 0.0) {
            return Err(ParamError::Intensity(self.intensity));
        }
        Ok(())
    }

    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Ring thickness floored away from zero.
    #[inline]
    pub fn sigma(&self) -> f32 {
        self.ring_thickness.max(MIN_RING_THICKNESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_validate() {
        assert!(RippleParameters::default().validate().is_ok());
    }

    #[test]
    fn zero_thickness_is_floored_not_rejected() {
        let p = RippleParameters {
            ring_thickness: 0.0,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
        assert_eq!(p.sigma(), MIN_RING_THICKNESS);
    }

    #[test]
    fn negative_values_are_reported() {
        let base = RippleParameters::default();
        assert_eq!(
            RippleParameters { radius: 0.0, ..base }.validate(),
            Err(ParamError::Radius(0.0))
        );
        assert_eq!(
            RippleParameters { speed: -1.0, ..base }.validate(),
            Err(ParamError::Speed(-1.0))
        );
        assert_eq!(
            RippleParameters { ring_thickness: -0.1, ..base }.validate(),
            Err(ParamError::RingThickness(-0.1))
        );
        assert!(!RippleParameters { intensity: -2.0, ..base }.is_renderable());
    }

    #[test]
    fn pulse_policy_toggles_both_ways() {
        let p = PulsePolicy::default();
        assert_eq!(p, PulsePolicy::SinglePulse);
        assert_eq!(p.toggled(), PulsePolicy::Repeating);
        assert_eq!(p.toggled().toggled(), p);
    }
}

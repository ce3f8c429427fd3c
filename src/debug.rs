/// Diagnostic render views toggled from the keyboard.
///
/// These only change what the fragment shader outputs; the ripple state and
/// picking are unaffected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DebugView {
    #[default]
    Shaded,
    RippleOnly,
    Coordinates,
    AreaMask,
}

impl DebugView {
    pub const ALL: [DebugView; 4] = [
        DebugView::Shaded,
        DebugView::RippleOnly,
        DebugView::Coordinates,
        DebugView::AreaMask,
    ];

    /// Views are numbered from "1" in the order of [`Self::ALL`].
    #[inline]
    pub fn for_digit(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        let n = chars.next()?.to_digit(10)? as usize;
        if chars.next().is_some() {
            return None;
        }
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    /// Value of `scene.params.x` in the shader.
    #[inline]
    pub fn shader_index(self) -> u32 {
        match self {
            DebugView::Shaded => 0,
            DebugView::RippleOnly => 1,
            DebugView::Coordinates => 2,
            DebugView::AreaMask => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DebugView::Shaded => "shaded",
            DebugView::RippleOnly => "ripple only",
            DebugView::Coordinates => "coordinates",
            DebugView::AreaMask => "area mask",
        }
    }
}

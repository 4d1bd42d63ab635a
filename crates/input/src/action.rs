use glam::Vec2;

/// A high-level action produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Orbit the camera by a pointer drag, in pixels.
    Orbit(Vec2),
    /// Pan the camera by a pointer drag, in pixels.
    Pan(Vec2),
    /// Dolly by wheel steps. Positive moves toward the target.
    Dolly(f32),
    /// Flip between playing and paused.
    TogglePlayback,
    /// No-op (input that isn't bound to anything).
    Noop,
}

impl Action {
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Noop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_detection() {
        assert!(Action::Noop.is_noop());
        assert!(!Action::TogglePlayback.is_noop());
        assert!(!Action::Orbit(Vec2::ZERO).is_noop());
    }
}

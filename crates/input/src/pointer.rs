use crate::action::Action;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keys the sketch reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Other,
}

/// Turns pointer events into orbit, pan and dolly actions.
///
/// Primary drag orbits, secondary drag pans, the wheel dollies.
#[derive(Debug, Default)]
pub struct PointerMapper {
    held: Option<PointerButton>,
    last: Option<Vec2>,
}

impl PointerMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<PointerButton> {
        self.held
    }

    pub fn press(&mut self, button: PointerButton) {
        if self.held.is_none() {
            self.held = Some(button);
        }
    }

    pub fn release(&mut self, button: PointerButton) {
        if self.held == Some(button) {
            self.held = None;
        }
    }

    /// Cursor moved to `position`. Drags report the delta since the last move.
    pub fn moved(&mut self, position: Vec2) -> Action {
        let delta = self.last.map(|last| position - last);
        self.last = Some(position);

        match (self.held, delta) {
            (Some(PointerButton::Primary), Some(d)) => Action::Orbit(d),
            (Some(PointerButton::Secondary | PointerButton::Middle), Some(d)) => Action::Pan(d),
            _ => Action::Noop,
        }
    }

    /// Cursor left the window; the next move must not produce a jump.
    pub fn left(&mut self) {
        self.last = None;
        self.held = None;
    }

    /// Wheel scrolled by `lines`; positive is away from the user (zoom in).
    pub fn wheel(&self, lines: f32) -> Action {
        if lines == 0.0 || !lines.is_finite() {
            Action::Noop
        } else {
            Action::Dolly(lines)
        }
    }

    pub fn key(&self, key: Key) -> Action {
        match key {
            Key::Space => Action::TogglePlayback,
            Key::Other => Action::Noop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_is_noop() {
        let mut m = PointerMapper::new();
        assert_eq!(m.moved(Vec2::new(10.0, 10.0)), Action::Noop);
        assert_eq!(m.moved(Vec2::new(20.0, 10.0)), Action::Noop);
    }

    #[test]
    fn primary_drag_orbits() {
        let mut m = PointerMapper::new();
        m.moved(Vec2::new(10.0, 10.0));
        m.press(PointerButton::Primary);
        assert_eq!(m.moved(Vec2::new(15.0, 8.0)), Action::Orbit(Vec2::new(5.0, -2.0)));
        m.release(PointerButton::Primary);
        assert_eq!(m.moved(Vec2::new(20.0, 8.0)), Action::Noop);
    }

    #[test]
    fn secondary_drag_pans() {
        let mut m = PointerMapper::new();
        m.moved(Vec2::ZERO);
        m.press(PointerButton::Secondary);
        assert_eq!(m.moved(Vec2::new(0.0, 4.0)), Action::Pan(Vec2::new(0.0, 4.0)));
    }

    #[test]
    fn first_button_wins() {
        let mut m = PointerMapper::new();
        m.press(PointerButton::Primary);
        m.press(PointerButton::Secondary);
        assert_eq!(m.held(), Some(PointerButton::Primary));
        m.release(PointerButton::Secondary);
        assert_eq!(m.held(), Some(PointerButton::Primary));
    }

    #[test]
    fn leaving_resets_drag() {
        let mut m = PointerMapper::new();
        m.moved(Vec2::ZERO);
        m.press(PointerButton::Primary);
        m.left();
        assert_eq!(m.moved(Vec2::new(100.0, 100.0)), Action::Noop);
        assert_eq!(m.held(), None);
    }

    #[test]
    fn wheel_and_keys() {
        let m = PointerMapper::new();
        assert_eq!(m.wheel(1.0), Action::Dolly(1.0));
        assert_eq!(m.wheel(0.0), Action::Noop);
        assert_eq!(m.key(Key::Space), Action::TogglePlayback);
        assert_eq!(m.key(Key::Other), Action::Noop);
    }
}

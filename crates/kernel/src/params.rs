/// Live-tunable parameters bound to the debug panel.
///
/// `progress` is stored as given; the panel clamps to `[0, 1]` before writing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub progress: f32,
    pub is_playing: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            progress: 0.0,
            is_playing: true,
        }
    }
}

use sketch_controller::SceneController;
use sketch_kernel::Clock;

/// One control on the parameter panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Slider {
        name: &'static str,
        min: f32,
        max: f32,
        step: f32,
    },
    Checkbox {
        name: &'static str,
    },
}

impl Control {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Slider { name, .. } | Self::Checkbox { name } => name,
        }
    }
}

/// A change made through the panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEdit {
    Progress(f32),
    Playing(bool),
}

/// Layout and binding rules of the live parameter panel.
#[derive(Debug, Clone)]
pub struct ParameterPanel {
    controls: Vec<Control>,
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self {
            controls: vec![
                Control::Slider {
                    name: "progress",
                    min: 0.0,
                    max: 1.0,
                    step: 0.01,
                },
                Control::Checkbox { name: "isPlaying" },
            ],
        }
    }
}

impl ParameterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.name() == name)
    }

    /// Clamp `value` into `[min, max]` and snap it to the nearest step.
    pub fn quantize(value: f32, min: f32, max: f32, step: f32) -> f32 {
        let clamped = if value.is_nan() { min } else { value.clamp(min, max) };
        if step <= 0.0 {
            return clamped;
        }
        let snapped = min + ((clamped - min) / step).round() * step;
        snapped.clamp(min, max)
    }

    /// Normalize an edit the way the panel widgets would.
    pub fn sanitize(&self, edit: PanelEdit) -> PanelEdit {
        match (edit, self.control("progress")) {
            (PanelEdit::Progress(v), Some(Control::Slider { min, max, step, .. })) => {
                PanelEdit::Progress(Self::quantize(v, *min, *max, *step))
            }
            (edit, _) => edit,
        }
    }

    /// Apply an edit to the controller, returning the value actually written.
    pub fn apply<C: Clock>(&self, edit: PanelEdit, controller: &mut SceneController<C>) -> PanelEdit {
        let edit = self.sanitize(edit);
        match edit {
            PanelEdit::Progress(v) => controller.set_progress(v),
            PanelEdit::Playing(p) => controller.set_playing(p),
        }
        tracing::debug!("panel edit applied: {edit:?}");
        edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_controller::FixedContainer;
    use sketch_kernel::{ManualClock, SceneConfig};
    use sketch_render::DebugTextRenderer;

    #[test]
    fn panel_has_progress_slider_and_playing_checkbox() {
        let panel = ParameterPanel::new();
        assert_eq!(panel.controls().len(), 2);
        assert_eq!(
            panel.control("progress"),
            Some(&Control::Slider {
                name: "progress",
                min: 0.0,
                max: 1.0,
                step: 0.01
            })
        );
        assert_eq!(
            panel.control("isPlaying"),
            Some(&Control::Checkbox { name: "isPlaying" })
        );
    }

    #[test]
    fn quantize_clamps_and_snaps() {
        assert_eq!(ParameterPanel::quantize(1.7, 0.0, 1.0, 0.01), 1.0);
        assert_eq!(ParameterPanel::quantize(-0.3, 0.0, 1.0, 0.01), 0.0);
        assert!((ParameterPanel::quantize(0.456, 0.0, 1.0, 0.01) - 0.46).abs() < 1e-6);
        assert_eq!(ParameterPanel::quantize(f32::NAN, 0.0, 1.0, 0.01), 0.0);
        assert_eq!(ParameterPanel::quantize(0.333, 0.0, 1.0, 0.0), 0.333);
    }

    #[test]
    fn apply_routes_to_controller() {
        let container = FixedContainer::new(800, 600, 1.0);
        let mut c =
            SceneController::with_clock(&container, SceneConfig::default(), ManualClock::new())
                .unwrap();
        c.build_scene();
        let panel = ParameterPanel::new();
        let mut r = DebugTextRenderer::new();

        let written = panel.apply(PanelEdit::Progress(2.0), &mut c);
        assert_eq!(written, PanelEdit::Progress(1.0));
        c.frame_update(&mut r).unwrap();
        assert_eq!(c.scene().mesh.as_ref().unwrap().material.uniforms.progress, 1.0);

        panel.apply(PanelEdit::Playing(false), &mut c);
        assert!(!c.is_playing());
        c.take_frame_request();
        panel.apply(PanelEdit::Playing(true), &mut c);
        assert!(c.take_frame_request());
    }
}

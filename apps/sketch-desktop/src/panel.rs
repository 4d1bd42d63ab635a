use sketch_controller::SceneController;
use sketch_tools::{Control, PanelEdit, ParameterPanel, SceneInspector};

/// Draw the parameter panel and collect the edits made this frame.
pub fn draw(
    ctx: &egui::Context,
    panel: &ParameterPanel,
    controller: &SceneController,
) -> Vec<PanelEdit> {
    let mut edits = Vec::new();

    egui::Window::new("Parameters")
        .default_pos([12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            for control in panel.controls() {
                match *control {
                    Control::Slider {
                        name,
                        min,
                        max,
                        step,
                    } => {
                        let mut value = controller.params().progress;
                        let slider = egui::Slider::new(&mut value, min..=max)
                            .step_by(step as f64)
                            .text(name);
                        if ui.add(slider).changed() {
                            edits.push(PanelEdit::Progress(value));
                        }
                    }
                    Control::Checkbox { name } => {
                        let mut playing = controller.is_playing();
                        if ui.checkbox(&mut playing, name).changed() {
                            edits.push(PanelEdit::Playing(playing));
                        }
                    }
                }
            }

            ui.separator();
            let summary = SceneInspector::summary(controller);
            ui.small(format!(
                "t = {:.2}s  rot = {:.2}",
                summary.elapsed, summary.rotation[0]
            ));
            ui.small(format!(
                "{}x{} @ {:.2}x  aspect {:.3}",
                summary.physical.width, summary.physical.height, summary.pixel_ratio, summary.aspect
            ));
            ui.small("LMB: orbit | RMB: pan | wheel: zoom | Space: play/stop | F1: panel");
        });

    edits
}

use egui_macroquad::egui;
use neuroflap::simulation::bird::Bird;

const INPUT_LABELS: [&str; 5] = ["pipe dist", "gap top", "gap bottom", "height", "velocity"];
const OUTPUT_LABELS: [&str; 2] = ["stay", "jump"];

/// Draws the bird's network with the activations from its last decision.
pub(super) fn draw_neural_network(ui: &mut egui::Ui, bird: &Bird) {
    let inputs = &bird.last_inputs;
    let (hidden, output) = bird.brain.activations(inputs);
    let layers = [&bird.brain.hidden, &bird.brain.output];
    let activations = [inputs.to_vec(), hidden.to_vec(), output.to_vec()];

    ui.label(format!(
        "Age {} ticks, y = {:.0}, velocity = {:.2}",
        bird.age, bird.y, bird.velocity
    ));

    let width = ui.available_width().min(280.0);
    let height = 220.0;
    let (response, painter) = ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let rect = response.rect.shrink2(egui::vec2(0.0, 12.0));
    let layer_spacing = rect.width() / (activations.len() as f32 + 1.0);

    let neuron_pos = |layer_idx: usize, neuron_idx: usize, count: usize| {
        egui::pos2(
            rect.left() + layer_spacing * (layer_idx + 1) as f32,
            rect.top() + rect.height() * (neuron_idx as f32 + 1.0) / (count as f32 + 1.0),
        )
    };

    // Connections first so they sit behind the neurons.
    for (layer_idx, layer) in layers.iter().enumerate() {
        let input_count = activations[layer_idx].len();
        let output_count = activations[layer_idx + 1].len();

        for out_idx in 0..output_count {
            for in_idx in 0..input_count {
                let weight = layer.weights[[out_idx, in_idx]];
                let signal = activations[layer_idx][in_idx] * weight;
                let strength = signal.abs().min(1.0);
                let alpha = (weight.abs().min(1.0) * 120.0).max(strength * 200.0) as u8;
                let color = if weight >= 0.0 {
                    egui::Color32::from_rgba_unmultiplied(0, 200, 80, alpha)
                } else {
                    egui::Color32::from_rgba_unmultiplied(220, 40, 60, alpha)
                };

                painter.line_segment(
                    [
                        neuron_pos(layer_idx, in_idx, input_count),
                        neuron_pos(layer_idx + 1, out_idx, output_count),
                    ],
                    egui::Stroke::new(0.8 + strength * 2.0, color),
                );
            }
        }
    }

    let last_layer = activations.len() - 1;
    for (layer_idx, values) in activations.iter().enumerate() {
        for (neuron_idx, &activation) in values.iter().enumerate() {
            let pos = neuron_pos(layer_idx, neuron_idx, values.len());
            // Inputs are roughly in [0, 1]; sigmoid outputs are in (0, 1).
            let intensity = (activation.clamp(0.0, 1.0) * 255.0) as u8;
            painter.circle_filled(pos, 5.0, egui::Color32::from_rgb(255, intensity, 0));
            painter.circle_stroke(pos, 5.0, egui::Stroke::new(1.5, egui::Color32::WHITE));

            let label = if layer_idx == 0 {
                INPUT_LABELS.get(neuron_idx)
            } else if layer_idx == last_layer {
                OUTPUT_LABELS.get(neuron_idx)
            } else {
                None
            };
            if let Some(label) = label {
                let (offset, align) = if layer_idx == 0 {
                    (-8.0, egui::Align2::RIGHT_CENTER)
                } else {
                    (8.0, egui::Align2::LEFT_CENTER)
                };
                painter.text(
                    pos + egui::vec2(offset, 0.0),
                    align,
                    format!("{label} {activation:.2}"),
                    egui::FontId::proportional(9.0),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}

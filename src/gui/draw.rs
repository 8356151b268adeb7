use super::{App, Config};
use crate::{CellRecord, ColorRole, Command, NamedColor, PlaybackController};
use eframe::egui::{
    pos2, vec2, Button, Color32, ComboBox, Rect, RichText, Sense, Slider, Stroke, Ui,
};

fn fill(color: NamedColor) -> Color32 {
    let [r, g, b] = color.rgb();
    Color32::from_rgb(r, g, b)
}

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button<'static> {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_color_picker(&mut self, ui: &mut Ui, role: ColorRole, label: &str) {
        let current = self.playback.palette().get(role);
        let mut chosen = None;
        ComboBox::from_label(Self::new_text(label))
            .selected_text(current.name())
            .show_ui(ui, |ui| {
                for color in NamedColor::ALL {
                    if ui.selectable_label(color == current, color.name()).clicked() {
                        chosen = Some(color);
                    }
                }
            });
        if let Some(color) = chosen.filter(|&c| c != current) {
            self.apply(Command::SetColor(role, color));
        }
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            ui.set_width(Config::CONTROL_PANEL_WIDTH);

            let mut generation = self.playback.current();
            let generation_slider =
                Slider::new(&mut generation, 0..=self.playback.last_generation())
                    .text(Self::new_text("Generation"));
            if ui.add(generation_slider).changed() {
                self.apply(Command::SetGeneration(generation));
            }

            self.draw_color_picker(ui, ColorRole::Alive, "Color of alive cells");
            self.draw_color_picker(ui, ColorRole::Dead, "Color of dead cells");

            let mut speed = self.playback.speed();
            let speed_slider = Slider::new(
                &mut speed,
                PlaybackController::MIN_SPEED..=PlaybackController::MAX_SPEED,
            )
            .step_by(Config::SPEED_STEP)
            .text(Self::new_text("Speed"));
            if ui.add(speed_slider).changed() {
                self.apply(Command::SetSpeed(speed));
            }

            let text = if self.playback.is_playing() {
                "STOP"
            } else {
                "START"
            };
            if ui.add(Self::new_button(text)).clicked() {
                if self.playback.is_playing() {
                    self.apply(Command::StopPlayback);
                } else {
                    self.apply(Command::StartPlayback);
                }
            }

            ui.add_space(Config::WIDGET_GAP);

            if ui.add(Self::new_button("Open...")).clicked() {
                self.open_file_dialog();
            }
            let source = match &self.source {
                Some(path) => path.display().to_string(),
                None => "random board".to_string(),
            };
            ui.label(Self::new_text(&format!("Source: {}", source)));
            if let Some(err) = &self.load_error {
                ui.label(RichText::new(err).color(Config::ERROR_COLOR));
            }

            ui.add_space(Config::WIDGET_GAP);

            let population = self
                .history
                .get(self.playback.current())
                .map_or(0, |s| s.population());
            ui.label(Self::new_text(&format!(
                "Board: {} x {}\nGenerations: {}\nPopulation: {}",
                self.history.rows(),
                self.history.cols(),
                self.playback.last_generation(),
                population,
            )));
        });
    }

    fn draw_field(&self, ui: &mut Ui) {
        let Some(snapshot) = self.history.get(self.playback.current()) else {
            return;
        };
        let (rows, cols) = (self.history.rows() as f32, self.history.cols() as f32);
        let palette = *self.playback.palette();

        ui.vertical(|ui| {
            ui.label(
                RichText::new(self.playback.title())
                    .color(Config::TEXT_COLOR)
                    .size(Config::TITLE_SIZE),
            );

            let (response, painter) =
                ui.allocate_painter(vec2(Config::PLOT_SIZE, Config::PLOT_SIZE), Sense::hover());
            let plot = response.rect;
            let (cell_w, cell_h) = (plot.width() / cols, plot.height() / rows);
            let cell_size = vec2(
                (cell_w - Config::CELL_SHRINK / cols).max(1.),
                (cell_h - Config::CELL_SHRINK / rows).max(1.),
            );
            // plot coordinates have y pointing up
            let cell_rect = |record: &CellRecord| {
                let center = pos2(
                    plot.left() + record.x as f32 * cell_w,
                    plot.bottom() - record.y as f32 * cell_h,
                );
                Rect::from_center_size(center, cell_size)
            };
            let stroke = Stroke::new(Config::CELL_STROKE_WIDTH, Config::CELL_STROKE_COLOR);

            // dead cells first so alive ones are drawn on top
            for record in snapshot.dead.iter().chain(snapshot.alive.iter()) {
                painter.rect(cell_rect(record), 0., fill(palette.get(record.role)), stroke);
            }

            let hovered = response.hover_pos().and_then(|pos| {
                let col = ((pos.x - plot.left()) / cell_w).floor();
                let row = ((pos.y - plot.top()) / cell_h).floor();
                if col < 0. || row < 0. || col >= cols || row >= rows {
                    return None;
                }
                let (row, col) = (row as usize, col as usize);
                snapshot.records().find(|r| r.row == row && r.col == col)
            });
            if let Some(record) = hovered {
                let highlight = fill(palette.get(record.role)).gamma_multiply(Config::HOVER_ALPHA);
                painter.rect(cell_rect(record), 0., highlight, stroke);
                response.on_hover_ui_at_pointer(|ui| {
                    ui.label(format!("Neighbors: {}", record.neighbors));
                    ui.label(format!("State: {}", record.status.tooltip()));
                });
            }
        });
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            self.draw_controls(ui);

            ui.add_space(Config::WIDGET_GAP);

            self.draw_field(ui);
        });
    }
}

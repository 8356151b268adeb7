use super::Config;
use crate::{load_input, simulate_all, ColorRole, Command, PlaybackController, SnapshotHistory};
use anyhow::{Context as _, Result};
use eframe::egui::{CentralPanel, Context, Frame, Margin};
use egui_file::FileDialog;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub struct App {
    pub(super) history: SnapshotHistory, // Precomputed snapshots, read-only during playback.
    pub(super) playback: PlaybackController, // Selected generation, speed, colors and play state.
    pub(super) source: Option<PathBuf>,  // File the history was loaded from, if any.
    pub(super) open_dialog: Option<FileDialog>, // "Open..." dialog while it is shown.
    pub(super) load_error: Option<String>, // Last failure to load a file, shown in the panel.
}

impl App {
    pub fn new(history: SnapshotHistory, source: Option<PathBuf>) -> Self {
        Self {
            playback: PlaybackController::new(history.last_generation()),
            history,
            source,
            open_dialog: None,
            load_error: None,
        }
    }

    pub(super) fn apply(&mut self, command: Command) {
        self.playback.apply(command, Instant::now());
    }

    pub(super) fn open_file_dialog(&mut self) {
        let mut dialog = FileDialog::open_file(self.source.clone());
        dialog.open();
        self.open_dialog = Some(dialog);
    }

    /// Loads `path` and recomputes the whole history; on failure the current
    /// history stays in place.
    fn load(&mut self, path: &Path) -> Result<()> {
        let input = load_input(path).with_context(|| format!("loading {}", path.display()))?;
        let history = simulate_all(input.grid, input.generations);

        let mut playback = PlaybackController::new(history.last_generation());
        let now = Instant::now();
        playback.apply(Command::SetSpeed(self.playback.speed()), now);
        let palette = *self.playback.palette();
        playback.apply(Command::SetColor(ColorRole::Alive, palette.alive), now);
        playback.apply(Command::SetColor(ColorRole::Dead, palette.dead), now);

        self.history = history;
        self.playback = playback;
        self.source = Some(path.to_path_buf());
        Ok(())
    }

    fn update_file_dialog(&mut self, ctx: &Context) {
        let Some(dialog) = &mut self.open_dialog else {
            return;
        };
        if !dialog.show(ctx).selected() {
            return;
        }
        let picked = dialog.path().map(|p| p.to_path_buf());
        self.open_dialog = None;

        if let Some(path) = picked {
            match self.load(&path) {
                Ok(()) => self.load_error = None,
                Err(err) => {
                    let message = format!("{:#}", err);
                    tracing::warn!("failed to open input: {}", message);
                    self.load_error = Some(message);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.playback.tick(now);

        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                self.draw(ui);
            });

        self.update_file_dialog(ctx);

        if let Some(wait) = self.playback.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }
}

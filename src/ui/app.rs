//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};

use crate::Player;

use super::board_view::{BoardView, Overlay};
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;

/// Main Gomoku application.
///
/// Starts on the mode menu; `state` is `None` until a mode is chosen.
#[derive(Default)]
pub struct GomokuApp {
    state: Option<GameState>,
    board_view: BoardView,
    show_threats: bool,
    confirm_restart: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn render_start_menu(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() / 3.0);
                ui.label(RichText::new("Choose Game Mode").size(24.0).strong());
                ui.add_space(20.0);

                for mode in [GameMode::HumanVsAi, GameMode::AiVsAi] {
                    let button = egui::Button::new(RichText::new(mode.label()).size(18.0))
                        .min_size(Vec2::new(200.0, 40.0));
                    if ui.add(button).clicked() {
                        self.state = Some(GameState::new(mode));
                    }
                    ui.add_space(10.0);
                }
            });
        });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_side_panel(&mut self, ctx: &Context, state: &GameState) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new(state.mode.label()).size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                Self::render_turn_card(ui, state);
                ui.add_space(10.0);

                Self::render_stats_card(ui, state);
                ui.add_space(10.0);

                Self::card_frame().show(ui, |ui| {
                    ui.checkbox(&mut self.show_threats, "Highlight threats");
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("Move #{}", state.game.history().len()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(6.0);
                    if ui.button("Restart Game").clicked() {
                        self.confirm_restart = true;
                    }
                });

                if let Some(result) = &state.game_over {
                    ui.add_space(10.0);
                    Self::render_game_over_card(ui, state.mode, result);
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(STATUS_BUSY));
                }
            });
    }

    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            let player = state.current;
            let symbol = player.stone().symbol();
            ui.label(
                RichText::new(format!("{} ({})", player.label(), symbol))
                    .size(18.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );

            let (status, color) = if state.game_over.is_some() {
                ("Game Over".to_string(), WIN_HIGHLIGHT)
            } else if let Some(elapsed) = state.ai_thinking_elapsed() {
                (format!("AI thinking... {:.1}s", elapsed.as_secs_f32()), STATUS_BUSY)
            } else if player == Player::Human {
                ("Your turn".to_string(), STATUS_OK)
            } else {
                ("Waiting".to_string(), TEXT_SECONDARY)
            };
            ui.label(RichText::new(status).size(12.0).color(color));
        });
    }

    fn render_stats_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("LAST AI MOVE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &state.last_ai_result else {
                ui.label(RichText::new("None yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            if let Some(pos) = result.best_move {
                ui.label(
                    RichText::new(format!("({}, {})", pos.row, pos.col))
                        .size(14.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
            ui.label(
                RichText::new(format!("{:?}, score {}", result.strategy, result.score))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(
                RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_game_over_card(ui: &mut egui::Ui, mode: GameMode, result: &GameResult) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(result.headline(mode))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                });
            });
    }

    /// Confirmation window; true once the player confirms
    fn render_restart_dialog(&mut self, ctx: &Context) -> bool {
        if !self.confirm_restart {
            return false;
        }
        let mut restart = false;
        egui::Window::new("Restart")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to restart?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        log::info!("game restarted");
                        restart = true;
                        self.confirm_restart = false;
                    }
                    if ui.button("No").clicked() {
                        self.confirm_restart = false;
                    }
                });
            });
        restart
    }

    fn render_board(&mut self, ctx: &Context, state: &mut GameState) {
        let threats = if self.show_threats {
            state.threats()
        } else {
            Vec::new()
        };
        let accepts_input = state.game_over.is_none()
            && state.is_human_turn()
            && !self.confirm_restart;

        CentralPanel::default().show(ctx, |ui| {
            let overlay = Overlay {
                last_move: state.game.last_move(),
                winning_line: state.game_over.and_then(|r| r.winning_line),
                threats: &threats,
                hover_stone: accepts_input.then(|| state.current.stone()),
            };

            if let Some(pos) = self.board_view.show(ui, state.game.board(), &overlay) {
                if let Err(msg) = state.try_place_stone(pos) {
                    state.message = Some(msg);
                }
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let Some(mut state) = self.state.take() else {
            self.render_start_menu(ctx);
            return;
        };

        state.check_ai_result();
        if state.is_ai_turn() && state.game_over.is_none() {
            state.start_ai_thinking();
        }

        self.render_side_panel(ctx, &state);
        self.render_board(ctx, &mut state);

        if state.is_ai_thinking() {
            ctx.request_repaint();
        }

        // Dropping the state returns to the start menu
        if !self.render_restart_dialog(ctx) {
            self.state = Some(state);
        }
    }
}

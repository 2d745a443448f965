//! Main application for the Caro GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::config::AppConfig;
use crate::{Difficulty, Mark};

use super::board_view::{BoardView, Overlay};
use super::game_state::{GameMode, GameOutcome, GameState};
use super::theme::*;

/// Board sizes offered in the menu
const BOARD_SIZES: [usize; 4] = [9, 13, 15, 19];

/// Main Caro application
pub struct CaroApp {
    state: GameState,
    board_view: BoardView,
    /// Settings the next new game starts from
    config: AppConfig,
    show_debug: bool,
}

impl CaroApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mode = GameMode::PvE { human_mark: config.human_mark };
        Self {
            state: GameState::new(mode, &config),
            board_view: BoardView::default(),
            config,
            show_debug: false,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        if let GameMode::PvE { human_mark } = mode {
            self.config.human_mark = human_mark;
        }
        self.state = GameState::new(mode, &self.config);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play X)").clicked() {
                        self.new_game(GameMode::PvE { human_mark: Mark::X });
                        ui.close_menu();
                    }
                    if ui.button("New Game (play O)").clicked() {
                        self.new_game(GameMode::PvE { human_mark: Mark::O });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Difficulty", |ui| {
                    for difficulty in Difficulty::ALL {
                        let selected = self.state.difficulty == difficulty;
                        if ui.radio(selected, difficulty.name()).clicked() {
                            // Applies from the bot's next move
                            self.state.difficulty = difficulty;
                            self.config.difficulty = difficulty;
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("Board", |ui| {
                    for size in BOARD_SIZES {
                        let selected = self.config.board_size == size;
                        if ui.radio(selected, format!("{size} x {size}")).clicked() {
                            self.config.board_size = size;
                            self.new_game(self.state.mode);
                            ui.close_menu();
                        }
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_mark } => {
                            format!("PvE - You: {} - Bot: {}", human_mark, self.state.difficulty)
                        }
                        GameMode::PvP => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("CARO").size(22.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!("{0}x{0}", self.state.board.size()))
                            .size(11.0)
                            .color(TEXT_MUTED),
                    );
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.outcome.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &outcome);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            ui.horizontal(|ui| {
                ui.label(RichText::new(turn.to_string()).size(32.0).strong().color(mark_color(turn)));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{} to move", turn)).size(16.0).color(TEXT_PRIMARY));

                    let (status, color) = if self.state.is_ai_thinking() {
                        let secs = self.state.ai_thinking_elapsed().map_or(0.0, |d| d.as_secs_f32());
                        (format!("Bot thinking... {:.1}s", secs), STATUS_BUSY)
                    } else if self.state.is_suggesting() {
                        ("Finding a hint...".to_string(), STATUS_BUSY)
                    } else if self.state.is_game_over() {
                        ("Game over".to_string(), WIN_HIGHLIGHT)
                    } else {
                        let secs = self.state.move_timer.elapsed().as_secs_f32();
                        (format!("Your turn {:.0}s", secs), STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last bot move: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.state.undo();
                }
                if ui.button("New Game").clicked() {
                    self.state.reset();
                }
                if self.state.mode == GameMode::PvP && ui.button("Hint").clicked() {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("BOT DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for bot...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(
                RichText::new(format!("{:?} ({})", result.search_type, result.difficulty))
                    .size(11.0)
                    .strong()
                    .color(STATUS_OK),
            );
            ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("{} nodes in {}ms", result.nodes, result.time_ms))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("-> {}", result.best_move))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: &GameOutcome) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);

                    match outcome {
                        GameOutcome::Win { winner, .. } => {
                            ui.label(
                                RichText::new(format!("{} WINS!", winner))
                                    .size(20.0)
                                    .strong()
                                    .color(mark_color(*winner)),
                            );
                            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_SECONDARY));
                        }
                        GameOutcome::Draw => {
                            ui.label(RichText::new("DRAW").size(20.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("board is full").size(11.0).color(TEXT_SECONDARY));
                        }
                    }

                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(STATUS_WARN)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = match &self.state.outcome {
                Some(GameOutcome::Win { line, .. }) => Some(line.as_slice()),
                _ => None,
            };

            let overlay = Overlay {
                current_turn: self.state.current_turn,
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                winning_line,
                accepts_input: !self.state.is_game_over() && self.state.is_human_turn(),
            };

            let clicked = self.board_view.show(ui, &self.state.board, &overlay);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_mark(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    ///
    /// Keys are read under egui's input lock; the actions run after it is
    /// released.
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        // D - Toggle debug panel
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }

        // H - Hint (PvP mode)
        if hint && self.state.mode == GameMode::PvP {
            self.state.request_suggestion();
        }

        // U - Undo
        if undo {
            self.state.undo();
        }

        // N - New game
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for CaroApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();
        self.state.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the worker thread runs
        if self.state.is_busy() {
            ctx.request_repaint();
        }
    }
}

//! Main application for the Othello GUI

use std::sync::mpsc::Receiver;
use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::rules::legal_moves;
use crate::session::{GameEvent, GameSummary, SessionSnapshot, TurnController, Winner, HUMAN};
use crate::{GameConfig, Player, Pos};

/// Main Othello application
pub struct OthelloApp {
    controller: TurnController,
    events: Receiver<GameEvent>,
    board_view: BoardView,
    last_move: Option<Pos>,
    last_summary: Option<GameSummary>,
    message: Option<String>,
    show_legal_moves: bool,
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: GameConfig) -> Self {
        let (controller, events) = TurnController::with_channel(config);
        Self {
            controller,
            events,
            board_view: BoardView::default(),
            last_move: None,
            last_summary: None,
            message: None,
            show_legal_moves: config.show_legal_moves,
        }
    }

    /// Apply queued controller events to the view state
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "View received event");
            match event {
                GameEvent::MoveApplied { pos, .. } => {
                    self.last_move = Some(pos);
                    self.message = None;
                }
                GameEvent::Passed(player) => {
                    self.message = Some(format!("{} has no legal move and passes", player.color_name()));
                }
                GameEvent::GameOver(summary) => {
                    self.last_summary = Some(summary);
                    self.message = Some(summary.to_string());
                }
                GameEvent::Reset => {
                    self.last_move = None;
                }
                GameEvent::BoardChanged | GameEvent::TurnChanged(_) | GameEvent::AiThinking => {}
            }
        }
    }

    fn new_game(&mut self) {
        self.controller.reset(Instant::now());
        self.message = None;
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_legal_moves, "Legal moves (L)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode = if self.controller.config().strict_end_detection {
                        "You: Black - strict ending"
                    } else {
                        "You: Black"
                    };
                    ui.label(mode);
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context, snapshot: &SessionSnapshot) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui, snapshot);
                ui.add_space(10.0);

                self.render_score_card(ui, snapshot);
                ui.add_space(10.0);

                if let Some(summary) = self.last_summary {
                    self.render_game_over_card(ui, &summary);
                    ui.add_space(10.0);
                }

                if let Some(msg) = &self.message {
                    self.render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_turn_card(&self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        Self::card_frame().show(ui, |ui| {
            let is_black = snapshot.current_player == Player::First;
            let accent = if is_black {
                BLACK_DISK
            } else {
                WHITE_DISK
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(snapshot.current_player.color_name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if snapshot.is_ai_thinking() {
                        ("AI thinking...", STATUS_WARNING)
                    } else if snapshot.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", STATUS_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui, snapshot: &SessionSnapshot) {
        let tally = snapshot.board.tally();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISKS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(format!("Black  {}", tally.black)).size(16.0).color(TEXT_PRIMARY));
            ui.label(RichText::new(format!("White  {}", tally.white)).size(16.0).color(TEXT_PRIMARY));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", snapshot.step_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Result of the last finished game; stays until dismissed
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, summary: &GameSummary) {
        let headline = match summary.winner {
            Winner::Human => "YOU WON!",
            Winner::Ai => "AI WON",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("LAST GAME").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(WIN_HIGHLIGHT));
                    ui.label(
                        RichText::new(format!("Black {} - White {}", summary.black_count, summary.white_count))
                            .size(13.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(RichText::new(format!("({})", summary.reason)).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);
                    if ui.button("Dismiss").clicked() {
                        self.last_summary = None;
                    }
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context, snapshot: &SessionSnapshot) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = snapshot.is_human_turn();
            let hints: Vec<Pos> = if self.show_legal_moves && interactive {
                legal_moves(&snapshot.board, HUMAN).into_iter().map(|m| m.pos).collect()
            } else {
                Vec::new()
            };

            let clicked = self
                .board_view
                .show(ui, &snapshot.board, &hints, self.last_move, interactive);

            if let Some(pos) = clicked {
                if let Err(err) = self.controller.click(pos, Instant::now()) {
                    self.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, toggle_hints) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::L)));

        if new_game {
            self.new_game();
        }
        if toggle_hints {
            self.show_legal_moves = !self.show_legal_moves;
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.controller.tick(now);
        self.drain_events();

        let snapshot = self.controller.snapshot();
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx, &snapshot);
        self.render_board(ctx, &snapshot);

        // Clicks above may have produced events or scheduled the AI
        self.drain_events();
        if let Some(due) = self.controller.next_due() {
            ctx.request_repaint_after(due.saturating_duration_since(Instant::now()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_update_view_state() {
        let mut app = OthelloApp::with_config(GameConfig::instant());
        let now = Instant::now();

        app.controller.click(Pos::new(2, 4), now).unwrap();
        app.drain_events();
        assert_eq!(app.last_move, Some(Pos::new(2, 4)));

        app.controller.tick(now);
        app.drain_events();
        assert!(app.last_move.is_some());
        assert_ne!(app.last_move, Some(Pos::new(2, 4)));
    }

    #[test]
    fn test_new_game_clears_last_move() {
        let mut app = OthelloApp::with_config(GameConfig::instant());
        app.controller.click(Pos::new(2, 4), Instant::now()).unwrap();
        app.drain_events();

        app.new_game();
        app.drain_events();
        assert_eq!(app.last_move, None);
        assert_eq!(app.controller.snapshot().step_count, 0);
    }
}

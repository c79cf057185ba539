//! GUI module for the Othello game
//!
//! Thin egui/eframe view over [`crate::session::TurnController`]: it renders
//! snapshots, forwards clicks and shows game-over summaries as a card.

mod app;
mod board_view;
mod theme;

pub use app::OthelloApp;

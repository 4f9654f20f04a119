//! Menu, pause, score screens and the info panel beside the play area.
//!
//! Screens are painted into the canvas like everything else; none of them
//! perform I/O.

use std::time::Duration;

use crate::entities::{Field, GameLevel, GameState};
use crate::render::{Canvas, Tint};
use crate::score::TopScores;

// ── Info panel ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoPanel {
    pub score: u32,
    pub highest_score: u32,
    pub lives: u8,
    pub level: GameLevel,
    pub timer: Duration,
    pub game_counter: u32,
}

impl InfoPanel {
    pub fn from_state(state: &GameState, game_counter: u32) -> Self {
        InfoPanel {
            score: state.scores.score,
            highest_score: state.scores.highest_score,
            lives: state.scores.lives,
            level: state.level,
            timer: state.timer,
            game_counter,
        }
    }
}

/// Panel to the right of the play area.
pub fn draw_info(canvas: &mut dyn Canvas, field: &Field, info: &InfoPanel, panel_width: i32) {
    let x0 = field.play_width;
    let x1 = field.play_width + panel_width - 1;
    canvas.clear_region(x0, 0, x1, field.play_height - 1);
    canvas.draw_rectangle(x0, 0, x1, field.play_height - 1, Tint::Frame);

    let secs = info.timer.as_secs();
    let lines = [
        (" THUNDER FIGHTER".to_string(), Tint::Highlight),
        (String::new(), Tint::Text),
        (format!(" Game    {:>8}", info.game_counter), Tint::Text),
        (format!(" Score   {:>8}", info.score), Tint::Highlight),
        (format!(" Best    {:>8}", info.highest_score), Tint::Text),
        (format!(" Lives   {:>8}", info.lives), Tint::Player),
        (format!(" Level   {:>8}", info.level.label()), Tint::Enemy),
        (format!(" Time    {:>5}:{:02}", secs / 60, secs % 60), Tint::Text),
        (String::new(), Tint::Text),
        (" Arrows  move".to_string(), Tint::Frame),
        (" Space   fire".to_string(), Tint::Frame),
        (" B       bomb".to_string(), Tint::Frame),
        (" P       pause".to_string(), Tint::Frame),
        (" Q       quit".to_string(), Tint::Frame),
    ];
    for (i, (text, tint)) in lines.iter().enumerate() {
        let y = 1 + i as i32;
        if y >= field.play_height - 1 {
            break;
        }
        canvas.write_text(x0 + 1, y, text, *tint);
    }
}

// ── Screens ───────────────────────────────────────────────────────────────────

pub fn draw_welcome(canvas: &mut dyn Canvas, field: &Field) {
    draw_box(
        canvas,
        field,
        &[
            ("THUNDER FIGHTER".to_string(), Tint::Highlight),
            (String::new(), Tint::Text),
            ("Shoot planes, bomb buildings,".to_string(), Tint::Text),
            ("stay off the rooftops.".to_string(), Tint::Text),
            (String::new(), Tint::Text),
            ("ENTER - Start   T - Top scores".to_string(), Tint::Frame),
        ],
    );
}

pub fn draw_pause(canvas: &mut dyn Canvas, field: &Field) {
    draw_box(
        canvas,
        field,
        &[
            ("PAUSED".to_string(), Tint::Highlight),
            (String::new(), Tint::Text),
            ("ENTER - Resume".to_string(), Tint::Frame),
        ],
    );
}

pub fn draw_high_score(canvas: &mut dyn Canvas, field: &Field, score: u32) {
    draw_box(
        canvas,
        field,
        &[
            ("NEW HIGH SCORE".to_string(), Tint::Highlight),
            (format!("{score:>8}"), Tint::Highlight),
        ],
    );
}

pub fn draw_game_over(canvas: &mut dyn Canvas, field: &Field, score: u32, best: u32) {
    // Sits below the high-score box when both are shown.
    let lines = [
        ("GAME  OVER".to_string(), Tint::Enemy),
        (format!("Final Score: {score:>6}"), Tint::Highlight),
        (format!("Best Score:  {best:>6}"), Tint::Text),
        ("ENTER - Play Again  Q - Quit".to_string(), Tint::Frame),
    ];
    draw_box_at(canvas, field, field.play_height / 2 + 2, &lines);
}

pub fn draw_top_scores(canvas: &mut dyn Canvas, field: &Field, top: &TopScores) {
    let mut lines = vec![("TOP SCORES".to_string(), Tint::Highlight), (String::new(), Tint::Text)];
    if top.entries().is_empty() {
        lines.push(("no finished runs yet".to_string(), Tint::Text));
    }
    for (rank, score) in top.entries().iter().enumerate() {
        lines.push((format!("{}. {score:>8}", rank + 1), Tint::Text));
    }
    lines.push((String::new(), Tint::Text));
    lines.push(("ENTER - Back".to_string(), Tint::Frame));
    draw_box(canvas, field, &lines);
}

fn draw_box(canvas: &mut dyn Canvas, field: &Field, lines: &[(String, Tint)]) {
    let top = (field.play_height - lines.len() as i32 - 2) / 2;
    draw_box_at(canvas, field, top, lines);
}

/// Framed, centred block of text whose top border sits on row `top`.
fn draw_box_at(canvas: &mut dyn Canvas, field: &Field, top: i32, lines: &[(String, Tint)]) {
    let inner = lines
        .iter()
        .map(|(text, _)| text.chars().count() as i32)
        .max()
        .unwrap_or(0)
        + 2;
    let left = (field.play_width - inner - 2) / 2;
    let right = left + inner + 1;
    let bottom = top + lines.len() as i32 + 1;

    canvas.clear_region(left, top, right, bottom);
    canvas.draw_rectangle(left, top, right, bottom, Tint::Frame);
    for (i, (text, tint)) in lines.iter().enumerate() {
        let width = text.chars().count() as i32;
        let x = left + 1 + (inner - width) / 2;
        canvas.write_text(x, top + 1 + i as i32, text, *tint);
    }
}

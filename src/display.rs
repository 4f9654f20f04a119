//! Terminal presentation: flushes the engine's screen buffer through crossterm.
//!
//! No game logic lives here; the buffer is already a complete frame.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};
use thunder_fighter::render::{ScreenBuffer, Tint};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_FRAME: Color = Color::DarkBlue;
const C_TEXT: Color = Color::White;
const C_HIGHLIGHT: Color = Color::Yellow;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Red;
const C_BUILDING: Color = Color::DarkGrey;
const C_SHOT_PLAYER: Color = Color::Green;
const C_SHOT_ENEMY: Color = Color::Magenta;
const C_DEBRIS: Color = Color::DarkYellow;

fn colour(tint: Tint) -> Color {
    match tint {
        Tint::Blank | Tint::Text => C_TEXT,
        Tint::Frame => C_FRAME,
        Tint::Highlight => C_HIGHLIGHT,
        Tint::Player => C_PLAYER,
        Tint::Enemy => C_ENEMY,
        Tint::Building => C_BUILDING,
        Tint::PlayerShot => C_SHOT_PLAYER,
        Tint::EnemyShot => C_SHOT_ENEMY,
        Tint::Debris => C_DEBRIS,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Repaint the whole buffer.  Runs of same-tint cells go out as one print.
pub fn present<W: Write>(out: &mut W, screen: &ScreenBuffer) -> std::io::Result<()> {
    for (y, row) in screen.rows().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;

        let mut run = String::new();
        let mut run_tint: Option<Tint> = None;
        for cell in row {
            if run_tint != Some(cell.tint) {
                flush_run(out, &mut run, run_tint)?;
                run_tint = Some(cell.tint);
            }
            run.push(cell.symbol);
        }
        flush_run(out, &mut run, run_tint)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.height().saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn flush_run<W: Write>(out: &mut W, run: &mut String, tint: Option<Tint>) -> std::io::Result<()> {
    if let Some(tint) = tint {
        if !run.is_empty() {
            out.queue(style::SetForegroundColor(colour(tint)))?;
            out.queue(Print(run.as_str()))?;
        }
    }
    run.clear();
    Ok(())
}

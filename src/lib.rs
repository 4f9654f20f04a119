//! Console side-scrolling shooter: simulation core, screen buffer and the
//! game status state machine.  Terminal I/O lives in the binary.

pub mod actors;
pub mod collision;
pub mod compute;
pub mod config;
pub mod engine;
pub mod entities;
pub mod error;
pub mod projectiles;
pub mod render;
pub mod score;
pub mod screens;
pub mod spawner;

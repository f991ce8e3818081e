#![cfg_attr(not(feature = "std"), no_std)]

mod bitboard;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
pub mod levels;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod menu;
mod pattern;
mod ship;
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::{run_session, show_level};
pub use levels::Level;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env_value};
pub use pattern::*;
pub use ship::*;

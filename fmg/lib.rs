//! Factor-multiple game engine.
//!
//! Two players alternately claim numbers from 1 to 100. After the opening
//! claim, every claim must be a factor or a multiple of the previous one and
//! no number may be claimed twice; a player with no legal claim loses.
//!
//! The engine ([`position`], [`strategy`]) is pure and stateless; [`game`]
//! owns the mutable state of a playing session (board, turn order, the
//! opening rule, win detection) and validates claims before they happen.

#![warn(missing_docs)]

pub mod board;
pub mod game;
pub mod numeric;
pub mod parsing;
pub mod position;
pub mod strategy;

mod display;

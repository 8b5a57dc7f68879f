//! Computer move selection: a greedy one-ply opponent-minimization heuristic.
//!
//! The heuristic looks exactly one reply ahead: it claims the number that
//! leaves its opponent the fewest legal replies and never recurses further,
//! so it can be out-played by deeper search. That is a known limitation of
//! the strategy, not a defect.

use crate::position::Position;

/// Number of legal replies the opponent would have once `candidate` is
/// claimed from `position`.
pub fn opponent_replies(position: Position, candidate: u32) -> usize {
    position.after(candidate).legal_moves().len()
}

/// Pick the legal move that leaves the opponent the fewest replies.
///
/// Candidates are scanned in ascending numeric order and the first minimum
/// is kept, so ties go to the smallest candidate and the choice is fully
/// deterministic. A candidate leaving zero replies wins the game on the spot
/// and needs no special case, zero being the smallest possible count.
///
/// `None` means no legal move exists: the computer has already lost. The
/// caller must end the game on it, never skip the turn.
pub fn select_move(position: Position) -> Option<u32> {
    // min_by_key keeps the earliest of equally minimal elements
    position
        .legal_moves()
        .iter()
        .min_by_key(|&candidate| opponent_replies(position, candidate))
}

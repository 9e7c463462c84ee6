// Simplified terminal condition: the side to move loses once its king has nowhere to go.
// Check is not considered, so this is neither a checkmate nor a stalemate test.

use log::info;

use crate::board::Board;
use crate::event::GameEvent;
use crate::force::Force;
use crate::reachability::reachable_cells;


pub fn is_king_immobile(board: &Board, force: Force) -> bool {
    match board.grid().find_king(force) {
        Some(king_pos) => reachable_cells(board.grid(), king_pos).is_empty(),
        // Without check detection a king can be captured. A captured king cannot move.
        None => true,
    }
}

pub fn check_game_end(board: &Board, force: Force) -> Option<GameEvent> {
    if !is_king_immobile(board, force) {
        return None;
    }
    let message = format!(
        "{} king has no moves left. {} wins!",
        force.name(),
        force.opponent().name()
    );
    info!("Game over: {}", message);
    Some(GameEvent::GameOver { message })
}

//! Terminal-oriented board renderer.
//!
//! Rows are printed from rank 1 at the top, matching square `0 == a1` at the
//! top-left of the position string. Hinted squares show as `.`, and a side
//! panel lists the side to move and the disc counts.

use crate::game_state::board_state::BoardState;
use crate::game_state::game_state::GameState;
use crate::game_state::othello_types::{square_at, Cell, Color, SquareSet};

/// Render `board` with `hints` marked. `side_to_move` is `None` once the game is over.
pub fn render_board(board: &BoardState, side_to_move: Option<Color>, hints: SquareSet) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for col in 0..8u8 {
            let square = square_at(row, col);
            let ch = match board.cell(square) {
                Cell::Black => 'X',
                Cell::White => 'O',
                Cell::Empty if hints.contains(square) => '.',
                Cell::Empty => '-',
            };
            out.push(ch);
            out.push(' ');
        }

        out.push(char::from(b'1' + row));
        out.push_str(&side_panel(board, side_to_move, row));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

pub fn render_game_state(game_state: &GameState) -> String {
    render_board(&game_state.board, game_state.mover(), game_state.legal_moves)
}

fn side_panel(board: &BoardState, side_to_move: Option<Color>, row: u8) -> String {
    match row {
        1 => match side_to_move {
            Some(color) => format!("  {} to move", color.obf_char()),
            None => "  game over".to_owned(),
        },
        3 => format!("  O: discs = {:>2}", board.count(Cell::White)),
        4 => format!("  X: discs = {:>2}", board.count(Cell::Black)),
        5 => format!("    empties = {:>2}", board.count(Cell::Empty)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_renders_hints_and_counts() {
        let game = GameState::new_game();
        let text = render_game_state(&game);
        let lines: Vec<&str> = text.lines().collect();

        println!("\n{text}");

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[3], "3 - - - . - - - - 3");
        assert_eq!(lines[4], "4 - - . O X - - - 4  O: discs =  2");
        assert_eq!(lines[2], "2 - - - - - - - - 2  X to move");
        assert!(lines[6].ends_with("empties = 60"));
    }

    #[test]
    fn finished_game_reports_game_over() {
        let board = BoardState::from_color_bits(!0u64 >> 1, 1 << 63);
        let text = render_board(&board, None, SquareSet::EMPTY);
        assert!(text.contains("game over"));
        assert!(text.contains("X: discs = 63"));
    }
}

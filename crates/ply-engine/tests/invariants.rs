//! Randomized games: state invariants hold after every command.
//!
//! Most steps pick a piece of the side to move and a square from its
//! movement range, so games run deep and include captures. The rest are
//! arbitrary square pairs, which keeps the rejection paths covered.

use proptest::prelude::*;

use ply_core::{Color, Square};
use ply_engine::{CommandError, GameEngine};

/// One step of a random game: piece pick, target pick, and a selector that
/// decides between a live move and an arbitrary square pair.
type Step = (usize, usize, u8, u8, u8);

fn square_name(index: u8) -> String {
    Square::from_index(index % 64)
        .map(|sq| sq.to_string())
        .unwrap_or_default()
}

/// Build a legal move for `color` from the current position, if it has one.
fn live_move(game: &GameEngine, color: Color, piece_pick: usize, target_pick: usize) -> Option<String> {
    let movable: Vec<(Square, _)> = game
        .board()
        .pieces()
        .filter(|piece| piece.color() == color)
        .filter_map(|piece| {
            let range = game.movement_range_at(piece.square())?;
            (!range.is_empty()).then_some((piece.square(), range))
        })
        .collect();
    if movable.is_empty() {
        return None;
    }
    let (from, mut range) = movable[piece_pick % movable.len()];
    let to = range.nth(target_pick % range.len())?;
    Some(format!("{from} {to}"))
}

fn steps() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec((any::<usize>(), any::<usize>(), 0u8..5, 0u8..64, 0u8..64), 1..200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn turn_counter_and_alternation(steps in steps()) {
        let mut game = GameEngine::new();
        let mut successes = 0u32;
        for (piece_pick, target_pick, selector, from, to) in steps {
            let before_player = game.current_player();
            let before_state = game.game_state();
            let picked = if selector > 0 {
                live_move(&game, before_player, piece_pick, target_pick)
            } else {
                None
            };
            let is_live = picked.is_some();
            let command = picked.unwrap_or_else(|| format!("{} {}", square_name(from), square_name(to)));
            match game.interpret_command(&command) {
                Ok(_) => {
                    successes += 1;
                    prop_assert_eq!(game.current_player(), !before_player);
                }
                Err(e) => {
                    prop_assert!(!is_live, "live move {} rejected: {}", command, e);
                    prop_assert_eq!(game.current_player(), before_player);
                    prop_assert_eq!(game.game_state(), before_state);
                }
            }
            prop_assert_eq!(game.current_turn(), 1 + successes);
            let expected = if successes % 2 == 0 { Color::White } else { Color::Black };
            prop_assert_eq!(game.current_player(), expected);
            prop_assert!(game.board().validate().is_ok());
        }
    }

    #[test]
    fn rosters_track_the_board_through_captures(steps in steps()) {
        let mut game = GameEngine::new();
        for (piece_pick, target_pick, selector, from, to) in steps {
            let color = game.current_player();
            let command = if selector > 0 {
                live_move(&game, color, piece_pick, target_pick)
            } else {
                None
            }
            .unwrap_or_else(|| format!("{} {}", square_name(from), square_name(to)));
            let _ = game.interpret_command(&command);

            for color in [Color::White, Color::Black] {
                prop_assert_eq!(
                    game.player(color).piece_count(),
                    game.board().side(color).count() as usize
                );
            }
            let rostered = game.player(Color::White).piece_count()
                + game.player(Color::Black).piece_count();
            prop_assert_eq!(rostered, game.board().len());
        }

        let state = game.game_state();
        let mut squares: Vec<&str> = state.iter().filter_map(|t| t.split(':').nth(1)).collect();
        let total = squares.len();
        squares.sort_unstable();
        squares.dedup();
        prop_assert_eq!(squares.len(), total);
        prop_assert_eq!(total, game.board().len());
    }

    #[test]
    fn off_turn_pieces_are_always_rejected(
        opening in prop::collection::vec((any::<usize>(), any::<usize>()), 0..40),
        piece_pick in any::<usize>(),
        target_pick in any::<usize>(),
        to in 0u8..64,
    ) {
        let mut game = GameEngine::new();
        for (a, b) in opening {
            if let Some(command) = live_move(&game, game.current_player(), a, b) {
                prop_assert!(game.interpret_command(&command).is_ok());
            }
        }
        let waiting = !game.current_player();
        let command = live_move(&game, waiting, piece_pick, target_pick).or_else(|| {
            let own: Vec<Square> = game
                .board()
                .pieces()
                .filter(|piece| piece.color() == waiting)
                .map(|piece| piece.square())
                .collect();
            (!own.is_empty()).then(|| format!("{} {}", own[piece_pick % own.len()], square_name(to)))
        });
        if let Some(command) = command {
            let turn = game.current_turn();
            let state = game.game_state();
            let result = game.interpret_command(&command);
            prop_assert!(
                matches!(result, Err(CommandError::WrongTurn { .. })),
                "{} gave {:?}",
                command,
                result
            );
            prop_assert_eq!(game.current_turn(), turn);
            prop_assert_eq!(game.game_state(), state);
        }
    }
}

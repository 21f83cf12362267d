//! Selection and turn controller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{valid_moves, Board, Color, MoveList, Piece, Square, SquareError};

use super::config::SessionConfig;
use super::ledger::CapturedPieces;
use super::status::GameStatus;

/// What the current player has picked as a move origin.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected { origin: Square, moves: MoveList },
}

impl Selection {
    #[must_use]
    pub fn origin(&self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected { origin, .. } => Some(*origin),
        }
    }

    /// Cached destinations of the selected piece; empty when idle.
    #[must_use]
    pub fn moves(&self) -> &[Square] {
        match self {
            Selection::Idle => &[],
            Selection::Selected { moves, .. } => moves.as_slice(),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// Observable consequence of a square selection, reported in order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Effect {
    /// A piece of the current player was selected (or re-selected).
    Selected { origin: Square, moves: MoveList },
    /// The previous selection was discarded without moving.
    Deselected,
    /// A piece moved, possibly capturing.
    MoveCommitted {
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
    },
    /// A king was captured; the mover wins.
    GameOver { winner: Color },
    /// The turn passed to this color.
    TurnChanged(Color),
}

/// Read-only copy of everything a presentation layer needs.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub board: Board,
    pub selected: Option<Square>,
    pub valid_moves: Vec<Square>,
    pub current_player: Color,
    pub captured: CapturedPieces,
    pub status: GameStatus,
}

/// One two-player game: board, turn, selection, captures and status.
///
/// Owned by the caller; independent sessions share nothing.
///
/// # Example
/// ```
/// use hotseat_chess::board::{Color, Square};
/// use hotseat_chess::game::{Effect, GameSession};
///
/// let mut game = GameSession::new();
/// let e2: Square = "e2".parse().unwrap();
/// let e4: Square = "e4".parse().unwrap();
/// game.on_square_selected(e2);
/// let effects = game.on_square_selected(e4);
/// assert!(effects.contains(&Effect::TurnChanged(Color::Black)));
/// assert_eq!(game.current_player(), Color::Black);
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    current_player: Color,
    selection: Selection,
    captured: CapturedPieces,
    status: GameStatus,
    config: SessionConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A fresh game from the standard position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        GameSession {
            board: Board::new(),
            current_player: Color::White,
            selection: Selection::Idle,
            captured: CapturedPieces::new(),
            status: GameStatus::Playing,
            config,
        }
    }

    /// Start from an arbitrary board with `to_move` on turn.
    ///
    /// `reset` still returns to the standard position.
    #[must_use]
    pub fn with_position(board: Board, to_move: Color) -> Self {
        GameSession {
            board,
            current_player: to_move,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Destinations of the selected piece, for highlighting.
    #[must_use]
    pub fn valid_moves(&self) -> &[Square] {
        self.selection.moves()
    }

    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            selected: self.selection.origin(),
            valid_moves: self.selection.moves().to_vec(),
            current_player: self.current_player,
            captured: self.captured.clone(),
            status: self.status,
        }
    }

    /// Back to the standard position: White to move, nothing selected,
    /// no captures, game in progress. The config is kept.
    pub fn reset(&mut self) {
        self.board.initialize();
        self.selection = Selection::Idle;
        self.captured.clear();
        self.current_player = Color::White;
        self.status = GameStatus::Playing;
        crate::trace_info!("game reset");
    }

    /// Raw-coordinate entry point; rejects coordinates off the board.
    pub fn select(&mut self, row: usize, col: usize) -> Result<Vec<Effect>, SquareError> {
        let sq = Square::try_from((row, col))?;
        Ok(self.on_square_selected(sq))
    }

    /// Feed one square selection through the state machine.
    ///
    /// Returns the resulting effects in order. An empty list means the
    /// event changed nothing, which is always the case once the game is over.
    pub fn on_square_selected(&mut self, sq: Square) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.status.is_over() {
            return effects;
        }

        let clicked = self.board.piece_at(sq);
        let own_piece = clicked.filter(|p| p.color == self.current_player);

        match self.selection {
            Selection::Selected { origin, moves } if moves.contains(sq) => {
                self.selection = Selection::Idle;
                self.commit(origin, sq, &mut effects);
            }
            _ => match own_piece {
                Some(piece) => {
                    let moves = valid_moves(sq, piece, &self.board);
                    crate::trace_debug!(
                        "{} selects {} on {sq} ({} moves)",
                        self.current_player,
                        piece.kind,
                        moves.len()
                    );
                    self.selection = Selection::Selected { origin: sq, moves };
                    effects.push(Effect::Selected { origin: sq, moves });
                }
                None => {
                    if !self.selection.is_idle() {
                        self.selection = Selection::Idle;
                        effects.push(Effect::Deselected);
                    }
                }
            },
        }

        effects
    }

    fn commit(&mut self, from: Square, to: Square, effects: &mut Vec<Effect>) {
        let Some(piece) = self.board.put(from, None) else {
            // The board is private to the session, so the origin still holds the piece.
            return;
        };
        let captured = self.board.put(to, Some(piece));
        let mover = self.current_player;

        crate::trace_debug!("{mover} moves {} {from} -> {to}", piece.kind);
        effects.push(Effect::MoveCommitted {
            from,
            to,
            piece,
            captured,
        });

        if let Some(victim) = captured {
            self.captured.record(mover, victim);
            if victim.is_king() {
                self.status = GameStatus::Won(mover);
                crate::trace_info!("{mover} captured the king on {to}: {}", self.status);
                effects.push(Effect::GameOver { winner: mover });
            }
        }

        if !self.status.is_over() || self.config.flip_turn_on_game_over {
            self.current_player = mover.opponent();
            effects.push(Effect::TurnChanged(self.current_player));
        }
    }
}

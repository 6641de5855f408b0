use serde::Serialize;

pub const TOKENS_PER_PLAYER: usize = 4;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// `1` or `2`, the form the JS layer and snapshots use.
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Index into per-player arrays.
    pub(crate) fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A board coordinate on the 15x15 render grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

/// Where a single token currently is.
///
/// Contract:
/// - `OnMainPath.index` is a shared main-path index, `0..L`.
/// - `OnHomeStretch.index` is into the owner's home stretch, `0..H`;
///   `index == H - 1` means the token is finished and may not move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenLocation {
    InBase,
    OnMainPath { index: usize },
    OnHomeStretch { index: usize },
}

/// One token in a [`GameState`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenState {
    pub player: u8,
    pub slot: u8,
    pub location: TokenLocation,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub tokens: Vec<TokenState>,
    pub current_player: u8,
    /// Contract:
    /// - `1..=6` while a roll is pending and unconsumed.
    /// - `0` when the current player has not rolled yet.
    pub last_roll: u8,
    /// Contract: `0` while the game is running, else the winner's number.
    pub winner: u8,
    pub is_game_over: bool,
}

/// What a die roll led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RollOutcome {
    /// At least one token may move; the roll stays pending.
    MovesAvailable,
    /// No token may move; the turn has already passed.
    NoLegalMoves,
}

/// Result of [`crate::game::GameInstance::roll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollReport {
    pub value: u8,
    /// Slots (0..4) of the current player's movable tokens.
    pub legal_tokens: Vec<usize>,
    pub outcome: RollOutcome,
}

/// What applying a move did, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    Won,
    Captured,
    EnteredHomeStretch,
    Moved,
}

/// Result of [`crate::game::GameInstance::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    /// Player to act next (equals the mover on a bonus turn or a win).
    pub next_player: u8,
    /// Contract:
    /// - `true` iff the roll was a 6 or a capture occurred.
    /// - Always `false` on a winning move; no further turn follows.
    pub bonus_turn: bool,
}

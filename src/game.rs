use thiserror::Error;

use crate::dice::DieRoller;
use crate::path::PathModel;
use crate::types::{
    GameState, MoveOutcome, MoveReport, Player, Position, RollOutcome, RollReport, TOKENS_PER_PLAYER,
    TokenLocation, TokenState,
};

/// Observable engine phase. The turn hand-over itself is transient and
/// never visible from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingRoll,
    RollResolved,
    GameWon,
}

/// Recoverable failures. Every rejected operation leaves the game state
/// unchanged, so the caller may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("token {slot} cannot move with a roll of {roll}")]
    IllegalMove { slot: usize, roll: u8 },
    #[error("no die roll is pending")]
    NoPendingRoll,
    #[error("a roll of {0} is already pending")]
    RollPending(u8),
    #[error("game is already over")]
    GameOver,
}

pub struct GameInstance {
    path: PathModel,
    locations: [[TokenLocation; TOKENS_PER_PLAYER]; 2],
    current_player: Player,
    pending_roll: Option<u8>,
    winner: Option<Player>,
    die: Box<dyn DieRoller>,
}

impl GameInstance {
    /// Fresh game on the standard board: all tokens in their bases,
    /// player 1 to roll.
    pub fn new(die: Box<dyn DieRoller>) -> Self {
        Self::new_with_path(PathModel::standard().clone(), die)
    }

    pub fn new_with_path(path: PathModel, die: Box<dyn DieRoller>) -> Self {
        Self {
            path,
            locations: [[TokenLocation::InBase; TOKENS_PER_PLAYER]; 2],
            current_player: Player::One,
            pending_roll: None,
            winner: None,
            die,
        }
    }

    pub fn path(&self) -> &PathModel {
        &self.path
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn pending_roll(&self) -> Option<u8> {
        self.pending_roll
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn phase(&self) -> Phase {
        if self.winner.is_some() {
            Phase::GameWon
        } else if self.pending_roll.is_some() {
            Phase::RollResolved
        } else {
            Phase::AwaitingRoll
        }
    }

    pub fn token_location(&self, player: Player, slot: usize) -> TokenLocation {
        self.locations[player.idx()][slot]
    }

    /// Draws a die value and computes the current player's legal tokens.
    ///
    /// With no legal token the turn passes to the other player right away;
    /// the pause the UI shows before the hand-over is presentation-side
    /// pacing only.
    pub fn roll(&mut self) -> Result<RollReport, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if let Some(value) = self.pending_roll {
            return Err(GameError::RollPending(value));
        }

        let value = self.die.roll();
        debug_assert!((1..=6).contains(&value), "die returned {value}");

        let legal_tokens = self.legal_slots(self.current_player, value);
        let outcome = if legal_tokens.is_empty() {
            self.current_player = self.current_player.other();
            RollOutcome::NoLegalMoves
        } else {
            self.pending_roll = Some(value);
            RollOutcome::MovesAvailable
        };

        Ok(RollReport {
            value,
            legal_tokens,
            outcome,
        })
    }

    /// Whether the given token slot may move on the pending roll.
    pub fn is_legal(&self, slot: usize) -> bool {
        let Some(roll) = self.pending_roll else {
            return false;
        };
        slot < TOKENS_PER_PLAYER
            && self
                .destination(self.current_player, self.locations[self.current_player.idx()][slot], roll)
                .is_some()
    }

    /// Moves the chosen token per the pending roll, resolves captures on
    /// main-path landings, checks the win condition, then either keeps the
    /// turn (roll of 6 or a capture) or hands it to the other player.
    pub fn apply_move(&mut self, slot: usize) -> Result<MoveReport, GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        let roll = self.pending_roll.ok_or(GameError::NoPendingRoll)?;
        let mover = self.current_player;

        let location = *self
            .locations[mover.idx()]
            .get(slot)
            .ok_or(GameError::IllegalMove { slot, roll })?;
        let target = self
            .destination(mover, location, roll)
            .ok_or(GameError::IllegalMove { slot, roll })?;

        self.locations[mover.idx()][slot] = target;
        self.pending_roll = None;

        let mut captured = false;
        let mut entered_home = false;
        match target {
            TokenLocation::OnMainPath { index } => {
                captured = self.resolve_capture(index, mover);
            }
            TokenLocation::OnHomeStretch { .. } => {
                entered_home = matches!(location, TokenLocation::OnMainPath { .. });
            }
            TokenLocation::InBase => unreachable!("a move never ends in the base"),
        }

        if self.all_home(mover) {
            self.winner = Some(mover);
            return Ok(MoveReport {
                outcome: MoveOutcome::Won,
                next_player: mover.number(),
                bonus_turn: false,
            });
        }

        let bonus_turn = roll == 6 || captured;
        if !bonus_turn {
            self.current_player = mover.other();
        }

        let outcome = if captured {
            MoveOutcome::Captured
        } else if entered_home {
            MoveOutcome::EnteredHomeStretch
        } else {
            MoveOutcome::Moved
        };

        Ok(MoveReport {
            outcome,
            next_player: self.current_player.number(),
            bonus_turn,
        })
    }

    /// Render coordinate of one token, `None` while it sits in its base.
    pub fn token_cell(&self, player: Player, slot: usize) -> Option<Position> {
        match *self.locations[player.idx()].get(slot)? {
            TokenLocation::InBase => None,
            TokenLocation::OnMainPath { index } => Some(self.path.main_cell(index)),
            TokenLocation::OnHomeStretch { index } => Some(self.path.home_cell(player, index)),
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let mut tokens = Vec::with_capacity(2 * TOKENS_PER_PLAYER);
        for player in [Player::One, Player::Two] {
            for (slot, location) in self.locations[player.idx()].iter().enumerate() {
                tokens.push(TokenState {
                    player: player.number(),
                    slot: slot as u8,
                    location: *location,
                });
            }
        }

        GameState {
            tokens,
            current_player: self.current_player.number(),
            last_roll: self.pending_roll.unwrap_or(0),
            winner: self.winner.map_or(0, Player::number),
            is_game_over: self.winner.is_some(),
        }
    }

    fn legal_slots(&self, player: Player, roll: u8) -> Vec<usize> {
        (0..TOKENS_PER_PLAYER)
            .filter(|&slot| {
                self.destination(player, self.locations[player.idx()][slot], roll)
                    .is_some()
            })
            .collect()
    }

    /// Where a token would land, or `None` when the move is illegal.
    /// A finished token (goal cell reached) never has a destination.
    fn destination(&self, player: Player, location: TokenLocation, roll: u8) -> Option<TokenLocation> {
        let steps = roll as usize;
        let home_len = self.path.home_len(player);

        match location {
            TokenLocation::InBase => (roll == 6).then(|| TokenLocation::OnMainPath {
                index: self.path.start_index(player),
            }),
            TokenLocation::OnMainPath { index } => {
                let entry = self.path.home_entry_index(player);
                let target = index + steps;
                if index < entry && entry <= target {
                    // Turning in: must land exactly within the stretch,
                    // no bounce back on overshoot.
                    let steps_in = target - entry;
                    (steps_in < home_len).then_some(TokenLocation::OnHomeStretch { index: steps_in })
                } else if target < self.path.main_path_len() {
                    Some(TokenLocation::OnMainPath { index: target })
                } else {
                    None
                }
            }
            TokenLocation::OnHomeStretch { index } => {
                let target = index + steps;
                (target < home_len).then_some(TokenLocation::OnHomeStretch { index: target })
            }
        }
    }

    /// Evicts every opposing token occupying `target_index` back to its
    /// base, unless the square is safe. Returns whether any eviction
    /// happened. Same-player tokens are never touched.
    fn resolve_capture(&mut self, target_index: usize, moving_player: Player) -> bool {
        if self.path.is_safe(target_index) {
            return false;
        }

        let opponent = moving_player.other();
        let mut evicted = false;
        for location in &mut self.locations[opponent.idx()] {
            if *location == (TokenLocation::OnMainPath { index: target_index }) {
                *location = TokenLocation::InBase;
                evicted = true;
            }
        }
        evicted
    }

    fn all_home(&self, player: Player) -> bool {
        let goal = self.path.home_len(player) - 1;
        self.locations[player.idx()]
            .iter()
            .all(|location| *location == TokenLocation::OnHomeStretch { index: goal })
    }

    #[cfg(test)]
    fn set_locations_for_test(&mut self, player: Player, locations: [TokenLocation; TOKENS_PER_PLAYER]) {
        self.locations[player.idx()] = locations;
    }

    #[cfg(test)]
    fn set_current_player_for_test(&mut self, player: Player) {
        self.current_player = player;
    }
}

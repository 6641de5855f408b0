use once_cell::sync::Lazy;

use crate::types::{Player, Position};

pub const BOARD_DIMENSION: usize = 15;

static STANDARD: Lazy<PathModel> = Lazy::new(build_standard);

/// One player's private route off the main path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTrack {
    /// Main-path index a token exits its base onto.
    pub start_index: usize,
    /// Main-path index where the token turns into the home stretch.
    /// Landing on or past it maps to a home-stretch index.
    pub home_entry_index: usize,
    /// Ordered home-stretch cells; the last one is the goal.
    pub home_stretch: Vec<Position>,
}

/// Static board geometry: the shared main path, both players' tracks and
/// the safe-square set. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathModel {
    main_path: Vec<Position>,
    tracks: [PlayerTrack; 2],
    safe_indices: Vec<usize>,
}

impl PathModel {
    /// Builds a model from explicit geometry.
    ///
    /// Panics when the geometry breaks the engine invariants (indices out
    /// of range, empty home stretch); that is a programming error, not a
    /// recoverable condition.
    pub fn new(
        main_path: Vec<Position>,
        tracks: [PlayerTrack; 2],
        safe_indices: Vec<usize>,
    ) -> Self {
        let len = main_path.len();
        assert!(len > 0, "main path must not be empty");
        for track in &tracks {
            assert!(
                track.start_index < len,
                "start index {} out of range (main path length {len})",
                track.start_index
            );
            assert!(
                track.home_entry_index < len,
                "home entry index {} out of range (main path length {len})",
                track.home_entry_index
            );
            assert!(!track.home_stretch.is_empty(), "home stretch must not be empty");
        }
        for &idx in &safe_indices {
            assert!(idx < len, "safe index {idx} out of range (main path length {len})");
        }

        Self {
            main_path,
            tracks,
            safe_indices,
        }
    }

    /// The standard 15x15 board from the original game.
    pub fn standard() -> &'static PathModel {
        &STANDARD
    }

    pub fn main_path_len(&self) -> usize {
        self.main_path.len()
    }

    /// Home-stretch length for the given player.
    pub fn home_len(&self, player: Player) -> usize {
        self.tracks[player.idx()].home_stretch.len()
    }

    pub fn start_index(&self, player: Player) -> usize {
        self.tracks[player.idx()].start_index
    }

    pub fn home_entry_index(&self, player: Player) -> usize {
        self.tracks[player.idx()].home_entry_index
    }

    /// Render coordinate of a main-path cell.
    pub fn main_cell(&self, index: usize) -> Position {
        self.main_path[index]
    }

    /// Render coordinate of a home-stretch cell.
    pub fn home_cell(&self, player: Player, index: usize) -> Position {
        self.tracks[player.idx()].home_stretch[index]
    }

    /// Whether tokens on this main-path cell are protected from capture.
    pub fn is_safe(&self, index: usize) -> bool {
        self.safe_indices.contains(&index)
    }
}

impl Default for PathModel {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// The original board: a 61-cell perimeter loop addressed linearly.
/// Player 1 enters at index 0 (cell (6,0)) and turns home at index 60
/// (cell (7,0)); player 2 enters at index 30 (cell (7,14)) and turns home
/// at index 60. Both start squares are safe.
fn build_standard() -> PathModel {
    let mut main_path = Vec::with_capacity(61);
    let mut push = |row: usize, col: usize| {
        main_path.push(Position {
            row: row as u8,
            col: col as u8,
        })
    };

    for c in 0..6 {
        push(6, c);
    }
    for r in (0..=6).rev() {
        push(r, 6);
    }
    for c in 6..9 {
        push(0, c);
    }
    for r in 0..6 {
        push(r, 8);
    }
    for c in 8..15 {
        push(6, c);
    }
    for r in 6..9 {
        push(r, 14);
    }
    for c in (9..=14).rev() {
        push(8, c);
    }
    for r in 8..15 {
        push(r, 8);
    }
    for c in (7..=8).rev() {
        push(14, c);
    }
    for r in (9..=14).rev() {
        push(r, 6);
    }
    for c in (1..=6).rev() {
        push(8, c);
    }
    for r in (7..=8).rev() {
        push(r, 0);
    }

    let home_row = 7u8;
    let player_one = PlayerTrack {
        start_index: 0,
        home_entry_index: 60,
        home_stretch: (1..=6).map(|col| Position { row: home_row, col }).collect(),
    };
    let player_two = PlayerTrack {
        start_index: 30,
        home_entry_index: 60,
        home_stretch: (8..=13)
            .rev()
            .map(|col| Position { row: home_row, col })
            .collect(),
    };

    let safe_indices = vec![player_one.start_index, player_two.start_index];

    PathModel::new(main_path, [player_one, player_two], safe_indices)
}

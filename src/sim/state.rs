//! Game state and run tuning
//!
//! One `GameState` lives for the whole process. `reset` starts a new run
//! but keeps the high-score table.

use serde::{Deserialize, Serialize};

use super::scene::SceneId;
use crate::highscores::HighScores;

/// Which part of the level flow the game is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPhase {
    /// Start screen, waiting for the first key
    Ready,
    /// Active gameplay
    Playing,
    /// Loading the next level
    Transitioning(SceneId),
    /// Reloading the initial scene after a restart request
    Restarting,
    /// Game-over screen, waiting for a key to restart
    GameOver,
}

/// Difficulty parameters that change during a run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunTuning {
    /// Run time (ms) of the last food spawn
    pub last_food_spawn_ms: f64,
    /// Added to each new food's fall weight
    pub item_speed_tier: u32,
    /// Added to the player's horizontal speed
    pub player_speed_tier: u32,
}

/// Score at which each tier applies, with its (item, player) speed values
pub const SPEED_TIERS: [(u32, u32, u32); 9] = [
    (10, 1, 1),
    (20, 3, 2),
    (30, 5, 4),
    (40, 7, 6),
    (50, 9, 8),
    (60, 11, 10),
    (70, 13, 12),
    (80, 15, 14),
    (90, 17, 16),
];

impl RunTuning {
    /// Apply the tier whose threshold equals `score` exactly.
    /// Returns true if a tier was applied.
    pub fn apply_score_tier(&mut self, score: u32) -> bool {
        match SPEED_TIERS.iter().find(|(threshold, _, _)| *threshold == score) {
            Some(&(_, item, player)) => {
                self.item_speed_tier = item;
                self.player_speed_tier = player;
                true
            }
            None => false,
        }
    }
}

/// Mutable per-run record shared by all systems
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    /// Game over at zero or below
    pub lives: i32,
    /// Gameplay systems are skipped while set
    pub paused: bool,
    /// Restart requested (input or game-over screen)
    pub restart: bool,
    /// Raised once lives run out
    pub game_over: bool,
    pub phase: LevelPhase,
    pub food_spawn_interval_ms: f64,
    pub tuning: RunTuning,
    /// Ticks left showing the hurt sprite
    pub hurt_ticks: u32,
    /// Persisted across runs
    pub highscores: HighScores,
    starting_lives: i32,
}

impl GameState {
    pub fn new(starting_lives: i32, food_spawn_interval_ms: f64, highscores: HighScores) -> Self {
        Self {
            score: 0,
            lives: starting_lives,
            paused: true,
            restart: false,
            game_over: false,
            phase: LevelPhase::Ready,
            food_spawn_interval_ms,
            tuning: RunTuning::default(),
            hurt_ticks: 0,
            highscores,
            starting_lives,
        }
    }

    /// Start a fresh run. Pause and phase are left to the caller.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.starting_lives;
        self.restart = false;
        self.game_over = false;
        self.tuning = RunTuning::default();
        self.hurt_ticks = 0;
    }

    /// Leave a pause and resume gameplay
    pub fn resume_play(&mut self) {
        self.paused = false;
        self.phase = LevelPhase::Playing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_exact_thresholds_only() {
        for score in 0..=100 {
            let mut tuning = RunTuning::default();
            let applied = tuning.apply_score_tier(score);
            assert_eq!(applied, score != 100 && score >= 10 && score % 10 == 0, "score {score}");
        }
    }

    #[test]
    fn test_tier_values() {
        let mut tuning = RunTuning::default();
        tuning.apply_score_tier(10);
        assert_eq!((tuning.item_speed_tier, tuning.player_speed_tier), (1, 1));
        tuning.apply_score_tier(50);
        assert_eq!((tuning.item_speed_tier, tuning.player_speed_tier), (9, 8));
        tuning.apply_score_tier(90);
        assert_eq!((tuning.item_speed_tier, tuning.player_speed_tier), (17, 16));
    }

    #[test]
    fn test_tiers_monotonic() {
        for pair in SPEED_TIERS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 <= pair[1].1);
            assert!(pair[0].2 <= pair[1].2);
        }
    }

    #[test]
    fn test_reset_keeps_highscores() {
        let mut scores = HighScores::new();
        scores.record("ada", 12);
        let mut state = GameState::new(3, 1000.0, scores);
        state.score = 42;
        state.lives = -1;
        state.game_over = true;
        state.restart = true;
        state.tuning.item_speed_tier = 5;

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!(!state.game_over);
        assert!(!state.restart);
        assert_eq!(state.tuning, RunTuning::default());
        assert_eq!(state.highscores.get("ada"), Some(12));
    }
}

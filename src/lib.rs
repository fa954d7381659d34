//! Cupcake Catcher - A falling-food arcade game
//!
//! Core modules:
//! - `sim`: Entity-component simulation (entities, collisions, systems, game state)
//! - `renderer`: Drawing contract implemented by the browser canvas
//! - `audio`: Sound effect contract implemented by the browser audio elements
//! - `platform`: Input, run clock, scene loading and name prompt
//! - `persistence`: Key-value storage (LocalStorage on web)

pub mod audio;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetMissing, GameError};
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed tick length (~60 ticks per second)
    pub const IDEAL_TICK_MS: f64 = 16.0;
    /// Tick length when slow mode is enabled
    pub const SLOW_TICK_MS: f64 = 1000.0;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// Play field dimensions
    pub const GAME_WINDOW_WIDTH: f32 = 500.0;
    pub const GAME_WINDOW_HEIGHT: f32 = 500.0;
    /// Top edge of the ground tiles
    pub const GROUND_LEVEL: f32 = 450.0;

    /// Ground tiles
    pub const TILE_SIZE: f32 = 50.0;
    pub const TILES_PER_ROW: usize = 10;

    /// Food
    pub const FOOD_SIZE: f32 = 44.0;
    pub const FOOD_SPAWN_Y: f32 = 20.0;
    pub const FOOD_SPAWN_COLUMNS: [f32; 8] = [20.0, 80.0, 140.0, 200.0, 260.0, 320.0, 380.0, 436.0];
    /// Chance that a spawn is replaced by a bomb
    pub const BOMB_CHANCE: f64 = 0.1;

    /// Player
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    pub const PLAYER_START: Vec2 = Vec2::new(225.0, GROUND_LEVEL - PLAYER_HEIGHT);
    /// Horizontal speed before tier bonus (pixels/tick)
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Upward speed at the start of a jump (pixels/tick)
    pub const PLAYER_JUMP_SPEED: f32 = 12.0;
    /// Downward acceleration on the player (pixels/tick²)
    pub const PLAYER_GRAVITY: f32 = 0.6;
    /// Ticks the hurt sprite stays up after touching a bomb
    pub const PLAYER_HURT_TICKS: u32 = 30;
    /// Ticks each walk frame stays up
    pub const WALK_TICKS_PER_FRAME: u32 = 8;

    /// Score thresholds for level progression
    pub const SECOND_LEVEL_SCORE: u32 = 10;
    pub const THIRD_LEVEL_SCORE: u32 = 20;

    /// Total attempts for a single scene load before giving up
    pub const MAX_SCENE_LOAD_ATTEMPTS: u32 = 3;
}

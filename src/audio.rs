//! Sound effect contract
//!
//! The browser side owns the audio elements; the simulation only names the
//! effect to play. Unknown effects are reported as `AssetMissing` and skipped.

use std::collections::HashSet;

use crate::error::AssetMissing;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    /// Food eaten
    Eat,
    /// Bomb caught
    Bomb,
    /// Bomb broke a tile
    Drop,
}

impl Sfx {
    pub const ALL: [Sfx; 3] = [Sfx::Eat, Sfx::Bomb, Sfx::Drop];

    /// Registry key in the scene's sound manager
    pub fn key(&self) -> &'static str {
        match self {
            Sfx::Eat => "eat",
            Sfx::Bomb => "bomb",
            Sfx::Drop => "drop",
        }
    }
}

/// Audio collaborator
pub trait Audio {
    /// Play a sound effect from the current scene
    fn play(&mut self, effect: Sfx) -> Result<(), AssetMissing>;
    /// Drop the current scene's effects and stop its background music
    fn clear(&mut self);
    /// Start the background music of the freshly loaded scene
    fn resume_music(&mut self);
}

/// Play an effect, skipping it if the scene has no such sound
pub fn play_or_skip(audio: &mut dyn Audio, effect: Sfx) {
    if let Err(missing) = audio.play(effect) {
        log::trace!("Skipping sound: {missing}");
    }
}

/// Audio that records what it was asked to do
#[derive(Debug, Clone)]
pub struct HeadlessAudio {
    available: HashSet<Sfx>,
    sfx_enabled: bool,
    music_enabled: bool,
    pub played: Vec<Sfx>,
    pub clears: u32,
    pub music_playing: bool,
}

impl Default for HeadlessAudio {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl HeadlessAudio {
    pub fn new(sfx_enabled: bool, music_enabled: bool) -> Self {
        Self {
            available: Sfx::ALL.into_iter().collect(),
            sfx_enabled,
            music_enabled,
            played: Vec::new(),
            clears: 0,
            music_playing: false,
        }
    }

    /// Audio whose scene registers only `effects`
    pub fn with_effects(effects: &[Sfx]) -> Self {
        Self {
            available: effects.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn count(&self, effect: Sfx) -> usize {
        self.played.iter().filter(|e| **e == effect).count()
    }
}

impl Audio for HeadlessAudio {
    fn play(&mut self, effect: Sfx) -> Result<(), AssetMissing> {
        if !self.available.contains(&effect) {
            return Err(AssetMissing::new(effect.key()));
        }
        if self.sfx_enabled {
            log::debug!("sfx: {}", effect.key());
            self.played.push(effect);
        }
        Ok(())
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.music_playing = false;
    }

    fn resume_music(&mut self) {
        self.music_playing = self.music_enabled;
    }
}

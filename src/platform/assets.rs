//! Scene asset manifests
//!
//! Image and sound URLs each world registers, keyed the way the systems ask
//! for them. The browser loader fetches exactly these; a key absent here is
//! reported as missing at draw or play time.

use crate::audio::Sfx;
use crate::sim::SceneId;
use crate::sim::systems::render::BACKGROUND_KEY;

/// Everything one scene loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneAssets {
    pub background: &'static str,
    /// `(image key, url)`
    pub images: &'static [(&'static str, &'static str)],
    pub sfx: &'static [(Sfx, &'static str)],
    /// Looping background track
    pub music: &'static str,
}

const SFX: &[(Sfx, &str)] = &[
    (Sfx::Drop, "sound/drop.mp3"),
    (Sfx::Eat, "sound/eat.ogg"),
    (Sfx::Bomb, "sound/bomb.wav"),
];

const CUPCAKE_WORLD: SceneAssets = SceneAssets {
    background: "images/bg_cupcakeworld.png",
    images: &[
        ("tile_left", "images/tile_cake_left.png"),
        ("tile_mid", "images/tile_cake_mid.png"),
        ("tile_right", "images/tile_cake_right.png"),
        ("cupcake", "images/cupcake.png"),
        ("bomb", "images/bomb.png"),
        ("player_default", "images/player_default.png"),
        ("player_hurt", "images/player_hurt.png"),
        ("player_jump", "images/player_jump.png"),
        ("player_walk_1", "images/player_walk_1.png"),
        ("player_walk_2", "images/player_walk_2.png"),
        ("player_walk_3", "images/player_walk_3.png"),
    ],
    sfx: SFX,
    music: "sound/happyarcade.mp3",
};

const SPACE_WORLD: SceneAssets = SceneAssets {
    background: "images/background_purple.jpg",
    images: &[
        ("tile_left", "images/tile_moon_left.png"),
        ("tile_mid", "images/tile_moon_mid.png"),
        ("tile_right", "images/tile_moon_right.png"),
        ("cupcake", "images/cupcake.png"),
        ("bomb", "images/bomb.png"),
        ("star", "images/star.png"),
        ("player_default", "images/player_default.png"),
        ("player_hurt", "images/player_hurt.png"),
        ("player_jump", "images/player_jump.png"),
        ("player_walk_1", "images/player_walk_1.png"),
        ("player_walk_2", "images/player_walk_2.png"),
        ("player_walk_3", "images/player_walk_3.png"),
    ],
    sfx: SFX,
    music: "sound/enchanted tiki 86.mp3",
};

// The bear has no standing frame; the default pose is skipped here
const MOUNTAIN_WORLD: SceneAssets = SceneAssets {
    background: "images/background_mountains.png",
    images: &[
        ("tile_left", "images/tile_tundra_left.png"),
        ("tile_mid", "images/tile_tundra_mid.png"),
        ("tile_right", "images/tile_tundra_right.png"),
        ("icecream", "images/icecream.png"),
        ("bomb", "images/bomb.png"),
        ("star", "images/star.png"),
        ("cupcake", "images/cupcake.png"),
        ("player_hurt", "images/bear_fall.png"),
        ("player_jump", "images/bear_jump.png"),
        ("player_walk_1", "images/bear_walk_1.png"),
        ("player_walk_2", "images/bear_walk_2.png"),
        ("player_walk_3", "images/bear_walk_3.png"),
    ],
    sfx: SFX,
    music: "sound/Christmas synths.ogg",
};

impl SceneAssets {
    pub fn for_scene(scene: SceneId) -> &'static SceneAssets {
        match scene {
            SceneId::CupcakeWorld => &CUPCAKE_WORLD,
            SceneId::SpaceWorld => &SPACE_WORLD,
            SceneId::MountainWorld => &MOUNTAIN_WORLD,
        }
    }

    /// Every image to fetch, background first
    pub fn all_images(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        std::iter::once((BACKGROUND_KEY, self.background)).chain(self.images.iter().copied())
    }

    pub fn has_image(&self, key: &str) -> bool {
        self.all_images().any(|(k, _)| k == key)
    }

    pub fn sfx_url(&self, effect: Sfx) -> Option<&'static str> {
        self.sfx.iter().find(|(s, _)| *s == effect).map(|(_, url)| *url)
    }
}

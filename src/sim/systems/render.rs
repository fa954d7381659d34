//! Drawing the frame
//!
//! The render system redraws the whole window every tick: background, HUD,
//! then every entity with an image. The start and game-over screens are
//! drawn once by the level flow while the game is paused.

use glam::Vec2;

use crate::consts::{GAME_WINDOW_HEIGHT, GAME_WINDOW_WIDTH};
use crate::highscores::{HighScores, SHOWN_HIGH_SCORES};
use crate::renderer::{Renderer, TextStyle, draw_or_skip};
use crate::sim::components::{AnimatedSprite, Collision2D, Graphics2D, Movement2D};
use crate::sim::geometry::Rect;
use crate::sim::world::World;

pub const BACKGROUND_KEY: &str = "background";
const SCORE_ICON_KEY: &str = "cupcake";

pub fn tick(world: &World, renderer: &mut dyn Renderer) {
    draw_background(renderer);
    draw_hud(world, renderer);

    for entity in world.entities.iter() {
        let Some(graphics) = entity.get::<Graphics2D>() else {
            continue;
        };
        let sprite = entity.get::<AnimatedSprite>();
        let key = match sprite.and_then(AnimatedSprite::active_sprite) {
            Some(frame) => frame,
            None => match graphics.image_id.as_deref() {
                Some(image) => image,
                None => continue,
            },
        };
        // Sprites face right; mirror them while moving left
        let flipped = sprite.is_some()
            && entity
                .get::<Movement2D>()
                .is_some_and(|m| m.velocity.x < 0.0);
        let target = Rect {
            position: graphics.position,
            width: graphics.width,
            height: graphics.height,
        };
        draw_or_skip(renderer, key, target, flipped);
    }

    if world.settings.debug_mode {
        for entity in world.entities.iter() {
            if let Some(collision) = entity.get::<Collision2D>() {
                let touching = !collision.colliding_entities.is_empty();
                renderer.fill_collider(&collision.collider, touching);
            }
        }
    }
}

fn window() -> Rect {
    Rect::new(0.0, 0.0, GAME_WINDOW_WIDTH, GAME_WINDOW_HEIGHT)
}

/// Clear the window and draw the scene background
pub fn draw_background(renderer: &mut dyn Renderer) {
    renderer.clear_region(window());
    draw_or_skip(renderer, BACKGROUND_KEY, window(), false);
}

fn draw_hud(world: &World, renderer: &mut dyn Renderer) {
    let style = TextStyle::Hud(world.scene.font_color());
    draw_or_skip(renderer, SCORE_ICON_KEY, Rect::new(440.0, 10.0, 20.0, 20.0), false);
    renderer.draw_text(&world.state.score.to_string(), Vec2::new(465.0, 27.0), style);
    renderer.draw_text(&format!("Lives: {}", world.state.lives), Vec2::new(350.0, 27.0), style);
    renderer.draw_text(&format!("World: {}", world.scene.name()), Vec2::new(30.0, 27.0), style);
}

pub fn draw_start_message(renderer: &mut dyn Renderer) {
    renderer.draw_text("Press any key to start", Vec2::new(100.0, 250.0), TextStyle::Banner);
}

/// High-score table over the background, then the restart prompt
pub fn draw_game_over_screen(highscores: &HighScores, renderer: &mut dyn Renderer) {
    renderer.draw_text("High Score", Vec2::new(190.0, 150.0), TextStyle::Banner);
    for (row, (name, score)) in highscores.top(SHOWN_HIGH_SCORES).into_iter().enumerate() {
        let position = Vec2::new(100.0, 200.0 + 50.0 * row as f32);
        renderer.draw_text(&format!("{}. {name}: {score}", row + 1), position, TextStyle::Banner);
    }
    renderer.draw_text("Game Over", Vec2::new(190.0, 400.0), TextStyle::Banner);
    renderer.draw_text("Press any key to restart", Vec2::new(110.0, 450.0), TextStyle::Banner);
}

//! Drawing contract
//!
//! The simulation issues draw calls by image key; the canvas side resolves
//! keys to loaded images. A key the scene did not register is reported as
//! `AssetMissing` and the draw is skipped.

use glam::Vec2;

use crate::error::AssetMissing;
use crate::sim::geometry::{Collider, Rect};

/// Text colour used by a scene's HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontColor {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// 20px filled HUD text
    Hud(FontColor),
    /// 30px white outlined banner text
    Banner,
}

/// Rendering collaborator
pub trait Renderer {
    fn clear_region(&mut self, region: Rect);
    /// Draw the image registered under `key`, mirrored horizontally if `flipped`
    fn draw_image(&mut self, key: &str, target: Rect, flipped: bool) -> Result<(), AssetMissing>;
    fn draw_text(&mut self, text: &str, position: Vec2, style: TextStyle);
    /// Debug overlay, red when `colliding`
    fn fill_collider(&mut self, collider: &Collider, colliding: bool);
}

/// Draw an image, skipping it if the scene has no such key
pub fn draw_or_skip(renderer: &mut dyn Renderer, key: &str, target: Rect, flipped: bool) {
    if let Err(missing) = renderer.draw_image(key, target, flipped) {
        log::trace!("Skipping draw: {missing}");
    }
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Image { key: String, target: Rect, flipped: bool },
    Text { text: String, position: Vec2, style: TextStyle },
    Collider { collider: Collider, colliding: bool },
}

/// Renderer that records draw calls instead of drawing
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    /// Keys treated as unregistered
    pub missing: Vec<String>,
    pub commands: Vec<DrawCommand>,
}

impl HeadlessRenderer {
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<&DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .collect()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Renderer for HeadlessRenderer {
    fn clear_region(&mut self, region: Rect) {
        self.commands.push(DrawCommand::Clear(region));
    }

    fn draw_image(&mut self, key: &str, target: Rect, flipped: bool) -> Result<(), AssetMissing> {
        if self.missing.iter().any(|m| m == key) {
            return Err(AssetMissing::new(key));
        }
        self.commands.push(DrawCommand::Image {
            key: key.to_string(),
            target,
            flipped,
        });
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Vec2, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            style,
        });
    }

    fn fill_collider(&mut self, collider: &Collider, colliding: bool) {
        self.commands.push(DrawCommand::Collider {
            collider: *collider,
            colliding,
        });
    }
}

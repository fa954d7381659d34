//! Browser collaborators
//!
//! Canvas drawing, DOM audio elements, image preloading and the name prompt.
//! The three asset users share one `SceneMedia`, which the loader swaps
//! wholesale when a scene finishes loading.

use std::cell::RefCell;
use std::collections::HashMap;
use std::f64::consts::TAU;
use std::rc::Rc;

use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlImageElement};

use super::assets::SceneAssets;
use super::{NamePrompt, SceneLoadError, SceneLoader};
use crate::audio::{Audio, Sfx};
use crate::error::AssetMissing;
use crate::renderer::{FontColor, Renderer, TextStyle};
use crate::sim::SceneId;
use crate::sim::geometry::{Collider, Rect};

/// Loaded media of the current scene
#[derive(Default)]
pub struct SceneMedia {
    images: HashMap<String, HtmlImageElement>,
    sfx: HashMap<Sfx, HtmlAudioElement>,
    music: Option<HtmlAudioElement>,
}

pub type SharedMedia = Rc<RefCell<SceneMedia>>;

/// 2D canvas renderer
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    media: SharedMedia,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, media: SharedMedia) -> Self {
        Self { ctx, media }
    }
}

fn font_css(color: FontColor) -> &'static str {
    match color {
        FontColor::Dark => "black",
        FontColor::Light => "white",
    }
}

impl Renderer for CanvasRenderer {
    fn clear_region(&mut self, region: Rect) {
        self.ctx.clear_rect(
            region.left() as f64,
            region.top() as f64,
            region.width as f64,
            region.height as f64,
        );
    }

    fn draw_image(&mut self, key: &str, target: Rect, flipped: bool) -> Result<(), AssetMissing> {
        let media = self.media.borrow();
        let image = media.images.get(key).ok_or_else(|| AssetMissing::new(key))?;
        let (x, y) = (target.left() as f64, target.top() as f64);
        let (w, h) = (target.width as f64, target.height as f64);

        let drawn = if flipped {
            // Mirror around the target's right edge
            self.ctx.save();
            let drawn = self
                .ctx
                .translate(x + w, y)
                .and_then(|_| self.ctx.scale(-1.0, 1.0))
                .and_then(|_| {
                    self.ctx
                        .draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, w, h)
                });
            self.ctx.restore();
            drawn
        } else {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h)
        };
        if let Err(err) = drawn {
            log::warn!("drawImage `{key}` failed: {err:?}");
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Vec2, style: TextStyle) {
        let (x, y) = (position.x as f64, position.y as f64);
        let drawn = match style {
            TextStyle::Hud(color) => {
                self.ctx.set_font("20px Calibri");
                self.ctx.set_fill_style_str(font_css(color));
                self.ctx.fill_text(text, x, y)
            }
            TextStyle::Banner => {
                self.ctx.set_font("30px Calibri");
                self.ctx.set_stroke_style_str("white");
                self.ctx.stroke_text(text, x, y)
            }
        };
        if let Err(err) = drawn {
            log::warn!("Text draw failed: {err:?}");
        }
    }

    fn fill_collider(&mut self, collider: &Collider, colliding: bool) {
        let fill = if colliding {
            "rgba(255, 0, 0, 0.5)"
        } else {
            "rgba(170, 255, 0, 0.5)"
        };
        self.ctx.set_fill_style_str(fill);
        match collider {
            Collider::Rect(rect) => self.ctx.fill_rect(
                rect.left() as f64,
                rect.top() as f64,
                rect.width as f64,
                rect.height as f64,
            ),
            Collider::Circle(circle) => {
                self.ctx.begin_path();
                let traced = self.ctx.arc(
                    circle.center.x as f64,
                    circle.center.y as f64,
                    circle.radius as f64,
                    0.0,
                    TAU,
                );
                if traced.is_ok() {
                    self.ctx.fill();
                }
            }
        }
    }
}

/// Audio backed by `<audio>` elements
pub struct DomAudio {
    media: SharedMedia,
    sfx_enabled: bool,
    music_enabled: bool,
}

impl DomAudio {
    pub fn new(media: SharedMedia, sfx_enabled: bool, music_enabled: bool) -> Self {
        Self {
            media,
            sfx_enabled,
            music_enabled,
        }
    }
}

fn start(element: &HtmlAudioElement) {
    // Autoplay policy may refuse until the first key press
    if let Err(err) = element.play() {
        log::debug!("Audio play refused: {err:?}");
    }
}

impl Audio for DomAudio {
    fn play(&mut self, effect: Sfx) -> Result<(), AssetMissing> {
        let media = self.media.borrow();
        let element = media
            .sfx
            .get(&effect)
            .ok_or_else(|| AssetMissing::new(effect.key()))?;
        if self.sfx_enabled {
            element.set_current_time(0.0);
            start(element);
        }
        Ok(())
    }

    fn clear(&mut self) {
        let mut media = self.media.borrow_mut();
        for element in media.sfx.values().chain(media.music.iter()) {
            if let Err(err) = element.pause() {
                log::debug!("Audio pause failed: {err:?}");
            }
        }
        media.sfx.clear();
        media.music = None;
    }

    fn resume_music(&mut self) {
        if !self.music_enabled {
            return;
        }
        if let Some(music) = &self.media.borrow().music {
            start(music);
        }
    }
}

struct PendingScene {
    scene: SceneId,
    images: Vec<(&'static str, HtmlImageElement)>,
    /// Set when an element could not even be created
    failed: Option<SceneLoadError>,
}

/// Preloads a scene's images, then installs its media
pub struct DomSceneLoader {
    media: SharedMedia,
    pending: Option<PendingScene>,
}

impl DomSceneLoader {
    pub fn new(media: SharedMedia) -> Self {
        Self {
            media,
            pending: None,
        }
    }

    fn install(&self, assets: &SceneAssets, images: Vec<(&'static str, HtmlImageElement)>) {
        let mut sfx = HashMap::new();
        for (effect, url) in assets.sfx {
            match HtmlAudioElement::new_with_src(url) {
                Ok(element) => {
                    element.set_preload("auto");
                    sfx.insert(*effect, element);
                }
                Err(err) => log::warn!("Sound `{}` unavailable: {err:?}", effect.key()),
            }
        }
        let music = match HtmlAudioElement::new_with_src(assets.music) {
            Ok(element) => {
                element.set_loop(true);
                Some(element)
            }
            Err(err) => {
                log::warn!("Music `{}` unavailable: {err:?}", assets.music);
                None
            }
        };

        *self.media.borrow_mut() = SceneMedia {
            images: images
                .into_iter()
                .map(|(key, image)| (key.to_string(), image))
                .collect(),
            sfx,
            music,
        };
    }
}

impl SceneLoader for DomSceneLoader {
    fn begin_load(&mut self, scene: SceneId, is_initial: bool) {
        log::info!("[SceneManager] Loading scene {} (initial: {is_initial})", scene.name());
        let assets = SceneAssets::for_scene(scene);
        let mut images = Vec::new();
        let mut failed = None;
        for (key, url) in assets.all_images() {
            match HtmlImageElement::new() {
                Ok(image) => {
                    image.set_src(url);
                    images.push((key, image));
                }
                Err(err) => {
                    failed = Some(SceneLoadError::Rejected(format!("image `{key}`: {err:?}")));
                    break;
                }
            }
        }
        self.pending = Some(PendingScene {
            scene,
            images,
            failed,
        });
    }

    fn poll(&mut self) -> Option<Result<SceneId, SceneLoadError>> {
        let pending = self.pending.as_ref()?;
        // A completed image with no width failed to decode or fetch
        let broken = pending
            .images
            .iter()
            .find(|(_, image)| image.complete() && image.natural_width() == 0)
            .map(|(key, _)| SceneLoadError::from(AssetMissing::new(*key)));
        let done = pending.images.iter().all(|(_, image)| image.complete());
        if pending.failed.is_none() && broken.is_none() && !done {
            return None;
        }

        let pending = self.pending.take()?;
        if let Some(err) = pending.failed.or(broken) {
            return Some(Err(err));
        }
        self.install(SceneAssets::for_scene(pending.scene), pending.images);
        log::info!("[SceneManager] {} ready", pending.scene.name());
        Some(Ok(pending.scene))
    }
}

/// `window.prompt` for the high-score name
#[derive(Debug, Default)]
pub struct BrowserPrompt;

impl NamePrompt for BrowserPrompt {
    fn prompt_player_name(&mut self) -> Option<String> {
        web_sys::window()?
            .prompt_with_message("enter your name")
            .ok()
            .flatten()
    }
}

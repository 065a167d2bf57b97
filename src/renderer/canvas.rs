//! Canvas 2D renderer
//!
//! Rendering is a pure function of simulation state: mirrored webcam
//! underlay, fruit sprites, fading trail, fingertip cursor, word overlay.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, HtmlVideoElement};

use crate::assets::SpriteAtlas;
use crate::consts::{BACKGROUND_COLOR, CURSOR_RADIUS, TRAIL_RADIUS};
use crate::feedback::Overlay;
use crate::gesture::GestureSample;
use crate::settings::Settings;
use crate::sim::{Fruit, GameState};
use crate::tuning::Tuning;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sprites: SpriteAtlas,
    /// Cosmetic RNG for the completion banner (no determinism requirement)
    banner_rng: Pcg32,
    size: Vec2,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, sprites: SpriteAtlas, seed: u64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let size = Vec2::new(canvas.width() as f32, canvas.height() as f32);

        Ok(Self {
            canvas,
            ctx,
            sprites,
            banner_rng: Pcg32::seed_from_u64(seed),
            size,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.size = Vec2::new(width as f32, height as f32);
    }

    /// Draw one frame
    pub fn render(
        &mut self,
        state: &GameState,
        video: &HtmlVideoElement,
        tuning: &Tuning,
        settings: &Settings,
        sample: Option<GestureSample>,
        overlay: Option<&Overlay>,
    ) {
        self.clear();
        self.draw_video(video, settings.video_scale);

        for fruit in &state.fruits {
            self.draw_fruit(fruit);
        }

        self.draw_trail(state, tuning);

        if settings.show_cursor {
            if let Some(sample) = sample {
                self.draw_cursor(sample.fingertip);
            }
        }

        if let Some(overlay) = overlay {
            self.draw_overlay(overlay, state.frame);
        }
    }

    fn clear(&self) {
        self.ctx.set_fill_style_str(BACKGROUND_COLOR);
        self.ctx
            .fill_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    /// Webcam underlay, horizontally flipped and centered
    fn draw_video(&self, video: &HtmlVideoElement, scale: f32) {
        if video.ready_state() < 2 {
            return;
        }
        let vw = (self.size.x * scale) as f64;
        let vh = (self.size.y * scale) as f64;
        let x = (self.size.x as f64 - vw) / 2.0;
        let y = (self.size.y as f64 - vh) / 2.0;

        self.ctx.save();
        let _ = self.ctx.translate(self.size.x as f64, 0.0);
        let _ = self.ctx.scale(-1.0, 1.0);
        let _ = self
            .ctx
            .draw_image_with_html_video_element_and_dw_and_dh(video, x, y, vw, vh);
        self.ctx.restore();
    }

    fn draw_fruit(&self, fruit: &Fruit) {
        let pair = self.sprites.get(fruit.kind);
        if !fruit.cut {
            self.draw_sprite(&pair.whole, fruit.pos, fruit.size);
        } else {
            // two halves diverging symmetrically from center
            self.draw_sprite(&pair.cut, fruit.pos - fruit.split, fruit.size);
            self.draw_sprite(&pair.cut, fruit.pos + fruit.split, fruit.size);
        }
    }

    /// Draw an image centered at `pos` with the given edge length
    fn draw_sprite(&self, image: &HtmlImageElement, pos: Vec2, size: f32) {
        let half = (size / 2.0) as f64;
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            pos.x as f64 - half,
            pos.y as f64 - half,
            size as f64,
            size as f64,
        );
    }

    /// Trail dots fade linearly with remaining lifetime
    fn draw_trail(&self, state: &GameState, tuning: &Tuning) {
        self.ctx.set_fill_style_str("#ffffff");
        for point in &state.trails {
            let alpha = point.lifetime as f64 / tuning.trail_lifetime.max(1) as f64;
            self.ctx.set_global_alpha(alpha);
            self.fill_circle(point.pos, TRAIL_RADIUS);
        }
        self.ctx.set_global_alpha(1.0);
    }

    fn draw_cursor(&self, pos: Vec2) {
        self.ctx.set_fill_style_str("#ff0000");
        self.fill_circle(pos, CURSOR_RADIUS);
    }

    fn fill_circle(&self, pos: Vec2, radius: f64) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(pos.x as f64, pos.y as f64, radius, 0.0, std::f64::consts::TAU);
        self.ctx.fill();
    }

    /// Word progress near the bottom edge; pulsating banner when complete
    fn draw_overlay(&mut self, overlay: &Overlay, frame: u64) {
        let cx = self.size.x as f64 / 2.0;

        let spaced: Vec<String> = overlay.masked.chars().map(|c| c.to_string()).collect();
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.set_font("48px monospace");
        self.ctx.set_text_align("center");
        let _ = self
            .ctx
            .fill_text(&spaced.join(" "), cx, self.size.y as f64 - 60.0);

        if overlay.complete {
            // vertical bounce follows the frame counter; a fresh pastel
            // shade every frame gives the banner its shimmer
            let bounce = (frame as f64 * 0.1).sin() * 12.0;
            let color = self.random_pastel();
            self.ctx.set_fill_style_str(&color);
            self.ctx.set_font("bold 64px sans-serif");
            let _ = self
                .ctx
                .fill_text("YOU DID IT!", cx, self.size.y as f64 / 2.0 + bounce);
        }
    }

    fn random_pastel(&mut self) -> String {
        let r: u8 = self.banner_rng.random_range(128..=255);
        let g: u8 = self.banner_rng.random_range(128..=255);
        let b: u8 = self.banner_rng.random_range(128..=255);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

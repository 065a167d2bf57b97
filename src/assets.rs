//! Fruit artwork loading
//!
//! Four fruit kinds, each with whole and cut artwork, loaded once before
//! the frame loop begins. A failed load or decode is a fatal startup error.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::sim::FruitKind;

/// Whole/cut artwork for one fruit kind
pub struct SpritePair {
    pub whole: HtmlImageElement,
    pub cut: HtmlImageElement,
}

/// All loaded fruit artwork, indexed by kind
pub struct SpriteAtlas {
    sprites: Vec<SpritePair>,
}

impl SpriteAtlas {
    /// Load every sprite; resolves once all images are decoded
    pub async fn load() -> Result<Self, JsValue> {
        let mut sprites = Vec::with_capacity(FruitKind::ALL.len());
        for kind in FruitKind::ALL {
            let whole = load_image(&format!("assets/{}.jpg", kind.as_str())).await?;
            let cut = load_image(&cut_asset_path(kind)).await?;
            sprites.push(SpritePair { whole, cut });
        }
        log::info!("loaded {} fruit sprites", sprites.len() * 2);
        Ok(Self { sprites })
    }

    pub fn get(&self, kind: FruitKind) -> &SpritePair {
        &self.sprites[kind as usize]
    }
}

// The watermelon cut art ships as a PNG, everything else as JPEG
fn cut_asset_path(kind: FruitKind) -> String {
    let ext = match kind {
        FruitKind::Watermelon => "png",
        _ => "jpg",
    };
    format!("assets/{}_cut.{}", kind.as_str(), ext)
}

async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    JsFuture::from(image.decode()).await?;
    Ok(image)
}

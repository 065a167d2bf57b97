//! Asynchronous estimator bridge
//!
//! Fire-and-forget polling of the external hand-pose model: at most one
//! estimate request in flight, and results are adopted on whatever frame
//! they resolve. Estimation may lag the visuals by a frame or more; the
//! simulation never waits for it. No cancellation, no timeout.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlVideoElement;

use super::landmarks::sample_from_flat;
use super::GestureSample;

// Adapter over the host page's estimator (`window.handPose`). The wasm
// side only ever sees hand 0 flattened into a Float32Array (empty when
// no hand is detected).
#[wasm_bindgen(inline_js = "
    export async function handpose_init() {
        if (!window.handPose) {
            throw new Error('handPose estimator missing on window');
        }
        window.__fruitSlashModel = await window.handPose.load();
    }

    export async function handpose_estimate(video) {
        const model = window.__fruitSlashModel;
        if (!model) return new Float32Array(0);
        const hands = await model.estimateHands(video);
        if (!hands || hands.length === 0) return new Float32Array(0);
        return new Float32Array(hands[0].landmarks.flat());
    }
")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn handpose_init() -> Result<JsValue, JsValue>;
    #[wasm_bindgen(catch)]
    async fn handpose_estimate(video: &HtmlVideoElement) -> Result<JsValue, JsValue>;
}

#[derive(Default)]
struct Shared {
    latest: Option<GestureSample>,
    in_flight: bool,
}

/// Polls the external hand-pose estimator without blocking the frame loop
pub struct HandTracker {
    shared: Rc<RefCell<Shared>>,
    ready: bool,
}

impl Default for HandTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl HandTracker {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared::default())),
            ready: false,
        }
    }

    /// Load the model. Fatal if the estimator is unavailable.
    pub async fn init(&mut self) -> Result<(), JsValue> {
        handpose_init().await?;
        self.ready = true;
        log::info!("hand-pose estimator ready");
        Ok(())
    }

    /// Issue an estimate request if none is in flight. Never waits; the
    /// result lands in the shared slot on a later frame.
    pub fn request(&self, video: &HtmlVideoElement, screen_width: f32) {
        if !self.ready {
            return;
        }
        // HAVE_CURRENT_DATA(2)+ means there is a frame to sample
        if video.ready_state() < 2 {
            return;
        }
        {
            let mut shared = self.shared.borrow_mut();
            if shared.in_flight {
                return;
            }
            shared.in_flight = true;
        }

        let shared = self.shared.clone();
        let video = video.clone();
        spawn_local(async move {
            let result = handpose_estimate(&video).await;
            let mut shared = shared.borrow_mut();
            shared.in_flight = false;
            match result {
                Ok(value) => {
                    let flat = js_sys::Float32Array::new(&value).to_vec();
                    shared.latest = sample_from_flat(&flat, screen_width);
                }
                Err(err) => {
                    // a lost frame is not an error: treated as no hand
                    log::warn!("hand estimate failed: {err:?}");
                    shared.latest = None;
                }
            }
        });
    }

    /// Most recent sample; may lag the current frame by one or more frames
    pub fn latest(&self) -> Option<GestureSample> {
        self.shared.borrow().latest
    }
}

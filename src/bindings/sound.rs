//! Keystroke Sound
//!
//! Short click played while typing. Best effort: every failure is logged at
//! debug level and swallowed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AudioBuffer, AudioContext, AudioContextState};

use super::js_error;

/// Typewriter key press, 16-bit mono WAV
const KEYSTROKE_WAV_BASE64: &str = "UklGRigAAABXQVZFZm10IBAAAAABAAEARKwAAIhYAQACABAAZGF0YQQAAAAA";

const KEYSTROKE_GAIN: f32 = 0.1;

struct Audio {
    context: AudioContext,
    /// Filled in once decoding finishes
    sample: Rc<RefCell<Option<AudioBuffer>>>,
}

/// Owns the page's audio context. Created on the first `play`.
#[derive(Default)]
pub struct KeystrokeSound {
    audio: RefCell<Option<Audio>>,
    unavailable: Cell<bool>,
}

impl KeystrokeSound {
    pub fn play(&self) {
        if let Err(e) = self.try_play() {
            tracing::debug!(error = %js_error(e), "keystroke sound skipped");
        }
    }

    fn try_play(&self) -> Result<(), JsValue> {
        if !self.ensure_audio()? {
            return Ok(());
        }
        let audio = self.audio.borrow();
        let Some(audio) = audio.as_ref() else { return Ok(()) };

        match audio.context.state() {
            AudioContextState::Suspended => {
                // Browsers suspend audio until a user gesture; the next key will sound
                let _ = audio.context.resume()?;
            }
            AudioContextState::Running => {
                let sample = audio.sample.borrow();
                let Some(sample) = sample.as_ref() else { return Ok(()) };
                let source = audio.context.create_buffer_source()?;
                source.set_buffer(Some(sample));
                let gain = audio.context.create_gain()?;
                gain.gain().set_value_at_time(KEYSTROKE_GAIN, audio.context.current_time())?;
                source.connect_with_audio_node(&gain)?;
                gain.connect_with_audio_node(&audio.context.destination())?;
                source.start()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Lazily open the audio context. Returns false once it is known to be unavailable.
    fn ensure_audio(&self) -> Result<bool, JsValue> {
        if self.unavailable.get() {
            return Ok(false);
        }
        if self.audio.borrow().is_some() {
            return Ok(true);
        }
        let context = match AudioContext::new() {
            Ok(context) => context,
            Err(e) => {
                self.unavailable.set(true);
                return Err(e);
            }
        };
        let sample = Rc::new(RefCell::new(None));
        decode_sample(&context, sample.clone())?;
        tracing::debug!("audio context opened");
        *self.audio.borrow_mut() = Some(Audio { context, sample });
        Ok(true)
    }
}

fn decode_sample(context: &AudioContext, slot: Rc<RefCell<Option<AudioBuffer>>>) -> Result<(), JsValue> {
    let bytes = STANDARD
        .decode(KEYSTROKE_WAV_BASE64)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let promise = context.decode_audio_data(&array.buffer())?;

    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(decoded) => match decoded.dyn_into::<AudioBuffer>() {
                Ok(buffer) => *slot.borrow_mut() = Some(buffer),
                Err(_) => tracing::warn!("decoded keystroke sample is not an AudioBuffer"),
            },
            Err(e) => tracing::warn!(error = %js_error(e), "keystroke sample could not be decoded"),
        }
    });
    Ok(())
}

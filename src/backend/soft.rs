// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! In-memory reference backend.

[`SoftGl`] emulates the slice of the GL texture-object state machine the
store relies on: name allocation, the 2D bind point, per-object filter
state and storage, and a sticky error register that keeps the first error
until queried. No GPU, no context, no unsafe — the whole texture contract
runs headlessly against it, which is how this crate's own tests exercise
round trips, padding borders, and disposal semantics.

It is a reference implementation, not a conformance suite: where real GL
leaves contents undefined (storage allocated without a payload), `SoftGl`
zeroes them so tests are deterministic.
*/

use crate::backend::{GlBackend, NativeTexture};
use crate::pixel_formats::BYTES_PER_PIXEL;
use crate::sampler::Filter;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::num::NonZeroU32;

/// Success code for [`GlBackend::last_error`].
pub const NO_ERROR: u32 = 0;
/// A buffer length did not match the bound texture's storage.
pub const INVALID_VALUE: u32 = 0x0501;
/// An operation required a bound texture and none was bound, or the name
/// was unknown.
pub const INVALID_OPERATION: u32 = 0x0502;

#[derive(Debug)]
struct TextureObject {
    width: u32,
    height: u32,
    mag: Filter,
    min: Filter,
    pixels: Vec<u8>,
}

impl TextureObject {
    fn new() -> Self {
        //GL's default sampling state is linear
        TextureObject {
            width: 0,
            height: 0,
            mag: Filter::Linear,
            min: Filter::Linear,
            pixels: Vec::new(),
        }
    }
}

/// The in-memory backend. Single-threaded by construction (interior
/// mutability via [`Cell`]/[`RefCell`]), matching the context-bound
/// execution model of the real thing.
#[derive(Debug, Default)]
pub struct SoftGl {
    next_name: Cell<u32>,
    bound: Cell<Option<NativeTexture>>,
    error: Cell<u32>,
    textures: RefCell<HashMap<u32, TextureObject>>,
    exhausted: Cell<bool>,
}

impl SoftGl {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes every subsequent [`GlBackend::gen_texture`] fail, simulating
    /// name exhaustion. Test hook.
    pub fn exhaust_names(&self) {
        self.exhausted.set(true);
    }

    /// The texture currently bound to the 2D bind point.
    pub fn bound_texture(&self) -> Option<NativeTexture> {
        self.bound.get()
    }

    /// Whether `texture` names a live (not yet deleted) object.
    pub fn is_live(&self, texture: NativeTexture) -> bool {
        self.textures.borrow().contains_key(&texture.get())
    }

    /// The sampling modes of a live object, for assertions.
    pub fn filter_of(&self, texture: NativeTexture) -> Option<(Filter, Filter)> {
        self.textures
            .borrow()
            .get(&texture.get())
            .map(|object| (object.mag, object.min))
    }

    //keeps the first error until queried, like GL
    fn record_error(&self, code: u32) {
        if self.error.get() == NO_ERROR {
            self.error.set(code);
        }
    }
}

impl GlBackend for SoftGl {
    fn gen_texture(&self) -> Option<NativeTexture> {
        if self.exhausted.get() {
            return None;
        }
        let name = self.next_name.get().checked_add(1)?;
        self.next_name.set(name);
        self.textures
            .borrow_mut()
            .insert(name, TextureObject::new());
        NonZeroU32::new(name).map(NativeTexture)
    }

    fn bind_texture(&self, texture: Option<NativeTexture>) {
        if let Some(texture) = texture {
            if !self.is_live(texture) {
                self.record_error(INVALID_OPERATION);
                return;
            }
        }
        self.bound.set(texture);
    }

    fn set_filter(&self, mag: Filter, min: Filter) {
        let Some(bound) = self.bound.get() else {
            self.record_error(INVALID_OPERATION);
            return;
        };
        let mut textures = self.textures.borrow_mut();
        let object = textures.get_mut(&bound.get()).expect("bound texture is live");
        object.mag = mag;
        object.min = min;
    }

    fn upload_2d(&self, width: u32, height: u32, pixels: Option<&[u8]>) {
        let Some(bound) = self.bound.get() else {
            self.record_error(INVALID_OPERATION);
            return;
        };
        let byte_len = width as usize * height as usize * BYTES_PER_PIXEL;
        if let Some(pixels) = pixels {
            if pixels.len() != byte_len {
                self.record_error(INVALID_VALUE);
                return;
            }
        }
        let mut textures = self.textures.borrow_mut();
        let object = textures.get_mut(&bound.get()).expect("bound texture is live");
        object.width = width;
        object.height = height;
        object.pixels = match pixels {
            Some(pixels) => pixels.to_vec(),
            //real GL leaves these undefined; zero for determinism
            None => vec![0u8; byte_len],
        };
    }

    fn read_back_2d(&self, pixels: &mut [u8]) {
        let Some(bound) = self.bound.get() else {
            self.record_error(INVALID_OPERATION);
            return;
        };
        let textures = self.textures.borrow();
        let object = textures.get(&bound.get()).expect("bound texture is live");
        if pixels.len() != object.pixels.len() {
            self.record_error(INVALID_VALUE);
            return;
        }
        pixels.copy_from_slice(&object.pixels);
    }

    fn delete_texture(&self, texture: NativeTexture) {
        //deleting an unknown name is silently ignored, like GL
        self.textures.borrow_mut().remove(&texture.get());
        if self.bound.get() == Some(texture) {
            //GL unbinds a deleted texture from the bind point
            self.bound.set(None);
        }
    }

    fn last_error(&self) -> u32 {
        self.error.replace(NO_ERROR)
    }
}

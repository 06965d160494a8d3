// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! The backend seam.

The texture store touches the graphics API through exactly seven calls:
generate a texture object, bind/unbind the 2D bind point, set the sampling
filter, allocate/upload 2D RGBA8 storage, read storage back, delete the
object, and query the last error code. [`GlBackend`] is that surface and
nothing more, so a backend is small to implement and the store is testable
without a GPU.

Backend state (the bind point, the error register) is context-local and
not safe for concurrent use; every implementation assumes it is called
from the single thread that owns the context.

Two implementations:

- `glow` (behind the default `backend_glow` feature) maps each call 1:1
  onto the corresponding OpenGL entry point.
- [`soft`] emulates the GL texture-object state machine in memory and is
  always compiled.
*/

use crate::sampler::Filter;
use std::num::NonZeroU32;

#[cfg(feature = "backend_glow")]
mod glow;
pub mod soft;

/// A backend texture object name.
///
/// Wraps [`NonZeroU32`] so the invalid/zero name is unrepresentable and
/// `Option<NativeTexture>` is a free tagged live-or-disposed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeTexture(pub(crate) NonZeroU32);

impl NativeTexture {
    /// The raw nonzero name, as the underlying graphics API knows it.
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// The seven backend calls the texture store issues.
///
/// Calls that operate on "the bound texture" ([`set_filter`](Self::set_filter),
/// [`upload_2d`](Self::upload_2d), [`read_back_2d`](Self::read_back_2d))
/// require a preceding [`bind_texture`](Self::bind_texture); the store
/// wraps every such sequence in a scoped bind that always rebinds to
/// no-texture on exit.
pub trait GlBackend {
    /// Allocates a texture object name.
    ///
    /// `None` if the backend cannot produce one (name exhaustion).
    fn gen_texture(&self) -> Option<NativeTexture>;

    /// Binds `texture` to the 2D bind point; `None` unbinds.
    fn bind_texture(&self, texture: Option<NativeTexture>);

    /// Sets the magnification and minification sampling modes of the bound
    /// texture.
    fn set_filter(&self, mag: Filter, min: Filter);

    /// Allocates storage for the bound texture at `width` x `height` and
    /// uploads `pixels` (RGBA, 4 bytes per pixel, row stride `width * 4`).
    ///
    /// A `None` payload allocates storage with undefined contents.
    fn upload_2d(&self, width: u32, height: u32, pixels: Option<&[u8]>);

    /// Reads the bound texture's full storage back into `pixels`.
    fn read_back_2d(&self, pixels: &mut [u8]);

    /// Deletes a texture object. Deleting the bound texture unbinds it.
    fn delete_texture(&self, texture: NativeTexture);

    /// Returns and clears the backend's error register.
    ///
    /// `0` is success; any other value is a raw backend-specific code,
    /// preserved for diagnostics and never interpreted by the store.
    fn last_error(&self) -> u32;
}

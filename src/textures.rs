// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! The texture store.

Creates, uploads, reads back, and destroys backend texture resources,
tracking the logical size a caller asked for separately from the padded
power-of-two size the backend stores.

Every operation takes the backend by reference and runs as a bounded,
synchronous sequence of backend calls on the thread that owns the graphics
context. There are no retries and no internal recovery: a failure is
terminal for that operation and the texture must be treated as not
created/not usable.

Operations that touch the backend's 2D bind point bind the texture for
their own duration and rebind to no-texture on every exit path. A caller
relying on its own binding surviving a store call must re-bind afterward.
*/

use crate::backend::{GlBackend, NativeTexture};
use crate::bittricks::next_power_of_two;
use crate::pixel_formats::BYTES_PER_PIXEL;
use crate::sampler::Filter;
use crate::software::PixelImage;

/// Backends reject texture extents smaller than this per axis.
pub const MIN_TEXTURE_SIZE: u32 = 4;

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// The requested or source dimensions fall below the backend's minimum
    /// addressable extent in at least one axis.
    #[error("texture size {width}x{height} is below the minimum backend extent")]
    InvalidSize { width: u32, height: u32 },
    /// The backend could not produce a texture object name.
    #[error("backend could not allocate a texture object")]
    ResourceAllocationFailed,
    /// The backend reported a non-success status after an upload or
    /// readback. The raw code is preserved for diagnostics, never
    /// interpreted here.
    #[error("backend reported error code {code:#06x}")]
    Backend { code: u32 },
    /// The texture was already disposed.
    #[error("texture was already disposed")]
    Disposed,
}

/// Scoped bind. Binds on construction, rebinds to no-texture on drop, so
/// no exit path leaks the bind point.
struct Bound<'a, B: GlBackend> {
    gl: &'a B,
}

impl<'a, B: GlBackend> Bound<'a, B> {
    fn new(gl: &'a B, texture: NativeTexture) -> Self {
        gl.bind_texture(Some(texture));
        Bound { gl }
    }
}

impl<B: GlBackend> Drop for Bound<'_, B> {
    fn drop(&mut self) {
        self.gl.bind_texture(None);
    }
}

/// A logical 2D image resident in padded power-of-two backend storage.
///
/// [`size`](Self::size) is the extent the caller asked for (or the source
/// image's extent); [`padded_size`](Self::padded_size) is the storage
/// extent. Upload and readback buffers are always sized to the padded
/// extent, 4 bytes per pixel, row stride `padded_width * 4`.
///
/// A `Texture` owns exactly one backend resource and there is no automatic
/// reclamation: call [`dispose`](Self::dispose) when the texture is no
/// longer needed, or the backend resource leaks. After disposal the handle
/// is tagged and further reads return [`TextureError::Disposed`].
#[derive(Debug)]
pub struct Texture {
    native: Option<NativeTexture>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Creates a texture of the given logical size with no initial pixel
    /// payload. Storage contents are undefined until the first upload.
    ///
    /// Fails with [`TextureError::InvalidSize`] when a *padded* dimension
    /// is below [`MIN_TEXTURE_SIZE`] — a logical extent of 3 rounds up to
    /// 4 and is accepted, unlike in [`from_image`](Self::from_image).
    pub fn new<B: GlBackend>(
        gl: &B,
        width: u32,
        height: u32,
        filter: Filter,
    ) -> Result<Texture, TextureError> {
        let padded_width = next_power_of_two(width);
        let padded_height = next_power_of_two(height);
        if padded_width < MIN_TEXTURE_SIZE || padded_height < MIN_TEXTURE_SIZE {
            return Err(TextureError::InvalidSize { width, height });
        }
        let native = create_native(gl, padded_width, padded_height, None, filter)?;
        Ok(Texture {
            native: Some(native),
            width,
            height,
        })
    }

    /// Creates a texture from an in-memory image, padding it to the
    /// power-of-two extent first (see [`PixelImage::padded`]).
    ///
    /// Fails with [`TextureError::InvalidSize`] when the image's
    /// *original* width or height is below [`MIN_TEXTURE_SIZE`] — checked
    /// before padding, unlike in [`new`](Self::new).
    ///
    /// The resulting texture's logical size is the original image's
    /// extent, never the padded one.
    pub fn from_image<B: GlBackend>(
        gl: &B,
        image: &PixelImage,
        filter: Filter,
    ) -> Result<Texture, TextureError> {
        let (width, height) = (image.width(), image.height());
        if width < MIN_TEXTURE_SIZE || height < MIN_TEXTURE_SIZE {
            return Err(TextureError::InvalidSize { width, height });
        }
        let adjusted = image.padded();
        let native = create_native(
            gl,
            adjusted.width(),
            adjusted.height(),
            Some(adjusted.data()),
            filter,
        )?;
        Ok(Texture {
            native: Some(native),
            width,
            height,
        })
    }

    /// The logical dimensions. Infallible, no side effects.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The power-of-two extent of the backend storage.
    #[inline]
    pub fn padded_size(&self) -> (u32, u32) {
        (
            next_power_of_two(self.width),
            next_power_of_two(self.height),
        )
    }

    /// The backend resource name for the drawing layer, or `None` once
    /// disposed.
    #[inline]
    pub fn native(&self) -> Option<NativeTexture> {
        self.native
    }

    /// Reads back the full padded-extent storage.
    ///
    /// The returned buffer is `4 * padded_width * padded_height` bytes and
    /// includes the border region; extracting the logical rectangle is the
    /// caller's responsibility.
    pub fn pixels<B: GlBackend>(&self, gl: &B) -> Result<Vec<u8>, TextureError> {
        let native = self.native.ok_or(TextureError::Disposed)?;
        let (padded_width, padded_height) = self.padded_size();
        let mut pixels =
            vec![0u8; BYTES_PER_PIXEL * padded_width as usize * padded_height as usize];
        let code;
        {
            let _bound = Bound::new(gl, native);
            gl.read_back_2d(&mut pixels);
            code = gl.last_error();
        }
        if code != 0 {
            return Err(TextureError::Backend { code });
        }
        Ok(pixels)
    }

    /// Replaces the full storage contents.
    ///
    /// `pixels` must be sized to the padded extent (`4 * padded_width *
    /// padded_height` bytes, row stride `padded_width * 4`); handing over a
    /// logically-sized buffer is a programming error.
    ///
    /// Sampling state is untouched; the filter chosen at creation remains.
    pub fn replace_pixels<B: GlBackend>(&self, gl: &B, pixels: &[u8]) -> Result<(), TextureError> {
        let native = self.native.ok_or(TextureError::Disposed)?;
        let (padded_width, padded_height) = self.padded_size();
        assert_eq!(
            pixels.len(),
            BYTES_PER_PIXEL * padded_width as usize * padded_height as usize,
            "replacement buffer must be sized to the padded extent"
        );
        let code;
        {
            let _bound = Bound::new(gl, native);
            gl.upload_2d(padded_width, padded_height, Some(pixels));
            code = gl.last_error();
        }
        if code != 0 {
            return Err(TextureError::Backend { code });
        }
        Ok(())
    }

    /// Releases the backend resource and tags the handle as disposed.
    ///
    /// Disposing twice is a no-op. The store does not track outstanding
    /// readers: the caller must guarantee no concurrent read or draw use
    /// is in flight.
    pub fn dispose<B: GlBackend>(&mut self, gl: &B) {
        if let Some(native) = self.native.take() {
            logwise::debuginternal_sync!(
                "disposing texture object {name}",
                name = native.get()
            );
            gl.delete_texture(native);
        }
    }
}

fn create_native<B: GlBackend>(
    gl: &B,
    padded_width: u32,
    padded_height: u32,
    pixels: Option<&[u8]>,
    filter: Filter,
) -> Result<NativeTexture, TextureError> {
    let native = gl
        .gen_texture()
        .ok_or(TextureError::ResourceAllocationFailed)?;
    let code;
    {
        let _bound = Bound::new(gl, native);
        gl.set_filter(filter, filter);
        gl.upload_2d(padded_width, padded_height, pixels);
        code = gl.last_error();
    }
    if code != 0 {
        gl.delete_texture(native);
        return Err(TextureError::Backend { code });
    }
    logwise::debuginternal_sync!(
        "created {width}x{height} texture object {name}",
        width = padded_width,
        height = padded_height,
        name = native.get()
    );
    Ok(native)
}

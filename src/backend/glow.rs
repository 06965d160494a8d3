// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//at the moment this is the only hardware backend

use crate::backend::{GlBackend, NativeTexture};
use crate::sampler::Filter;
use glow::HasContext;

const fn gl_filter(filter: Filter) -> i32 {
    match filter {
        Filter::Nearest => glow::NEAREST as i32,
        Filter::Linear => glow::LINEAR as i32,
    }
}

/// [`GlBackend`] over a real OpenGL context.
///
/// Calls are written in fully-qualified form because [`GlBackend`] and
/// [`HasContext`] share some method names.
impl GlBackend for glow::Context {
    fn gen_texture(&self) -> Option<NativeTexture> {
        unsafe { HasContext::create_texture(self) }
            .ok()
            .map(|texture| NativeTexture(texture.0))
    }

    fn bind_texture(&self, texture: Option<NativeTexture>) {
        let native = texture.map(|texture| glow::NativeTexture(texture.0));
        unsafe { HasContext::bind_texture(self, glow::TEXTURE_2D, native) }
    }

    fn set_filter(&self, mag: Filter, min: Filter) {
        unsafe {
            HasContext::tex_parameter_i32(
                self,
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                gl_filter(mag),
            );
            HasContext::tex_parameter_i32(
                self,
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                gl_filter(min),
            );
        }
    }

    fn upload_2d(&self, width: u32, height: u32, pixels: Option<&[u8]>) {
        unsafe {
            //rows are always padded-width * 4 bytes, so alignment 4 holds
            HasContext::pixel_store_i32(self, glow::UNPACK_ALIGNMENT, 4);
            HasContext::tex_image_2d(
                self,
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(pixels),
            );
        }
    }

    fn read_back_2d(&self, pixels: &mut [u8]) {
        unsafe {
            HasContext::get_tex_image(
                self,
                glow::TEXTURE_2D,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelPackData::Slice(Some(pixels)),
            );
        }
    }

    fn delete_texture(&self, texture: NativeTexture) {
        unsafe { HasContext::delete_texture(self, glow::NativeTexture(texture.0)) }
    }

    fn last_error(&self) -> u32 {
        unsafe { HasContext::get_error(self) }
    }
}

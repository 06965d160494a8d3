/*! padded_textures is a GPU texture store for backends whose texture storage
must be a power of two per axis.

Callers work with logical, arbitrary-sized RGBA images; the store owns the
mapping onto padded power-of-two backend storage and provides creation
(with or without pixel data), full-buffer replacement, readback, and
disposal with typed error signaling.

# Logical vs padded size

Every texture has two extents and the distinction is first-class:

| Extent  | Meaning                                        | Where it appears |
|---------|------------------------------------------------|------------------|
| Logical | The width/height the caller asked for          | [`textures::Texture::size`] |
| Padded  | The power-of-two extent of the backend storage | [`textures::Texture::padded_size`], all upload/readback buffers |

A 10×10 source image lands in a 16×16 backend allocation: the image sits at
the top-left origin, the border is transparent black, and readback returns
the full 16×16 buffer. Extracting the logical region is the caller's
responsibility.

# Backends

The store issues a seven-call backend surface (generate, bind, filter,
upload, read back, delete, error query) through [`backend::GlBackend`]. Two
implementations ship:

- an OpenGL implementation over [glow](https://crates.io/crates/glow),
  behind the default `backend_glow` feature;
- [`backend::soft::SoftGl`], an always-available in-memory reference
  backend that emulates the GL texture-object state machine, so the whole
  contract runs headlessly (and is how this crate tests itself).

All operations must execute on the thread that owns the graphics context;
the store takes the backend by reference on every call and does no locking
of its own.

# Example

```
use padded_textures::backend::soft::SoftGl;
use padded_textures::pixel_formats::Rgba;
use padded_textures::sampler::Filter;
use padded_textures::software::PixelImage;
use padded_textures::textures::Texture;

let gl = SoftGl::new();
let image = PixelImage::new_with(10, 10, |_, _| Rgba { r: 255, g: 0, b: 0, a: 255 });
let mut texture = Texture::from_image(&gl, &image, Filter::Nearest).expect("create texture");
assert_eq!(texture.size(), (10, 10));
assert_eq!(texture.padded_size(), (16, 16));

let pixels = texture.pixels(&gl).expect("read back");
assert_eq!(pixels.len(), 4 * 16 * 16);

texture.dispose(&gl);
```
*/

logwise::declare_logging_domain!();

pub mod backend;
mod bittricks;
pub mod pixel_formats;
pub mod sampler;
pub mod software;
pub mod textures;

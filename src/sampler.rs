#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Filter {
    ///No interpolation when the texture is scaled.  The right choice for
    ///pixel-art and noise-style content.
    Nearest,
    ///Bilinear interpolation.
    Linear,
}

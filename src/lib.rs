//! Upload decoded planar YUV video frames into GPU textures.
//!
//! Every plane of a frame is written into the pre-existing texture bound to the texture unit
//! matching its plane index:
//!
//! | Format | Unit 0 | Unit 1 | Unit 2 |
//! |---|---|---|---|
//! | [`PixelFormat::YUV420P`] | luma (R8) | chroma U (R8) | chroma V (R8) |
//! | [`PixelFormat::NV12`] | luma (R8) | interleaved chroma UV (RG8) | |
//!
//! Color conversion is left to the shader sampling these units.
//!
//! ```
//! use ezk_texture::{FrameSize, PixelFormat, PlaneUpload, TextureTarget, TextureUploader};
//!
//! struct Discard;
//!
//! impl TextureTarget for Discard {
//!     type Error = std::convert::Infallible;
//!
//!     fn upload_plane(&mut self, _: &PlaneUpload, _: &[u8]) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let luma = vec![16u8; 4 * 4];
//! let chroma = vec![128u8; 2 * 2 * 2];
//!
//! TextureUploader::new()
//!     .upload(&mut Discard, PixelFormat::NV12, &[&luma[..], &chroma[..]], FrameSize::new(4, 4))
//!     .unwrap();
//! ```

pub use frame::{FrameSize, InvalidBufferError, infer_planes};
pub use pixel_format::PixelFormat;
pub use plane_decs::{Channels, PlaneDesc};
pub use texture::{PLANE_UNITS, PlaneUpload, TextureFormat, TextureTarget, TextureUnit};
pub use uploader::{InvalidInputError, TextureUploader, UploadError, UploadPlan};
#[cfg(feature = "wgpu")]
pub use wgpu_textures::{
    WgpuTextures, WgpuUploadError, bind_group_layout_entries, plane_texture_descriptors,
};

mod frame;
mod pixel_format;
mod plane_decs;
mod texture;
mod uploader;
#[cfg(feature = "wgpu")]
mod wgpu_textures;

use crate::{Channels, FrameSize};
use std::fmt;

/// Fixed binding slot a shader samples a plane from. Plane `i` is always uploaded to unit `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextureUnit(pub u32);

/// Texture units of plane 0, 1 and 2
pub const PLANE_UNITS: [TextureUnit; 3] = [TextureUnit(0), TextureUnit(1), TextureUnit(2)];

impl TextureUnit {
    /// Unit plane `plane` is uploaded to, `None` past the last plane unit
    pub fn for_plane(plane: usize) -> Option<Self> {
        PLANE_UNITS.get(plane).copied()
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TextureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit {}", self.0)
    }
}

/// Internal pixel format of a plane texture, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Single channel (Y, U or V)
    R8,
    /// Two interleaved channels, U in the first and V in the second
    Rg8,
}

impl TextureFormat {
    pub fn for_channels(channels: Channels) -> Self {
        match channels {
            Channels::One => TextureFormat::R8,
            Channels::Two => TextureFormat::Rg8,
        }
    }

    pub fn bytes_per_texel(self) -> usize {
        match self {
            TextureFormat::R8 => 1,
            TextureFormat::Rg8 => 2,
        }
    }
}

/// Parameters of a single full-image plane upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneUpload {
    pub plane: usize,
    pub unit: TextureUnit,
    pub format: TextureFormat,
    pub size: FrameSize,
}

impl PlaneUpload {
    /// Row length of the tightly packed source, `width * bytes_per_texel`
    pub fn bytes_per_row(&self) -> usize {
        self.size.width * self.format.bytes_per_texel()
    }

    /// Number of bytes the upload reads from the plane buffer
    pub fn byte_len(&self) -> usize {
        self.bytes_per_row() * self.size.height
    }
}

/// Graphics API capability to write texture images into pre-existing textures bound to texture units.
///
/// Implementations borrow the textures, they must never create or destroy them.
/// Calls happen on the thread owning the current graphics context.
pub trait TextureTarget {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Bind the texture at `upload.unit` and replace its full image with `data`, rows tightly packed.
    ///
    /// `data` may be shorter than [`PlaneUpload::byte_len`], implementations must report
    /// that as an error instead of reading out of bounds.
    fn upload_plane(&mut self, upload: &PlaneUpload, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: TextureTarget + ?Sized> TextureTarget for &mut T {
    type Error = T::Error;

    fn upload_plane(&mut self, upload: &PlaneUpload, data: &[u8]) -> Result<(), Self::Error> {
        <T as TextureTarget>::upload_plane(self, upload, data)
    }
}

use crate::{PixelFormat, plane_decs::PlaneDesc};

/// Width and height of the full resolution luma plane in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameSize {
    pub width: usize,
    pub height: usize,
}

impl FrameSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Texel dimensions of the plane described by `desc`
    pub fn plane_size(&self, desc: &PlaneDesc) -> FrameSize {
        FrameSize {
            width: desc.width_op.op(self.width),
            height: desc.height_op.op(self.height),
        }
    }
}

/// Everything that can go wrong when splitting a contiguous buffer into planes
#[derive(Debug, thiserror::Error)]
pub enum InvalidBufferError {
    #[error("pixel format {0:?} has no plane layout")]
    InvalidFormat(PixelFormat),

    #[error("frame dimensions {width}x{height} overflow the buffer size")]
    InvalidDimensions { width: usize, height: usize },

    #[error("buffer too small, expected at least {minimum} bytes, but got {got}")]
    TooSmall { minimum: usize, got: usize },
}

/// Split a tightly packed frame buffer into its planes, luma first.
///
/// Bytes past the last plane are ignored.
pub fn infer_planes(
    format: PixelFormat,
    buf: &[u8],
    size: FrameSize,
) -> Result<Vec<&[u8]>, InvalidBufferError> {
    let descs = format
        .plane_desc()
        .ok_or(InvalidBufferError::InvalidFormat(format))?;

    let invalid_dimensions = || InvalidBufferError::InvalidDimensions {
        width: size.width,
        height: size.height,
    };

    let minimum = format.buffer_size(size).ok_or_else(invalid_dimensions)?;

    if buf.len() < minimum {
        return Err(InvalidBufferError::TooSmall {
            minimum,
            got: buf.len(),
        });
    }

    let mut rem = buf;
    let mut planes = Vec::with_capacity(descs.len());

    for desc in descs {
        let len = desc
            .packed_len(size.width, size.height)
            .ok_or_else(invalid_dimensions)?;
        let (plane, tail) = rem.split_at(len);

        planes.push(plane);
        rem = tail;
    }

    Ok(planes)
}

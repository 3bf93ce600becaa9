use crate::{
    FrameSize,
    plane_decs::{NV12_PLANES, PlaneDesc, YUV420P_PLANES},
};

/// Supported pixel formats
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// No valid plane layout, every upload is rejected
    #[default]
    Unknown,

    /// Y, U and V planes, 4:2:0 sub sampling, 8 bits per sample
    YUV420P,

    /// Y and interleaved UV planes, 4:2:0 sub sampling, 8 bits per sample
    NV12,
}

impl PixelFormat {
    /// Map a decoder's integer format tag. Unrecognized tags become [`PixelFormat::Unknown`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            1 => PixelFormat::YUV420P,
            2 => PixelFormat::NV12,
            _ => PixelFormat::Unknown,
        }
    }

    pub fn raw(self) -> u32 {
        match self {
            PixelFormat::Unknown => 0,
            PixelFormat::YUV420P => 1,
            PixelFormat::NV12 => 2,
        }
    }

    /// Plane layout of the format, `None` for [`PixelFormat::Unknown`]
    pub fn plane_desc(self) -> Option<&'static [PlaneDesc]> {
        match self {
            PixelFormat::Unknown => None,
            PixelFormat::YUV420P => Some(&YUV420P_PLANES),
            PixelFormat::NV12 => Some(&NV12_PLANES),
        }
    }

    pub fn plane_count(self) -> usize {
        self.plane_desc().map_or(0, <[_]>::len)
    }

    /// Name the renderer uses for the plane sampled at texture unit `plane`
    pub fn plane_name(self, plane: usize) -> Option<&'static str> {
        match (self, plane) {
            (PixelFormat::YUV420P | PixelFormat::NV12, 0) => Some("luma"),
            (PixelFormat::YUV420P, 1) => Some("chroma_u"),
            (PixelFormat::YUV420P, 2) => Some("chroma_v"),
            (PixelFormat::NV12, 1) => Some("chroma_uv"),
            _ => None,
        }
    }

    /// Calculate the size of a tightly packed buffer holding every plane of a frame.
    ///
    /// Returns `None` for [`PixelFormat::Unknown`] or if the size overflows.
    pub fn buffer_size(self, size: FrameSize) -> Option<usize> {
        self.plane_desc()?.iter().try_fold(0usize, |total, desc| {
            total.checked_add(desc.packed_len(size.width, size.height)?)
        })
    }

    /// Calculate the strides of a frame in a packed buffer
    ///
    /// Returns `None` for [`PixelFormat::Unknown`] or if a stride overflows.
    pub fn packed_strides(self, width: usize) -> Option<Vec<usize>> {
        self.plane_desc()?
            .iter()
            .map(|desc| desc.packed_stride(width))
            .collect()
    }

    /// All formats with a plane layout
    pub fn variants() -> impl IntoIterator<Item = Self> {
        [PixelFormat::YUV420P, PixelFormat::NV12]
    }
}

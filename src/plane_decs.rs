/// Description of a single plane, used to compute its texture dimensions and upload parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaneDesc {
    pub(crate) width_op: Op,
    pub(crate) height_op: Op,

    /// Interleaved samples per texel
    pub(crate) channels: Channels,
}

impl PlaneDesc {
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Horizontal subsampling divisor relative to the luma plane
    pub fn horizontal_subsampling(&self) -> usize {
        self.width_op.divisor()
    }

    /// Vertical subsampling divisor relative to the luma plane
    pub fn vertical_subsampling(&self) -> usize {
        self.height_op.divisor()
    }

    /// Tightly packed row length in bytes for a frame of the given luma width,
    /// `None` if it overflows
    pub fn packed_stride(&self, width: usize) -> Option<usize> {
        self.width_op.op(width).checked_mul(self.channels.count())
    }

    /// Tightly packed plane length in bytes, `None` if it overflows
    pub fn packed_len(&self, width: usize, height: usize) -> Option<usize> {
        self.packed_stride(width)?
            .checked_mul(self.height_op.op(height))
    }
}

/// Plane's number of texels in relation to the luma width / height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Div(usize),
    Identity,
}

impl Op {
    pub(crate) fn op(self, lhs: usize) -> usize {
        match self {
            Op::Div(rhs) => lhs / rhs,
            Op::Identity => lhs,
        }
    }

    /// Subsampling divisor
    pub(crate) fn divisor(self) -> usize {
        match self {
            Op::Div(rhs) => rhs,
            Op::Identity => 1,
        }
    }

    /// Returns if `lhs` can be subsampled without dropping a remainder
    pub(crate) fn divides(self, lhs: usize) -> bool {
        lhs % self.divisor() == 0
    }
}

/// Channel layout of a plane's texels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// One sample per texel (Y, U or V)
    One,
    /// Two interleaved samples per texel (U then V)
    Two,
}

impl Channels {
    pub fn count(self) -> usize {
        match self {
            Channels::One => 1,
            Channels::Two => 2,
        }
    }
}

pub(crate) const YUV420P_PLANES: [PlaneDesc; 3] = [
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Identity,
        channels: Channels::One,
    },
    PlaneDesc {
        width_op: Op::Div(2),
        height_op: Op::Div(2),
        channels: Channels::One,
    },
    PlaneDesc {
        width_op: Op::Div(2),
        height_op: Op::Div(2),
        channels: Channels::One,
    },
];

pub(crate) const NV12_PLANES: [PlaneDesc; 2] = [
    PlaneDesc {
        width_op: Op::Identity,
        height_op: Op::Identity,
        channels: Channels::One,
    },
    PlaneDesc {
        width_op: Op::Div(2),
        height_op: Op::Div(2),
        channels: Channels::Two,
    },
];

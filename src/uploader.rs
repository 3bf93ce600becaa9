use crate::{
    FrameSize, PLANE_UNITS, PixelFormat, PlaneUpload, TextureFormat, TextureTarget, TextureUnit,
};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can go wrong when uploading a frame
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("pixel format {0:?} has no plane layout")]
    InvalidFormat(PixelFormat),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("failed to upload plane {plane} to texture {unit}")]
    UploadFailure {
        plane: usize,
        unit: TextureUnit,
        #[source]
        source: BoxError,
    },
}

/// Frame arguments that do not match the format's plane layout
#[derive(Debug, thiserror::Error)]
pub enum InvalidInputError {
    #[error("got invalid number of planes, expected {expected} but got {got}")]
    InvalidNumberOfPlanes { expected: usize, got: usize },

    #[error("plane {plane} has no data")]
    EmptyPlane { plane: usize },

    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error(
        "frame dimensions {width}x{height} are not divisible by the subsampling {horizontal}x{vertical} of plane {plane}"
    )]
    NotDivisible {
        plane: usize,
        width: usize,
        height: usize,
        horizontal: usize,
        vertical: usize,
    },
}

/// Validated per-plane upload parameters of a single frame, in plane order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlan {
    format: PixelFormat,
    uploads: Vec<PlaneUpload>,
}

impl UploadPlan {
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn uploads(&self) -> &[PlaneUpload] {
        &self.uploads
    }
}

/// Uploads the planes of decoded frames into the textures bound to units `0..plane_count`.
///
/// The uploader keeps no state between calls. Source buffers are only borrowed for the
/// duration of a call and textures are never created or destroyed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextureUploader;

impl TextureUploader {
    pub fn new() -> Self {
        Self
    }

    /// Validate the frame arguments and compute every plane's upload parameters
    /// without touching any texture.
    pub fn plan(
        &self,
        format: PixelFormat,
        planes: &[&[u8]],
        size: FrameSize,
    ) -> Result<UploadPlan, UploadError> {
        let descs = format
            .plane_desc()
            .ok_or(UploadError::InvalidFormat(format))?;

        if planes.len() != descs.len() {
            return Err(InvalidInputError::InvalidNumberOfPlanes {
                expected: descs.len(),
                got: planes.len(),
            }
            .into());
        }

        if let Some(plane) = planes.iter().position(|plane| plane.is_empty()) {
            return Err(InvalidInputError::EmptyPlane { plane }.into());
        }

        if size.width == 0 || size.height == 0 {
            return Err(InvalidInputError::InvalidDimensions {
                width: size.width,
                height: size.height,
            }
            .into());
        }

        let mut uploads = Vec::with_capacity(descs.len());

        for ((plane, desc), unit) in descs.iter().enumerate().zip(PLANE_UNITS) {
            if !desc.width_op.divides(size.width) || !desc.height_op.divides(size.height) {
                return Err(InvalidInputError::NotDivisible {
                    plane,
                    width: size.width,
                    height: size.height,
                    horizontal: desc.width_op.divisor(),
                    vertical: desc.height_op.divisor(),
                }
                .into());
            }

            let upload = PlaneUpload {
                plane,
                unit,
                format: TextureFormat::for_channels(desc.channels),
                size: size.plane_size(desc),
            };

            // Byte length of every plane must fit in usize
            upload
                .size
                .width
                .checked_mul(upload.format.bytes_per_texel())
                .and_then(|row| row.checked_mul(upload.size.height))
                .ok_or(InvalidInputError::InvalidDimensions {
                    width: size.width,
                    height: size.height,
                })?;

            uploads.push(upload);
        }

        Ok(UploadPlan { format, uploads })
    }

    /// Upload every plane of a frame to the texture unit matching its plane index.
    ///
    /// Nothing is uploaded if the arguments are rejected. If the graphics API fails for a plane
    /// the upload stops there: earlier planes keep their new contents, later planes are untouched.
    pub fn upload<T>(
        &self,
        target: &mut T,
        format: PixelFormat,
        planes: &[&[u8]],
        size: FrameSize,
    ) -> Result<(), UploadError>
    where
        T: TextureTarget + ?Sized,
    {
        let _span = tracing::debug_span!(
            "upload",
            ?format,
            width = size.width,
            height = size.height
        )
        .entered();

        let plan = self.plan(format, planes, size).inspect_err(|e| {
            tracing::debug!("rejected frame: {e}");
        })?;

        for (upload, data) in plan.uploads.iter().zip(planes) {
            tracing::trace!(
                plane = upload.plane,
                unit = upload.unit.0,
                width = upload.size.width,
                height = upload.size.height,
                texture_format = ?upload.format,
                "uploading plane"
            );

            target.upload_plane(upload, data).map_err(|e| {
                tracing::warn!(
                    plane = upload.plane,
                    unit = upload.unit.0,
                    "plane upload failed: {e}"
                );

                UploadError::UploadFailure {
                    plane: upload.plane,
                    unit: upload.unit,
                    source: Box::new(e),
                }
            })?;
        }

        Ok(())
    }
}

//! [`TextureTarget`] writing into caller owned [`wgpu::Texture`]s

use crate::{
    FrameSize, PLANE_UNITS, PixelFormat, PlaneUpload, TextureFormat, TextureTarget, TextureUnit,
};

/// Everything that can go wrong when writing a plane into a wgpu texture
#[derive(Debug, thiserror::Error)]
pub enum WgpuUploadError {
    #[error("no texture bound to {0}")]
    MissingTexture(TextureUnit),

    #[error("texture at {unit} has format {got:?}, expected {expected:?}")]
    FormatMismatch {
        unit: TextureUnit,
        expected: wgpu::TextureFormat,
        got: wgpu::TextureFormat,
    },

    #[error("texture at {unit} is {got_width}x{got_height}, expected {expected_width}x{expected_height}")]
    ExtentMismatch {
        unit: TextureUnit,
        expected_width: u32,
        expected_height: u32,
        got_width: u32,
        got_height: u32,
    },

    #[error("texture at {0} was not created with COPY_DST usage")]
    MissingCopyDst(TextureUnit),

    #[error("plane dimensions {0}x{1} exceed the texture size limit")]
    TooLarge(usize, usize),

    #[error(transparent)]
    Wgpu(#[from] wgpu::Error),
}

impl TextureFormat {
    pub fn to_wgpu(self) -> wgpu::TextureFormat {
        match self {
            TextureFormat::R8 => wgpu::TextureFormat::R8Unorm,
            TextureFormat::Rg8 => wgpu::TextureFormat::Rg8Unorm,
        }
    }
}

/// Borrowed plane textures, texture unit `i` is `textures[i]`
pub struct WgpuTextures<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    textures: &'a [&'a wgpu::Texture],
}

impl<'a> WgpuTextures<'a> {
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        textures: &'a [&'a wgpu::Texture],
    ) -> Self {
        Self {
            device,
            queue,
            textures,
        }
    }

    fn texture(&self, upload: &PlaneUpload) -> Result<&'a wgpu::Texture, WgpuUploadError> {
        let texture = self
            .textures
            .get(upload.unit.index())
            .copied()
            .ok_or(WgpuUploadError::MissingTexture(upload.unit))?;

        let expected = upload.format.to_wgpu();
        if texture.format() != expected {
            return Err(WgpuUploadError::FormatMismatch {
                unit: upload.unit,
                expected,
                got: texture.format(),
            });
        }

        let (width, height) = extent(upload.size)?;
        let got = texture.size();
        if got.width != width || got.height != height {
            return Err(WgpuUploadError::ExtentMismatch {
                unit: upload.unit,
                expected_width: width,
                expected_height: height,
                got_width: got.width,
                got_height: got.height,
            });
        }

        if !texture.usage().contains(wgpu::TextureUsages::COPY_DST) {
            return Err(WgpuUploadError::MissingCopyDst(upload.unit));
        }

        Ok(texture)
    }
}

impl TextureTarget for WgpuTextures<'_> {
    type Error = WgpuUploadError;

    fn upload_plane(&mut self, upload: &PlaneUpload, data: &[u8]) -> Result<(), Self::Error> {
        let texture = self.texture(upload)?;
        let (width, height) = extent(upload.size)?;
        let bytes_per_row = u32::try_from(upload.bytes_per_row())
            .map_err(|_| WgpuUploadError::TooLarge(upload.size.width, upload.size.height))?;

        // Short buffers surface as validation errors instead of the uncaptured error handler
        self.device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        let validation = pollster::block_on(self.device.pop_error_scope());
        let out_of_memory = pollster::block_on(self.device.pop_error_scope());

        match validation.or(out_of_memory) {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

fn extent(size: FrameSize) -> Result<(u32, u32), WgpuUploadError> {
    match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(WgpuUploadError::TooLarge(size.width, size.height)),
    }
}

/// Descriptors of the textures a frame of `format` and `size` is uploaded into, one per plane.
///
/// Returns `None` for [`PixelFormat::Unknown`] or dimensions not fitting a texture.
pub fn plane_texture_descriptors(
    format: PixelFormat,
    size: FrameSize,
) -> Option<Vec<wgpu::TextureDescriptor<'static>>> {
    let descs = format.plane_desc()?;

    descs
        .iter()
        .enumerate()
        .map(|(plane, desc)| {
            let (width, height) = extent(size.plane_size(desc)).ok()?;

            Some(wgpu::TextureDescriptor {
                label: format.plane_name(plane),
                size: wgpu::Extent3d {
                    width,
                    height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: TextureFormat::for_channels(desc.channels).to_wgpu(),
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            })
        })
        .collect()
}

/// Bind group layout entries a renderer samples the planes of `format` through,
/// binding `i` is the texture at unit `i`.
pub fn bind_group_layout_entries(format: PixelFormat) -> Vec<wgpu::BindGroupLayoutEntry> {
    PLANE_UNITS
        .iter()
        .take(format.plane_count())
        .map(|unit| wgpu::BindGroupLayoutEntry {
            binding: unit.0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        })
        .collect()
}

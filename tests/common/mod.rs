use ezk_texture::{FrameSize, PlaneUpload, TextureFormat, TextureTarget};
use std::collections::BTreeMap;

/// Contents of a texture as a readback would return them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureImage {
    pub format: TextureFormat,
    pub size: FrameSize,
    pub data: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum FakeGpuError {
    #[error("injected failure at upload call {0}")]
    Injected(usize),

    #[error("source buffer holds {got} bytes, the upload reads {expected}")]
    OutOfRange { expected: usize, got: usize },
}

/// Graphics API double keeping one texture image per unit, like a readback would see them
#[derive(Debug, Default)]
pub struct FakeGpu {
    pub textures: BTreeMap<u32, TextureImage>,
    pub calls: Vec<PlaneUpload>,
    fail_at: Option<usize>,
}

impl FakeGpu {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    /// Fail the `call`th upload (counting from 0) with [`FakeGpuError::Injected`]
    pub fn failing_at(call: usize) -> Self {
        init_tracing();
        Self {
            fail_at: Some(call),
            ..Self::default()
        }
    }

    pub fn texture(&self, unit: u32) -> Option<&TextureImage> {
        self.textures.get(&unit)
    }
}

impl TextureTarget for FakeGpu {
    type Error = FakeGpuError;

    fn upload_plane(&mut self, upload: &PlaneUpload, data: &[u8]) -> Result<(), Self::Error> {
        let call = self.calls.len();
        self.calls.push(*upload);

        if self.fail_at == Some(call) {
            return Err(FakeGpuError::Injected(call));
        }

        let expected = upload.byte_len();
        if data.len() < expected {
            return Err(FakeGpuError::OutOfRange {
                expected,
                got: data.len(),
            });
        }

        self.textures.insert(
            upload.unit.0,
            TextureImage {
                format: upload.format,
                size: upload.size,
                data: data[..expected].to_vec(),
            },
        );

        Ok(())
    }
}

/// Deterministic, plane distinct byte pattern
pub fn pattern(seed: u8, len: usize) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}

/// Route the uploader's tracing output into the test harness, respects `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ezk_texture=trace".into()),
        )
        .with_test_writer()
        .try_init();
}

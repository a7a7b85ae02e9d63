//! Reusable RGBA scratch surface for raster sampling
//!
//! The pixel comparison only ever needs two small rasters covering the
//! current overlap region. Instead of an implicit shared surface, the
//! buffer is an explicit value the caller owns, resized per comparison and
//! reused across calls.

/// A caller-owned RGBA raster buffer, row-major, 4 bytes per pixel.
#[derive(Debug, Default)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterSurface {
    /// Creates an empty surface; the first [`resize`](Self::resize)
    /// allocates storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resizes to `width` x `height` pixels and clears every channel to 0
    /// (fully transparent). Existing capacity is kept when it suffices.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        let len = width as usize * height as usize * 4;
        self.data.clear();
        self.data.resize(len, 0);
    }

    /// Surface width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access for the host's sampler to write pixels into
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Alpha value at byte `offset` into the RGBA stream, or 0 when the
    /// buffer is too short to contain that channel.
    pub(crate) fn alpha_at(&self, offset: usize) -> u8 {
        self.data.get(offset).copied().unwrap_or(0)
    }
}

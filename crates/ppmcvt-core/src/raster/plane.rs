//! Contiguous sample storage for a single raster plane.

/// One `height x width` grid of samples stored row-major in a single buffer.
///
/// Sample `(x, y)` lives at `y * width + x`. Every plane owns its buffer
/// exclusively; rasters hold one plane per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl Plane {
    /// Allocate a zero-filled plane.
    ///
    /// Returns `None` if `width * height` overflows or the allocator refuses
    /// the request. Nothing is left allocated on failure.
    pub(crate) fn zeroed(width: u32, height: u32) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        let mut samples = Vec::new();
        samples.try_reserve_exact(len).ok()?;
        samples.resize(len, 0);
        Some(Self {
            width,
            height,
            samples,
        })
    }

    /// Wrap an existing buffer, clamping every sample to `max`.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    pub(crate) fn from_samples(
        width: u32,
        height: u32,
        mut samples: Vec<u16>,
        max: u16,
    ) -> Option<Self> {
        let len = (width as usize).checked_mul(height as usize)?;
        if samples.len() != len {
            return None;
        }
        for sample in samples.iter_mut() {
            *sample = (*sample).min(max);
        }
        Some(Self {
            width,
            height,
            samples,
        })
    }

    /// Plane width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in rows.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "sample ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }

    /// Sample at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> u16 {
        self.samples[self.index(x, y)]
    }

    #[inline]
    pub(crate) fn set(&mut self, x: u32, y: u32, value: u16) {
        let idx = self.index(x, y);
        self.samples[idx] = value;
    }

    /// Samples of row `y`.
    pub fn row(&self, y: u32) -> &[u16] {
        let start = y as usize * self.width as usize;
        &self.samples[start..start + self.width as usize]
    }

    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u16] {
        let start = y as usize * self.width as usize;
        &mut self.samples[start..start + self.width as usize]
    }

    /// All samples in row-major order.
    pub fn as_slice(&self) -> &[u16] {
        &self.samples
    }

    /// True when every sample is zero.
    pub fn is_zero(&self) -> bool {
        self.samples.iter().all(|&s| s == 0)
    }
}

use chr_types::Scalar;

/// A convenience type for generating a buffer of little-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct LeBuffer(Vec<u8>);

impl LeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Write any scalar to this buffer.
    pub fn push(&mut self, item: impl Scalar) {
        self.0.extend(item.to_raw().as_ref())
    }

    /// Write multiple scalars into the buffer
    pub fn extend<T: Scalar>(&mut self, iter: impl IntoIterator<Item = T>) {
        for item in iter {
            self.0.extend(item.to_raw().as_ref())
        }
    }

    /// Pad the buffer with zeros up to `len` bytes.
    ///
    /// Does nothing if the buffer is already at least that long.
    pub fn pad_to(&mut self, len: usize) {
        if self.0.len() < len {
            self.0.resize(len, 0);
        }
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl std::ops::Deref for LeBuffer {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

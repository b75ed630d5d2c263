//! types for working with raw little-endian bytes

/// A trait for stroke font scalars.
///
/// Every multi-byte value in a stroke font is stored little-endian; this trait
/// handles converting between those bytes and the native representation.
///
/// You do not need to implement this trait directly; it is an implementation
/// detail of the [`LittleEndian`] wrapper.
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: sealed::ByteArray;

    /// Create an instance of this type from raw little-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw little-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will always succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// always return `None` otherwise.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::ByteArray::from_slice(slice).map(Self::from_raw)
    }
}

/// A trait for types that have a known, constant size.
pub trait FixedSize: Sized {
    /// The raw size of this type, in bytes.
    ///
    /// This is the size required to represent this type in a font file, which
    /// may differ from the size of the native type:
    ///
    /// ```
    /// # use chr_types::{FixedSize, LittleEndian};
    /// assert_eq!(std::mem::size_of::<i16>(), i16::RAW_BYTE_LEN);
    /// assert_eq!(std::mem::size_of::<LittleEndian<u16>>(), 2);
    /// ```
    const RAW_BYTE_LEN: usize;
}

/// A wrapper around raw little-endian bytes for some type.
///
/// Values of this type can be borrowed directly out of font data; call
/// [`get`](LittleEndian::get) to convert to the native representation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct LittleEndian<T: Scalar>(pub(crate) T::Raw);

// # SAFETY:
//
// `LittleEndian<T>` has the bound `T: Scalar`, and contains only a single value,
// `<T as Scalar>::Raw` which is only ever a byte array.
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<T> bytemuck::Zeroable for LittleEndian<T> where T: Scalar + Copy {}
#[cfg(feature = "bytemuck")]
#[allow(unsafe_code)]
unsafe impl<T> bytemuck::AnyBitPattern for LittleEndian<T> where T: Scalar + Copy + 'static {}

impl<T: Scalar> LittleEndian<T> {
    /// construct a new `LittleEndian<T>` from raw bytes
    pub fn new(raw: T::Raw) -> LittleEndian<T> {
        LittleEndian(raw)
    }

    /// Attempt to construct a new raw value from this slice.
    ///
    /// This will fail if `slice.len() != T::RAW_BYTE_LEN`.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        sealed::ByteArray::from_slice(slice).map(Self)
    }

    /// Convert this raw type to its native representation.
    #[inline(always)]
    pub fn get(&self) -> T {
        T::from_raw(self.0)
    }

    /// Set the value, overwriting the bytes.
    pub fn set(&mut self, value: T) {
        self.0 = value.to_raw();
    }

    /// Get the raw little-endian bytes.
    pub fn le_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<T: Scalar> From<T> for LittleEndian<T> {
    #[inline]
    fn from(val: T) -> Self {
        LittleEndian(val.to_raw())
    }
}

impl<T: Scalar + Default> Default for LittleEndian<T> {
    fn default() -> Self {
        Self::from(T::default())
    }
}

// NOTE: due to the orphan rules, we cannot impl the inverse of this.
impl<T: Scalar + Copy + PartialEq> PartialEq<T> for LittleEndian<T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T: Scalar> FixedSize for LittleEndian<T> {
    const RAW_BYTE_LEN: usize = <T::Raw as sealed::ByteArray>::LEN;
}

impl<T: std::fmt::Debug + Scalar + Copy> std::fmt::Debug for LittleEndian<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: std::fmt::Display + Scalar + Copy> std::fmt::Display for LittleEndian<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

macro_rules! int_scalar {
    ($ty:ty, $len:literal) => {
        impl Scalar for $ty {
            type Raw = [u8; $len];

            fn to_raw(self) -> [u8; $len] {
                self.to_le_bytes()
            }

            #[inline(always)]
            fn from_raw(raw: [u8; $len]) -> $ty {
                Self::from_le_bytes(raw)
            }
        }

        impl FixedSize for $ty {
            const RAW_BYTE_LEN: usize = $len;
        }
    };
}

int_scalar!(u8, 1);
int_scalar!(i8, 1);
int_scalar!(u16, 2);
int_scalar!(i16, 2);
int_scalar!(u32, 4);

pub(crate) mod sealed {
    /// A fixed-length array of bytes, used as the raw form of a [`Scalar`].
    ///
    /// [`Scalar`]: super::Scalar
    pub trait ByteArray: Copy + AsRef<[u8]> + PartialEq + Eq + core::hash::Hash {
        const LEN: usize;

        /// Must always succeed for `[u8; N]` if `slice.len() == N`, must fail otherwise
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    impl<const N: usize> ByteArray for [u8; N] {
        const LEN: usize = N;

        fn from_slice(slice: &[u8]) -> Option<Self> {
            slice.try_into().ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn little_endian_order() {
        assert_eq!(u16::read(&[0x34, 0x12]), Some(0x1234));
        assert_eq!(i16::read(&[0xFE, 0xFF]), Some(-2));
        assert_eq!(i8::read(&[0x80]), Some(-128));
        assert_eq!(u16::read(&[0x34]), None);
        assert_eq!(u16::read(&[0x34, 0x12, 0x00]), None);
    }

    #[test]
    fn wrapper_round_trips_value() {
        let mut raw = LittleEndian::<u16>::from(0xBEEF);
        assert_eq!(raw.le_bytes(), &[0xEF, 0xBE]);
        assert_eq!(raw.get(), 0xBEEF);
        raw.set(7);
        assert_eq!(raw.get(), 7);
        assert_eq!(LittleEndian::<u16>::RAW_BYTE_LEN, 2);
        assert!(LittleEndian::<u16>::from_slice(&[1]).is_none());
    }
}

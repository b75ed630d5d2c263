/// A major, minor version pair.
///
/// Stroke fonts record two of these in the prefix: the revision of the font
/// itself, and the oldest graphics driver revision able to load it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// The major version number
    pub major: u8,
    /// The minor version number
    pub minor: u8,
}

impl Version {
    /// Create a new version with the provided major and minor parts.
    pub const fn new(major: u8, minor: u8) -> Self {
        Version { major, minor }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

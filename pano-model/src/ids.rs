use uuid::Uuid;

/// Strongly typed ID for galleries
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryId(pub Uuid);

impl Default for GalleryId {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryId {
    pub fn new() -> Self {
        GalleryId(Uuid::now_v7())
    }

    /// Deterministic ID, used by fixtures and tests.
    pub const fn from_u128(value: u128) -> Self {
        GalleryId(Uuid::from_u128(value))
    }

    pub fn as_str(&self) -> String {
        self.0.to_string()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for GalleryId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for GalleryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

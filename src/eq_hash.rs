use super::PersonName;
use std::hash::{Hash, Hasher};

/// Two names are equal exactly when their canonical text is identical,
/// which is also exactly when `compare` returns `Equal`.
impl Eq for PersonName {}
impl PartialEq for PersonName {
    #[inline]
    fn eq(&self, other: &PersonName) -> bool {
        self.separator == other.separator && self.as_str() == other.as_str()
    }
}

/// Hashes the canonical text, so it always agrees with `Eq`.
///
/// This feeds whatever `Hasher` the collection supplies; for the stable
/// 32-bit value used by external hash indexes see [`PersonName::hash32`].
impl Hash for PersonName {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

use super::PersonName;
use std::cmp::Ordering;

impl PersonName {
    /// Order by family name, then by given name, comparing bytes.
    ///
    /// This is not the same as comparing the canonical strings whole: the
    /// comma sorts after the apostrophe, so `Ab,X` would otherwise land
    /// after `Ab'c,X`.
    ///
    /// ```
    /// use person_name::PersonName;
    /// use std::cmp::Ordering;
    ///
    /// let adams = PersonName::parse("Adams,Zack").unwrap();
    /// let smith = PersonName::parse("Smith,Ann").unwrap();
    /// assert_eq!(Ordering::Less, adams.compare(&smith));
    /// ```
    #[inline]
    pub fn compare(&self, other: &PersonName) -> Ordering {
        self.family()
            .as_bytes()
            .cmp(other.family().as_bytes())
            .then_with(|| self.given().as_bytes().cmp(other.given().as_bytes()))
    }
}

impl Ord for PersonName {
    #[inline]
    fn cmp(&self, other: &PersonName) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for PersonName {
    #[inline]
    fn partial_cmp(&self, other: &PersonName) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

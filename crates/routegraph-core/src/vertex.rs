use std::borrow::Borrow;
use std::fmt;

/// A graph node identified by an arbitrary wrapped value.
///
/// Equality, hashing and ordering delegate entirely to the wrapped
/// value, so two vertices wrapping equal data are interchangeable. The
/// wrapped type must provide deterministic `Eq` and `Hash` for graph
/// membership to behave; this is a binding contract of the whole
/// workspace, not an optimization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vertex<T>(T);

impl<T> Vertex<T> {
    /// Wrap a value as a vertex.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// The wrapped value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.0
    }

    /// Unwrap the vertex back into its value.
    #[inline]
    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T> From<T> for Vertex<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Lets hash maps keyed by `Vertex<T>` be queried with a bare `&T`.
impl<T> Borrow<T> for Vertex<T> {
    #[inline]
    fn borrow(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Vertex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn equality_delegates_to_value() {
        assert_eq!(Vertex::new("a"), Vertex::new("a"));
        assert_ne!(Vertex::new("a"), Vertex::new("b"));
    }

    #[test]
    fn map_lookup_by_bare_value() {
        let mut map: HashMap<Vertex<String>, i32> = HashMap::new();
        map.insert(Vertex::new("home".to_string()), 1);
        // Borrow<T> lets us query without building a Vertex.
        assert_eq!(map.get(&"home".to_string()), Some(&1));
        assert!(map.get(&"away".to_string()).is_none());
    }

    #[test]
    fn wrappers_of_equal_data_are_interchangeable() {
        let mut map = HashMap::new();
        map.insert(Vertex::new(42), "answer");
        let other = Vertex::new(42);
        assert_eq!(map.get(&other), Some(&"answer"));
    }

    #[test]
    fn accessors() {
        let v = Vertex::new((3, 4));
        assert_eq!(*v.value(), (3, 4));
        assert_eq!(v.into_value(), (3, 4));
    }

    #[test]
    fn display() {
        assert_eq!(Vertex::new(7).to_string(), "Vertex(7)");
    }
}

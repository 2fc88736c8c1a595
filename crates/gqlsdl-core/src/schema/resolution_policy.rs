/// How a [`SchemaBuilder`](crate::schema::SchemaBuilder) resolves type
/// references between declarations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ResolutionPolicy {
    /// Declarations resolve in source order and may only reference types
    /// declared before them. See
    /// [`SequentialTypeResolver`](crate::resolver::SequentialTypeResolver).
    #[default]
    Sequential,

    /// Declarations resolve as concurrent tasks and may reference each
    /// other in any order. See
    /// [`ConcurrentTypeResolver`](crate::resolver::ConcurrentTypeResolver).
    Concurrent,
}
impl ResolutionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Concurrent => "concurrent",
        }
    }
}
impl std::fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

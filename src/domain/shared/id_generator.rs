/// Source of the opaque, unique suffix used in entity ids
/// (`thread-<id>`, `comment-<id>`, ...).
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Builds a prefixed entity id, e.g. `comment-0193...`.
pub fn entity_id(kind: &str, generator: &dyn IdGenerator) -> String {
    format!("{kind}-{}", generator.generate())
}

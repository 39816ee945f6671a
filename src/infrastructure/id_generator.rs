use crate::domain::shared::id_generator::IdGenerator;
use uuid::Uuid;

/// Time-ordered UUID v7 in simple (undashed) form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::now_v7().simple().to_string()
    }
}

use uuid::Uuid;

/// Source of client-side surrogate keys.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random 128-bit ids, hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

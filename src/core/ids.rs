//! Identifier generation for entities created at runtime
//!
//! Ids are `<prefix>-<uuid v4>` so two entities created in the same
//! millisecond never collide.

use uuid::Uuid;

/// Entity kinds that get generated ids
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdKind {
    Batch,
    Material,
    Message,
    Poll,
}

impl IdKind {
    fn prefix(&self) -> &'static str {
        match self {
            IdKind::Batch => "batch",
            IdKind::Material => "mat",
            IdKind::Message => "msg",
            IdKind::Poll => "poll",
        }
    }
}

/// Generate a new unique id for the given entity kind
pub fn new_id(kind: IdKind) -> String {
    format!("{}-{}", kind.prefix(), Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_prefixed() {
        assert!(new_id(IdKind::Batch).starts_with("batch-"));
        assert!(new_id(IdKind::Material).starts_with("mat-"));
        assert!(new_id(IdKind::Message).starts_with("msg-"));
        assert!(new_id(IdKind::Poll).starts_with("poll-"));
    }

    #[test]
    fn test_rapid_generation_is_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id(IdKind::Message)).collect();
        assert_eq!(ids.len(), 1000);
    }
}

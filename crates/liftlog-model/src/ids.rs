#![deny(unsafe_code)]

use uuid::Uuid;

/// Generate a fresh record identifier for a workout or exercise.
///
/// Identifiers are random (UUID v4) rendered in the hyphen-free simple form,
/// so two records created in the same millisecond still get distinct ids.
pub fn new_record_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct() {
        let a = new_record_id();
        let b = new_record_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

use chrono::{Datelike, Utc};
use rand::Rng;

/// Generates a student code of the form `ST{yy}{nnnn}`, e.g. `ST260412`.
pub fn generate_student_code() -> String {
    let year = Utc::now().year() % 100;
    let serial: u32 = rand::rng().random_range(0..10_000);
    format!("ST{year:02}{serial:04}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_expected_shape() {
        let code = generate_student_code();
        assert_eq!(code.len(), 8);
        assert!(code.starts_with("ST"));
        assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
    }
}

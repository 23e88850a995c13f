//! Human-readable listing code generation.

use rand::Rng;

/// Fixed tag prefixing every listing code
pub const CODE_PREFIX: &str = "LST";

/// Generate a listing code: the fixed tag followed by 6 random decimal digits
///
/// Codes are not checked for uniqueness; duplicates are tolerated and code
/// lookup returns an arbitrary match.
pub fn generate_listing_code() -> String {
    let digits = rand::thread_rng().gen_range(100_000..1_000_000);
    format!("{}{}", CODE_PREFIX, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        for _ in 0..100 {
            let code = generate_listing_code();
            assert_eq!(code.len(), 9);
            assert!(code.starts_with(CODE_PREFIX));
            let digits = &code[CODE_PREFIX.len()..];
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            assert!(!digits.starts_with('0'));
        }
    }
}

//! Unique slug identifier generation
//!
//! A slug is the entity name with whitespace runs collapsed to underscores
//! and lowercased. When the candidate is already taken, a random numeric
//! suffix in 0..=99 is appended and the existence check repeated, up to
//! `MAX_ATTEMPTS` times before giving up with `GenerationExhausted`.

use std::future::Future;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::error::{AppError, AppResult};

/// Retry ceiling for suffixed candidates
pub const MAX_ATTEMPTS: usize = 20;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize a display name into slug form. Idempotent.
pub fn normalize(name: &str) -> String {
    WHITESPACE
        .replace_all(name.trim(), "_")
        .to_lowercase()
}

/// Generate a slug unique per the given existence check.
///
/// `exists` is awaited once per candidate, sequentially.
pub async fn generate<F, Fut>(name: &str, exists: F) -> AppResult<String>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = AppResult<bool>>,
{
    let base = normalize(name);
    if !exists(base.clone()).await? {
        return Ok(base);
    }

    for _ in 0..MAX_ATTEMPTS {
        let suffix: u8 = rand::thread_rng().gen_range(0..100);
        let candidate = format!("{}_{}", base, suffix);
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
    }

    Err(AppError::GenerationExhausted(MAX_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn taken(slugs: &[&str]) -> Arc<HashSet<String>> {
        Arc::new(slugs.iter().map(|s| s.to_string()).collect())
    }

    #[tokio::test]
    async fn test_normalize() {
        assert_eq!(normalize("3D Printer Lab"), "3d_printer_lab");
        assert_eq!(normalize("  Spaced   out \t name "), "spaced_out_name");
        // Idempotent: normalizing a normalized name is a no-op
        assert_eq!(normalize("3d_printer_lab"), "3d_printer_lab");
    }

    #[tokio::test]
    async fn test_free_name_returns_normalized_form() {
        let set = taken(&[]);
        let slug = generate("3D Printer Lab", |c| {
            let set = set.clone();
            async move { Ok(set.contains(&c)) }
        })
        .await
        .unwrap();
        assert_eq!(slug, "3d_printer_lab");
    }

    #[tokio::test]
    async fn test_taken_name_gets_numeric_suffix() {
        let set = taken(&["3d_printer_lab"]);
        let slug = generate("3D Printer Lab", |c| {
            let set = set.clone();
            async move { Ok(set.contains(&c)) }
        })
        .await
        .unwrap();
        let suffix = slug
            .strip_prefix("3d_printer_lab_")
            .expect("suffixed slug");
        let n: u32 = suffix.parse().expect("numeric suffix");
        assert!(n < 100);
    }

    #[tokio::test]
    async fn test_exhaustion_is_bounded() {
        // Every candidate reported taken: must fail after MAX_ATTEMPTS
        let result = generate("widget", |_| async { Ok(true) }).await;
        assert!(matches!(
            result,
            Err(AppError::GenerationExhausted(MAX_ATTEMPTS))
        ));
    }
}

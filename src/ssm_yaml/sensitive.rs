//! Secret-keyword classifier over parameter paths.

const KEYWORDS: &[&str] = &[
    "password", "secret", "token", "key", "apikey", "auth", "private",
];

/// True when any sensitive keyword occurs as a substring of the lowercased
/// path. Pure and total; used to auto-select SecureString on upload and to
/// decorate tree output with a lock.
pub fn is_sensitive(path: &str) -> bool {
    let lowered = path.to_lowercase();
    KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_keywords_anywhere_in_the_path() {
        assert!(is_sensitive("/app/db/password"));
        assert!(is_sensitive("/app/API_KEY"));
        assert!(is_sensitive("/app/oauth/redirect"));
        assert!(is_sensitive("/private/anything"));
    }

    #[test]
    fn plain_paths_are_not_sensitive() {
        assert!(!is_sensitive("/app/db/host"));
        assert!(!is_sensitive("/app/timeout"));
    }
}

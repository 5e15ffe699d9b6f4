use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};
use std::borrow::Cow;

/// Replaces participant names in log output with a correlatable digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRedactor {
    enabled: bool,
}

impl Default for NameRedactor {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl NameRedactor {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn redact<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.enabled {
            Cow::Owned(format!("NAME[{}]", Self::hash_value(name)))
        } else {
            Cow::Borrowed(name)
        }
    }

    fn hash_value(value: &str) -> String {
        let digest = Sha256::digest(value.trim().as_bytes());
        // First 8 bytes keep the tag short
        general_purpose::STANDARD.encode(digest.get(..8).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_hidden() {
        let redactor = NameRedactor::default();
        let redacted = redactor.redact("Budi Santoso");

        assert!(redacted.starts_with("NAME["));
        assert!(!redacted.contains("Budi"));
    }

    #[test]
    fn test_same_name_same_tag() {
        let redactor = NameRedactor::default();
        assert_eq!(redactor.redact("Ana"), redactor.redact("Ana"));
        assert_ne!(redactor.redact("Ana"), redactor.redact("Anna"));
    }

    #[test]
    fn test_disabled_passes_through() {
        let redactor = NameRedactor::new(false);
        assert!(!redactor.is_enabled());
        assert!(NameRedactor::default().is_enabled());
        assert_eq!(redactor.redact("Ana"), "Ana");
    }
}

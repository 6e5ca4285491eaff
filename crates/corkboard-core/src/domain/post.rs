use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;
use crate::ports::SecretScheme;

/// Post entity - one entry on the anonymous board.
///
/// `password` holds whatever the configured [`SecretScheme`] produced at
/// creation time (the verbatim secret under the plaintext scheme, a salted
/// hash under Argon2). It is never exposed over the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new post with generated id and creation timestamp.
    ///
    /// `password` must already be sealed by the active secret scheme.
    pub fn new(title: String, content: String, author: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            password,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Replace title and content, stamping `updated_at`.
    ///
    /// `created_at` is immutable; edits never touch it.
    pub fn edit(&mut self, title: String, content: String) -> Result<(), DomainError> {
        if title.is_empty() || content.is_empty() {
            return Err(DomainError::Validation(
                "title and content are required".to_string(),
            ));
        }

        self.title = title;
        self.content = content;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Check the shared secret before a mutation.
    pub fn authorize(
        &self,
        scheme: &dyn SecretScheme,
        candidate: &str,
    ) -> Result<(), DomainError> {
        match scheme.verify(candidate, &self.password) {
            Ok(true) => Ok(()),
            Ok(false) => Err(DomainError::PasswordMismatch),
            Err(e) => Err(DomainError::Internal(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::SecretError;

    struct Exact;

    impl SecretScheme for Exact {
        fn seal(&self, password: &str) -> Result<String, SecretError> {
            Ok(password.to_owned())
        }

        fn verify(&self, candidate: &str, stored: &str) -> Result<bool, SecretError> {
            Ok(candidate == stored)
        }
    }

    #[test]
    fn edit_rewrites_fields_and_stamps_updated_at() {
        let mut post = Post::new(
            "before".to_string(),
            "old content".to_string(),
            "anon".to_string(),
            "pw".to_string(),
        );
        let created_at = post.created_at;

        post.edit("after".to_string(), "new content".to_string())
            .unwrap();

        assert_eq!(post.title, "after");
        assert_eq!(post.content, "new content");
        assert_eq!(post.created_at, created_at);
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn edit_rejects_empty_fields() {
        let mut post = Post::new(
            "title".to_string(),
            "content".to_string(),
            "anon".to_string(),
            "pw".to_string(),
        );

        let err = post.edit(String::new(), "content".to_string()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(post.title, "title");
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn authorize_distinguishes_matching_secret() {
        let post = Post::new(
            "title".to_string(),
            "content".to_string(),
            "anon".to_string(),
            "pw".to_string(),
        );

        assert!(post.authorize(&Exact, "pw").is_ok());
        assert!(matches!(
            post.authorize(&Exact, "other"),
            Err(DomainError::PasswordMismatch)
        ));
    }
}

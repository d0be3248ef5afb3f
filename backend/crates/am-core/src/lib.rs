pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::article::Article;
pub use models::article_draft::ArticleDraft;
pub use models::profile_update::ProfileUpdate;
pub use models::role::Role;
pub use models::user_identity::UserIdentity;

/// Id given to every identity fabricated by a plain or provider sign-in.
pub const DEMO_USER_ID: &str = "1";

/// Stands in for a blank name on sign-up.
pub const PLACEHOLDER_NAME: &str = "New Member";

/// Stands in for a blank email on sign-up.
pub const PLACEHOLDER_EMAIL: &str = "member@example.com";

/// Provider used when a provider sign-in names none.
pub const DEFAULT_PROVIDER: &str = "oauth";

/// Author recorded on articles published while nobody is signed in.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

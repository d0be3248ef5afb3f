pub mod article;
pub mod article_draft;
pub mod profile_update;
pub mod role;
pub mod user_identity;

mod nullable;

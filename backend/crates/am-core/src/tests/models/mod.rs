mod article;
mod profile_update;
mod role;
mod user_identity;

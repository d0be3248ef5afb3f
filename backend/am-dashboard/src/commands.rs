use crate::article_commands::ArticleCommands;

use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password (any password is accepted)
    SignIn {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign in through a third-party provider such as google or github
    SignInProvider { provider: String },

    /// Create an account and sign in
    SignUp {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Sign out and forget the stored session
    SignOut,

    /// Show the session status and the signed-in member
    Whoami,

    /// Update the signed-in member's profile
    Profile(ProfileArgs),

    /// Article operations
    Articles {
        #[command(subcommand)]
        action: ArticleCommands,
    },

    /// Read commands line by line from stdin
    Shell,
}

/// Every flag is optional; only the ones given are changed.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// user or admin
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub avatar: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
    #[arg(long)]
    pub job_title: Option<String>,
    /// Replace the skill list (repeat for several skills)
    #[arg(long = "skill")]
    pub skills: Vec<String>,
    /// Empty the skill list
    #[arg(long, conflicts_with = "skills")]
    pub clear_skills: bool,
}

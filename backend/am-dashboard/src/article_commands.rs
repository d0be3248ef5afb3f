use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum ArticleCommands {
    /// List articles, newest first
    List,

    /// Show one article
    Show { id: String },

    /// Publish a new article as the signed-in member
    Publish {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Derived from the content when omitted
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long, default_value = "General")]
        category: String,
    },

    /// Edit an existing article
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        excerpt: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },

    /// Delete an article
    Remove { id: String },
}

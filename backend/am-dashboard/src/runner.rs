use crate::app_state::AppState;
use crate::article_commands::ArticleCommands;
use crate::commands::{Commands, ProfileArgs};
use crate::error::{DashboardError, Result as DashboardErrorResult};

use am_content::Mutation;
use am_core::models::article::{derive_excerpt, estimate_read_time};
use am_core::{ArticleDraft, ProfileUpdate, Role};
use serde_json::{Value, json};

/// Run one command and describe its result as JSON.
pub async fn execute(state: &AppState, command: Commands) -> DashboardErrorResult<Value> {
    match command {
        Commands::SignIn { email, password } => {
            state.session.sign_in(&email, &password).await?;
            Ok(session_view(state))
        }
        Commands::SignInProvider { provider } => {
            state.session.sign_in_with_provider(&provider).await?;
            Ok(session_view(state))
        }
        Commands::SignUp {
            name,
            email,
            password,
        } => {
            state.session.sign_up(&name, &email, &password).await?;
            Ok(session_view(state))
        }
        Commands::SignOut => {
            state.session.sign_out()?;
            Ok(session_view(state))
        }
        Commands::Whoami => Ok(session_view(state)),
        Commands::Profile(args) => {
            let update = profile_update(args)?;
            match state.session.update_profile(update)? {
                Some(user) => Ok(json!({ "outcome": "applied", "user": user })),
                None => Ok(json!({ "outcome": "skipped", "reason": "not_signed_in" })),
            }
        }
        Commands::Articles { action } => execute_article(state, action),
        Commands::Shell => Err(DashboardError::InvalidCommand {
            message: String::from("shell cannot be started from inside the shell"),
        }),
    }
}

fn execute_article(state: &AppState, action: ArticleCommands) -> DashboardErrorResult<Value> {
    match action {
        ArticleCommands::List => Ok(serde_json::to_value(&*state.content.articles())?),
        ArticleCommands::Show { id } => match state.content.find(&id) {
            Some(article) => Ok(serde_json::to_value(article)?),
            None => Err(DashboardError::ArticleNotFound { id }),
        },
        ArticleCommands::Publish {
            title,
            content,
            excerpt,
            category,
        } => {
            let draft = ArticleDraft {
                title,
                excerpt: excerpt.unwrap_or_default(),
                content,
                category,
            };
            let article = state.publish_article(draft)?;
            Ok(serde_json::to_value(article)?)
        }
        ArticleCommands::Update {
            id,
            title,
            excerpt,
            content,
            category,
        } => {
            let Some(mut article) = state.content.find(&id) else {
                return Ok(mutation_view(Mutation::Skipped(
                    am_content::SkipReason::NotFound,
                )));
            };

            if let Some(title) = title {
                article.title = title;
            }
            if let Some(content) = content {
                article.read_time = estimate_read_time(&content);
                if excerpt.is_none() {
                    article.excerpt = derive_excerpt(&content);
                }
                article.content = content;
            }
            if let Some(excerpt) = excerpt {
                article.excerpt = excerpt;
            }
            if let Some(category) = category {
                article.category = category;
            }

            Ok(mutation_view(state.content.update(article)?))
        }
        ArticleCommands::Remove { id } => Ok(mutation_view(state.content.remove(&id)?)),
    }
}

fn session_view(state: &AppState) -> Value {
    let snapshot = state.session.snapshot();
    json!({
        "status": snapshot.status(),
        "user": snapshot.user,
    })
}

fn mutation_view(mutation: Mutation) -> Value {
    match mutation {
        Mutation::Applied => json!({ "outcome": "applied" }),
        Mutation::Skipped(reason) => json!({ "outcome": "skipped", "reason": reason.as_str() }),
    }
}

fn profile_update(args: ProfileArgs) -> DashboardErrorResult<ProfileUpdate> {
    let ProfileArgs {
        name,
        email,
        role,
        bio,
        avatar,
        phone,
        location,
        website,
        job_title,
        skills,
        clear_skills,
    } = args;

    let role = role.map(|role| role.parse::<Role>()).transpose()?;
    let skills = if !skills.is_empty() {
        Some(skills)
    } else if clear_skills {
        Some(Vec::new())
    } else {
        None
    };

    Ok(ProfileUpdate {
        name,
        email,
        role,
        bio,
        avatar,
        phone,
        location,
        website,
        job_title,
        skills,
    })
}

/// Serialize a command result for stdout.
pub fn render(value: &Value, pretty: bool) -> DashboardErrorResult<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(output)
}

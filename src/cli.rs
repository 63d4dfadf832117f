use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::ClientError;
use crate::messages;
use crate::models::{exercise::find_group, CreateUser, ProfileForm};
use crate::services::{ExerciseService, HistoryService, UserService};
use crate::session::SessionStore;
use crate::version::GIT_VERSION;

#[derive(Parser, Debug)]
#[command(name = "gymtrack", version = GIT_VERSION, about = "Gym tracker client")]
pub struct Cli {
    /// API origin, overrides GYMTRACK_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Overrides GYMTRACK_EMAIL
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Overrides GYMTRACK_PASSWORD
    #[arg(long, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create an account with --email/--password and sign in
    SignUp {
        #[arg(long)]
        name: String,
    },
    /// Show the signed-in user
    Whoami,
    Users,
    User { id: String },
    /// List muscle groups
    Groups,
    /// List exercises of a muscle group
    Exercises { group: String },
    Exercise { id: String },
    /// Mark an exercise as done
    Done { exercise_id: String },
    History,
    /// Change name and/or password
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long, requires = "new_password")]
        old_password: Option<String>,
        #[arg(long)]
        new_password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Upload a new profile picture
    Avatar { path: PathBuf },
}

/// A failed command plus the text to show when the error has no message of
/// its own.
#[derive(Debug)]
pub struct Failure {
    pub error: ClientError,
    pub fallback: &'static str,
}

impl Failure {
    pub fn notice(&self) -> String {
        self.error.user_message(self.fallback)
    }
}

trait OrNotice<T> {
    fn or_notice(self, fallback: &'static str) -> Result<T, Failure>;
}

impl<T> OrNotice<T> for crate::error::Result<T> {
    fn or_notice(self, fallback: &'static str) -> Result<T, Failure> {
        self.map_err(|error| {
            tracing::error!("Command failed: {:?}", error);
            Failure { error, fallback }
        })
    }
}

/// Runs one command and returns the lines to print.
pub async fn run(cli: Cli, config: Config) -> Result<Vec<String>, Failure> {
    let api_url = cli.api_url.unwrap_or(config.api_url);
    let email = cli.email.or(config.email).unwrap_or_default();
    let password = cli.password.or(config.password).unwrap_or_default();

    let api = ApiClient::new(&api_url).or_notice(messages::SIGN_IN_FAILED)?;
    let mut session = SessionStore::new(api.clone(), config.max_avatar_bytes);

    // sign-up signs in on its own
    if !matches!(cli.command, Command::SignUp { .. }) {
        session
            .sign_in(&email, &password)
            .await
            .or_notice(messages::SIGN_IN_FAILED)?;
    }

    let lines = match cli.command {
        Command::SignUp { name } => {
            let new_user = CreateUser {
                name,
                email,
                password,
            };
            let user = session
                .sign_up(&new_user)
                .await
                .or_notice(messages::SIGN_UP_FAILED)?;
            vec![format!("Conta criada: {} <{}>", user.name, user.email)]
        }
        Command::Whoami => whoami(&session),
        Command::Users => {
            let users = UserService::new(api)
                .list()
                .await
                .or_notice(messages::USERS_FAILED)?;
            users
                .iter()
                .map(|u| format!("{}\t{}\t{}", u.id, u.name, u.email))
                .collect()
        }
        Command::User { id } => {
            let user = UserService::new(api)
                .find_by_id(&id)
                .await
                .or_notice(messages::USERS_FAILED)?;
            vec![format!("{}\t{}\t{}", user.id, user.name, user.email)]
        }
        Command::Groups => ExerciseService::new(api)
            .groups()
            .await
            .or_notice(messages::GROUPS_FAILED)?,
        Command::Exercises { group } => {
            let exercises = ExerciseService::new(api);
            let groups = exercises.groups().await.or_notice(messages::GROUPS_FAILED)?;
            let group = find_group(&groups, &group).unwrap_or(&group);
            exercises
                .by_group(group)
                .await
                .or_notice(messages::EXERCISES_FAILED)?
                .iter()
                .map(|e| format!("{}\t{}\t{}", e.id, e.name, e.summary()))
                .collect()
        }
        Command::Exercise { id } => {
            let exercise = ExerciseService::new(api.clone())
                .find_by_id(&id)
                .await
                .or_notice(messages::EXERCISE_DETAILS_FAILED)?;
            vec![
                exercise.name.clone(),
                exercise.group.clone(),
                exercise.summary(),
                api.exercise_thumb_url(&exercise.thumb).to_string(),
                api.exercise_demo_url(&exercise.demo).to_string(),
            ]
        }
        Command::Done { exercise_id } => {
            HistoryService::new(api)
                .create(&exercise_id)
                .await
                .or_notice(messages::HISTORY_REGISTER_FAILED)?;
            vec![messages::HISTORY_REGISTERED.to_string()]
        }
        Command::History => {
            let days = HistoryService::new(api)
                .by_day()
                .await
                .or_notice(messages::HISTORY_FAILED)?;
            if days.is_empty() {
                vec![messages::HISTORY_EMPTY.to_string()]
            } else {
                days.iter()
                    .flat_map(|day| {
                        std::iter::once(day.title.clone()).chain(
                            day.data
                                .iter()
                                .map(|r| format!("  {}  {}  {}", r.hour, r.group, r.name)),
                        )
                    })
                    .collect()
            }
        }
        Command::Profile {
            name,
            old_password,
            new_password,
            confirm_password,
        } => {
            let current_name = session.user().map(|u| u.name.clone()).unwrap_or_default();
            let form = ProfileForm {
                name: name.unwrap_or(current_name),
                old_password: old_password.unwrap_or_default(),
                confirm_password: confirm_password
                    .or_else(|| new_password.clone())
                    .unwrap_or_default(),
                password: new_password.unwrap_or_default(),
            };
            let user = session
                .update_profile(&form)
                .await
                .or_notice(messages::PROFILE_UPDATE_FAILED)?;
            vec![messages::PROFILE_UPDATED.to_string(), user.name.clone()]
        }
        Command::Avatar { path } => {
            let user = session
                .update_avatar(&path)
                .await
                .or_notice(messages::AVATAR_UPDATE_FAILED)?;
            let mut lines = vec![messages::AVATAR_UPDATED.to_string()];
            if let Some(avatar) = &user.avatar {
                lines.push(api.avatar_url(avatar).to_string());
            }
            lines
        }
    };

    session.sign_out().await;
    Ok(lines)
}

fn whoami(session: &SessionStore) -> Vec<String> {
    let Some(user) = session.user() else {
        return Vec::new();
    };
    let mut lines = vec![format!("Olá, {}", user.name), user.email.clone()];
    if let Some(avatar) = &user.avatar {
        lines.push(session.api().avatar_url(avatar).to_string());
    }
    lines
}

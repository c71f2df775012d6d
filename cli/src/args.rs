//! Command-line surface.

#[cfg(test)]
#[path = "args_test.rs"]
mod args_test;

use std::path::PathBuf;

use accounts::roster::{SortField, SortOrder, SortState};
use accounts::types::UserId;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "userdesk-cli", about = "User administration from the terminal")]
pub struct Cli {
    /// Base URL of the REST backend.
    #[arg(long, env = "USERDESK_API_URL", default_value = "http://127.0.0.1:5000")]
    pub base_url: String,

    /// Where the bearer token is kept between runs.
    #[arg(long, env = "USERDESK_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// Print raw JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Stay signed in when a list fetch comes back empty.
    #[arg(long, default_value_t = false)]
    pub keep_empty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an account and sign in.
    Register(RegisterArgs),
    /// Sign in with email and password.
    Login(LoginArgs),
    /// Show who the stored token belongs to.
    Whoami,
    /// Forget the stored token.
    Logout,
    /// List users.
    List(ListArgs),
    /// Block users by id.
    Block(IdsArgs),
    /// Unblock users by id.
    Unblock(IdsArgs),
    /// Delete users by id.
    Delete(IdsArgs),
    /// Check that the web host is up.
    Ping {
        #[arg(long, env = "USERDESK_HOST_URL", default_value = "http://127.0.0.1:3000")]
        host_url: String,
    },
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "USERDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, env = "USERDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Defaults to `--password`.
    #[arg(long)]
    pub confirm: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = SortKey::LastLogin)]
    pub sort: SortKey,
    #[arg(long, default_value_t = false)]
    pub desc: bool,
}

impl ListArgs {
    pub fn sort_state(&self) -> SortState {
        let order = if self.desc { SortOrder::Desc } else { SortOrder::Asc };
        SortState::new(self.sort.into(), order)
    }
}

#[derive(Args, Debug)]
pub struct IdsArgs {
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<UserId>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Email,
    LastLogin,
}

impl From<SortKey> for SortField {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => Self::Name,
            SortKey::Email => Self::Email,
            SortKey::LastLogin => Self::LastLogin,
        }
    }
}

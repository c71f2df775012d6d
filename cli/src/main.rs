mod args;
mod error;
mod render;
mod token_file;
mod transport;

use accounts::api::BulkAction;
use accounts::flow::{
    AuthFailure, EmptyListPolicy, ListOutcome, apply_list_outcome, load_users, run_bulk, submit_auth,
};
use accounts::roster::{SortState, UserListModel, sort_users};
use accounts::session::logout;
use accounts::validate::{AuthForm, AuthMode};
use accounts::{ErrorSlot, Session, User, UsersApi};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command};
use crate::error::CliError;
use crate::render::{print_json, user_summary, user_table};
use crate::token_file::FileTokenStore;
use crate::transport::ReqwestTransport;

type CliApi = UsersApi<ReqwestTransport, FileTokenStore>;

#[derive(Debug, Clone, Copy)]
struct Output {
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let out = Output { json: cli.json };
    let policy = if cli.keep_empty { EmptyListPolicy::Keep } else { EmptyListPolicy::Logout };

    match cli.command {
        Command::Ping { host_url } => run_ping(&host_url).await,
        command => {
            let tokens = match cli.token_file {
                Some(path) => FileTokenStore::new(path),
                None => FileTokenStore::default_location()?,
            };
            tracing::debug!(token_file = %tokens.path().display(), base_url = %cli.base_url, "starting");
            let api = UsersApi::new(ReqwestTransport::new(&cli.base_url)?, tokens);
            run_command(&api, command, policy, out).await
        }
    }
}

async fn run_command(
    api: &CliApi,
    command: Command,
    policy: EmptyListPolicy,
    out: Output,
) -> Result<(), CliError> {
    match command {
        Command::Register(args) => {
            let confirm_password = args.confirm.unwrap_or_else(|| args.password.clone());
            let form = AuthForm {
                email: args.email,
                name: args.name,
                password: args.password,
                confirm_password,
            };
            run_auth(api, &form, AuthMode::Registration, out).await
        }
        Command::Login(args) => {
            let form = AuthForm {
                email: args.email,
                password: args.password,
                ..AuthForm::default()
            };
            run_auth(api, &form, AuthMode::Login, out).await
        }
        Command::Whoami => {
            let user = api.check().await?;
            print_user(&user, out)
        }
        Command::Logout => {
            logout(&mut Session::default(), api.tokens())?;
            println!("signed out");
            Ok(())
        }
        Command::List(list) => {
            let outcome = load_users(api, policy).await;
            let users = settle(outcome, api.tokens())?;
            print_users(&users, list.sort_state(), out)
        }
        Command::Block(ids) => run_action(api, BulkAction::Block, &ids.ids, policy, out).await,
        Command::Unblock(ids) => run_action(api, BulkAction::Unblock, &ids.ids, policy, out).await,
        Command::Delete(ids) => run_action(api, BulkAction::Delete, &ids.ids, policy, out).await,
        Command::Ping { host_url } => run_ping(&host_url).await,
    }
}

async fn run_ping(host_url: &str) -> Result<(), CliError> {
    let url = format!("{}/healthz", host_url.trim_end_matches('/'));
    let response = reqwest::Client::new().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_auth(api: &CliApi, form: &AuthForm, mode: AuthMode, out: Output) -> Result<(), CliError> {
    match submit_auth(api, form, mode).await {
        Ok(user) => print_user(&user, out),
        Err(AuthFailure::Invalid(errors)) => Err(CliError::Invalid(errors)),
        Err(AuthFailure::Rejected(message)) => Err(CliError::Rejected(message)),
        Err(AuthFailure::Unexpected(message)) => Err(CliError::Failed(message)),
    }
}

async fn run_action(
    api: &CliApi,
    action: BulkAction,
    ids: &[accounts::UserId],
    policy: EmptyListPolicy,
    out: Output,
) -> Result<(), CliError> {
    let outcome = run_bulk(api, action, ids, policy).await;
    let users = settle(outcome, api.tokens())?;
    print_users(&users, SortState::default(), out)
}

/// Run a list outcome through the same store transitions the web client uses.
fn settle(outcome: ListOutcome, tokens: &FileTokenStore) -> Result<Vec<User>, CliError> {
    let emptied = outcome == ListOutcome::Emptied;
    let mut model = UserListModel::pending();
    let mut session = Session::default();
    let mut errors = ErrorSlot::default();

    apply_list_outcome(outcome, &mut model, &mut session, &mut errors, tokens)?;

    if errors.is_visible() {
        return Err(CliError::Failed(errors.message().to_owned()));
    }
    if emptied {
        tracing::warn!("user list is empty; stored token cleared");
    }
    Ok(model.users().to_vec())
}

fn print_user(user: &User, out: Output) -> Result<(), CliError> {
    if out.json {
        return print_json(&serde_json::to_value(user)?);
    }
    println!("{}", user_summary(user));
    Ok(())
}

fn print_users(users: &[User], sort: SortState, out: Output) -> Result<(), CliError> {
    let sorted = sort_users(users, sort);
    if out.json {
        return print_json(&serde_json::to_value(&sorted)?);
    }
    println!("{}", user_table(&sorted));
    Ok(())
}

//! Line-oriented command shell over a mounted [`Dashboard`].

use clap::{Parser, Subcommand, ValueEnum};
use rbac_core::views::{Dashboard, SubmitOutcome};
use rbac_core::{Record, RoleId, UserId};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::render;

pub const HELP: &str = "\
Commands:
  users | roles | show               render one or both panels
  user add <name> <role> [status]    create a user
  user edit <id>                     load a user into the form
  user set name|role|status <value>  change a form field
  user submit | user cancel          submit or leave the user form
  user delete <id>                   delete a user
  user reload                        refetch users
  role add <name> <perm,perm>        create a role
  role edit <id>                     load a role into the form
  role set name|permissions <value>  change a form field
  role submit | role cancel          submit or leave the role form
  role reload                        refetch roles
  help | quit
Arguments containing spaces can be wrapped in double quotes.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unterminated quote")]
    UnterminatedQuote,
    #[error("{0}")]
    Usage(String),
    #[error("no {kind} with id {id} in the list")]
    UnknownRecord { kind: &'static str, id: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    Users,
    Roles,
    Show,
    #[command(subcommand)]
    User(UserCommand),
    #[command(subcommand)]
    Role(RoleCommand),
    Help,
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    Add {
        name: String,
        role: String,
        status: Option<String>,
    },
    Edit {
        id: u64,
    },
    Set {
        field: UserField,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    Submit,
    Cancel,
    Delete {
        id: u64,
    },
    Reload,
}

#[derive(Subcommand, Debug)]
enum RoleCommand {
    Add {
        name: String,
        permissions: String,
    },
    Edit {
        id: u64,
    },
    Set {
        field: RoleField,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    Submit,
    Cancel,
    Reload,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum UserField {
    Name,
    Role,
    Status,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RoleField {
    Name,
    Permissions,
}

/// Split a line on whitespace, keeping double-quoted runs together.
pub fn tokenize(line: &str) -> Result<Vec<String>, ShellError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut pending = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                pending = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if pending {
                    tokens.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }

    if in_quotes {
        return Err(ShellError::UnterminatedQuote);
    }
    if pending {
        tokens.push(current);
    }
    Ok(tokens)
}

#[derive(Debug)]
pub struct Shell {
    dashboard: Dashboard,
}

impl Shell {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub async fn execute(&mut self, line: &str) -> Result<Reply, ShellError> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(Reply::Output(String::new()));
        }

        let tokens = tokenize(trimmed)?;
        let parsed = ShellLine::try_parse_from(tokens)
            .map_err(|err| ShellError::Usage(first_line(&err.to_string())))?;
        debug!(command = ?parsed.command, "shell command");

        let output = match parsed.command {
            ShellCommand::Users => render::users(&self.dashboard.users),
            ShellCommand::Roles => render::roles(&self.dashboard.roles),
            ShellCommand::Show => render::dashboard(&self.dashboard),
            ShellCommand::User(command) => self.user(command).await?,
            ShellCommand::Role(command) => self.role(command).await?,
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Output(output))
    }

    async fn user(&mut self, command: UserCommand) -> Result<String, ShellError> {
        let view = &mut self.dashboard.users;
        let mut notice = None;

        match command {
            UserCommand::Add { name, role, status } => {
                view.cancel_edit();
                let form = view.form_mut();
                form.set_name(name);
                form.set_role(role);
                if let Some(status) = status {
                    form.set_status(status);
                }
                notice = Some(describe(view.submit().await));
            }
            UserCommand::Edit { id } => {
                if !view.edit(UserId(id)) {
                    return Err(ShellError::UnknownRecord { kind: "user", id });
                }
            }
            UserCommand::Set { field, value } => {
                let form = view.form_mut();
                match field {
                    UserField::Name => form.set_name(value),
                    UserField::Role => form.set_role(value),
                    UserField::Status => form.set_status(value),
                }
            }
            UserCommand::Submit => notice = Some(describe(view.submit().await)),
            UserCommand::Cancel => view.cancel_edit(),
            UserCommand::Delete { id } => view.delete(UserId(id)).await,
            UserCommand::Reload => view.reload().await,
        }

        Ok(with_notice(notice, render::users(view)))
    }

    async fn role(&mut self, command: RoleCommand) -> Result<String, ShellError> {
        let view = &mut self.dashboard.roles;
        let mut notice = None;

        match command {
            RoleCommand::Add { name, permissions } => {
                view.cancel_edit();
                let form = view.form_mut();
                form.set_name(name);
                form.set_permissions_text(&permissions);
                notice = Some(describe(view.submit().await));
            }
            RoleCommand::Edit { id } => {
                if !view.edit(RoleId(id)) {
                    return Err(ShellError::UnknownRecord { kind: "role", id });
                }
            }
            RoleCommand::Set { field, value } => {
                let form = view.form_mut();
                match field {
                    RoleField::Name => form.set_name(value),
                    RoleField::Permissions => form.set_permissions_text(&value),
                }
            }
            RoleCommand::Submit => notice = Some(describe(view.submit().await)),
            RoleCommand::Cancel => view.cancel_edit(),
            RoleCommand::Reload => view.reload().await,
        }

        Ok(with_notice(notice, render::roles(view)))
    }
}

fn describe<T: Record>(outcome: SubmitOutcome<T>) -> String {
    match outcome {
        SubmitOutcome::Saved(record) => {
            format!("Saved {} #{} {}", T::KIND, record.id(), record.name())
        }
        SubmitOutcome::Failed(message) => format!("Error: {message}"),
        SubmitOutcome::Refused => "A submit is already in progress".to_string(),
    }
}

fn with_notice(notice: Option<String>, panel: String) -> String {
    match notice {
        Some(notice) => format!("{notice}\n{panel}"),
        None => panel,
    }
}

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Feed `reader` to the shell line by line, writing replies to `writer`.
pub async fn run<R, W>(shell: &mut Shell, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let text = match shell.execute(&line).await {
            Ok(Reply::Quit) => break,
            Ok(Reply::Output(text)) => text,
            Err(err) => format!("error: {err}\n"),
        };
        if !text.is_empty() {
            writer.write_all(text.as_bytes()).await?;
            if !text.ends_with('\n') {
                writer.write_all(b"\n").await?;
            }
            writer.flush().await?;
        }
    }
    Ok(())
}

use anyhow::Result;
use clap::Args;
use console::style;
use dialoguer::{Input, Password};

use client::api::auth;
use client::models::auth::{LoginRequest, RegisterRequest};
use common::UserRole;

use crate::commands::{anonymous_client, authenticated_client};
use crate::config::AppConfig;
use crate::session::{self, Session};

#[derive(Args)]
pub struct LoginArgs {
    /// Username. Prompted when omitted.
    #[arg(long)]
    pub username: Option<String>,
}

#[derive(Args)]
pub struct RegisterArgs {
    /// Username. Prompted when omitted.
    #[arg(long)]
    pub username: Option<String>,

    /// Requested role.
    #[arg(long, default_value = "student")]
    pub role: UserRole,
}

pub async fn register(args: RegisterArgs, config: &AppConfig) -> Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let client = anonymous_client(config)?;
    let profile = auth::register(
        &client,
        &RegisterRequest {
            username,
            password,
            role: args.role,
        },
    )
    .await?;

    println!(
        "Registered {} ({}); run `campus login` to start a session",
        style(&profile.username).green(),
        profile.role
    );
    Ok(())
}

pub async fn login(args: LoginArgs, config: &AppConfig) -> Result<()> {
    let username = match args.username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    let client = anonymous_client(config)?;
    let res = auth::login(&client, &LoginRequest { username, password }).await?;

    session::save(&Session {
        token: res.token,
        user_id: res.user.id,
        username: res.user.username.clone(),
        role: res.user.role,
    })?;

    println!(
        "Logged in as {} ({})",
        style(&res.user.username).green(),
        res.user.role
    );
    Ok(())
}

pub fn logout() -> Result<()> {
    session::clear()?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(config: &AppConfig) -> Result<()> {
    let (client, _) = authenticated_client(config)?;
    let profile = auth::me(&client).await?;
    println!(
        "{} (id {}, role {})",
        style(&profile.username).bold(),
        profile.id,
        profile.role
    );
    Ok(())
}

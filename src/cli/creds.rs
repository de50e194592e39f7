//! Credential commands: `generate-creds` and `setup`
//!
//! Only the base64 `user:password` token is ever stored or printed.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::output::Output;
use crate::client::BasicAuth;
use crate::git::{Git, AUTH_CREDENTIALS_KEY, AUTH_USER_KEY};

/// Prompts for credentials and prints the git config command that stores them
pub fn generate(output: &Output) -> Result<()> {
    let auth = prompt_credentials()?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "user": auth.user(),
            "credentials": auth.credentials(),
        }))?;
    } else {
        println!(
            "git config --global {} {}",
            AUTH_CREDENTIALS_KEY,
            auth.credentials()
        );
    }
    Ok(())
}

/// Prompts for credentials and writes them to the global git config
pub fn setup(output: &Output) -> Result<()> {
    eprintln!("Configuring Stash/Bitbucket credentials (abort with ctrl-c)");
    eprintln!("The base64 encoded password will be saved in global git config");
    let auth = prompt_credentials()?;

    let git = Git::new();
    output.verbose_ctx("setup", &format!("Setting {}={}", AUTH_USER_KEY, auth.user()));
    git.config_set_global(AUTH_USER_KEY, auth.user())
        .with_context(|| format!("Failed to set {}", AUTH_USER_KEY))?;

    output.verbose_ctx("setup", &format!("Setting {}=**********", AUTH_CREDENTIALS_KEY));
    git.config_set_global(AUTH_CREDENTIALS_KEY, auth.credentials())
        .with_context(|| format!("Failed to set {}", AUTH_CREDENTIALS_KEY))?;

    output.success(&format!("Saved build-state credentials for {}", auth.user()));
    Ok(())
}

/// Reads user name and password from stdin. Prompts go to stderr.
fn prompt_credentials() -> Result<BasicAuth> {
    let stdin = io::stdin();

    prompt("Username: ")?;
    let mut user = String::new();
    stdin.lock().read_line(&mut user).context("Failed to read username")?;

    prompt("Password: ")?;
    let password = if stdin.is_terminal() {
        let password = read_hidden_line()?;
        // Nothing was echoed, so end the prompt line ourselves
        eprintln!();
        password
    } else {
        let mut password = String::new();
        stdin.lock().read_line(&mut password).context("Failed to read password")?;
        password
    };

    let user = user.trim();
    if user.is_empty() {
        bail!("Username must not be empty");
    }
    Ok(BasicAuth::new(user, password.trim()))
}

fn prompt(label: &str) -> Result<()> {
    let mut stderr = io::stderr();
    stderr.write_all(label.as_bytes())?;
    stderr.flush()?;
    Ok(())
}

/// Reads a line from the terminal in raw mode, without echo
fn read_hidden_line() -> Result<String> {
    terminal::enable_raw_mode().context("Failed to disable terminal echo")?;
    let result = read_keys();
    terminal::disable_raw_mode()?;
    result
}

fn read_keys() -> Result<String> {
    let mut line = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter => return Ok(line),
            KeyCode::Backspace => {
                line.pop();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                bail!("Aborted")
            }
            KeyCode::Char(c) => line.push(c),
            _ => {}
        }
    }
}

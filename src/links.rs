// SPDX-License-Identifier: MPL-2.0
//! Hands outbound links to the system browser.
//!
//! Only `https://` and `mailto:` URLs are accepted. The platform opener is
//! blocking, so callers run [`open`] on a blocking worker.

use crate::error::{LinkError, Result};
use std::process::{Command, Stdio};

const ALLOWED_SCHEMES: [&str; 2] = ["https://", "mailto:"];

/// Checks that `url` uses an allowed scheme and has something after it.
pub fn validate(url: &str) -> std::result::Result<(), LinkError> {
    let trimmed = url.trim();
    let allowed = ALLOWED_SCHEMES.iter().any(|scheme| {
        trimmed.len() > scheme.len()
            && trimmed
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    });

    if allowed && !trimmed.chars().any(char::is_whitespace) {
        Ok(())
    } else {
        Err(LinkError::UnsupportedScheme(url.to_string()))
    }
}

/// Opens `url` with the platform opener and waits for it to return.
pub fn open(url: &str) -> Result<()> {
    validate(url)?;

    let mut command = opener_command(url);
    let status = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|err| LinkError::LaunchFailed(err.to_string()))?;

    if status.success() {
        tracing::debug!(url, "link opened");
        Ok(())
    } else {
        Err(LinkError::OpenerFailed(status.code()).into())
    }
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    // The empty string is the window title `start` expects first.
    command.args(["/C", "start", ""]).arg(url);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

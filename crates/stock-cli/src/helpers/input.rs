//! Interactive confirmation for destructive commands.

use dialoguer::Confirm;

use crate::errors::CliError;
use crate::ui::UiContext;

/// Ask before a destructive action.
///
/// `--yes` skips the question. Without a terminal there is nobody to ask, so
/// the action is refused rather than assumed.
pub fn confirm_destructive(ctx: &UiContext, prompt: &str, yes: bool) -> anyhow::Result<bool> {
    if yes {
        return Ok(true);
    }
    if !ctx.is_interactive() {
        return Err(CliError::invalid_input(format!(
            "{} requires confirmation.\nHint: Re-run with --yes to skip the prompt.",
            prompt.trim_end_matches('?')
        ))
        .into());
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

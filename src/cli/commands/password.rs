use std::io::Write;

use tracing::debug;

use crate::cli::PasswordArgs;
use crate::password::{SaltMode, hash_password};
use crate::prompt::{Prompter, ask_for_password};
use crate::sql;

pub fn cmd_db_password(
    args: &PasswordArgs,
    prompter: &mut dyn Prompter,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let password = match &args.password {
        Some(password) if !password.is_empty() => password.clone(),
        _ => ask_for_password(prompter, args.user_id)?,
    };

    let mode = SaltMode::from_no_salt(args.no_salt);
    debug!(user_id = args.user_id, ?mode, "Hashing password");

    let hash = hash_password(&password, mode, args.user_id);
    writeln!(out, "{}", sql::update_password(&hash, args.user_id))?;
    Ok(())
}

use {
  std::path::{Path, PathBuf},
  tracing::debug,
};

const RULE_WIDTH: usize = 50;

pub const HINT: &str =
  "Please check that the private key string you pasted is correct and complete.";

/// Banner shown once the keypair file is on disk, with the
/// command that confirms which public key the file holds.
pub fn success(path: &Path) -> String {
  let rule = "=".repeat(RULE_WIDTH);
  let path = path.display();
  format!(
    "\n{rule}\n\
     Success! The key was saved to file: {path}\n   \
     You can now use this file with the Solana CLI.\n   \
     For example, run 'solana-keygen pubkey {path}' to verify the public key.\n\
     {rule}\n\n"
  )
}

pub fn failure(err: &anyhow::Error) -> String {
  format!("\n[error]: {err:#}\n{HINT}\n")
}

/// Text printed to stdout once a session ends. Failures of any kind
/// are reported the same way and never propagate past this point.
pub fn outcome(result: anyhow::Result<PathBuf>) -> String {
  match result {
    Ok(path) => success(&path),
    Err(e) => {
      debug!("{e:?}");
      failure(&e)
    }
  }
}

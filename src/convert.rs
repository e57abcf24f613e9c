use {
  crate::{
    error::ConvertError,
    keyfile,
    primitives::KeypairBytes,
    prompt::{Prompter, KEY_PROMPT, OUTPUT_PROMPT},
  },
  std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
  },
  tracing::{debug, info},
};

/// Decodes a base58 private key and stores it as a json keypair file.
///
/// The string is fully decoded before the output file is touched, so
/// malformed input never leaves a file behind. The decoded length is
/// not checked against any expected key size.
pub fn convert(
  base58_input: &str,
  output_path: &Path,
) -> Result<KeypairBytes, ConvertError> {
  let keypair: KeypairBytes = base58_input.parse()?;
  debug!("decoded {:?}", keypair);

  keyfile::write(output_path, &keypair)?;
  info!(
    "stored {} key bytes in {}",
    keypair.len(),
    output_path.display()
  );

  Ok(keypair)
}

/// Turns a user supplied file name into a path. A leading `~` expands
/// to the home directory, everything else, `$` included, is literal.
pub fn resolve_output(raw: &str) -> Result<PathBuf, ConvertError> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Err(ConvertError::InvalidPath {
      path: raw.to_owned(),
      reason: "file name is empty".to_owned(),
    });
  }

  Ok(PathBuf::from(shellexpand::tilde(raw).into_owned()))
}

/// One interactive conversion: ask for the key, ask for the file name
/// unless one was given upfront, then convert. Returns the path written.
pub fn run_session<R: BufRead, W: Write>(
  prompter: &mut Prompter<R, W>,
  output: Option<&str>,
) -> Result<PathBuf, ConvertError> {
  let key = prompter.ask(KEY_PROMPT)?;
  let output = match output {
    Some(output) => output.to_owned(),
    None => prompter.ask(OUTPUT_PROMPT)?,
  };

  let path = resolve_output(&output)?;
  convert(&key, &path)?;
  Ok(path)
}

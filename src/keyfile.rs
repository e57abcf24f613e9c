use {
  crate::{error::ConvertError, primitives::KeypairBytes},
  std::{fs::File, io::Write, path::Path},
  tracing::trace,
};

/// Writes the keypair as a compact json array of integers, the
/// format `solana-keygen` and friends read. Any existing file at
/// `path` is truncated and replaced.
pub fn write(path: &Path, keypair: &KeypairBytes) -> Result<(), ConvertError> {
  let json = serde_json::to_vec(keypair)?;
  let write_err = |source| ConvertError::Write {
    path: path.to_path_buf(),
    source,
  };

  let mut file = File::create(path).map_err(write_err)?;
  file.write_all(&json).map_err(write_err)?;
  file.flush().map_err(write_err)?;

  trace!("wrote {} json bytes to {}", json.len(), path.display());
  Ok(())
}

/// Loads a keypair file previously written by [`write`] or by
/// any other tool that emits the same json array format. The
/// converter never calls this, it is how written files get verified.
pub fn read(path: &Path) -> Result<KeypairBytes, ConvertError> {
  let json =
    std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
      path: path.to_path_buf(),
      source,
    })?;
  Ok(serde_json::from_str(&json)?)
}

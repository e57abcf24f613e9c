use {std::path::PathBuf, thiserror::Error};

// variants that wrap a source leave it out of their own message,
// the `{:#}` rendering in `report::failure` appends the chain.
#[derive(Debug, Error)]
pub enum ConvertError {
  #[error("Failed parsing base58 string")]
  Base58(#[from] bs58::decode::Error),

  #[error("Invalid output path {path:?}: {reason}")]
  InvalidPath { path: String, reason: String },

  #[error("Failed writing keypair file {path:?}")]
  Write {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("Failed reading keypair file {path:?}")]
  Read {
    path: PathBuf,
    source: std::io::Error,
  },

  #[error("Malformed keypair json")]
  Json(#[from] serde_json::Error),

  #[error("Failed reading {what}")]
  Prompt {
    what: String,
    source: std::io::Error,
  },

  #[error("No input provided for {0}")]
  EndOfInput(String),
}

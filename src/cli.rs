use {clap::Parser, tracing_subscriber::EnvFilter};

/// Converts a base58 private key exported from a wallet app
/// into a json keypair file usable by the solana cli.
///
/// The key is always read from standard input, either typed at
/// the prompt or piped in, so it never ends up in shell history.
#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct CliOpts {
  #[clap(
    short,
    long,
    help = "file to write the keypair json into, asked for when omitted"
  )]
  pub output: Option<String>,

  #[clap(
    short,
    long,
    parse(from_occurrences),
    help = "Use verbose output (-vv very verbose output)"
  )]
  pub verbose: u64,
}

impl CliOpts {
  /// Log filter for diagnostics on stderr. `RUST_LOG` wins over
  /// the verbosity flag when it is set.
  pub fn log_filter(&self) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
      EnvFilter::new(match self.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
      })
    })
  }
}

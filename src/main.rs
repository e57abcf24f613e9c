use {
  anyhow::Context,
  b58_keypair::{cli::CliOpts, convert, prompt::Prompter, report},
  clap::Parser,
  std::{io, path::PathBuf},
  tracing::info,
};

fn run(opts: &CliOpts) -> anyhow::Result<PathBuf> {
  let stdin = io::stdin();
  let mut prompter = Prompter::new(stdin.lock(), io::stdout());
  convert::run_session(&mut prompter, opts.output.as_deref())
    .context("conversion failed")
}

fn main() {
  let opts = CliOpts::parse();

  // diagnostics go to stderr, stdout carries
  // the prompts and the final banner.
  tracing_subscriber::fmt()
    .with_env_filter(opts.log_filter())
    .with_writer(io::stderr)
    .init();

  info!("b58-keypair version {}", env!("CARGO_PKG_VERSION"));

  // a reported failure still exits with 0
  print!("{}", report::outcome(run(&opts)));
}

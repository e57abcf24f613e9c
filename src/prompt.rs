use {
  crate::error::ConvertError,
  std::io::{BufRead, Write},
  tracing::trace,
};

pub const KEY_PROMPT: &str = "Paste your Base58 private key string: ";
pub const OUTPUT_PROMPT: &str =
  "Enter the JSON file name to save to (e.g. my_wallet.json): ";

/// Line oriented question/answer loop over any reader and writer.
///
/// The binary wires this to stdin and stdout, tests wire it
/// to in-memory buffers.
pub struct Prompter<R, W> {
  input: R,
  output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
  pub fn new(input: R, output: W) -> Self {
    Self { input, output }
  }

  /// Prints the question without a trailing newline and waits for one
  /// line of input. The answer is returned without its line terminator
  /// and surrounding whitespace, pasted keys often carry both.
  pub fn ask(&mut self, question: &str) -> Result<String, ConvertError> {
    let prompt_err = |source| ConvertError::Prompt {
      what: subject(question),
      source,
    };

    self
      .output
      .write_all(question.as_bytes())
      .and_then(|_| self.output.flush())
      .map_err(prompt_err)?;

    let mut line = String::new();
    if self.input.read_line(&mut line).map_err(prompt_err)? == 0 {
      return Err(ConvertError::EndOfInput(subject(question)));
    }

    trace!("read {} bytes of input", line.len());
    Ok(line.trim().to_owned())
  }

  pub fn into_output(self) -> W {
    self.output
  }
}

/// "Paste your key: " -> "Paste your key"
fn subject(question: &str) -> String {
  question.trim_end_matches(&[' ', ':'][..]).to_owned()
}

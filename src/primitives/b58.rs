/// Renders bytes back into their base58 form. Used to check that a
/// written keypair file still encodes to the string it came from.
pub trait ToBase58String {
  fn to_b58(&self) -> String;
}

impl<T: AsRef<[u8]>> ToBase58String for T {
  fn to_b58(&self) -> String {
    bs58::encode(self).into_string()
  }
}

use {
  serde::{Deserialize, Serialize},
  std::{
    fmt::{Debug, Formatter},
    ops::Deref,
    str::FromStr,
  },
};

/// Raw bytes of a wallet secret key as exported by a wallet app.
///
/// Most wallets export the 32 byte ed25519 secret followed by the
/// 32 byte public key, but nothing here checks that. Whatever the
/// base58 string decodes to is kept as-is.
///
/// Serializes to a plain json array of integers, which is the
/// keypair file format understood by the solana cli tools.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeypairBytes(Vec<u8>);

impl KeypairBytes {
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl AsRef<[u8]> for KeypairBytes {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for KeypairBytes {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

// never print secret material, not even in logs
impl Debug for KeypairBytes {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "KeypairBytes({} bytes)", self.0.len())
  }
}

impl From<Vec<u8>> for KeypairBytes {
  fn from(bytes: Vec<u8>) -> Self {
    Self(bytes)
  }
}

impl From<KeypairBytes> for Vec<u8> {
  fn from(kp: KeypairBytes) -> Self {
    kp.0
  }
}

impl FromStr for KeypairBytes {
  type Err = bs58::decode::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(bs58::decode(s).into_vec()?))
  }
}

#[cfg(test)]
mod test {
  use {
    super::KeypairBytes,
    crate::{primitives::ToBase58String, test::utils::sample_keypair},
    assert_matches::assert_matches,
  };

  #[test]
  fn all_ones_decode_to_zero_bytes() {
    let kp: KeypairBytes = "11111111111111111111111111111111".parse().unwrap();
    assert_eq!(kp.len(), 32);
    assert!(kp.iter().all(|b| *b == 0));
  }

  #[test]
  fn empty_string_decodes_to_nothing() {
    let kp: KeypairBytes = "".parse().unwrap();
    assert!(kp.is_empty());
  }

  #[test]
  fn rejects_characters_outside_alphabet() {
    for bad in ["0abc", "Oabc", "Iabc", "labc"] {
      assert_matches!(
        bad.parse::<KeypairBytes>(),
        Err(bs58::decode::Error::InvalidCharacter { .. })
      );
    }
    assert_matches!(
      "abcé".parse::<KeypairBytes>(),
      Err(bs58::decode::Error::NonAsciiCharacter { .. })
    );
  }

  #[test]
  fn no_length_is_enforced() {
    let short: KeypairBytes = "2NEpo7TZRRrLZSi2U".parse().unwrap();
    assert_eq!(short.as_bytes(), b"Hello World!");
  }

  #[test]
  fn reencodes_to_canonical_string() {
    let kp = sample_keypair();
    let b58 = kp.to_b58();
    let decoded: KeypairBytes = b58.parse().unwrap();
    assert_eq!(decoded, kp);
    assert_eq!(decoded.to_b58(), b58);
  }

  #[test]
  fn debug_hides_secret() {
    let kp = sample_keypair();
    assert_eq!(format!("{kp:?}"), "KeypairBytes(64 bytes)");
  }

  #[test]
  fn serializes_as_compact_array() {
    let kp = KeypairBytes::from(vec![0u8, 1, 255]);
    assert_eq!(serde_json::to_string(&kp).unwrap(), "[0,1,255]");
    let back: KeypairBytes = serde_json::from_str("[0, 1, 255]").unwrap();
    assert_eq!(back, kp);
    assert!(serde_json::from_str::<KeypairBytes>("[256]").is_err());
  }
}

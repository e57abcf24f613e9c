use {crate::primitives::KeypairBytes, tempfile::TempDir};

/// Base58 form of the bytes `0, 1, 2, ..., 63`.
pub const SAMPLE_B58: &str = "1GMkH3brNXiNNs1tiFZHu4yZSRrzJwxi5wB9bHFtMinfCXNnR1adh8Vo8NTheK4evneedH4qmvjeqcBBNAefgS";

pub fn sample_keypair() -> KeypairBytes {
  (0..64u8).collect::<Vec<_>>().into()
}

pub fn scratch_dir() -> TempDir {
  tempfile::tempdir().unwrap()
}

mod b58;
mod keypair;

pub use {b58::ToBase58String, keypair::KeypairBytes};

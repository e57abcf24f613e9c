pub mod cli;
pub mod convert;
pub mod error;
pub mod keyfile;
pub mod primitives;
pub mod prompt;
pub mod report;

pub use {convert::convert, error::ConvertError, primitives::KeypairBytes};

#[cfg(test)]
pub mod test;

/*
    mauth-core
        transport-agnostic three-message mutual authentication
        over a sealed asymmetric channel.
 */

pub mod error;

pub mod crypto;
pub mod protocol;
pub mod mutual;

pub use error::MauthError;

#[cfg(test)]
mod lib_tests;

#![doc = include_str!("../README.md")]

mod error;
pub use error::Error;

#[cfg(feature = "account")]
mod base;

#[cfg(feature = "account")]
pub mod account;

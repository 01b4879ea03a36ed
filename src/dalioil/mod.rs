//! dalioil.sk home station page.

mod client;
pub mod parser;

pub use client::{DalioilClient, HomePriceSource};

#![allow(dead_code)]

mod ring;
mod slot;

pub mod error;

pub use ring::*;

#![allow(clippy::needless_return)]

pub mod pipeline;
pub mod utils;


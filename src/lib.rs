#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod consts;
pub mod container;
pub mod error;
pub mod patch;
pub mod select;
pub mod unlock;

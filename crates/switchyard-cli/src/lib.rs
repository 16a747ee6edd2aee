//! Switchyard CLI library

pub mod commands;
pub mod error;
pub mod input;

#![doc = include_str!("../README.md")]

pub mod binding;
pub mod error;
pub mod evaluator;
pub mod language;
pub mod scope;

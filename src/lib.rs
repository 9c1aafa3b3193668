//! Runtime-switchable UI localization with lifecycle-gated change propagation.

pub mod config;
pub mod i18n;

//! Reusable UI components

pub mod button;
pub mod input;

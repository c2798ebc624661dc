//! Primitive Components
//!
//! Basic building blocks: the action button and the radio option.

pub mod action_button;
pub mod radio_option;

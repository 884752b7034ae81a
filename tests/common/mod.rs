#![allow(dead_code)]

pub mod checked;
pub mod setup;
pub mod templates;
pub mod tree;

// src/lib.rs
pub mod tables;

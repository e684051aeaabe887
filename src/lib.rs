#![cfg_attr(not(any(test, w65c02_doctest)), no_std)]
#![warn(clippy::pedantic, clippy::nursery)]
#![doc = include_str!("../README.md")]

pub mod cpu;
pub mod memory;
pub mod opcode;

#[cfg(any(test, w65c02_doctest))]
pub mod testing;

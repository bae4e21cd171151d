//! Input adapters: translate command lines and pointer/field changes into
//! controller calls.

pub mod cli;
pub mod session;

//! Per-bank statement layouts.

pub mod sberbank;
pub mod vtb;

pub use sberbank::SberbankLayout;
pub use vtb::VtbLayout;

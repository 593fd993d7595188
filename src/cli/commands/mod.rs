//! Subcommand definitions

pub mod inspect;
pub mod scan;
pub mod validate;

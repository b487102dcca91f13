//! Types shared between the table core, the dataset loader and the apps.

pub mod domain;
pub mod error;

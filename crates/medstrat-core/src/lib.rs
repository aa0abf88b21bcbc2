pub mod brand_builder;
pub mod config;
pub mod error;
pub mod io;
pub mod knowledge;
pub mod ranking;
pub mod recommend;
pub mod rules;
pub mod session;
pub mod types;
pub mod view;
pub mod wizard;

#[cfg(test)]
mod fixtures;

pub use error::{MedstratError, Result};
pub use session::Session;
pub use wizard::{Action, Outcome};

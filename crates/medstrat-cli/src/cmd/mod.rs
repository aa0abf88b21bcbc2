pub mod catalog;
pub mod config;
pub mod rank;
pub mod recommend;
pub mod replay;
pub mod serve;

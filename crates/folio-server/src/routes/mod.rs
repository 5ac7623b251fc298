pub mod config;
pub mod contact;
pub mod hire;
pub mod options;

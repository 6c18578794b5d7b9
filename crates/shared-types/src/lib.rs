pub mod error;

pub mod config;
pub mod models;

// Access policy and route guard decisions
pub mod access;

// Clinic domain modules
pub mod appointment;
pub mod common;
pub mod contact;
pub mod feedback;
pub mod patient;
pub mod schedule;
pub mod staff;

pub use error::*;
pub use config::*;
pub use models::*;
pub use access::*;

pub use appointment::*;
pub use common::*;
pub use contact::*;
pub use feedback::*;
pub use patient::*;
pub use schedule::*;
pub use staff::*;

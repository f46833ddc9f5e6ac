//! # Domain Layer

pub mod criteria;
pub mod errors;
pub mod info;
pub mod message;
pub mod new_message;
pub mod topic;

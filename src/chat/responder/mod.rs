//! Canned assistant replies chosen by keyword category.

pub mod classifier;
mod replies;

pub use classifier::{Reply, ReplyCategory, ResponseClassifier, categorize};

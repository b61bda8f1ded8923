//! Request handlers
//!
//! GET routes return JSON view models; POST routes take form posts and
//! answer with a flash redirect, logging the failure instead of leaking
//! it to the browser.

pub mod bills;
pub mod dashboard;
pub mod documents;
pub mod guests;
pub mod health;
pub mod reports;
pub mod rooms;
pub mod transactions;

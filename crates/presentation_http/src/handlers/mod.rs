//! HTTP request handlers

pub mod chat;
pub mod health;
pub mod index;
pub mod session;
pub mod tools;

//! HTTP request handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod gamification;
pub mod industries;
pub mod logistics;
pub mod profile;
pub mod tours;
pub mod travel;

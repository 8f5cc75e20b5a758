//! Authentication primitives: JWT access tokens, refresh-token helpers, and
//! password hashing.

pub mod jwt;
pub mod password;

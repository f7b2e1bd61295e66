//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64, secure randomness)
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - HTTP header helpers

pub mod crypto;
pub mod headers;
pub mod password;

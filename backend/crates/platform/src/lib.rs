//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, zeroized, NFKC-normalized)
//! - Token cryptography (HMAC-SHA256, URL-safe Base64, random bytes)

pub mod crypto;
pub mod password;

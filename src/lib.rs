//! # Pordisto
//!
//! `pordisto` is a small credential authentication service. It exposes two
//! routes: `POST /register` stores a user record with a salted Argon2 digest
//! in place of the plaintext password, and `POST /login` verifies a credential
//! pair and answers with a signed, one-hour bearer token (JWT, HS256).
//!
//! The server keeps no record of issued tokens; a token is valid until its
//! expiration and cannot be revoked earlier.

pub mod cli;
pub mod pordisto;

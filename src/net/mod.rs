//! Remote identity authority — wire types and the client port.
//!
//! ARCHITECTURE
//! ============
//! The session store talks to the backend through the [`api::IdentityApi`]
//! trait so tests can script the authority. [`api::HttpIdentityApi`] is the
//! real thing: `POST /auth/login` with credentials, `GET /auth/me` with the
//! token as a bearer credential.

pub mod api;
pub mod types;

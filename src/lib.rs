//! # dockside
//!
//! Session and navigation gate for the Dockside container dashboard.
//!
//! This crate owns the two pieces of the dashboard client that carry real
//! control flow: the [`session::SessionStore`], which holds the auth token
//! and user identity and keeps the token mirrored to durable storage, and
//! the [`guard::NavigationGuard`], which turns every navigation intent into
//! exactly one verdict (proceed, or redirect to setup/login/home).
//!
//! Screens, the backend API, and the storage mechanism are collaborators
//! reached through ports: [`net::api::IdentityApi`] for the remote identity
//! authority and [`storage::Storage`] for durable key-value state. The
//! [`gate::Gate`] bundles the wired-up pieces for the view layer to hold.

pub mod gate;
pub mod guard;
pub mod net;
pub mod routes;
pub mod session;
pub mod storage;

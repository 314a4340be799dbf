//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and state so route handlers can stay
//! focused on protocol translation and cookie plumbing. `auth` orchestrates
//! the rest: `validate` → `store` → `user` → `session`.

pub mod auth;
pub mod password;
pub mod session;
pub mod store;
pub mod user;
pub mod validate;

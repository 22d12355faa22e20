//! # Auth Services
//!
//! The three account workflows, each wrapping the shared [`JsonUserStore`]:
//!
//! - [`auth`] - login/logout with a typed outcome per failure mode
//! - [`registration`] - self-service signup for non-admin roles
//! - [`admin`] - user administration, including the superadmin bootstrap
//!
//! [`JsonUserStore`]: crate::repo::JsonUserStore

pub mod admin;
pub mod auth;
pub mod registration;

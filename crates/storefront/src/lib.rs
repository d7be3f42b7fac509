//! Bramble Storefront library.
//!
//! The core of a small headless storefront: a catalog fetched from a remote
//! REST endpoint with a derived filtered/sorted visible sequence, and a
//! shopping cart persisted best-effort to a local slot. The presentation
//! layer is an external collaborator: it constructs an [`state::AppState`],
//! calls the operations exposed here, and renders whatever it reads back.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod state;

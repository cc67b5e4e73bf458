//! Application layer services implementing the crate's public operations.
//!
//! This layer orchestrates domain operations over the repository traits:
//! URL registration (with unique code allocation), site registration (with
//! unique login allocation), redirect resolution with visit counting, and
//! per-site statistics. Services are generic over the repositories and
//! stateless between calls.

pub mod services;

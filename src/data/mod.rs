//! # Data structures
//!
//! The connections that make up a network, the views derived from them and the problems that
//! can be posed over them.
pub mod network;

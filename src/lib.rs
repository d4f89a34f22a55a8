//! A small set of value-semantic collections, written from the allocator up.
//!
//! # Purpose
//! The centrepiece is [`DynamicArray`](collections::contiguous::DynamicArray), a contiguous
//! growable array that owns its elements, deep copies on [`Clone`] and hands out
//! [`Position`](collections::contiguous::Position)s that know when they've gone stale. Alongside it
//! sit a doubly linked [`LinkedList`](collections::linked::LinkedList) and a singly linked
//! [`Queue`](collections::linked::Queue).
//!
//! # Error Handling
//! For a collection library, it is more ergonomic for most methods to panic, because users don't
//! want to handle the possibility of a capacity overflow every time they push an element. So each
//! fallible operation comes in two forms: a `try_` method returning a strongly typed [`Result`],
//! and a panicking method that reports the same error's message.
//!
//! Errors are structs (often ZSTs) that implement [`Error`](std::error::Error), grouped into enums
//! for static dispatch rather than boxed into trait objects.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] to implement any of its collections. It depends on
//! `derive_more` for the error enums and, behind the default `log` feature, on `log` to report
//! reallocations. No logger is installed by the library itself.
//!
//! # Features
//! - `contiguous`: [`DynamicArray`](collections::contiguous::DynamicArray) and its positions.
//! - `linked`: [`LinkedList`](collections::linked::LinkedList) and
//!   [`Queue`](collections::linked::Queue).
//! - `collections-all`: all of the above, enabled by default.
//! - `log`: trace and debug records for storage changes, enabled by default.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

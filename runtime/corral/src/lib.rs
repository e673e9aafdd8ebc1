//! Bind untyped request data onto caller-supplied typed structures, then
//! enforce the declarative rules attached to their fields.
//!
//! `corral` replaces hand-written per-field extraction and validation
//! boilerplate in HTTP handlers. Three entry points cover the three raw
//! sources of request data:
//!
//! - [`from_body`] — the buffered request payload, decoded as JSON;
//! - [`from_query`] — the URI's query string, with heuristic type coercion;
//! - [`from_path`] — router-extracted path parameters, via [`RouteContext`].
//!
//! Each entry point decodes into the caller's target and then runs the same
//! rule pass over it, so the error surface is uniform regardless of source.
//! The target declares its rules with `#[bind(...)]` attributes and a
//! [`Bindable`] derive:
//!
//! ```
//! use corral::Bindable;
//!
//! #[derive(Default, serde::Deserialize, Bindable)]
//! #[serde(default)]
//! struct Signup {
//!     #[bind(required, trimlower, validate = "email")]
//!     email: String,
//!     #[bind(max_length = "32")]
//!     display_name: String,
//! }
//!
//! let request = http::Request::builder()
//!     .uri("/signup?email=ADA%40example.com&display_name=Ada")
//!     .body(())
//!     .unwrap();
//!
//! let mut signup = Signup::default();
//! corral::from_query(&request, &mut signup)?;
//! assert_eq!(signup.email, "ada@example.com");
//! assert_eq!(signup.display_name, "Ada");
//! # Ok::<(), corral::BindError>(())
//! ```
//!
//! The engine holds no state of its own: every call re-derives the target's
//! field descriptors and mutates the caller's value in place. Calls are
//! synchronous and safe to issue concurrently as long as each operates on a
//! distinct target.

pub mod binding;
pub mod route;
pub mod validation;

pub use binding::errors::{BindError, DecodeError, MissingRouteContext};
pub use binding::{from_body, from_path, from_query};
pub use route::RouteContext;
pub use validation::errors::RuleError;
pub use validation::{Absent, Bindable, Field, RuleSet, Slot, validate};

/// Derive [`Bindable`] for a struct with named fields.
///
/// See [`validation`] for the rule vocabulary the derive accepts.
pub use corral_macros::Bindable;

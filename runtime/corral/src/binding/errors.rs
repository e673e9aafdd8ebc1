//! Errors that can occur while binding request data onto a target.

use crate::validation::errors::RuleError;

/// The error returned by the binding entry points when a call fails.
///
/// [`from_body`], [`from_query`], and [`from_path`] all funnel into the same
/// decode-then-validate tail, so this is the uniform error surface for every
/// source. The engine has no opinion on transport-level status codes:
/// translating a [`BindError`] into a client-facing response (typically a
/// 400-class status) is the caller's business.
///
/// [`from_body`]: crate::binding::from_body
/// [`from_query`]: crate::binding::from_query
/// [`from_path`]: crate::binding::from_path
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BindError {
    #[error(transparent)]
    /// See [`DecodeError`] for details.
    Decode(#[from] DecodeError),
    #[error(transparent)]
    /// See [`MissingRouteContext`] for details.
    MissingRouteContext(#[from] MissingRouteContext),
    #[error(transparent)]
    /// See [`RuleError`] for details.
    Rule(#[from] RuleError),
}

/// Something went wrong before validation could run: the payload couldn't be
/// decoded into the target, or the intermediate coerced map couldn't be
/// re-serialized.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The payload couldn't be deserialized into the target type.
    ///
    /// The wrapped error carries the path of the field that failed.
    #[error("Failed to deserialize the payload into the target type.\n{0}")]
    Deserialization(#[source] serde_path_to_error::Error<serde_json::Error>),
    /// The intermediate key/value object couldn't be serialized back into a
    /// byte payload.
    #[error("Failed to serialize the coerced parameters into an intermediate payload")]
    Serialization(#[source] serde_json::Error),
}

/// Path-parameter binding was invoked on a request without a routing context.
///
/// [`from_path`] requires the hosting router to store a
/// [`RouteContext`](crate::route::RouteContext) in the request's extensions
/// ahead of the call. This error is distinct from every field-level failure:
/// it means the router never ran, not that the request data was bad.
///
/// [`from_path`]: crate::binding::from_path
#[derive(Debug, thiserror::Error)]
#[error("No route context is attached to the incoming request")]
#[non_exhaustive]
pub struct MissingRouteContext;

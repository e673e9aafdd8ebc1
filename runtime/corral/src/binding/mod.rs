//! The three binding entry points and the decode step they share.
//!
//! Each entry point takes the inbound [`http::Request`] and an exclusive
//! reference to an already-allocated target, produces a JSON payload from its
//! source, decodes it into the target, and finishes with the rule walker —
//! so validation failures look the same whether the data came from the body,
//! the query string, or the matched route.
//!
//! The engine performs no I/O: the body is whatever byte payload the caller
//! already buffered, and path parameters come from a [`RouteContext`] the
//! hosting router stored in the request's extensions.

mod coerce;
pub mod errors;

use http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::binding::errors::{BindError, DecodeError, MissingRouteContext};
use crate::route::RouteContext;
use crate::validation::{self, Bindable};

/// Decode the request's payload bytes directly into `target`, then run its
/// rules.
///
/// An empty payload is a no-op: the call succeeds and the target is left
/// untouched, validation included. A non-empty payload that isn't valid JSON
/// for the target's shape is a [`DecodeError`].
///
/// Missing keys leave the corresponding fields at their zero value — targets
/// opt into that with `#[serde(default)]`.
pub fn from_body<B, T>(request: &Request<B>, target: &mut T) -> Result<(), BindError>
where
    B: AsRef<[u8]>,
    T: DeserializeOwned + Bindable,
{
    let payload = request.body().as_ref();
    if payload.is_empty() {
        tracing::debug!("Empty request body, leaving the target untouched");
        return Ok(());
    }
    decode_and_validate(payload, target)
}

/// Build a typed view of the query string, decode it into `target`, then run
/// its rules.
///
/// Keys are lower-cased; parameters with an empty value are treated as absent
/// and skipped; the first occurrence of a repeated key wins. Each surviving
/// value goes through heuristic coercion (integer, boolean, float, unescaped
/// string — in that order) before being folded into an intermediate JSON
/// object that is re-serialized and decoded into the target. The round-trip
/// is what lets a raw `"42"` land in an integer field: the target's field
/// types aren't known until type-directed decoding.
pub fn from_query<B, T>(request: &Request<B>, target: &mut T) -> Result<(), BindError>
where
    T: DeserializeOwned + Bindable,
{
    let query = request.uri().query().unwrap_or_default();
    let mut entries = serde_json::Map::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        entries
            .entry(key.to_lowercase())
            .or_insert_with(|| coerce::coerce(&value));
    }
    tracing::debug!(
        n_params = entries.len(),
        "Coerced the query parameters into an intermediate object"
    );
    let payload = serde_json::to_vec(&entries).map_err(DecodeError::Serialization)?;
    decode_and_validate(&payload, target)
}

/// Map the matched route's path parameters into `target`, then run its rules.
///
/// Requires a [`RouteContext`] in the request's extensions, put there by the
/// hosting router; without one the call fails with [`MissingRouteContext`],
/// an error distinct from every field-level failure. Keys are lower-cased;
/// values are kept as the strings the router extracted, with no coercion.
pub fn from_path<B, T>(request: &Request<B>, target: &mut T) -> Result<(), BindError>
where
    T: DeserializeOwned + Bindable,
{
    let Some(context) = request.extensions().get::<RouteContext>() else {
        tracing::debug!("No route context attached to the incoming request");
        return Err(MissingRouteContext.into());
    };
    let mut entries = serde_json::Map::new();
    for (name, value) in context.iter() {
        entries.insert(name.to_lowercase(), Value::String(value.to_owned()));
    }
    let payload = serde_json::to_vec(&entries).map_err(DecodeError::Serialization)?;
    decode_and_validate(&payload, target)
}

fn decode_and_validate<T>(payload: &[u8], target: &mut T) -> Result<(), BindError>
where
    T: DeserializeOwned + Bindable,
{
    let mut deserializer = serde_json::Deserializer::from_slice(payload);
    let decoded =
        serde_path_to_error::deserialize(&mut deserializer).map_err(DecodeError::Deserialization)?;
    *target = decoded;
    validation::validate(target).map_err(BindError::from)
}

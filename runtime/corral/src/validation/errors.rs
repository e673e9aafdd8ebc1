//! Errors raised by the rule walker.

/// The error returned by [`validate`] when a field violates one of its rules.
///
/// The walk stops at the first violation, so a [`RuleError`] always describes
/// a single field. Configuration mistakes in the declared rules — a
/// non-numeric `max_length` argument, an unknown `validate` format — are
/// reported through the same channel as bad input: both reach the caller as
/// the outcome of the same pass.
///
/// [`validate`]: crate::validation::validate
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// A `required` field was left at its zero value, or its optional was
    /// unset.
    #[error("`{field}` is required")]
    MissingField {
        /// The offending field's name.
        field: &'static str,
    },
    /// The `max_length` argument isn't a base-10 integer.
    ///
    /// This points at a mistake in the target's declared rules, not at the
    /// request.
    #[error("`{field}` has an invalid `max_length` rule: `{raw}` isn't a valid length")]
    InvalidMaxLength {
        /// The offending field's name.
        field: &'static str,
        /// The argument as it appears in the declaration.
        raw: &'static str,
    },
    /// The `validate` argument names a format the engine doesn't know.
    ///
    /// This points at a mistake in the target's declared rules, not at the
    /// request.
    #[error("`{field}` has an invalid `validate` rule: unknown format `{raw}`")]
    UnknownFormat {
        /// The offending field's name.
        field: &'static str,
        /// The argument as it appears in the declaration.
        raw: &'static str,
    },
    /// The value doesn't match the conservative email shape.
    #[error("`{field}` isn't a valid email address")]
    InvalidEmail {
        /// The offending field's name.
        field: &'static str,
    },
    /// Fewer than 10 characters survived phone normalization.
    #[error("`{field}` isn't a valid phone number")]
    InvalidPhone {
        /// The offending field's name.
        field: &'static str,
    },
}

//! The rule walker: a depth-first pass over a target's field descriptors,
//! applying each field's declarative rules in a fixed order.
//!
//! A target implements [`Bindable`] — usually via `#[derive(Bindable)]` — to
//! expose an ordered list of [`Field`] handles. Each handle pairs the field's
//! [`RuleSet`] with a [`Slot`], the settable view of its current value.
//! [`validate`] walks the handles in declaration order and applies, per field:
//!
//! 1. the `required` check (booleans are exempt: `false` is a legitimate
//!    present value; an unset optional fails regardless of its payload type);
//! 2. `max_length` truncation (a non-numeric argument is a configuration
//!    error, a longer string is silently cut to its first N characters);
//! 3. `trimlower` normalization;
//! 4. `validate` format checks (`email`, `phone` — phone rewrites the value
//!    with its normalized form; any other argument is a configuration error);
//! 5. recursion into nested values. An absent, non-required optional nested
//!    value is skipped entirely.
//!
//! Normalization runs before format validation on purpose: the format
//! validators assume already-trimmed, lower-cased input.
//!
//! The first violation aborts the walk and is returned as a [`RuleError`];
//! there is no aggregation.

pub mod errors;
mod format;

use crate::validation::errors::RuleError;

/// A type whose fields can be walked by [`validate`].
///
/// Implemented via `#[derive(Bindable)]`. The derive re-derives nothing at
/// runtime: each call to [`fields`](Bindable::fields) builds a fresh
/// descriptor list borrowing from `self`, so the walker always observes the
/// current values.
pub trait Bindable {
    /// The target's fields, in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

impl<T: Bindable> Bindable for Box<T> {
    fn fields(&mut self) -> Vec<Field<'_>> {
        (**self).fields()
    }
}

/// A single field of a [`Bindable`] target: its name, its declared rules, and
/// a settable handle on its current value.
pub struct Field<'a> {
    /// The field's name, as declared on the target type.
    pub name: &'static str,
    /// The rules attached to the field via `#[bind(...)]`.
    pub rules: RuleSet,
    /// The settable view of the field's current value.
    pub slot: Slot<'a>,
}

/// The declarative directives attached to a field.
///
/// `max_length` and `validate` carry their argument verbatim: arguments are
/// checked when the rules run, so a malformed one surfaces as a
/// [`RuleError`] through the same channel as data errors.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuleSet {
    /// The field must be present (non-zero) after decoding.
    pub required: bool,
    /// Truncate a longer string value to this many characters.
    pub max_length: Option<&'static str>,
    /// Trim surrounding whitespace and lower-case the string value.
    pub trimlower: bool,
    /// Enforce the named format (`email` or `phone`).
    pub validate: Option<&'static str>,
}

/// A settable handle on a field's current value.
///
/// Optional shapes model owned pointers: absence is explicit (`None`), never a
/// null reference. Shapes the rules can't inspect beyond zero-ness collapse
/// into [`Opaque`](Slot::Opaque).
pub enum Slot<'a> {
    /// A string held by value.
    Text(&'a mut String),
    /// An optional string; `None` counts as absent.
    OptionalText(&'a mut Option<String>),
    /// A boolean held by value. Exempt from `required`, untouched by the
    /// string rules.
    Flag,
    /// A nested structure held by value.
    Nested(&'a mut dyn Bindable),
    /// An optional nested structure; `None` counts as absent.
    OptionalNested(Option<&'a mut dyn Bindable>),
    /// Any other shape; only its zero-ness is observable, via [`Absent`].
    Opaque {
        /// Whether the value was at its type's zero value when the
        /// descriptor was built.
        absent: bool,
    },
}

impl Slot<'_> {
    /// The string value behind this slot, if there is one to operate on.
    fn as_text(&mut self) -> Option<&mut String> {
        match self {
            Slot::Text(value) => Some(&mut **value),
            Slot::OptionalText(value) => value.as_mut(),
            _ => None,
        }
    }
}

/// Zero-value probe for field shapes the walker can't inspect structurally.
///
/// `required` fails a field whose value `is_absent`: zero for numbers, `None`
/// for options, empty for strings and vectors.
pub trait Absent {
    /// Is this value its type's zero value?
    fn is_absent(&self) -> bool;
}

macro_rules! absent_when_zero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Absent for $ty {
                fn is_absent(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

absent_when_zero!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Absent for f32 {
    fn is_absent(&self) -> bool {
        *self == 0.0
    }
}

impl Absent for f64 {
    fn is_absent(&self) -> bool {
        *self == 0.0
    }
}

impl Absent for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T> Absent for Vec<T> {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

/// Walk `target`'s fields depth-first, enforcing each field's rules in the
/// documented order.
///
/// Stops at the first violation. Every binding entry point ends with this
/// same pass; it can also be invoked on its own when the target was populated
/// by other means.
pub fn validate<T>(target: &mut T) -> Result<(), RuleError>
where
    T: Bindable + ?Sized,
{
    for field in target.fields() {
        apply(field)?;
    }
    Ok(())
}

fn apply(mut field: Field<'_>) -> Result<(), RuleError> {
    check_required(&field)?;
    enforce_max_length(&mut field)?;
    trim_lower(&mut field);
    check_format(&mut field)?;
    match field.slot {
        Slot::Nested(inner) => validate(inner),
        Slot::OptionalNested(Some(inner)) => validate(inner),
        _ => Ok(()),
    }
}

fn check_required(field: &Field<'_>) -> Result<(), RuleError> {
    if !field.rules.required {
        return Ok(());
    }
    let absent = match &field.slot {
        Slot::Text(value) => value.is_empty(),
        Slot::OptionalText(value) => value.is_none(),
        // `false` is a legitimate present value.
        Slot::Flag => false,
        // A by-value structure is structurally present; zero-ness of its
        // interior is the business of its own rules, enforced on descent.
        Slot::Nested(_) => false,
        Slot::OptionalNested(inner) => inner.is_none(),
        Slot::Opaque { absent } => *absent,
    };
    if absent {
        return Err(RuleError::MissingField { field: field.name });
    }
    Ok(())
}

fn enforce_max_length(field: &mut Field<'_>) -> Result<(), RuleError> {
    let Some(raw) = field.rules.max_length else {
        return Ok(());
    };
    let max: usize = raw.parse().map_err(|_| RuleError::InvalidMaxLength {
        field: field.name,
        raw,
    })?;
    if let Some(value) = field.slot.as_text()
        && let Some((at, _)) = value.char_indices().nth(max)
    {
        value.truncate(at);
    }
    Ok(())
}

fn trim_lower(field: &mut Field<'_>) {
    if !field.rules.trimlower {
        return;
    }
    if let Some(value) = field.slot.as_text() {
        *value = value.trim().to_lowercase();
    }
}

fn check_format(field: &mut Field<'_>) -> Result<(), RuleError> {
    let Some(rule) = field.rules.validate else {
        return Ok(());
    };
    match rule {
        "email" => {
            if let Some(value) = field.slot.as_text()
                && !format::is_email(value)
            {
                return Err(RuleError::InvalidEmail { field: field.name });
            }
            Ok(())
        }
        "phone" => {
            if let Some(value) = field.slot.as_text() {
                match format::normalize_phone(value) {
                    Some(normalized) => *value = normalized,
                    None => return Err(RuleError::InvalidPhone { field: field.name }),
                }
            }
            Ok(())
        }
        raw => Err(RuleError::UnknownFormat {
            field: field.name,
            raw,
        }),
    }
}

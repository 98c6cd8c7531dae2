//! Error type definitions for packing, serialization and emission

use std::borrow::Cow;
use thiserror::Error;

/// Primary error type for fixture generation
///
/// Every variant is a construction-time failure: generation is offline and
/// deterministic, so nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// A field value needs more bits than the field declares
    #[error("field '{field}' overflows: value needs {needed_bits} bits, field holds {width_bits}")]
    FieldOverflow {
        field: Cow<'static, str>,
        width_bits: u32,
        needed_bits: u64,
    },

    /// A layout's fields do not fit its total width
    #[error("layout '{profile}' overflows: fields occupy {used_bits} bits, total is {total_bits}")]
    LayoutOverflow {
        profile: Cow<'static, str>,
        used_bits: u64,
        total_bits: u32,
    },

    /// Malformed hexadecimal literal
    #[error("malformed hex literal for {context}: {reason}")]
    Format {
        context: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    /// A width that must be a whole number of words (or non-zero) is not
    #[error("{context}: {bits} bits is not a valid width ({reason})")]
    Alignment {
        context: Cow<'static, str>,
        bits: u64,
        reason: &'static str,
    },

    /// A value was supplied for a field the layout does not have
    #[error("layout '{profile}' has no field '{field}'")]
    UnknownField {
        profile: Cow<'static, str>,
        field: Cow<'static, str>,
    },

    /// A layout field received no value
    #[error("layout '{profile}' is missing a value for field '{field}'")]
    MissingField {
        profile: Cow<'static, str>,
        field: Cow<'static, str>,
    },

    /// The same field name appears twice
    #[error("field '{field}' declared twice in '{context}'")]
    DuplicateField {
        context: Cow<'static, str>,
        field: Cow<'static, str>,
    },

    /// Writing the fixture stream failed
    #[error("I/O error while emitting fixtures: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failure located in a specific fixture case
    #[error("suite '{suite}', case '{case}': {source}")]
    Case {
        suite: Cow<'static, str>,
        case: Cow<'static, str>,
        #[source]
        source: Box<Error>,
    },
}

/// Result type for fixture generation
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a Format error
    pub fn format<C: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        context: C,
        reason: R,
    ) -> Self {
        Error::Format {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Attach suite and case names to an error.
    ///
    /// An error that already carries case context is returned unchanged.
    pub fn in_case<S, C>(self, suite: S, case: C) -> Self
    where
        S: Into<Cow<'static, str>>,
        C: Into<Cow<'static, str>>,
    {
        match self {
            located @ Error::Case { .. } => located,
            other => Error::Case {
                suite: suite.into(),
                case: case.into(),
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, skipping case context
    pub fn root(&self) -> &Error {
        match self {
            Error::Case { source, .. } => source.root(),
            other => other,
        }
    }

    /// Qualify a field-level error with the layout it was packed into.
    ///
    /// `FieldOverflow` and `Format` name a bare field; this turns `block`
    /// into `cmac_block.block`. Already-qualified names are left alone.
    pub fn in_profile(self, profile: &str) -> Self {
        let qualify = |name: Cow<'static, str>| -> Cow<'static, str> {
            match name.strip_prefix(profile) {
                Some(rest) if rest.starts_with('.') => name,
                _ => Cow::Owned(format!("{}.{}", profile, name)),
            }
        };
        match self {
            Error::FieldOverflow {
                field,
                width_bits,
                needed_bits,
            } => Error::FieldOverflow {
                field: qualify(field),
                width_bits,
                needed_bits,
            },
            Error::Format { context, reason } => Error::Format {
                context: qualify(context),
                reason,
            },
            other => other,
        }
    }

    /// Re-label the context of a Format error.
    ///
    /// Hex parsing reports a generic context; callers that know which field
    /// or output the literal belongs to use this to name it.
    pub fn with_context<C: Into<Cow<'static, str>>>(self, context: C) -> Self {
        match self {
            Error::Format { reason, .. } => Error::Format {
                context: context.into(),
                reason,
            },
            Error::Alignment { bits, reason, .. } => Error::Alignment {
                context: context.into(),
                bits,
                reason,
            },
            other => other,
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        match e {
            hex::FromHexError::OddLength => Error::format("hex literal", "odd number of digits"),
            hex::FromHexError::InvalidHexCharacter { c, index } => Error::format(
                "hex literal",
                format!("invalid character {:?} at position {}", c, index),
            ),
            other => Error::format("hex literal", other.to_string()),
        }
    }
}

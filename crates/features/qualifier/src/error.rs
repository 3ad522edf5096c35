use std::borrow::Cow;

/// Errors shared by every qualifier variant and by record decoding.
#[qualis_derive::qualis_error]
pub enum QualifierError {
    /// The record names a kind nobody registered a constructor for.
    #[error("Unknown qualifier kind{}: {kind}", format_context(.context))]
    UnknownKind { kind: String, context: Option<Cow<'static, str>> },

    /// The record parameters do not fit the constructor's expectations.
    #[error("Invalid qualifier record{}: {source}", format_context(.context))]
    InvalidRecord { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A qualifier hit a hard fault while inspecting a package.
    #[error(
        "Failed to check qualifier {qualifier} for package {package}{}: {message}",
        format_context(.context)
    )]
    Evaluation {
        qualifier: String,
        package: String,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal qualifier error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

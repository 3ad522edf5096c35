use qualis_derive::qualis_error;
use std::borrow::Cow;

#[qualis_error]
pub enum ProbeError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown probe{}: {kind}", format_context(.context))]
    Unknown { kind: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<String, ProbeError> {
    std::fs::read_to_string("missing.probe").context("Reading probe file")
}

fn fallback() -> Result<(), ProbeError> {
    Err("probe fallback".into())
}

fn main() {
    let _ = read();
    let _ = fallback().context("Running fallback");
}

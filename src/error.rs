use thiserror::Error;

/// A table name, enum name or enum literal that the schema does not declare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct ParseNameError {
	pub kind: &'static str,
	pub value: String,
}

impl ParseNameError {
	pub fn new(kind: &'static str, value: &str) -> Self {
		Self { kind, value: value.to_string() }
	}
}

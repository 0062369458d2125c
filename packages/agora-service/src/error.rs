use agora_domain::ValidationError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<ValidationError> for Error {
	fn from(err: ValidationError) -> Self {
		Self::InvalidRequest { message: err.to_string() }
	}
}

// Every record-store failure is fatal to the request, whatever its cause.
impl From<agora_storage::Error> for Error {
	fn from(err: agora_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

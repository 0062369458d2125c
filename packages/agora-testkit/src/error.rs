pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Base DSN is not a valid Postgres URL: {source}")]
	InvalidDsn { source: sqlx::Error },
	#[error("No admin database accepted a connection: {source}")]
	AdminUnavailable { source: sqlx::Error },
	#[error("Failed to start the cleanup runtime: {0}")]
	Runtime(#[from] std::io::Error),
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
}

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub search: Search,
	pub security: Security,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
	pub qdrant: Qdrant,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	/// Collection holding one point per item. Point ids are the item ids.
	pub collection: String,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	/// Upper bound on hits requested from the full-text index per query.
	pub max_hits: u32,
	/// Index calls slower than this degrade to zero hits.
	#[serde(default = "default_index_timeout_ms")]
	pub index_timeout_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
	pub api_auth_token: Option<String>,
}

fn default_index_timeout_ms() -> u64 {
	2_000
}

use std::sync::Arc;

use agora_service::AgoraService;
use agora_storage::{db::Db, qdrant::QdrantStore};

use crate::auth::AuthState;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<AgoraService>,
	pub auth: AuthState,
}
impl AppState {
	pub async fn new(config: agora_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let qdrant = QdrantStore::new(&config.storage.qdrant)?;
		let service = AgoraService::new(config, db, qdrant);

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: AgoraService) -> Self {
		let auth = AuthState::from_config(&service.cfg.security);

		Self { service: Arc::new(service), auth }
	}
}

use std::sync::Arc;

use infra::Services;

use crate::auth::JwtService;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    config: Arc<AppConfig>,
    jwt_service: JwtService,
}

impl AppState {
    pub fn new(config: AppConfig, services: Services) -> Self {
        let jwt_service = JwtService::new(&config);

        Self {
            services,
            config: Arc::new(config),
            jwt_service,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}

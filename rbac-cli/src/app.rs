use std::sync::Arc;

use rbac_config::Config;
use rbac_core::api::MockAdminApi;
use rbac_core::latency;
use rbac_core::store::AdminStore;
use rbac_core::views::Dashboard;
use tracing::info;

/// Build the access layer described by `config`.
pub fn build_api(config: &Config) -> Arc<MockAdminApi> {
    let strategy = config.store.id_strategy;
    let store = if config.store.seed {
        AdminStore::seeded(strategy)
    } else {
        AdminStore::empty(strategy)
    };

    info!(
        api.latency = %humantime::format_duration(config.api.latency),
        store.id_strategy = %strategy,
        store.seed = config.store.seed,
        "access layer ready"
    );
    Arc::new(MockAdminApi::new(
        Arc::new(store),
        latency::from_duration(config.api.latency),
    ))
}

pub async fn mount(config: &Config) -> Dashboard {
    Dashboard::mount(build_api(config)).await
}

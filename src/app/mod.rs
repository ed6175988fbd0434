use std::sync::Arc;

use derive_more::Deref;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::AppConfig,
    landing::LandingPage,
    store::{MemoryStore, SubscriberStore},
    templ_manager::TemplateManager,
    Result,
};

// ###################################
// ->  Structs
// ###################################
pub struct App {
    pub app_state: AppState,
    pub listener: TcpListener,
}
impl App {
    pub fn new(app_state: AppState, listener: TcpListener) -> Self {
        App {
            app_state,
            listener,
        }
    }

    /// Validates the config, builds the `AppState` around a fresh in-memory subscriber list
    /// and binds the listener.
    pub async fn build_from_config(config: AppConfig) -> Result<Self> {
        let base_url = config.net_config.valid_base_url()?;
        info!("{:<20} - {}", "Base url:", base_url);

        let tm = TemplateManager::init()?;
        let store = Arc::new(MemoryStore::new());
        let landing = LandingPage::new(&config.site_config);

        let app_state = AppState::new(store, tm, landing);

        let listener = TcpListener::bind(config.net_config.socket_addr()).await?;
        let addr = listener.local_addr()?;
        info!("{:<20} - {}", "Listening on:", addr);

        let app = App::new(app_state, listener);
        Ok(app)
    }
}

pub struct InternalState {
    pub store: Arc<dyn SubscriberStore>,
    pub templ_mgr: TemplateManager,
    pub landing: LandingPage,
}

/// Application state containing all global data.
/// It implements `Deref` to easily access the fields on `InternalState`
/// Uses an `Arc` so it can be cloned around.
#[derive(Clone, Deref)]
pub struct AppState(Arc<InternalState>);

impl AppState {
    pub fn new(
        store: Arc<dyn SubscriberStore>,
        templ_mgr: TemplateManager,
        landing: LandingPage,
    ) -> Self {
        AppState(Arc::new(InternalState {
            store,
            templ_mgr,
            landing,
        }))
    }
}

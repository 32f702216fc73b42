//! Sharing metadata plugin

use crate::assets::{self, MediaPickerConfig};
use crate::form::FormRenderer;
use crate::head::{HeadEmitter, MetaTag};
use crate::settings::DefaultsPage;
use crate::submission::SubmissionHandler;
use async_trait::async_trait;
use sharemeta_config::{validate_config, Config};
use sharemeta_core::{list_fields, Field, FieldKeys, ItemId, Result, Scope};
use sharemeta_plugin_api::{
    AssetBundle, HealthStatus, Hook, OptionsWhitelist, PageContext, Plugin, PluginDependency,
    PluginError, PluginInfo, PluginState, SubmittedForm, User,
};
use sharemeta_store::{ConfiguredBackend, MetadataBackend, MetadataStore};
use tracing::{debug, info, warn};

/// Lets editors set explicit sharing metadata per item, with site defaults
///
/// Generic over the persistence backend so a host can plug in its own
/// metadata and option storage.
#[derive(Debug)]
pub struct SharingMetadataPlugin<B: MetadataBackend> {
    config: Config,
    store: MetadataStore<B>,
    submission: SubmissionHandler,
    whitelist: OptionsWhitelist,
    state: PluginState,
}

impl<B: MetadataBackend> SharingMetadataPlugin<B> {
    /// Create the plugin with the default configuration
    pub fn new(backend: B) -> Self {
        Self::build(backend, Config::default())
    }

    /// Create the plugin with a validated configuration
    pub fn with_config(backend: B, config: Config) -> Result<Self> {
        validate_config(&config)?;
        Ok(Self::build(backend, config))
    }

    fn build(backend: B, config: Config) -> Self {
        let keys = FieldKeys::new(config.plugin.namespace.clone());

        Self {
            submission: SubmissionHandler::new(&keys),
            store: MetadataStore::new(backend, keys),
            whitelist: OptionsWhitelist::new(),
            state: PluginState::Loaded,
            config,
        }
    }

    /// Share the host's options whitelist instead of a private one
    pub fn with_whitelist(mut self, whitelist: OptionsWhitelist) -> Self {
        self.whitelist = whitelist;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Metadata store
    pub fn store(&self) -> &MetadataStore<B> {
        &self.store
    }

    /// Options whitelist the defaults page registers with
    pub fn whitelist(&self) -> &OptionsWhitelist {
        &self.whitelist
    }

    /// Lifecycle state
    pub fn state(&self) -> &PluginState {
        &self.state
    }

    fn keys(&self) -> &FieldKeys {
        self.store.keys()
    }

    fn defaults_page(&self) -> DefaultsPage<'_, B> {
        DefaultsPage::new(
            &self.store,
            &self.config.settings,
            &self.whitelist,
            self.config.plugin.min_image_px,
        )
    }

    /// Render the metadata form section for an item's edit screen
    pub async fn render_meta_box(&self, item_id: ItemId) -> Result<String> {
        let form = FormRenderer::new(&self.store, self.config.plugin.min_image_px)
            .render_all(Scope::Item(item_id))
            .await?;
        let script = MediaPickerConfig::for_class(self.keys()).init_script()?;

        Ok(format!("{}\n{}", form.html, script))
    }

    /// Store the recognised fields of an item's submitted edit form
    pub async fn save_item(&self, item_id: ItemId, form: &SubmittedForm) -> Result<Vec<Field>> {
        self.submission.handle(&self.store, item_id, form).await
    }

    /// OpenGraph tags for the page being rendered
    pub async fn head_tags(&self, page: &PageContext) -> Result<Vec<MetaTag>> {
        HeadEmitter::new(&self.store).tags(page).await
    }

    /// OpenGraph tags for the page being rendered, as markup
    pub async fn render_head(&self, page: &PageContext) -> Result<String> {
        HeadEmitter::new(&self.store).render(page).await
    }

    /// Render the defaults settings page
    pub async fn render_settings_page(&self, user: &User) -> Result<String> {
        self.defaults_page().render(user).await
    }

    /// Apply a defaults page submission
    pub async fn save_options(
        &self,
        user: &User,
        group: &str,
        form: &SubmittedForm,
    ) -> Result<Vec<String>> {
        self.defaults_page().save(user, group, form).await
    }

    /// Scripts and styles for the admin screens
    pub fn admin_assets(&self) -> Vec<AssetBundle> {
        assets::bundles(self.keys())
    }

    /// Metadata, state and current health
    pub async fn info(&self) -> PluginInfo {
        let health = match self.health_check().await {
            Ok(status) => status,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        };

        PluginInfo {
            metadata: self.metadata(),
            state: self.state.clone(),
            health: Some(health),
        }
    }

    fn register_defaults(&self) {
        let identifiers = list_fields()
            .iter()
            .map(|&field| self.keys().input_id(Scope::Defaults, field));
        self.whitelist
            .replace(&self.config.settings.option_group, identifiers);
    }
}

impl SharingMetadataPlugin<ConfiguredBackend> {
    /// Create the plugin over the backend named in `config.store`
    pub async fn connect(config: Config) -> Result<Self> {
        validate_config(&config)?;
        let backend = ConfiguredBackend::connect(&config.store.backend).await?;

        debug!(backend = backend.kind(), "Sharing metadata plugin connected");

        Ok(Self::build(backend, config))
    }
}

fn parse_config(value: serde_json::Value) -> Result<Config, PluginError> {
    let config: Config = serde_json::from_value(value)
        .map_err(|e| PluginError::config(format!("Invalid configuration: {}", e)))?;
    validate_config(&config).map_err(PluginError::config)?;
    Ok(config)
}

#[async_trait]
impl<B: MetadataBackend> Plugin for SharingMetadataPlugin<B> {
    fn name(&self) -> &str {
        "facebook-metadata"
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &str {
        "Allows setting of explicit image, title, and description for sharing on Facebook"
    }

    fn author(&self) -> &str {
        "Will Voelcker"
    }

    fn homepage(&self) -> Option<&str> {
        Some("http://willv.net")
    }

    fn dependencies(&self) -> Vec<PluginDependency> {
        vec![PluginDependency::required("media-library", "*")]
    }

    fn hooks(&self) -> Vec<Hook> {
        let plugin = &self.config.plugin;
        let settings = &self.config.settings;
        let ns = self.keys().namespace();

        let mut hooks: Vec<Hook> = plugin
            .post_types
            .iter()
            .map(|post_type| Hook::MetaBox {
                id: format!("{ns}-fields"),
                title: plugin.meta_box_title.clone(),
                post_type: post_type.clone(),
            })
            .collect();

        hooks.push(Hook::SettingsPage {
            parent: settings.parent_menu.clone(),
            slug: settings.page_slug.clone(),
            page_title: settings.page_title.clone(),
            menu_title: settings.menu_title.clone(),
            capability: settings.capability.clone(),
        });
        hooks.push(Hook::SaveItem);
        hooks.push(Hook::Head);
        hooks.push(Hook::AdminAssets {
            bundles: self.admin_assets(),
        });

        hooks
    }

    async fn init(&mut self, config: serde_json::Value) -> Result<(), PluginError> {
        let config = match parse_config(config) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Rejected sharing metadata configuration");
                self.state = PluginState::Failed(e.to_string());
                return Err(e);
            }
        };

        self.whitelist.remove(&self.config.settings.option_group);

        let keys = FieldKeys::new(config.plugin.namespace.clone());
        self.submission = SubmissionHandler::new(&keys);
        self.store = MetadataStore::new(self.store.backend().clone(), keys);
        self.config = config;
        self.state = PluginState::Initialized;

        debug!(
            namespace = %self.config.plugin.namespace,
            post_types = ?self.config.plugin.post_types,
            "Sharing metadata plugin initialized"
        );

        Ok(())
    }

    async fn start(&mut self) -> Result<(), PluginError> {
        if self.state.is_started() {
            return Err(PluginError::invalid_state("already started"));
        }
        if self.state.is_failed() {
            return Err(PluginError::invalid_state(format!("cannot start, {}", self.state)));
        }

        self.register_defaults();
        self.state = PluginState::Started;

        info!(
            option_group = %self.config.settings.option_group,
            "Sharing metadata plugin started"
        );
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), PluginError> {
        self.state = PluginState::Stopped;
        info!("Sharing metadata plugin stopped");
        Ok(())
    }

    async fn health_check(&self) -> Result<HealthStatus, PluginError> {
        match self.store.health_check().await {
            Ok(()) => Ok(HealthStatus::Healthy),
            Err(e) => {
                warn!(error = %e, "Metadata backend health check failed");
                Ok(HealthStatus::Unhealthy(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharemeta_core::Namespace;
    use sharemeta_store::InMemoryBackend;

    fn plugin() -> SharingMetadataPlugin<InMemoryBackend> {
        SharingMetadataPlugin::new(InMemoryBackend::new())
    }

    #[test]
    fn test_metadata() {
        let plugin = plugin();
        let metadata = plugin.metadata();

        assert_eq!(metadata.name, "facebook-metadata");
        assert_eq!(metadata.author, "Will Voelcker");
        assert_eq!(metadata.homepage.as_deref(), Some("http://willv.net"));
        assert_eq!(metadata.dependencies.len(), 1);
        assert!(metadata.dependencies[0].satisfies("1.0.0"));
    }

    #[test]
    fn test_hooks() {
        let hooks = plugin().hooks();
        let points: Vec<&str> = hooks.iter().map(Hook::point).collect();

        assert_eq!(
            points,
            vec![
                "meta_box",
                "meta_box",
                "settings_page",
                "save_item",
                "head",
                "admin_assets"
            ]
        );
        assert_eq!(
            hooks[0],
            Hook::MetaBox {
                id: "facebookmetadata-fields".to_string(),
                title: "Facebook Sharing Options".to_string(),
                post_type: "post".to_string(),
            }
        );
        assert!(matches!(
            &hooks[1],
            Hook::MetaBox { post_type, .. } if post_type == "page"
        ));
        assert!(matches!(
            &hooks[2],
            Hook::SettingsPage { parent, capability, .. }
                if parent == "options-general.php" && capability == "manage_options"
        ));
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = Config::default();
        config.plugin.post_types.clear();

        assert!(SharingMetadataPlugin::with_config(InMemoryBackend::new(), config).is_err());
    }

    #[tokio::test]
    async fn test_init_rebuilds_keys() {
        let mut plugin = plugin();
        plugin
            .init(serde_json::json!({
                "plugin": { "namespace": "ogmeta", "post_types": ["post"] }
            }))
            .await
            .unwrap();

        assert_eq!(plugin.state(), &PluginState::Initialized);
        assert_eq!(
            plugin.config().plugin.namespace,
            Namespace::new("ogmeta").unwrap()
        );

        let form = SubmittedForm::from_iter([("ogmeta-postmeta-title", "T")]);
        assert_eq!(plugin.save_item(1, &form).await.unwrap(), vec![Field::Title]);
        assert_eq!(
            plugin
                .hooks()
                .iter()
                .filter(|h| h.point() == "meta_box")
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_init_rejects_bad_config() {
        let mut plugin = plugin();

        let err = plugin
            .init(serde_json::json!({ "plugin": { "namespace": "has-dash" } }))
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::ConfigError(_)));

        let err = plugin
            .init(serde_json::json!({ "settings": { "capability": "" } }))
            .await
            .unwrap_err();
        assert!(matches!(err, PluginError::ConfigError(_)));
        assert!(plugin.state().is_failed());
        assert_eq!(plugin.config(), &Config::default());
    }

    #[tokio::test]
    async fn test_failed_init_blocks_start_until_reconfigured() {
        let mut plugin = plugin();

        assert!(plugin
            .init(serde_json::json!({ "plugin": { "post_types": [] } }))
            .await
            .is_err());
        assert!(matches!(plugin.state(), PluginState::Failed(reason) if reason.contains("post")));

        let err = plugin.start().await.unwrap_err();
        assert!(matches!(err, PluginError::InvalidState(_)));
        assert!(plugin.whitelist().options("facebookmetadata-defaults").is_empty());

        plugin.init(serde_json::json!({})).await.unwrap();
        assert_eq!(plugin.state(), &PluginState::Initialized);
        plugin.start().await.unwrap();
    }

    #[tokio::test]
    async fn test_reinit_replaces_whitelisted_identifiers() {
        let mut plugin = plugin();
        plugin.init(serde_json::json!({})).await.unwrap();
        plugin.start().await.unwrap();
        plugin.stop().await.unwrap();

        plugin
            .init(serde_json::json!({ "plugin": { "namespace": "og" } }))
            .await
            .unwrap();
        plugin.start().await.unwrap();

        assert_eq!(
            plugin.whitelist().options("facebookmetadata-defaults"),
            vec![
                "og-postmeta-default-title",
                "og-postmeta-default-image_url",
                "og-postmeta-default-description",
            ]
        );
    }

    #[tokio::test]
    async fn test_reinit_with_new_group_drops_old_group() {
        let mut plugin = plugin();
        plugin.init(serde_json::json!({})).await.unwrap();
        plugin.start().await.unwrap();
        plugin.stop().await.unwrap();

        plugin
            .init(serde_json::json!({ "settings": { "option_group": "og-defaults" } }))
            .await
            .unwrap();
        plugin.start().await.unwrap();

        assert!(plugin.whitelist().options("facebookmetadata-defaults").is_empty());
        assert_eq!(plugin.whitelist().options("og-defaults").len(), 3);
    }

    #[tokio::test]
    async fn test_connect_uses_store_config() {
        let plugin = SharingMetadataPlugin::connect(Config::default())
            .await
            .unwrap();

        assert_eq!(plugin.store().backend().kind(), "inmemory");

        let form = SubmittedForm::from_iter([("facebookmetadata-postmeta-title", "T")]);
        plugin.save_item(2, &form).await.unwrap();
        assert_eq!(
            plugin
                .store()
                .get_field(Scope::Item(2), Field::Title)
                .await
                .unwrap(),
            "T"
        );
    }

    #[tokio::test]
    async fn test_connect_validates() {
        let mut config = Config::default();
        config.settings.capability.clear();

        assert!(SharingMetadataPlugin::connect(config).await.is_err());
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let mut plugin = plugin();
        plugin.init(serde_json::json!({})).await.unwrap();
        plugin.start().await.unwrap();

        assert!(plugin.state().is_started());
        assert!(plugin
            .whitelist()
            .is_allowed("facebookmetadata-defaults", "facebookmetadata-postmeta-default-image_url"));
        assert!(plugin.start().await.is_err());

        plugin.stop().await.unwrap();
        assert_eq!(plugin.state(), &PluginState::Stopped);
    }

    #[tokio::test]
    async fn test_health_and_info() {
        let plugin = plugin();

        assert!(plugin.health_check().await.unwrap().is_healthy());

        let info = plugin.info().await;
        assert_eq!(info.state, PluginState::Loaded);
        assert_eq!(info.health, Some(HealthStatus::Healthy));
        assert!(plugin.store().backend().is_empty());
    }

    #[tokio::test]
    async fn test_health_check_keeps_host_options() {
        let plugin = plugin();
        plugin
            .store()
            .backend()
            .set_option("__health_check__", "host value")
            .await
            .unwrap();

        assert!(plugin.health_check().await.unwrap().is_healthy());

        assert_eq!(
            plugin
                .store()
                .backend()
                .get_option("__health_check__")
                .await
                .unwrap(),
            Some("host value".to_string())
        );
        assert_eq!(plugin.store().backend().len(), 1);
    }

    #[tokio::test]
    async fn test_meta_box_binds_picker_by_class() {
        let html = plugin().render_meta_box(3).await.unwrap();

        assert!(html.contains(r#"name="facebookmetadata-postmeta-title""#));
        assert!(html.contains(r#""selector":{"kind":"class","value":"facebookmetadata-image"}"#));
    }
}

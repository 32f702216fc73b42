//! Site-wide defaults settings page
//!
//! Unlike item saves, defaults are written through the host's options
//! mechanism: the rendered identifiers are whitelisted under the page's
//! options group and the host writes each whitelisted option on submit.

use crate::assets::MediaPickerConfig;
use crate::filters;
use crate::form::FormRenderer;
use askama::Template;
use sharemeta_config::SettingsConfig;
use sharemeta_core::{Error, Field, Result, Scope};
use sharemeta_plugin_api::{OptionsWhitelist, SubmittedForm, User};
use sharemeta_store::{MetadataBackend, MetadataStore};
use tracing::{debug, warn};

#[derive(Template)]
#[template(path = "settings.html", escape = "none")]
struct SettingsTemplate<'a> {
    page_title: &'a str,
    option_group: &'a str,
    form_html: &'a str,
    picker_script: &'a str,
}

/// Capability-gated page editing the defaults scope
#[derive(Debug)]
pub struct DefaultsPage<'a, B> {
    store: &'a MetadataStore<B>,
    settings: &'a SettingsConfig,
    whitelist: &'a OptionsWhitelist,
    min_image_px: u32,
}

impl<'a, B: MetadataBackend> DefaultsPage<'a, B> {
    /// Create the page
    pub fn new(
        store: &'a MetadataStore<B>,
        settings: &'a SettingsConfig,
        whitelist: &'a OptionsWhitelist,
        min_image_px: u32,
    ) -> Self {
        Self {
            store,
            settings,
            whitelist,
            min_image_px,
        }
    }

    fn authorize(&self, user: &User) -> Result<()> {
        if user.can(&self.settings.capability) {
            return Ok(());
        }

        warn!(
            user_id = user.id,
            capability = %self.settings.capability,
            "Denied access to defaults page"
        );
        Err(Error::permission_denied(&self.settings.capability))
    }

    /// Render the page for `user`
    ///
    /// The rendered identifiers become the group's whitelist, so the host
    /// accepts exactly them on submit.
    pub async fn render(&self, user: &User) -> Result<String> {
        self.authorize(user)?;

        let form = FormRenderer::new(self.store, self.min_image_px)
            .render_all(Scope::Defaults)
            .await?;
        self.whitelist
            .replace(&self.settings.option_group, &form.identifiers);

        let button_id = self.store.keys().field_id(Scope::Defaults, Field::Image);
        let picker_script = MediaPickerConfig::for_id(button_id).init_script()?;

        SettingsTemplate {
            page_title: &self.settings.page_title,
            option_group: &self.settings.option_group,
            form_html: &form.html,
            picker_script: &picker_script,
        }
        .render()
        .map_err(|e| Error::Render(e.to_string()))
    }

    /// Apply a submission to `group` the way the host's options handler does
    ///
    /// Every whitelisted option of the group is written, with the empty
    /// string for options missing from the submission. Returns the option
    /// names written.
    pub async fn save(
        &self,
        user: &User,
        group: &str,
        form: &SubmittedForm,
    ) -> Result<Vec<String>> {
        self.authorize(user)?;

        let mut written = Vec::new();
        for (option, value) in self.whitelist.updates(group, form) {
            self.store.backend().set_option(&option, &value).await?;
            written.push(option);
        }

        debug!(group, written = written.len(), "Saved default metadata");

        Ok(written)
    }
}

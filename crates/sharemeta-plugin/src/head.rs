//! Head tag emitter

use sharemeta_core::{escape, list_fields, Field, Result, Scope};
use sharemeta_plugin_api::PageContext;
use sharemeta_store::{MetadataBackend, MetadataStore};
use std::fmt;
use tracing::debug;

/// A single `og:*` meta tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    /// Field the tag describes
    pub field: Field,

    /// Unescaped content
    pub content: String,
}

impl MetaTag {
    /// OpenGraph property name
    pub fn property(&self) -> String {
        self.field.og_property()
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<meta property="{}" content="{}"/>"#,
            self.property(),
            escape::attr(&self.content)
        )
    }
}

/// Emits OpenGraph tags for the page being rendered
#[derive(Debug)]
pub struct HeadEmitter<'a, B> {
    store: &'a MetadataStore<B>,
}

impl<'a, B: MetadataBackend> HeadEmitter<'a, B> {
    /// Create an emitter reading from `store`
    pub fn new(store: &'a MetadataStore<B>) -> Self {
        Self { store }
    }

    /// Tags for `page`, in registry order
    ///
    /// Only pages showing a single item get tags. Each field uses the item's
    /// value, then the site default; fields empty in both are left out.
    pub async fn tags(&self, page: &PageContext) -> Result<Vec<MetaTag>> {
        let Some(item_id) = page.single_item() else {
            return Ok(Vec::new());
        };

        let mut tags = Vec::new();
        for &field in list_fields() {
            let mut content = self.store.get_field(Scope::Item(item_id), field).await?;
            if content.is_empty() {
                content = self.store.get_field(Scope::Defaults, field).await?;
            }

            if !content.is_empty() {
                tags.push(MetaTag { field, content });
            }
        }

        debug!(item_id, tags = tags.len(), "Emitting sharing metadata");

        Ok(tags)
    }

    /// Tags for `page` as markup, one per line
    pub async fn render(&self, page: &PageContext) -> Result<String> {
        let tags = self.tags(page).await?;

        Ok(tags
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

//! Form renderer
//!
//! Renders one table row per field with the field's current value, for an
//! item's edit screen or for the defaults page. The identifiers of the
//! rendered inputs double as storage keys, so the list returned with the
//! markup is exactly what a caller must whitelist for the defaults page.

use crate::filters;
use askama::Template;
use sharemeta_core::{list_fields, Error, Field, Result, Scope};
use sharemeta_store::{MetadataBackend, MetadataStore};
use tracing::debug;

/// Rendered form fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    /// Markup
    pub html: String,

    /// Identifiers of the value-carrying inputs, in render order
    pub identifiers: Vec<String>,
}

struct FormRow {
    field_id: String,
    input_id: String,
    label: &'static str,
    value: String,
    is_image: bool,
}

#[derive(Template)]
#[template(path = "form.html", escape = "none")]
struct FormTemplate<'a> {
    table_class: String,
    button_class: String,
    min_image_px: u32,
    rows: &'a [FormRow],
}

/// Renders editable metadata fields
#[derive(Debug)]
pub struct FormRenderer<'a, B> {
    store: &'a MetadataStore<B>,
    min_image_px: u32,
}

impl<'a, B: MetadataBackend> FormRenderer<'a, B> {
    /// Create a renderer reading current values from `store`
    pub fn new(store: &'a MetadataStore<B>, min_image_px: u32) -> Self {
        Self {
            store,
            min_image_px,
        }
    }

    /// Render `fields` for `scope`
    ///
    /// Fields are rendered in registry order whatever order they are passed
    /// in; duplicates are rendered once.
    pub async fn render(&self, scope: Scope, fields: &[Field]) -> Result<RenderedForm> {
        let keys = self.store.keys();
        let mut rows = Vec::with_capacity(fields.len());

        for &field in list_fields().iter().filter(|f| fields.contains(f)) {
            let value = self.store.get_field(scope, field).await?;
            rows.push(FormRow {
                field_id: keys.field_id(scope, field),
                input_id: keys.input_id(scope, field),
                label: field.label(),
                value,
                is_image: field.is_image(),
            });
        }

        let identifiers: Vec<String> = rows.iter().map(|row| row.input_id.clone()).collect();

        let html = FormTemplate {
            table_class: keys.table_class(),
            button_class: keys.image_button_class(),
            min_image_px: self.min_image_px,
            rows: &rows,
        }
        .render()
        .map_err(|e| Error::Render(e.to_string()))?;

        debug!(%scope, fields = identifiers.len(), "Rendered metadata form");

        Ok(RenderedForm { html, identifiers })
    }

    /// Render every registered field for `scope`
    pub async fn render_all(&self, scope: Scope) -> Result<RenderedForm> {
        self.render(scope, list_fields()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sharemeta_core::FieldKeys;
    use sharemeta_store::InMemoryBackend;
    use std::collections::HashSet;

    fn store() -> MetadataStore<InMemoryBackend> {
        MetadataStore::new(InMemoryBackend::new(), FieldKeys::default())
    }

    #[tokio::test]
    async fn test_item_identifiers() {
        let store = store();
        let form = FormRenderer::new(&store, 200)
            .render_all(Scope::Item(42))
            .await
            .unwrap();

        assert_eq!(
            form.identifiers,
            vec![
                "facebookmetadata-postmeta-title",
                "facebookmetadata-postmeta-image_url",
                "facebookmetadata-postmeta-description",
            ]
        );
    }

    #[tokio::test]
    async fn test_defaults_identifiers() {
        let store = store();
        let form = FormRenderer::new(&store, 200)
            .render_all(Scope::Defaults)
            .await
            .unwrap();

        assert_eq!(
            form.identifiers,
            vec![
                "facebookmetadata-postmeta-default-title",
                "facebookmetadata-postmeta-default-image_url",
                "facebookmetadata-postmeta-default-description",
            ]
        );
    }

    #[tokio::test]
    async fn test_identifiers_unique() {
        let store = store();
        let renderer = FormRenderer::new(&store, 200);

        let mut seen = HashSet::new();
        for scope in [Scope::Item(1), Scope::Defaults] {
            let form = renderer.render_all(scope).await.unwrap();
            for id in form.identifiers {
                assert!(seen.insert(id));
            }
        }
        assert_eq!(seen.len(), 6);
    }

    #[tokio::test]
    async fn test_registry_order_and_dedup() {
        let store = store();
        let form = FormRenderer::new(&store, 200)
            .render(
                Scope::Item(1),
                &[Field::Description, Field::Title, Field::Description],
            )
            .await
            .unwrap();

        assert_eq!(
            form.identifiers,
            vec![
                "facebookmetadata-postmeta-title",
                "facebookmetadata-postmeta-description",
            ]
        );
        let title_at = form.html.find("postmeta-title").unwrap();
        let description_at = form.html.find("postmeta-description").unwrap();
        assert!(title_at < description_at);
    }

    #[tokio::test]
    async fn test_markup_structure() {
        let store = store();
        store
            .set_field(Scope::Item(5), Field::Title, "Current title")
            .await
            .unwrap();

        let html = FormRenderer::new(&store, 200)
            .render_all(Scope::Item(5))
            .await
            .unwrap()
            .html;

        assert!(html.contains(r#"<table class="facebookmetadata-metadataformtable">"#));
        assert!(html.contains(r#"<label for="facebookmetadata-postmeta-title">Title</label>:"#));
        assert!(html.contains(
            r#"<input id="facebookmetadata-postmeta-title" class="text" type="text" name="facebookmetadata-postmeta-title" value="Current title" />"#
        ));
        assert!(html.contains(r#"name="facebookmetadata-postmeta-image_url" value="""#));
        assert!(html.contains(
            r#"<input id="facebookmetadata-postmeta-image" class="button facebookmetadata-image" type="button" value="Upload / Choose Image" />"#
        ));
        assert!(html.contains("(Must be larger than 200px by 200px)"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[tokio::test]
    async fn test_image_button_has_no_name() {
        let store = store();
        let html = FormRenderer::new(&store, 200)
            .render(Scope::Item(1), &[Field::Image])
            .await
            .unwrap()
            .html;

        assert!(!html.contains(r#"name="facebookmetadata-postmeta-image""#));
        assert_eq!(html.matches("name=").count(), 1);
    }

    #[tokio::test]
    async fn test_values_are_escaped() {
        let store = store();
        store
            .set_field(Scope::Item(9), Field::Description, r#"<script>alert("x")</script>"#)
            .await
            .unwrap();

        let html = FormRenderer::new(&store, 200)
            .render_all(Scope::Item(9))
            .await
            .unwrap()
            .html;

        assert!(!html.contains("<script>"));
        assert!(html.contains(
            r#"value="&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;""#
        ));
    }

    #[tokio::test]
    async fn test_min_image_hint() {
        let store = store();
        let html = FormRenderer::new(&store, 600)
            .render(Scope::Defaults, &[Field::Image])
            .await
            .unwrap()
            .html;

        assert!(html.contains("(Must be larger than 600px by 600px)"));
        assert!(html.contains(r#"id="facebookmetadata-postmeta-default-image""#));
    }
}

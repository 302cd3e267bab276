//! Sortable column-header links. A link toggles the `sort`/`direction`
//! query pair for its column, carries every other parameter of the current
//! request along, and is decorated with an icon reflecting the current sort
//! state. An empty sort key renders as plain text.

use crate::config::SortConfig;
use crate::error::Result;
use crate::html;
use crate::icon;
use crate::query;
use crate::request::RequestContext;
use crate::types::{Direction, SortKey};

// ---------------------------------------------------------------------------
// SortableLink
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SortableLink {
    key: String,
    title: Option<String>,
    query: Vec<(String, String)>,
    attrs: Vec<(String, String)>,
}

impl SortableLink {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: None,
            query: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Display title; defaults to the column name run through the configured
    /// title format.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Extra query parameter carried on the generated URL. Repeat the same
    /// key for multi-valued parameters.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Extra anchor attribute. A `class` value merges with the configured
    /// anchor classes; an `href` value replaces the request path as the URL
    /// base.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Title as it will appear in the rendered markup, before escaping.
    /// Useful when the surrounding page reuses the column title elsewhere.
    pub fn resolved_title(&self, config: &SortConfig) -> Result<String> {
        let key = SortKey::parse(&self.key, &config.relation_separator)?;
        Ok(self.format_title(&key, config))
    }

    /// Render the full anchor (or span fallback) for the given request.
    pub fn render(&self, ctx: &RequestContext, config: &SortConfig) -> Result<String> {
        let key = SortKey::parse(&self.key, &config.relation_separator)?;
        let title = self.format_title(&key, config);

        if !key.is_sortable() {
            return Ok(render_span(&title, config));
        }

        // The current direction counts only while this key is the active
        // sort column.
        let current = if ctx.is_sorted_by(key.raw()) {
            ctx.direction()
        } else {
            None
        };
        let active = current.is_some();
        let next = current
            .map(Direction::toggled)
            .unwrap_or(config.default_direction);

        let icon_class = icon::for_state(key.column(), current, config);
        let class_attr = self.class_attribute(active, current, config);
        let extra_attrs = html::attributes(&self.attrs);

        let query_string = query::build(&self.query, &ctx.persisted(config), key.raw(), next);
        let base = self.attr_value("href").unwrap_or_else(|| ctx.path());
        let url = format!("{}?{}", base, query_string);

        let open = format!(
            "<a{} href=\"{}\"{}>",
            class_attr,
            html::escape(&url),
            extra_attrs
        );
        let text = html::escape(&title);

        if !config.enable_icons {
            return Ok(format!("{}{}</a>", open, text));
        }

        let icon_tag = format!("<i class=\"{}\"></i>", html::escape(&icon_class));
        let rendered = if config.clickable_icon {
            format!(
                "{}{}{}{}</a>",
                open, text, config.icon_text_separator, icon_tag
            )
        } else {
            format!(
                "{}{}</a>{}{}",
                open, text, config.icon_text_separator, icon_tag
            )
        };

        Ok(rendered)
    }

    fn format_title(&self, key: &SortKey, config: &SortConfig) -> String {
        match &self.title {
            Some(custom) if !config.format_titles => custom.clone(),
            Some(custom) => config.title_format.apply(custom),
            None => config.title_format.apply(key.column()),
        }
    }

    // Configured classes first, then state classes, then whatever the caller
    // passed as a `class` attribute.
    fn class_attribute(
        &self,
        active: bool,
        current: Option<Direction>,
        config: &SortConfig,
    ) -> String {
        let mut classes: Vec<String> = Vec::new();
        if let Some(class) = &config.anchor_class {
            classes.push(class.clone());
        }
        if active {
            if let Some(class) = &config.active_anchor_class {
                classes.push(class.clone());
            }
            if let (Some(prefix), Some(direction)) =
                (&config.direction_anchor_class_prefix, current)
            {
                classes.push(format!("{}{}", prefix, config.direction_suffix(direction)));
            }
        }
        if let Some(user) = self.attr_value("class") {
            classes.extend(user.split_whitespace().map(str::to_string));
        }

        if classes.is_empty() {
            String::new()
        } else {
            format!(" class=\"{}\"", html::escape(&classes.join(" ")))
        }
    }

    fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

fn render_span(title: &str, config: &SortConfig) -> String {
    match &config.plain_span_class {
        Some(class) => format!(
            "<span class=\"{}\">{}</span>",
            html::escape(class),
            html::escape(title)
        ),
        None => format!("<span>{}</span>", html::escape(title)),
    }
}

/// Render a sortable header link with no extra parameters or attributes.
pub fn sortable_link(
    key: &str,
    title: &str,
    ctx: &RequestContext,
    config: &SortConfig,
) -> Result<String> {
    SortableLink::new(key).title(title).render(ctx, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TitleFormat;

    fn ctx(path: &str, pairs: &[(&str, &str)]) -> RequestContext {
        RequestContext::new(path).with_query(pairs.iter().copied())
    }

    #[test]
    fn unsorted_column_links_to_default_direction() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert_eq!(
            html,
            "<a href=\"/users?sort=name&amp;direction=asc\">Name</a>\
             <i class=\"fa fa-sort\"></i>"
        );
    }

    #[test]
    fn sorted_asc_column_toggles_to_desc() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .render(&ctx("/users", &[("sort", "name"), ("direction", "asc")]), &cfg)
            .unwrap();
        assert!(html.contains("sort=name&amp;direction=desc"));
        assert!(html.contains("<i class=\"fa fa-sort-asc\"></i>"));
    }

    #[test]
    fn sorted_desc_column_toggles_to_asc() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .render(&ctx("/users", &[("sort", "name"), ("direction", "desc")]), &cfg)
            .unwrap();
        assert!(html.contains("sort=name&amp;direction=asc"));
        assert!(html.contains("<i class=\"fa fa-sort-desc\"></i>"));
    }

    #[test]
    fn sort_on_other_column_leaves_link_neutral() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .render(
                &ctx("/users", &[("sort", "email"), ("direction", "asc")]),
                &cfg,
            )
            .unwrap();
        assert!(html.contains("sort=name&amp;direction=asc"));
        assert!(html.contains("<i class=\"fa fa-sort\"></i>"));
    }

    #[test]
    fn invalid_request_direction_counts_as_unsorted() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .render(
                &ctx("/users", &[("sort", "name"), ("direction", "sideways")]),
                &cfg,
            )
            .unwrap();
        assert!(html.contains("sort=name&amp;direction=asc"));
        assert!(html.contains("<i class=\"fa fa-sort\"></i>"));
    }

    #[test]
    fn other_parameters_are_preserved_page_is_reset() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .render(
                &ctx("/users", &[("filter", "active"), ("page", "3")]),
                &cfg,
            )
            .unwrap();
        assert!(html.contains("filter=active"));
        assert!(!html.contains("page=3"));
    }

    #[test]
    fn caller_query_parameters_are_included() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .query("view", "compact")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains("view=compact&amp;sort=name&amp;direction=asc"));
    }

    #[test]
    fn relation_key_travels_whole_in_the_url() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("team.name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains("sort=team.name"));
        // Derived title comes from the column segment only.
        assert!(html.contains(">Name</a>"));
    }

    #[test]
    fn malformed_relation_key_is_an_error() {
        let cfg = SortConfig::default();
        let err = SortableLink::new("a.b.c")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap_err();
        assert!(err.to_string().contains("a.b.c"));
    }

    #[test]
    fn empty_key_renders_span() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("")
            .title("Actions")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert_eq!(html, "<span>Actions</span>");
    }

    #[test]
    fn span_uses_configured_class() {
        let cfg = SortConfig {
            plain_span_class: Some("text-muted".to_string()),
            ..SortConfig::default()
        };
        let html = SortableLink::new("")
            .title("Actions")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert_eq!(html, "<span class=\"text-muted\">Actions</span>");
    }

    #[test]
    fn derived_title_is_titleized() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("created_at")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains(">Created At</a>"));
    }

    #[test]
    fn custom_title_formatting_can_be_disabled() {
        let cfg = SortConfig {
            format_titles: false,
            ..SortConfig::default()
        };
        let html = SortableLink::new("name")
            .title("e-mail address")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains(">e-mail address</a>"));
    }

    #[test]
    fn custom_title_is_formatted_by_default() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .title("display name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains(">Display Name</a>"));
    }

    #[test]
    fn title_format_none_keeps_raw_custom_titles() {
        let cfg = SortConfig {
            title_format: TitleFormat::None,
            ..SortConfig::default()
        };
        let html = SortableLink::new("name")
            .title("display name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains(">display name</a>"));
    }

    #[test]
    fn titles_are_html_escaped() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .title("<b>Name</b>")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains("&lt;b&gt;Name&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn icons_can_be_disabled() {
        let cfg = SortConfig {
            enable_icons: false,
            ..SortConfig::default()
        };
        let html = SortableLink::new("name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(!html.contains("<i"));
        assert!(html.ends_with("</a>"));
    }

    #[test]
    fn clickable_icon_sits_inside_the_anchor() {
        let cfg = SortConfig {
            clickable_icon: true,
            ..SortConfig::default()
        };
        let html = SortableLink::new("name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.ends_with("<i class=\"fa fa-sort\"></i></a>"));
    }

    #[test]
    fn icon_text_separator_is_inserted() {
        let cfg = SortConfig {
            icon_text_separator: "&nbsp;".to_string(),
            ..SortConfig::default()
        };
        let html = SortableLink::new("name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains("</a>&nbsp;<i"));
    }

    #[test]
    fn configured_anchor_classes_apply() {
        let cfg = SortConfig {
            anchor_class: Some("sortable".to_string()),
            active_anchor_class: Some("active".to_string()),
            direction_anchor_class_prefix: Some("dir".to_string()),
            ..SortConfig::default()
        };

        let neutral = SortableLink::new("name")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(neutral.contains("<a class=\"sortable\""));

        let active = SortableLink::new("name")
            .render(&ctx("/users", &[("sort", "name"), ("direction", "desc")]), &cfg)
            .unwrap();
        assert!(active.contains("<a class=\"sortable active dir-desc\""));
    }

    #[test]
    fn caller_class_attribute_merges() {
        let cfg = SortConfig {
            anchor_class: Some("sortable".to_string()),
            ..SortConfig::default()
        };
        let html = SortableLink::new("name")
            .attr("class", "th-link compact")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains("<a class=\"sortable th-link compact\""));
    }

    #[test]
    fn extra_attributes_are_rendered_after_href() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .attr("rel", "nofollow")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains("\" rel=\"nofollow\">"));
    }

    #[test]
    fn href_attribute_overrides_the_url_base() {
        let cfg = SortConfig::default();
        let html = SortableLink::new("name")
            .attr("href", "/people")
            .render(&ctx("/users", &[]), &cfg)
            .unwrap();
        assert!(html.contains("href=\"/people?sort=name&amp;direction=asc\""));
        // The href attribute itself must not render twice.
        assert_eq!(html.matches("href=").count(), 1);
    }

    #[test]
    fn sortable_link_helper_matches_builder() {
        let cfg = SortConfig::default();
        let request = ctx("/users", &[]);
        let from_helper = sortable_link("name", "Name", &request, &cfg).unwrap();
        let from_builder = SortableLink::new("name")
            .title("Name")
            .render(&request, &cfg)
            .unwrap();
        assert_eq!(from_helper, from_builder);
    }

    #[test]
    fn resolved_title_matches_rendered_text() {
        let cfg = SortConfig::default();
        let link = SortableLink::new("created_at");
        assert_eq!(link.resolved_title(&cfg).unwrap(), "Created At");
    }

    #[test]
    fn rendering_is_pure() {
        let cfg = SortConfig::default();
        let request = ctx("/users", &[("filter", "active")]);
        let link = SortableLink::new("name");
        let first = link.render(&request, &cfg).unwrap();
        let second = link.render(&request, &cfg).unwrap();
        assert_eq!(first, second);
    }
}

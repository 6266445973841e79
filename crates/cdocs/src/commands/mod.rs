//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod serve;

use std::sync::Arc;

use cdocs_config::Config;
use cdocs_site::{HighlightConfig, IndexConfig, NavigationScope, Site, SiteConfig};
use cdocs_storage::FsStorage;

pub(crate) use build::BuildArgs;
pub(crate) use serve::ServeArgs;

/// Create the site described by a loaded configuration.
pub(crate) fn site_from_config(config: &Config) -> Site {
    let content = &config.content_resolved;
    let storage = FsStorage::with_dirs(content.basics_dir.clone(), content.advanced_dir.clone());

    let scope = match config.navigation.scope {
        cdocs_config::NavigationScope::Global => NavigationScope::Global,
        cdocs_config::NavigationScope::Category => NavigationScope::Category,
    };

    let site_config = SiteConfig {
        title: config.site_resolved.title.clone(),
        brand: config.site_resolved.brand.clone(),
        description: config.site_resolved.description.clone(),
        highlight: HighlightConfig {
            enabled: config.highlight.enabled,
            cdn_url: config.highlight.cdn_url.clone(),
            languages: config.highlight.languages.clone(),
        },
        index: IndexConfig {
            extension: content.extension.clone(),
            scope,
        },
    };

    Site::new(Arc::new(storage), site_config)
}

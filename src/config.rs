use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Listing page sizes and pagination control shape
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Catalog backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CatalogConfig {
    /// In-memory catalog, seeded from a JSON file or the built-in mock data.
    Memory {
        #[serde(default)]
        seed: Option<PathBuf>,
    },
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::Memory { seed: None }
    }
}

/// Pagination settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Projects per page on the public listing (default: 6)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Rows per page on admin listings (default: 10)
    #[serde(default = "default_admin_page_size")]
    pub admin_page_size: u32,
    /// Pages shown on each side of the current one (default: 2)
    #[serde(default = "default_neighbor_radius")]
    pub neighbor_radius: u32,
}

fn default_page_size() -> u32 {
    6
}

fn default_admin_page_size() -> u32 {
    10
}

fn default_neighbor_radius() -> u32 {
    crowdfund_core::DEFAULT_NEIGHBOR_RADIUS
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            admin_page_size: default_admin_page_size(),
            neighbor_radius: default_neighbor_radius(),
        }
    }
}

impl Config {
    /// Load configuration from file, environment, and CLI arguments
    pub fn load(
        config_path: Option<&PathBuf>,
        cli_seed: Option<&PathBuf>,
        cli_page_size: Option<u32>,
        cli_neighbor_radius: Option<u32>,
    ) -> anyhow::Result<Self> {
        // Start with default config
        let mut config = if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            // Try default config file
            if let Ok(content) = std::fs::read_to_string("crowdfund.toml") {
                toml::from_str(&content)?
            } else {
                Config::default()
            }
        };

        // Override with environment variables
        if let Ok(size) = std::env::var("CROWDFUND_PAGE_SIZE") {
            if let Ok(n) = size.parse() {
                config.pagination.page_size = n;
            }
        }
        if let Ok(size) = std::env::var("CROWDFUND_ADMIN_PAGE_SIZE") {
            if let Ok(n) = size.parse() {
                config.pagination.admin_page_size = n;
            }
        }
        if let Ok(radius) = std::env::var("CROWDFUND_NEIGHBOR_RADIUS") {
            if let Ok(n) = radius.parse() {
                config.pagination.neighbor_radius = n;
            }
        }
        if let Ok(path) = std::env::var("CROWDFUND_SEED") {
            config.catalog = CatalogConfig::Memory {
                seed: Some(PathBuf::from(path)),
            };
        }

        // Override with CLI arguments
        config.apply_cli(cli_seed, cli_page_size, cli_neighbor_radius);

        config.validate()?;
        Ok(config)
    }

    fn apply_cli(
        &mut self,
        seed: Option<&PathBuf>,
        page_size: Option<u32>,
        neighbor_radius: Option<u32>,
    ) {
        if let Some(path) = seed {
            self.catalog = CatalogConfig::Memory {
                seed: Some(path.clone()),
            };
        }
        if let Some(n) = page_size {
            self.pagination.page_size = n;
        }
        if let Some(n) = neighbor_radius {
            self.pagination.neighbor_radius = n;
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.pagination.page_size == 0 || self.pagination.admin_page_size == 0 {
            anyhow::bail!("page sizes must be at least 1");
        }
        if self.pagination.neighbor_radius > crowdfund_core::MAX_NEIGHBOR_RADIUS {
            anyhow::bail!(
                "neighbor_radius must be at most {}",
                crowdfund_core::MAX_NEIGHBOR_RADIUS
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.catalog, CatalogConfig::Memory { seed: None });
        assert_eq!(config.pagination, PaginationConfig::default());
        assert_eq!(config.pagination.page_size, 6);
        assert_eq!(config.pagination.admin_page_size, 10);
        assert_eq!(config.pagination.neighbor_radius, 2);
    }

    #[test]
    fn parses_file() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            type = "memory"
            seed = "fixtures/catalog.json"

            [pagination]
            page_size = 12
            neighbor_radius = 1
            "#,
        )
        .unwrap();

        assert_eq!(
            config.catalog,
            CatalogConfig::Memory {
                seed: Some(PathBuf::from("fixtures/catalog.json"))
            }
        );
        assert_eq!(config.pagination.page_size, 12);
        assert_eq!(config.pagination.admin_page_size, 10);
        assert_eq!(config.pagination.neighbor_radius, 1);
    }

    #[test]
    fn cli_overrides_file() {
        let mut config: Config = toml::from_str("[pagination]\npage_size = 12\n").unwrap();
        let seed = PathBuf::from("other.json");
        config.apply_cli(Some(&seed), Some(3), Some(0));

        assert_eq!(config.catalog, CatalogConfig::Memory { seed: Some(seed) });
        assert_eq!(config.pagination.page_size, 3);
        assert_eq!(config.pagination.neighbor_radius, 0);
    }

    #[test]
    fn rejects_zero_page_size() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());
        config.apply_cli(None, Some(0), None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_oversized_radius() {
        let mut config = Config::default();
        config.apply_cli(None, None, Some(crowdfund_core::MAX_NEIGHBOR_RADIUS));
        assert!(config.validate().is_ok());
        config.apply_cli(None, None, Some(4_000_000_000));
        assert!(config.validate().is_err());
    }
}

use crate::core::slider::{SLIDER_DEFAULT, SLIDER_MAX, SLIDER_MIN};
use crate::core::{Catalog, CatalogProvider};
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_TITLE: &str = "Educational Demonstration App";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page: PageConfig,
    pub catalog: CatalogConfig,
    pub slider: SliderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub items: Catalog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub default: u8,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            default: SLIDER_DEFAULT,
        }
    }
}

impl DashboardConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashboardError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashboardError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PAGE_TITLE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashboardError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("page.title", &self.page.title)?;

        let items = self.catalog.items.items();
        validation::validate_non_empty_list("catalog.items", items)?;
        for item in items {
            validation::validate_non_empty_string("catalog.items", item)?;
        }
        validation::validate_unique_names("catalog.items", items)?;

        validation::validate_range("slider.default", self.slider.default, SLIDER_MIN, SLIDER_MAX)?;

        Ok(())
    }
}

impl CatalogProvider for DashboardConfig {
    fn catalog(&self) -> &Catalog {
        &self.catalog.items
    }

    fn page_title(&self) -> &str {
        &self.page.title
    }

    fn slider_default(&self) -> u8 {
        self.slider.default
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

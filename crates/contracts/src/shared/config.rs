use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub contact: ContactSection,
    pub content: ContentSection,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SiteSection {
    pub name: String,
    pub tagline: String,
    pub base_url: String,
    pub locale: String,
    #[serde(default)]
    pub image_domains: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContactSection {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ContentSection {
    pub revalidate_secs: u64,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[site]
name = "NextWave"
tagline = "Intelligent Automation for Tomorrow's Challenges"
base_url = "https://nextwave.au"
locale = "en-AU"

[contact]
phone = "+61 2 1234 5678"
email = "contact@nextwave.au"

[content]
revalidate_secs = 86400
"#;

/// site.toml, собранный вместе с приложением
const SITE_CONFIG: &str = include_str!("../../config/site.toml");

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        log::warn!("site.toml is invalid, using default configuration: {e:#}");
        default_config()
    })
});

/// Load site configuration
///
/// Search order:
/// 1. site.toml compiled into the bundle
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<SiteConfig> {
    parse_config(SITE_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<SiteConfig> {
    let config: SiteConfig = toml::from_str(contents)?;
    if config.site.name.trim().is_empty() {
        anyhow::bail!("site.name must not be empty");
    }
    Ok(config)
}

fn default_config() -> SiteConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("embedded default config is invalid: {e:#}");
        SiteConfig {
            site: SiteSection {
                name: "NextWave".into(),
                tagline: String::new(),
                base_url: String::new(),
                locale: "en-AU".into(),
                image_domains: Vec::new(),
            },
            contact: ContactSection {
                phone: String::new(),
                email: String::new(),
            },
            content: ContentSection {
                revalidate_secs: 86400,
            },
        }
    })
}

/// Конфигурация сайта (загружается один раз)
pub fn site_config() -> &'static SiteConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<SiteConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.site.name, "NextWave");
        assert_eq!(config.content.revalidate_secs, 86400);
        assert!(config.site.image_domains.is_empty());
    }

    #[test]
    fn test_bundled_site_config_loads() {
        let config = load_config().unwrap();
        assert_eq!(config.site.locale, "en-AU");
        assert_eq!(config.contact.email, "contact@nextwave.au");
        assert_eq!(config.site.image_domains.len(), 2);
    }

    #[test]
    fn test_empty_site_name_is_rejected() {
        let broken = DEFAULT_CONFIG.replace("name = \"NextWave\"", "name = \"  \"");
        assert!(parse_config(&broken).is_err());
    }

    #[test]
    fn test_missing_section_is_rejected() {
        assert!(parse_config("[site]\nname = \"x\"").is_err());
    }

    #[test]
    fn test_site_config_is_cached() {
        let a = site_config() as *const SiteConfig;
        let b = site_config() as *const SiteConfig;
        assert_eq!(a, b);
    }
}

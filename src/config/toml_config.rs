use crate::core::style::StyleConfig;
use crate::core::ContentProvider;
use crate::domain::model::{
    AnimationSlot, AssetRefs, ContactSettings, Experience, Profile, Project,
};
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub assets: AssetRefs,
    #[serde(default)]
    pub animations: Vec<AnimationSlot>,
    pub contact: ContactSettings,
    #[serde(default)]
    pub style: StyleConfig,
    pub http: Option<HttpConfig>,
    pub server: Option<ServerConfig>,
    /// 資源路徑解析的基準目錄
    #[serde(skip)]
    pub base_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置，資源路徑以檔案所在目錄為基準
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path
            .as_ref()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CONTACT_EMAIL})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PageError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.title", &self.site.title)?;
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;
        validation::validate_email("profile.email", &self.profile.email)?;

        for (i, link) in self.profile.social_links.iter().enumerate() {
            validation::validate_url(&format!("profile.social_links[{}].url", i), &link.url)?;
        }

        for (i, project) in self.projects.iter().enumerate() {
            validation::validate_non_empty_string(&format!("projects[{}].title", i), &project.title)?;
            validation::validate_url(&format!("projects[{}].link", i), &project.link)?;
        }

        for (i, exp) in self.experience.iter().enumerate() {
            validation::validate_non_empty_string(
                &format!("experience[{}].organization", i),
                &exp.organization,
            )?;
            validation::validate_date_range(&format!("experience[{}]", i), exp.start, exp.end)?;
        }

        if let Some(resume) = &self.assets.resume {
            validation::validate_path("assets.resume", resume)?;
        }
        if let Some(image) = &self.assets.profile_image {
            validation::validate_path("assets.profile_image", image)?;
        }

        // 每個區塊最多一個動畫
        let mut slots = HashSet::new();
        for (i, animation) in self.animations.iter().enumerate() {
            validation::validate_url(&format!("animations[{}].url", i), &animation.url)?;
            if !slots.insert(animation.slot) {
                return Err(PageError::InvalidConfigValueError {
                    field: format!("animations[{}].slot", i),
                    value: format!("{:?}", animation.slot).to_lowercase(),
                    reason: "Slot already has an animation".to_string(),
                });
            }
        }

        validation::validate_url("contact.relay_endpoint", &self.contact.relay_endpoint)?;
        validation::validate_range("style.card_radius", self.style.card_radius, 0, 64)?;
        let style_values = [
            ("style.accent_color", &self.style.accent_color),
            ("style.background_color", &self.style.background_color),
            ("style.surface_color", &self.style.surface_color),
            ("style.text_color", &self.style.text_color),
            ("style.muted_color", &self.style.muted_color),
            ("style.font_family", &self.style.font_family),
            ("style.current_color", &self.style.current_color),
            ("style.past_color", &self.style.past_color),
            ("style.education_color", &self.style.education_color),
        ];
        for (field, value) in style_values {
            validation::validate_css_value(field, value)?;
        }
        if let Some(prefix) = &self.style.class_prefix {
            validation::validate_css_value("style.class_prefix", prefix)?;
        }

        if let Some(timeout) = self.http.as_ref().and_then(|h| h.timeout_seconds) {
            validation::validate_range("http.timeout_seconds", timeout, 1, 300)?;
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        let seconds = self
            .http
            .as_ref()
            .and_then(|h| h.timeout_seconds)
            .unwrap_or(crate::adapters::http::DEFAULT_TIMEOUT_SECONDS);
        Duration::from_secs(seconds)
    }

    pub fn server_addr(&self) -> Result<SocketAddr> {
        let host = self
            .server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST);
        let port = self
            .server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(DEFAULT_PORT);
        let ip: IpAddr = host.parse().map_err(|e| PageError::InvalidConfigValueError {
            field: "server.host".to_string(),
            value: host.to_string(),
            reason: format!("{}", e),
        })?;
        Ok(SocketAddr::new(ip, port))
    }
}

impl ContentProvider for SiteConfig {
    fn page_title(&self) -> &str {
        &self.site.title
    }

    fn page_icon(&self) -> Option<&str> {
        self.site.icon.as_deref()
    }

    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn experience(&self) -> &[Experience] {
        &self.experience
    }

    fn assets(&self) -> &AssetRefs {
        &self.assets
    }

    fn animations(&self) -> &[AnimationSlot] {
        &self.animations
    }

    fn contact(&self) -> &ContactSettings {
        &self.contact
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{AnimationSlotKind, TimelineCategory};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[site]
title = "Jane Doe | Data Scientist"
icon = "👩‍💻"

[profile]
name = "Jane Doe"
headline = "Data Scientist"
location = "NYC, New York"
email = "jane@example.com"
skills = ["Python", "SQL"]

[[projects]]
title = "Churn Predictor"
tags = ["XGBoost"]
description = "Predicts churn."
link = "https://github.com/jane/churn"

[[experience]]
role = "M.S. Electrical Engineering"
organization = "USC"
start = "2021-08-01"
end = "2023-05-30"
category = "Education"

[[experience]]
role = "Data Analyst"
organization = "Brillio"
start = "2023-09-01"
end = "2024-07-31"
category = "Past"

[assets]
resume = "resume.pdf"

[[animations]]
slot = "hero"
url = "https://assets.example.com/coding.json"

[contact]
relay_endpoint = "https://formsubmit.co/jane@example.com"
"#;

    #[test]
    fn test_parse_basic_config() {
        let config = SiteConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.site.title, "Jane Doe | Data Scientist");
        assert_eq!(config.profile.skills, vec!["Python", "SQL"]);
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.experience.len(), 2);
        assert_eq!(config.experience[0].category, TimelineCategory::Education);
        assert_eq!(config.animations[0].slot, AnimationSlotKind::Hero);
        assert_eq!(config.assets.profile_image, None);
        assert_eq!(config.style, StyleConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTFOLIO_TEST_RELAY", "https://relay.example.com/x");

        let toml_content = BASIC.replace(
            "https://formsubmit.co/jane@example.com",
            "${PORTFOLIO_TEST_RELAY}",
        );
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.contact.relay_endpoint, "https://relay.example.com/x");

        std::env::remove_var("PORTFOLIO_TEST_RELAY");
    }

    #[test]
    fn test_unknown_env_var_is_kept_and_fails_validation() {
        let toml_content = BASIC.replace(
            "https://formsubmit.co/jane@example.com",
            "${PORTFOLIO_TEST_UNSET_VAR}",
        );
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.contact.relay_endpoint, "${PORTFOLIO_TEST_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_start_after_end_is_rejected() {
        let toml_content = BASIC.replace("end = \"2023-05-30\"", "end = \"2020-01-01\"");
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("experience[0]"));
    }

    #[test]
    fn test_bad_animation_url_is_rejected() {
        let toml_content =
            BASIC.replace("https://assets.example.com/coding.json", "ftp://assets/coding.json");
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_ongoing_experience_parses_without_end() {
        let toml_content = BASIC.replace("end = \"2024-07-31\"\n", "");
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.experience[1].end, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::from_toml_str("[site\ntitle=").unwrap_err();
        assert!(matches!(err, PageError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_defaults_for_http_and_server() {
        let config = SiteConfig::from_toml_str(BASIC).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.server_addr().unwrap().port(), DEFAULT_PORT);
    }

    #[test]
    fn test_ipv6_server_host() {
        let toml_content = format!("{}\n[server]\nhost = \"::1\"\nport = 8080\n", BASIC);
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        let addr = config.server_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.to_string(), "[::1]:8080");
    }

    #[test]
    fn test_hostname_server_host_is_rejected() {
        let toml_content = format!("{}\n[server]\nhost = \"localhost\"\n", BASIC);
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        let err = config.server_addr().unwrap_err();
        assert!(matches!(err, PageError::InvalidConfigValueError { ref field, .. } if field == "server.host"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_duplicate_animation_slot_is_rejected() {
        let toml_content = format!(
            "{}\n[[animations]]\nslot = \"hero\"\nurl = \"https://assets.example.com/other.json\"\n",
            BASIC
        );
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.animations.len(), 2);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("animations[1].slot"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_distinct_animation_slots_are_accepted() {
        let toml_content = format!(
            "{}\n[[animations]]\nslot = \"contact\"\nurl = \"https://assets.example.com/mail.json\"\n",
            BASIC
        );
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_style_values_cannot_close_the_stylesheet() {
        let toml_content = format!(
            "{}\n[style]\nfont_family = \"serif</style><script>alert(1)</script>\"\n",
            BASIC
        );
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("style.font_family"));

        let toml_content = format!("{}\n[style]\naccent_color = \"red; color: blue\"\n", BASIC);
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = format!("{}\n[style]\naccent_color = \"#0044cc\"\n", BASIC);
        let config = SiteConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file_sets_base_dir() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = SiteConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.profile.name, "Jane Doe");
        assert_eq!(config.base_dir, temp_file.path().parent().unwrap());
    }
}

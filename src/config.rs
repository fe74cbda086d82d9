use anyhow::Result;
use config::{Config, File};
use directories::ProjectDirs;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Theme {
    pub bg: String,      // background
    pub main: String,    // brand color (headers, cursor highlights)
    pub text: String,    // primary text
    pub sub: String,     // secondary text, unpicked tiles
    #[serde(alias = "subAlt")]
    pub sub_alt: String, // subtle UI elements (footer, borders, used tiles)
    pub correct: String, // right-answer feedback
    pub error: String,   // wrong-answer feedback
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: "#20273a".to_string(),
            main: "#f2b63c".to_string(),
            text: "#e8e6df".to_string(),
            sub: "#6d7284".to_string(),
            sub_alt: "#3a4155".to_string(),
            correct: "#7bc275".to_string(),
            error: "#d4596a".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub theme: Theme,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let defaults = Theme::default();

        let mut builder = Config::builder()
            .set_default("theme.bg", defaults.bg)?
            .set_default("theme.main", defaults.main)?
            .set_default("theme.text", defaults.text)?
            .set_default("theme.sub", defaults.sub)?
            .set_default("theme.subAlt", defaults.sub_alt)?
            .set_default("theme.correct", defaults.correct)?
            .set_default("theme.error", defaults.error)?;

        if let Some(proj_dirs) = ProjectDirs::from("", "", "letra") {
            let config_path = proj_dirs.config_dir().join("config.toml");
            if config_path.exists() {
                builder = builder.add_source(File::from(config_path));
            }
        }

        let cfg = builder.build()?;
        let app_config: AppConfig = cfg.try_deserialize()?;
        Ok(app_config)
    }
}

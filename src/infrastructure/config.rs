use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub profile: String,
    pub static_dir: String,
    pub seed_demo: bool,
}

impl Config {
    /// Load from the process environment. `profile` (from `--profile`) wins over `PROFILE`.
    pub fn from_env(profile: Option<String>) -> Self {
        Self::from_lookup(profile, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(profile: Option<String>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let profile = profile
            .or_else(|| lookup("PROFILE"))
            .unwrap_or_else(|| "default".to_string());

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| {
            if profile == "default" {
                "sqlite://readlog.db?mode=rwc".to_string()
            } else {
                format!("sqlite://readlog_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            seed_demo: lookup("SEED_DEMO").is_some(),
            profile,
        }
    }
}

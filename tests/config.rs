#[cfg(test)]
mod tests {
    use habsync::api::habitica::{HabiticaConfig, DEFAULT_API_URL};
    use habsync::libs::config::Config;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Test context to ensure a clean environment for the config file test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        user_id: String,
        api_key: String,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                user_id: "7c3d0556-3f7e-4d22-9b3f-35a9ee7ec207".to_string(),
                api_key: "a0534b21-6a3c-4272-a293-0271d9e9a93c".to_string(),
                api_url: "https://habitica.example.com/api/v3".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.habitica.is_none());
    }

    // File IO lives in one test so the HOME override cannot race with
    // other tests in this binary.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(ctx: &mut ConfigTestContext) {
        // No file yet: read() falls back to the default configuration
        let config = Config::read().unwrap();
        assert!(config.habitica.is_none());

        // Save and read back
        let config = Config {
            habitica: Some(HabiticaConfig {
                user_id: ctx.user_id.clone(),
                api_key: ctx.api_key.clone(),
                api_url: ctx.api_url.clone(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let habitica = read_config.habitica.unwrap();
        assert_eq!(habitica.user_id, ctx.user_id);
        assert_eq!(habitica.api_key, ctx.api_key);
        assert_eq!(habitica.api_url, ctx.api_url);

        // Delete reports whether a file was actually removed
        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
        assert!(Config::read().unwrap().habitica.is_none());
    }

    #[test]
    fn test_default_habitica_config() {
        let habitica = HabiticaConfig::default();
        assert!(habitica.user_id.is_empty());
        assert!(habitica.api_key.is_empty());
        assert_eq!(habitica.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_api_url_defaults_when_absent_from_file() {
        let habitica: HabiticaConfig =
            serde_json::from_str(r#"{"user_id": "u", "api_key": "k"}"#).unwrap();
        assert_eq!(habitica.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_is_configured_requires_both_credentials() {
        let mut habitica = HabiticaConfig::default();
        assert!(!habitica.is_configured());

        habitica.user_id = "user".to_string();
        assert!(!habitica.is_configured());

        habitica.api_key = "key".to_string();
        assert!(habitica.is_configured());
    }

    // Both halves live in one test because the variables are process-global.
    #[test]
    fn test_env_overrides() {
        let file_config = HabiticaConfig {
            user_id: "file-user".to_string(),
            api_key: "file-key".to_string(),
            api_url: "https://file.example.com/api/v3".to_string(),
        };

        // With none of the variables set, the file values survive
        std::env::remove_var("HABSYNC_USER_ID");
        std::env::remove_var("HABSYNC_API_KEY");
        std::env::remove_var("HABSYNC_API_URL");

        let mut habitica = file_config.clone();
        habitica.apply_env_overrides();
        assert_eq!(habitica.user_id, "file-user");
        assert_eq!(habitica.api_url, "https://file.example.com/api/v3");

        // Set variables take precedence over the file values
        std::env::set_var("HABSYNC_USER_ID", "env-user");
        std::env::set_var("HABSYNC_API_KEY", "env-key");
        std::env::set_var("HABSYNC_API_URL", "https://env.example.com/api/v3");

        let mut habitica = file_config.clone();
        habitica.apply_env_overrides();

        std::env::remove_var("HABSYNC_USER_ID");
        std::env::remove_var("HABSYNC_API_KEY");
        std::env::remove_var("HABSYNC_API_URL");

        assert_eq!(habitica.user_id, "env-user");
        assert_eq!(habitica.api_key, "env-key");
        assert_eq!(habitica.api_url, "https://env.example.com/api/v3");
    }
}

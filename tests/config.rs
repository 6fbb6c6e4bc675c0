#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::config::{Config, TagConfig, DEFAULT_TAG_PRESETS};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn read_without_a_file_falls_back_to_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tag_presets(), DEFAULT_TAG_PRESETS.map(String::from).to_vec());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            tags: Some(TagConfig {
                presets: vec!["Work".to_string(), "Garden".to_string()],
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.tag_presets(), vec!["Work".to_string(), "Garden".to_string()]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn delete_removes_the_file(_ctx: &mut ConfigTestContext) {
        Config::default().save().unwrap();
        Config::delete().unwrap();

        // Back to defaults once the file is gone
        assert_eq!(Config::read().unwrap(), Config::default());

        // Deleting again is a no-op
        Config::delete().unwrap();
    }
}

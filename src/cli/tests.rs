#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::LLMProvider;
    use clap::Parser;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["owlscout"]);

        assert!(args.config.is_none());
        assert!(args.project_id.is_none());
        assert!(args.llm_provider.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_parse_flags() {
        let args = Args::parse_from([
            "owlscout",
            "--project-id",
            "my-project",
            "--llm-provider",
            "anthropic",
            "--model",
            "claude-3-5-sonnet-latest",
            "--temperature",
            "0.0",
            "--verbose",
        ]);

        assert_eq!(args.project_id.as_deref(), Some("my-project"));
        assert_eq!(args.llm_provider.as_deref(), Some("anthropic"));
        assert_eq!(args.model.as_deref(), Some("claude-3-5-sonnet-latest"));
        assert_eq!(args.temperature, Some(0.0));
        assert!(args.verbose);
    }

    #[test]
    fn test_into_config_applies_overrides() {
        let args = Args::parse_from([
            "owlscout",
            "--project-id",
            "my-project",
            "--llm-provider",
            "ollama",
            "--llm-api-key",
            "sk-123",
            "--llm-api-base-url",
            "http://localhost:11434",
            "--max-tokens",
            "2048",
            "--warehouse-token",
            "ya29.abc",
        ]);

        let config = args.into_config();

        assert_eq!(config.llm.provider, LLMProvider::Ollama);
        assert_eq!(config.llm.api_key, "sk-123");
        assert_eq!(config.llm.api_base_url, "http://localhost:11434");
        assert_eq!(config.llm.max_tokens, 2048);
        assert_eq!(config.warehouse.project_id, "my-project");
        assert_eq!(config.warehouse.access_token, "ya29.abc");
    }

    #[test]
    fn test_into_config_keeps_default_provider_on_unknown_value() {
        let args = Args::parse_from(["owlscout", "--llm-provider", "nonsense"]);
        let config = args.into_config();
        assert_eq!(config.llm.provider, LLMProvider::OpenRouter);
    }

    #[test]
    fn test_into_config_without_flags_uses_defaults() {
        let args = Args::parse_from(["owlscout"]);
        let config = args.into_config();

        assert_eq!(config.llm.temperature, 0.0);
        assert_eq!(config.llm.retry_attempts, 1);
        assert!(!config.verbose);
    }
}

//! Tests for [`relay_bot::BotConfig::load`]: startup config from env.
//! Env is process-global, so every test is `#[serial]`.

use relay_bot::BotConfig;
use relay_core::ErrorKind;
use relay_handlers::FailureStyle;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "LLM_PROVIDER",
    "LLM_API_KEY",
    "DEEPSEEK_API_KEY",
    "OPENAI_API_KEY",
    "LLM_BASE_URL",
    "OPENAI_BASE_URL",
    "MODEL",
    "LLM_MODEL",
    "LLM_TEMPERATURE",
    "LLM_MAX_TOKENS",
    "LLM_TIMEOUT_SECS",
    "LLM_SYSTEM_PROMPT",
    "SYSTEM_PROMPT",
    "RELAY_ERROR_DETAIL",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

/// **Test: TELEGRAM_TOKEN + DEEPSEEK_API_KEY alone give a DeepSeek config with defaults.**
#[test]
#[serial]
fn test_load_minimal_deepseek() {
    clear_env();
    env::set_var("TELEGRAM_TOKEN", "123:abc");
    env::set_var("DEEPSEEK_API_KEY", "sk-test");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.telegram.bot_token, "123:abc");
    assert_eq!(config.llm.api_key, "sk-test");
    assert_eq!(config.llm.base_url, "https://api.deepseek.com/v1");
    assert_eq!(config.llm.model, "deepseek-chat");
    assert_eq!(config.llm.temperature, Some(0.7));
    assert_eq!(config.llm.max_tokens, Some(2000));
    assert_eq!(config.failure_style, FailureStyle::Detailed);

    clear_env();
}

/// **Test: Missing API key stops startup with an error naming the variable.**
#[test]
#[serial]
fn test_load_without_api_key_fails() {
    clear_env();
    env::set_var("BOT_TOKEN", "123:abc");

    let err = BotConfig::load(None).unwrap_err();
    assert!(err.to_string().contains("DEEPSEEK_API_KEY"), "{err}");

    clear_env();
}

/// **Test: Every startup failure is classified as a configuration error.**
#[test]
#[serial]
fn test_load_errors_are_configuration_kind() {
    clear_env();
    env::set_var("BOT_TOKEN", "123:abc");
    assert_eq!(
        BotConfig::load(None).unwrap_err().kind(),
        ErrorKind::Configuration
    );

    env::set_var("DEEPSEEK_API_KEY", "sk-test");
    env::set_var("RELAY_ERROR_DETAIL", "everything");
    assert_eq!(
        BotConfig::load(None).unwrap_err().kind(),
        ErrorKind::Configuration
    );

    clear_env();
    env::set_var("DEEPSEEK_API_KEY", "sk-test");
    assert_eq!(
        BotConfig::load(None).unwrap_err().kind(),
        ErrorKind::Configuration
    );

    clear_env();
}

/// **Test: Missing Telegram token stops startup.**
#[test]
#[serial]
fn test_load_without_token_fails() {
    clear_env();
    env::set_var("DEEPSEEK_API_KEY", "sk-test");

    assert!(BotConfig::load(None).is_err());
    assert!(BotConfig::load(Some("123:cli".to_string())).is_ok());

    clear_env();
}

/// **Test: RELAY_ERROR_DETAIL selects the failure style; bad values fail.**
#[test]
#[serial]
fn test_load_failure_style() {
    clear_env();
    env::set_var("BOT_TOKEN", "123:abc");
    env::set_var("DEEPSEEK_API_KEY", "sk-test");

    env::set_var("RELAY_ERROR_DETAIL", "sanitized");
    assert_eq!(
        BotConfig::load(None).unwrap().failure_style,
        FailureStyle::Sanitized
    );

    env::set_var("RELAY_ERROR_DETAIL", "everything");
    assert!(BotConfig::load(None).is_err());

    clear_env();
}

/// **Test: Invalid numeric settings and URLs fail at load time, not on first message.**
#[test]
#[serial]
fn test_load_rejects_invalid_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "123:abc");
    env::set_var("DEEPSEEK_API_KEY", "sk-test");

    env::set_var("LLM_MAX_TOKENS", "lots");
    assert!(BotConfig::load(None).is_err());
    env::remove_var("LLM_MAX_TOKENS");

    env::set_var("TELEGRAM_API_URL", "::not a url::");
    assert!(BotConfig::load(None).is_err());

    clear_env();
}

//! Unit tests for [`openai_client::mask_token`].
//!
//! API keys are masked for safe logging: first 7 chars + `***` + last 4 chars.
//! Keys of length ≤ 11 are fully masked as `***`.

use openai_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("a"), "***");
    assert_eq!(mask_token("sk-12345"), "***");
    assert_eq!(mask_token("sk-deepsee"), "***");
}

/// **Test: A typical DeepSeek key keeps only its prefix and last 4 characters.**
#[test]
fn mask_token_deepseek_key() {
    let key = "sk-0123456789abcdef0123456789abcdef";
    let masked = mask_token(key);
    assert_eq!(masked, "sk-0123***cdef");
    assert!(!masked.contains("89ab"));
}

/// **Test: Non-ASCII input is masked on char boundaries instead of panicking.**
#[test]
fn mask_token_non_ascii_does_not_panic() {
    let masked = mask_token("密钥密钥密钥密钥密钥密钥");
    assert_eq!(masked, "密钥密钥密钥密***密钥密钥");
}

/// Default Groq API URL
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model used for every portfolio chat completion
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Sampling temperature used for every portfolio chat completion
pub const DEFAULT_TEMPERATURE: f64 = 0.6;

/// Normalize API URL by ensuring it has the correct path for OpenAI-compatible endpoints
pub fn normalize_api_url(url: &str) -> String {
    let url = url.trim();

    // Only the path counts; a host such as `chat.example` is still a bare base URL
    let has_endpoint_path = match reqwest::Url::parse(url) {
        Ok(parsed) => parsed.path().contains("/completions") || parsed.path().contains("/chat"),
        Err(_) => url.contains("/completions") || url.contains("/chat"),
    };
    if has_endpoint_path {
        return url.to_string();
    }

    if url.ends_with('/') {
        format!("{}v1/chat/completions", url)
    } else {
        format!("{}/v1/chat/completions", url)
    }
}

/// Shorten an API key for logs: first ten characters followed by `***`
pub fn redact_api_key(api_key: &str) -> String {
    if api_key.is_empty() {
        return "<none>".to_string();
    }
    format!("{}***", api_key.chars().take(10).collect::<String>())
}

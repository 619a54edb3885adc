//! Fixed texts the widget ships with

/// Relay endpoint, overridable at build time with `CHAT_API_URL`
pub const CHAT_API_URL: &str = match option_env!("CHAT_API_URL") {
    Some(url) => url,
    None => "https://api-ahmad.tubsamy.tech/api/chat",
};

/// First system message: how the assistant must behave
pub const SYSTEM_INSTRUCTIONS: &str = "You are an AI assistant for the portfolio website of Ahmad Tazusyarofi (a web developer). Your knowledge about Ahmad comes ONLY from this description and from what is visible on the website itself. Do NOT make up facts. If you do not know something, clearly say that you don't know and suggest the user to contact Ahmad via the contact section.";

/// Second system message: static profile of the site owner.
/// Edit the asset when the portfolio content changes.
pub const PROFILE_KNOWLEDGE: &str = include_str!("../assets/profile_knowledge.txt");

/// Assistant message every transcript starts with
pub const GREETING: &str = "Hi! Aku AI assistant Ahmad Tazusyarofi. Ada yang bisa aku bantu?";

/// Shown when the relay answered but without a `reply`
pub const MISSING_REPLY_FALLBACK: &str = "Maaf, terjadi kesalahan saat memproses pesanmu.";

/// Shown when the relay could not be reached or returned an error
pub const CONNECTION_FALLBACK: &str =
    "Maaf, aku tidak bisa terhubung ke server sekarang. Coba lagi beberapa saat lagi.";

/// Typing indicator label while a reply is pending
pub const TYPING_LABEL: &str = "Mengetik...";

pub const PANEL_TITLE: &str = "Assistant AI";
pub const INPUT_PLACEHOLDER: &str = "Tanyakan apa saja...";
pub const SEND_LABEL: &str = "Kirim";

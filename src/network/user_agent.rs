//! User agent generation

use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a random but realistic user agent string
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();

    let chrome_versions = ["120.0.0.0", "121.0.0.0", "122.0.0.0", "123.0.0.0", "124.0.0.0"];
    let firefox_versions = ["121.0", "122.0", "123.0", "124.0"];

    let os_strings = [
        "Windows NT 10.0; Win64; x64",
        "Macintosh; Intel Mac OS X 10_15_7",
        "X11; Linux x86_64",
    ];

    let os = os_strings.choose(&mut rng).unwrap();

    if rng.gen_range(0..10) < 7 {
        let chrome = chrome_versions.choose(&mut rng).unwrap();
        format!(
            "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
            os, chrome
        )
    } else {
        let firefox = firefox_versions.choose(&mut rng).unwrap();
        format!(
            "Mozilla/5.0 ({}; rv:{}) Gecko/20100101 Firefox/{}",
            os, firefox, firefox
        )
    }
}

/// Standard accept header for HTML requests
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8"
}

/// Standard accept-language header
pub fn accept_language(lang: &str) -> String {
    if lang == "all" || lang.is_empty() {
        "en-US,en;q=0.9".to_string()
    } else {
        format!("{},en-US;q=0.9,en;q=0.8", lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_agent() {
        let ua = generate_user_agent();
        assert!(ua.starts_with("Mozilla/5.0"));
        assert!(ua.len() > 50);
    }

    #[test]
    fn test_accept_language_fallback() {
        assert_eq!(accept_language(""), "en-US,en;q=0.9");
        assert_eq!(accept_language("de"), "de,en-US;q=0.9,en;q=0.8");
    }
}

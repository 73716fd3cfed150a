use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Stick draws allowed per calendar day in a session.
pub const DAILY_DRAW_QUOTA: u32 = 3;

/// Longest caption accepted by the wallpaper renderer, in characters.
pub const MAX_CAPTION_CHARS: usize = 20;

/// Decorative points scattered over every wallpaper.
pub const WALLPAPER_STAR_COUNT: usize = 100;

pub const SIGN_REVEAL_DELAY: Duration = Duration::from_millis(800);
pub const FORTUNE_REVEAL_DELAY: Duration = Duration::from_millis(1000);
pub const MATCH_REVEAL_DELAY: Duration = Duration::from_millis(1500);
pub const STICK_REVEAL_DELAY: Duration = Duration::from_millis(1000);

pub const EMBEDDED_ZODIAC: &str = include_str!("../data/zodiac.json");
pub const EMBEDDED_STICKS: &str = include_str!("../data/sticks.json");
pub const EMBEDDED_TEXTS: &str = include_str!("../data/texts.json");

pub fn data_files() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("zodiac", "zodiac.json"),
        ("sticks", "sticks.json"),
        ("texts", "texts.json"),
    ])
}

pub fn embedded_data(name: &str) -> Option<&'static str> {
    match name {
        "zodiac" => Some(EMBEDDED_ZODIAC),
        "sticks" => Some(EMBEDDED_STICKS),
        "texts" => Some(EMBEDDED_TEXTS),
        _ => None,
    }
}

pub fn default_output_dir() -> PathBuf {
    if let Some(pictures) = dirs::picture_dir() {
        pictures.join("zodiac-almanac")
    } else {
        PathBuf::from("zodiac-wallpapers")
    }
}

use carousel::{Card, Deck, DeckError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_TITLE: &str = "Infinite Card Slider";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CardConfig {
    pub id: u32,
    pub image: String,
}

impl From<&CardConfig> for Card {
    fn from(cfg: &CardConfig) -> Self {
        Card::new(cfg.id, cfg.image.clone())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            cards: (1..=3)
                .map(|id| CardConfig {
                    id,
                    image: format!("images/card{id}.svg"),
                })
                .collect(),
        }
    }
}

impl Config {
    pub fn deck(&self) -> Result<Deck, DeckError> {
        Deck::new(self.cards.iter().map(Card::from).collect())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid card list: {0}")]
    Deck(#[from] DeckError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "troia", "slider").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join("config.toml"))
}

fn build(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    let s = builder
        .add_source(config::Environment::with_prefix("SLIDER"))
        .build()?;
    Ok(s.try_deserialize()?)
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;
    build(
        config::Config::builder().add_source(config::File::from(config_path).required(false)),
    )
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    build(
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml)),
    )
}

/// Loads the user's config, writing the bundled one on first run. Anything
/// unusable falls back to the built-in deck so the window always has cards.
pub fn load_or_setup() -> (Config, Deck) {
    if let Ok(path) = get_config_path()
        && !path.exists()
    {
        match write_default_config() {
            Ok(path) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => log::error!("Failed to write default config: {}", e),
        }
    }

    match load_config().and_then(|c| Ok((c.deck()?, c))) {
        Ok((deck, config)) => (config, deck),
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            fallback()
        }
    }
}

fn fallback() -> (Config, Deck) {
    let config = Config::default();
    let deck = config.deck().expect("built-in card list has unique ids");
    (config, deck)
}

/// Resolves a card image against the config directory unless it is absolute.
pub fn resolve_image_path(image: &str, config_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(image);
    match config_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    let dir = get_config_dir()?;

    fs_err::create_dir_all(dir.join("images"))?;
    for (name, svg) in BUNDLED_IMAGES {
        let image_path = dir.join("images").join(name);
        if !image_path.exists() {
            fs_err::write(&image_path, svg)?;
        }
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

const BUNDLED_IMAGES: [(&str, &str); 3] = [
    ("card1.svg", include_str!("../assets/card1.svg")),
    ("card2.svg", include_str!("../assets/card2.svg")),
    ("card3.svg", include_str!("../assets/card3.svg")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_matches_builtin() {
        let parsed = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, Config::default());
        assert_eq!(parsed.deck().unwrap().len(), 3);
    }

    #[test]
    fn test_title_defaults_when_missing() {
        let parsed = parse_config(
            r#"
[[cards]]
id = 9
image = "/srv/nine.png"
"#,
        )
        .unwrap();
        assert_eq!(parsed.title, DEFAULT_TITLE);
        assert_eq!(parsed.cards[0].image, "/srv/nine.png");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let parsed = parse_config(
            r#"
[[cards]]
id = 1
image = "a.svg"

[[cards]]
id = 1
image = "b.svg"
"#,
        )
        .unwrap();
        assert!(matches!(
            parsed.deck(),
            Err(DeckError::DuplicateId(id)) if u32::from(id) == 1
        ));
    }

    #[test]
    fn test_empty_config_has_no_deck() {
        let parsed = parse_config("").unwrap();
        assert_eq!(parsed.deck(), Err(DeckError::Empty));
    }

    #[test]
    fn test_card_config_json() {
        let card: CardConfig =
            serde_json::from_str(r#"{ "id": 2, "image": "images/card2.svg" }"#).unwrap();
        assert_eq!(Card::from(&card), Card::new(2, "images/card2.svg"));
    }

    #[test]
    fn test_resolve_image_path() {
        let dir = Path::new("/home/u/.config/slider");
        assert_eq!(
            resolve_image_path("images/card1.svg", Some(dir)),
            dir.join("images/card1.svg")
        );
        assert_eq!(
            resolve_image_path("/abs/card.svg", Some(dir)),
            PathBuf::from("/abs/card.svg")
        );
        assert_eq!(resolve_image_path("card.svg", None), PathBuf::from("card.svg"));
    }
}

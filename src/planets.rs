//! Adoptable planet catalog

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Presentation data for an adoptable planet
///
/// Field names match the stored JSON so the photo view can read it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub year_length_days: f64,
    pub distance_label: String,
    pub temperature: String,
    pub description: String,
    pub image_url: String,
}

/// Static catalog entry
struct PlanetEntry {
    name: &'static str,
    kind: &'static str,
    year_length_days: f64,
    distance_label: &'static str,
    temperature: &'static str,
    description: &'static str,
    image_url: &'static str,
    video_id: &'static str,
}

impl PlanetEntry {
    fn to_planet(&self) -> Planet {
        Planet {
            name: self.name.to_string(),
            kind: self.kind.to_string(),
            year_length_days: self.year_length_days,
            distance_label: self.distance_label.to_string(),
            temperature: self.temperature.to_string(),
            description: self.description.to_string(),
            image_url: self.image_url.to_string(),
        }
    }
}

static PLANETS: [PlanetEntry; 4] = [
    PlanetEntry {
        name: "Earth",
        kind: "Terrestrial planet",
        year_length_days: 365.25,
        distance_label: "1 AU from the Sun (~150 million km)",
        temperature: "Average ~15 °C at the surface",
        description: "The only known world with liquid surface water and life. It already has a growing cloud of artificial satellites and debris in orbit.",
        image_url: "/planet-fallback.png",
        video_id: "uAwTWAC0vt0",
    },
    PlanetEntry {
        name: "Mars",
        kind: "Terrestrial planet",
        year_length_days: 687.0,
        distance_label: "1.52 AU from the Sun (~228 million km)",
        temperature: "Cold and dry, around −60 °C on average",
        description: "A dusty desert world with the largest volcano and canyon in the Solar System. Future crewed missions will have to worry about both Mars dust and Earth-made space junk.",
        image_url: "/mars.png",
        video_id: "Ruo_uZHeLls",
    },
    PlanetEntry {
        name: "Jupiter",
        kind: "Gas giant",
        year_length_days: 4333.0,
        distance_label: "5.2 AU from the Sun (~778 million km)",
        temperature: "Cloud tops around −110 °C",
        description: "The largest planet in the Solar System, with huge radiation belts and dozens of moons. Its strong gravity can fling comets and asteroids around like a cosmic pinball machine.",
        image_url: "/jupiter.png",
        video_id: "43CsIpzkF0c",
    },
    PlanetEntry {
        name: "Saturn",
        kind: "Gas giant with rings",
        year_length_days: 10759.0,
        distance_label: "9.5 AU from the Sun (~1.4 billion km)",
        temperature: "Upper atmosphere around −140 °C",
        description: "A gas giant famous for its bright rings, made of countless icy particles. Any long-lived missions here must carefully thread through natural and artificial debris.",
        image_url: "/saturn.png",
        video_id: "wXr6yUDTUsA",
    },
];

/// Image shown when no planet has been adopted
pub const FALLBACK_IMAGE_URL: &str = "/planet-fallback.png";

/// Source of planets to adopt
pub trait PlanetProvider {
    /// Pick a planet, avoiding `exclude` by name when another one exists
    fn random_planet(&mut self, exclude: Option<&str>) -> Planet;
}

/// The built-in catalog, sampled with a seeded RNG
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    rng: R,
}

impl<R: Rng> Catalog<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PlanetProvider for Catalog<R> {
    fn random_planet(&mut self, exclude: Option<&str>) -> Planet {
        let pool: Vec<&PlanetEntry> = match exclude {
            Some(name) if PLANETS.len() > 1 => {
                PLANETS.iter().filter(|p| p.name != name).collect()
            }
            _ => PLANETS.iter().collect(),
        };
        let idx = self.rng.random_range(0..pool.len());
        pool[idx].to_planet()
    }
}

/// Every planet in the catalog, in catalog order
pub fn all_planets() -> Vec<Planet> {
    PLANETS.iter().map(PlanetEntry::to_planet).collect()
}

/// YouTube video id for a planet's explainer clip
pub fn video_id(name: &str) -> Option<&'static str> {
    PLANETS.iter().find(|p| p.name == name).map(|p| p.video_id)
}

//! Mission photo captions
//!
//! Text and file naming for the mission photo. Capturing and compositing the
//! camera frame are left to the browser.

use crate::planets::{FALLBACK_IMAGE_URL, Planet};

pub const SUBTITLE: &str = "Planet Learned and Orbit Stabilized";

/// "Guardian of ..." caption line
pub fn title(planet: Option<&Planet>) -> String {
    let name = planet.map(|p| p.name.as_str()).unwrap_or("Your Planet");
    format!("Guardian of {}", name)
}

pub fn overlay_image(planet: Option<&Planet>) -> &str {
    planet.map(|p| p.image_url.as_str()).unwrap_or(FALLBACK_IMAGE_URL)
}

/// Download name, e.g. "mission_guardian_mars.png"
pub fn download_file_name(planet: Option<&Planet>) -> String {
    let name = planet.map(|p| p.name.as_str()).unwrap_or("planet");
    let safe = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    format!("mission_guardian_{}.png", safe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planets::all_planets;

    #[test]
    fn test_captions_and_names() {
        let saturn = all_planets().remove(3);
        assert_eq!(title(Some(&saturn)), "Guardian of Saturn");
        assert_eq!(title(None), "Guardian of Your Planet");
        assert_eq!(download_file_name(Some(&saturn)), "mission_guardian_saturn.png");
        assert_eq!(download_file_name(None), "mission_guardian_planet.png");
        assert_eq!(overlay_image(None), "/planet-fallback.png");

        let mut custom = saturn.clone();
        custom.name = "New  Earth Two".to_string();
        assert_eq!(download_file_name(Some(&custom)), "mission_guardian_new_earth_two.png");
    }
}

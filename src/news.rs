//! Debris briefing content
//!
//! All figures are simulated from public ESA/NASA numbers; nothing is fetched.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Headline statistics for the briefing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebrisStats {
    pub total_objects: u64,
    pub mass_tons: u64,
    pub small_fragments_estimate: u64,
    pub updated: String,
}

impl Default for DebrisStats {
    fn default() -> Self {
        Self {
            total_objects: 32_000,
            mass_tons: 6_700,
            small_fragments_estimate: 900_000,
            updated: "Simulated from public ESA/NASA stats · no real data".to_string(),
        }
    }
}

/// The generated front page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Newspaper {
    pub headline: String,
    pub subhead: String,
    pub body: Vec<String>,
}

/// External article linked from the briefing
#[derive(Debug, Clone, Copy)]
pub struct NewsArticle {
    pub id: &'static str,
    pub title: &'static str,
    pub source: &'static str,
    pub date: Option<&'static str>,
    pub url: &'static str,
    pub summary: &'static str,
}

/// External video linked from the briefing
#[derive(Debug, Clone, Copy)]
pub struct NewsVideo {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
    pub note: Option<&'static str>,
}

impl NewsArticle {
    /// "Source · date", or just the source when undated
    pub fn byline(&self) -> String {
        match self.date {
            Some(date) => format!("{} · {}", self.source, date),
            None => self.source.to_string(),
        }
    }
}

const HEADLINES: [&str; 3] = [
    "ORBITAL TRAFFIC JAM ABOVE EARTH",
    "SILENT STORM OF SPACE JUNK",
    "EARTH'S INVISIBLE TRASH RING GROWS",
];

const BODY: [&str; 3] = [
    "Space agencies around the world are sounding the alarm about orbital debris. Traveling at speeds over 7 km/s, even tiny fragments can damage satellites or threaten crewed missions.",
    "Without better cleanup strategies and smarter mission design, the risk of cascading collisions — sometimes called the Kessler Syndrome — continues to rise.",
    "Your mission today: learn about the problem, then help clean up a simulated orbit to protect your adopted world.",
];

/// Featured story shown above the reading list
pub const LEAD_ARTICLE: NewsArticle = NewsArticle {
    id: "fox-china",
    title: "Chinese astronauts stranded after suspected debris strike on return capsule",
    source: "Fox News",
    date: Some("Nov 6, 2025"),
    url: "https://www.foxnews.com/world/chinese-astronauts-stranded-space-after-debris-strikes-return-capsule-during-mission",
    summary: "A crew on China’s Tiangong space station had their return delayed while engineers assess damage believed to be caused by tiny fragments of orbital debris.",
};

pub const ARTICLES: [NewsArticle; 3] = [
    NewsArticle {
        id: "express-threat",
        title: "Space junk flying at tens of thousands of mph is a genuine threat to life on Earth",
        source: "Daily Express",
        date: Some("Feb 1, 2025"),
        url: "https://www.the-express.com/news/space-news/162170/space-junk-threat-warning-life-of-earth-expert",
        summary: "A space-physics expert warns that growing clouds of space debris increase the risk of dangerous re-entries and calls on launch providers to take more responsibility.",
    },
    NewsArticle {
        id: "bbc-space-junk",
        title: "BBC space junk coverage and orbital traffic reports",
        source: "BBC News – Space junk topic",
        date: None,
        url: "https://www.bbc.com/news/topics/c5y9wr365gmt",
        summary: "A collection of BBC reporting on how broken satellites and rocket parts are cluttering orbit and raising collision risks.",
    },
    NewsArticle {
        id: "sun-balloon",
        title: "NASA ‘space junk’ balloon winds up on Texas farm",
        source: "The Sun",
        date: None,
        url: "https://www.the-sun.com/tech/15328023/nasa-space-junk-balloon-texas-farm/",
        summary: "An experimental NASA balloon linked to space or atmospheric research ended up on a farm in Texas, illustrating how hardware can unexpectedly return to Earth.",
    },
];

pub const VIDEOS: [NewsVideo; 2] = [
    NewsVideo {
        id: "4GHalpMJ5mQ",
        title: "Space junk explainer (YouTube video)",
        url: "https://www.youtube.com/watch?v=4GHalpMJ5mQ",
        note: Some("Short video overview of how space junk forms and why it’s hard to clean up."),
    },
    NewsVideo {
        id: "31OgUc7OwOM",
        title: "Space debris and satellite risks (YouTube video)",
        url: "https://www.youtube.com/watch?v=31OgUc7OwOM",
        note: Some("Video segment discussing how debris clouds threaten satellites and human spaceflight."),
    },
];

/// Format an integer with thousands separators (32000 -> "32,000")
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Build a front page; headline and subhead share one random index
pub fn generate_newspaper<R: Rng>(stats: &DebrisStats, rng: &mut R) -> Newspaper {
    let subheads = [
        format!(
            "Over {} tracked fragments and an estimated {} tiny pieces now crowd low Earth orbit.",
            group_thousands(stats.total_objects),
            group_thousands(stats.small_fragments_estimate)
        ),
        format!(
            "Scientists estimate more than {} tons of debris circling the planet at deadly speeds.",
            group_thousands(stats.mass_tons)
        ),
        "From paint chips to defunct satellites, space junk threatens future missions and communications."
            .to_string(),
    ];

    let idx = rng.random_range(0..HEADLINES.len());
    Newspaper {
        headline: HEADLINES[idx].to_string(),
        subhead: subheads[idx].clone(),
        body: BODY.iter().map(|s| s.to_string()).collect(),
    }
}

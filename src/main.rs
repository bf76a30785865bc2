//! Orbit Guardian entry point
//!
//! Handles platform-specific initialization and wires the page to the
//! mission session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, MouseEvent};

    use orbit_guardian::news::{
        ARTICLES, DebrisStats, LEAD_ARTICLE, NewsArticle, VIDEOS, generate_newspaper,
        group_thousands,
    };
    use orbit_guardian::persistence::LocalStorageStore;
    use orbit_guardian::planets::video_id;
    use orbit_guardian::platform::RafDriver;
    use orbit_guardian::sim::{Debris, MissionState, debris_offset};
    use orbit_guardian::view::{DEBRIS_ID_ATTR, MissionHud, parse_debris_id, sprite_element_id};
    use orbit_guardian::{Catalog, MissionSession, Planet, Settings, photo};

    type WebSession = MissionSession<RafDriver, LocalStorageStore, Catalog<Pcg32>, Pcg32>;

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Fill the briefing page with stats and a generated front page
    fn render_briefing(document: &Document, seed: u64) {
        let stats = DebrisStats::default();
        let paper = generate_newspaper(&stats, &mut Pcg32::seed_from_u64(seed));

        set_text(document, "stat-objects", &group_thousands(stats.total_objects));
        set_text(document, "stat-mass", &group_thousands(stats.mass_tons));
        set_text(document, "stat-fragments", &group_thousands(stats.small_fragments_estimate));
        set_text(document, "stat-updated", &stats.updated);
        set_text(document, "news-headline", &paper.headline);
        set_text(document, "news-subhead", &paper.subhead);

        if let Some(body) = document.get_element_by_id("news-body") {
            body.set_inner_html("");
            for paragraph in &paper.body {
                if let Ok(p) = document.create_element("p") {
                    p.set_text_content(Some(paragraph));
                    let _ = body.append_child(&p);
                }
            }
        }

        if let Some(list) = document.get_element_by_id("news-articles") {
            list.set_inner_html("");
            for article in std::iter::once(&LEAD_ARTICLE).chain(&ARTICLES) {
                if let Some(item) = article_item(document, article) {
                    let _ = list.append_child(&item);
                }
            }
        }

        if let Some(list) = document.get_element_by_id("news-videos") {
            list.set_inner_html("");
            for video in &VIDEOS {
                let Ok(item) = document.create_element("li") else {
                    continue;
                };
                if let Some(link) = external_link(document, video.url, video.title) {
                    let _ = item.append_child(&link);
                }
                if let Some(note) = video.note {
                    append_text(document, &item, "p", note);
                }
                let _ = list.append_child(&item);
            }
        }
    }

    fn external_link(document: &Document, url: &str, text: &str) -> Option<Element> {
        let a = document.create_element("a").ok()?;
        a.set_attribute("href", url).ok()?;
        a.set_attribute("target", "_blank").ok()?;
        a.set_attribute("rel", "noreferrer").ok()?;
        a.set_text_content(Some(text));
        Some(a)
    }

    fn append_text(document: &Document, parent: &Element, tag: &str, text: &str) {
        if let Ok(el) = document.create_element(tag) {
            el.set_text_content(Some(text));
            let _ = parent.append_child(&el);
        }
    }

    fn article_item(document: &Document, article: &NewsArticle) -> Option<Element> {
        let item = document.create_element("li").ok()?;
        item.set_id(&format!("article-{}", article.id));
        item.append_child(&external_link(document, article.url, article.title)?).ok()?;
        append_text(document, &item, "small", &article.byline());
        append_text(document, &item, "p", article.summary);
        Some(item)
    }

    fn render_planet(document: &Document, planet: Option<&Planet>) {
        let Some(planet) = planet else {
            set_text(document, "planet-name", "Loading…");
            return;
        };
        set_text(document, "planet-name", &planet.name);
        set_text(document, "planet-type", &planet.kind);
        set_text(document, "planet-year", &format!("{} Earth days", planet.year_length_days));
        set_text(document, "planet-distance", &planet.distance_label);
        set_text(document, "planet-temperature", &planet.temperature);
        set_text(document, "planet-description", &planet.description);

        if let Some(img) = document.get_element_by_id("planet-image") {
            let _ = img.set_attribute("src", &planet.image_url);
            let _ = img.set_attribute("alt", &planet.name);
        }
        if let Some(frame) = document.get_element_by_id("planet-video") {
            match video_id(&planet.name) {
                Some(id) => {
                    let _ = frame.set_attribute("src", &format!("https://www.youtube.com/embed/{}", id));
                }
                None => {
                    let _ = frame.remove_attribute("src");
                }
            }
        }
    }

    /// Create the element for one piece of debris; clicks reach it through
    /// the layer listener
    fn spawn_sprite(document: &Document, layer: &Element, debris: &Debris) -> Option<Element> {
        let el = document.create_element("button").ok()?;
        el.set_id(&sprite_element_id(debris.id));
        el.set_class_name(&format!("debris debris-{}", debris.sprite.as_str()));
        el.set_attribute(DEBRIS_ID_ATTR, &debris.id.to_string()).ok()?;
        let _ = el.set_attribute("aria-label", debris.sprite.as_str());
        layer.append_child(&el).ok()?;
        Some(el)
    }

    fn render_mission(document: &Document, layer: &Element, state: &MissionState) {
        let hud = MissionHud::from_state(state);
        set_text(document, "status", hud.status);
        set_text(document, "message", hud.message);
        set_text(document, "remaining", &format!("Remaining: {}", hud.remaining));
        set_text(document, "removed", &format!("Removed: {}", hud.removed));
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let _ = btn.toggle_attribute_with_force("disabled", !hud.start_enabled);
        }
        if let Some(btn) = document.get_element_by_id("photo-btn") {
            let _ = btn.toggle_attribute_with_force("disabled", !hud.photo_enabled);
            let _ = btn.set_attribute("title", hud.photo_hint);
        }

        if state.debris.is_empty() {
            layer.set_inner_html("");
            return;
        }

        for debris in &state.debris {
            let existing = document.get_element_by_id(&sprite_element_id(debris.id));
            if debris.removed {
                if let Some(el) = existing {
                    el.remove();
                }
                continue;
            }

            let Some(el) = existing.or_else(|| spawn_sprite(document, layer, debris)) else {
                continue;
            };
            let offset = debris_offset(debris.lane, debris.angle);
            if let Ok(el) = el.dyn_into::<HtmlElement>() {
                let style = el.style();
                let _ = style.set_property("left", &format!("calc(50% + {}px)", offset.x));
                let _ = style.set_property("top", &format!("calc(50% + {}px)", offset.y));
            }
        }
    }

    fn render_adopted(document: &Document, adopted: Option<&Planet>) {
        set_text(document, "photo-title", &photo::title(adopted));
        set_text(document, "photo-subtitle", photo::SUBTITLE);
        if let Some(img) = document.get_element_by_id("photo-planet") {
            let _ = img.set_attribute("src", photo::overlay_image(adopted));
        }
        if let Some(link) = document.get_element_by_id("photo-download") {
            let _ = link.set_attribute("download", &photo::download_file_name(adopted));
        }
    }

    fn setup_button(
        document: &Document,
        id: &str,
        session: Rc<RefCell<WebSession>>,
        action: fn(&Rc<RefCell<WebSession>>),
    ) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| action(&session));
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One listener for every sprite the layer will ever hold
    fn setup_debris_clicks(layer: &Element, session: Weak<RefCell<WebSession>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(sprite) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".debris").ok().flatten())
            else {
                return;
            };
            let Some(id) = sprite
                .get_attribute(DEBRIS_ID_ATTR)
                .as_deref()
                .and_then(parse_debris_id)
            else {
                return;
            };
            if let Some(session) = session.upgrade() {
                MissionSession::click(&session, id);
            }
        });
        let _ = layer.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orbit Guardian starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let seed = js_sys::Date::now() as u64;
        render_briefing(&document, seed);

        let settings = Settings::load();
        let session = MissionSession::new(
            settings.mission_config(),
            RafDriver::new(),
            LocalStorageStore::new(),
            Catalog::new(Pcg32::seed_from_u64(seed.wrapping_add(1))),
            Pcg32::seed_from_u64(seed.wrapping_add(2)),
        )
        .shared();
        log::info!("Session initialized with seed: {}", seed);

        {
            let s = session.borrow();
            render_planet(&document, s.planet());
            render_adopted(&document, s.adopted_planet().as_ref());
        }

        let Some(layer) = document.get_element_by_id("debris-layer") else {
            log::error!("Missing #debris-layer; mission view disabled");
            return;
        };

        setup_debris_clicks(&layer, Rc::downgrade(&session));
        render_mission(&document, &layer, session.borrow().state());

        {
            let document = document.clone();
            let mut shown_planet: Option<String> = None;
            let observer = move |state: &MissionState, planet: Option<&Planet>| {
                let name = planet.map(|p| p.name.clone());
                if name != shown_planet {
                    render_planet(&document, planet);
                    shown_planet = name;
                }
                render_mission(&document, &layer, state);
                if state.is_complete() {
                    render_adopted(&document, planet);
                }
            };
            session.borrow_mut().set_observer(Box::new(observer));
        }

        setup_button(&document, "start-btn", session.clone(), WebSession::start);
        setup_button(&document, "new-planet-btn", session.clone(), WebSession::select_new_planet);

        log::info!("Orbit Guardian running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orbit Guardian (native) starting...");
    log::info!("Native mode runs a scripted mission - run with `trunk serve` for the web version");

    run_scripted_mission();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one mission headlessly at 60 fps, clearing a piece every 6 frames
#[cfg(not(target_arch = "wasm32"))]
fn run_scripted_mission() {
    use orbit_guardian::news::{DebrisStats, generate_newspaper};
    use orbit_guardian::persistence::MemoryStore;
    use orbit_guardian::platform::ManualDriver;
    use orbit_guardian::{Catalog, MissionSession, Settings, photo};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let paper = generate_newspaper(&DebrisStats::default(), &mut Pcg32::seed_from_u64(seed));
    println!("\n{}\n{}\n", paper.headline, paper.subhead);

    let driver = ManualDriver::new();
    let session = MissionSession::new(
        Settings::load().mission_config(),
        driver.clone(),
        MemoryStore::new(),
        Catalog::new(Pcg32::seed_from_u64(seed.wrapping_add(1))),
        Pcg32::seed_from_u64(seed.wrapping_add(2)),
    )
    .shared();

    if let Some(planet) = session.borrow().planet() {
        println!("Adopting {} ({})", planet.name, planet.kind);
    }

    MissionSession::start(&session);

    let mut time = 0.0;
    let mut frame = 0u32;
    let mut next_id = 0u32;
    while driver.fire(time) {
        time += FRAME_MS;
        frame += 1;
        if frame % 6 == 0 {
            MissionSession::click(&session, next_id);
            next_id += 1;
            let s = session.borrow();
            if let Some(message) = s.state().message {
                println!("[{:>3}] {} remaining - {}", frame, s.state().remaining_count(), message.text());
            }
        }
    }

    let s = session.borrow();
    println!("\n{}", s.phase().status_text());
    let adopted = s.adopted_planet();
    println!("{}", photo::title(adopted.as_ref()));
    println!("Photo saved as {}", photo::download_file_name(adopted.as_ref()));
}

//! Mission session
//!
//! Owns the mission state together with its collaborators (frame driver,
//! planet catalog, adopted-planet store, RNG) and runs the animation loop:
//! exactly one frame callback is pending while the mission is playing, and
//! none otherwise.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use rand::Rng;

use crate::persistence::PlanetStore;
use crate::planets::{Planet, PlanetProvider};
use crate::platform::TickDriver;
use crate::sim::{Effect, FrameTimer, GamePhase, MissionConfig, MissionEvent, MissionState, step};

/// Called after every state change with the new state and current planet
pub type FrameObserver = Box<dyn FnMut(&MissionState, Option<&Planet>)>;

pub struct MissionSession<D: TickDriver, S: PlanetStore, P: PlanetProvider, R: Rng> {
    state: MissionState,
    planet: Option<Planet>,
    driver: D,
    store: S,
    provider: P,
    rng: R,
    timer: FrameTimer,
    /// Incremented on every loop stop; callbacks from older loops are ignored
    loop_epoch: u64,
    loop_running: bool,
    observer: Option<FrameObserver>,
}

impl<D, S, P, R> MissionSession<D, S, P, R>
where
    D: TickDriver + 'static,
    S: PlanetStore + 'static,
    P: PlanetProvider + 'static,
    R: Rng + 'static,
{
    /// Create an idle session and pick the first planet
    pub fn new(config: MissionConfig, driver: D, store: S, mut provider: P, rng: R) -> Self {
        let planet = provider.random_planet(None);
        log::info!("Planet ready: {}", planet.name);
        Self {
            state: MissionState::new(config),
            planet: Some(planet),
            driver,
            store,
            provider,
            rng,
            timer: FrameTimer::new(),
            loop_epoch: 0,
            loop_running: false,
            observer: None,
        }
    }

    /// Wrap for use from frame and input callbacks
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    pub fn state(&self) -> &MissionState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn planet(&self) -> Option<&Planet> {
        self.planet.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_loop_running(&self) -> bool {
        self.loop_running
    }

    pub fn set_observer(&mut self, observer: FrameObserver) {
        self.observer = Some(observer);
    }

    /// Planet stored by a completed mission, if any
    pub fn adopted_planet(&self) -> Option<Planet> {
        match self.store.load_adopted() {
            Ok(planet) => planet,
            Err(e) => {
                log::warn!("Could not read adopted planet: {}", e);
                None
            }
        }
    }

    /// "Start cleanup"
    pub fn start(this: &Rc<RefCell<Self>>) {
        Self::dispatch(this, MissionEvent::Start);
    }

    /// Player clicked a debris sprite
    pub fn click(this: &Rc<RefCell<Self>>, id: u32) {
        Self::dispatch(this, MissionEvent::Click { id });
    }

    /// Swap to a different planet and reset the mission
    pub fn select_new_planet(this: &Rc<RefCell<Self>>) {
        Self::dispatch(this, MissionEvent::SelectNewPlanet);
    }

    /// Apply a non-tick event and bring the loop in line with the new phase
    pub fn dispatch(this: &Rc<RefCell<Self>>, event: MissionEvent) {
        let mut session = this.borrow_mut();
        let session = &mut *session;

        if event == MissionEvent::SelectNewPlanet {
            let current = session.planet.as_ref().map(|p| p.name.clone());
            let planet = session.provider.random_planet(current.as_deref());
            log::info!("New planet selected: {}", planet.name);
            session.planet = Some(planet);
        }

        let before = session.state.phase;
        let effects = step(&mut session.state, event, &mut session.rng);
        if session.state.phase != before {
            log::info!(
                "Mission phase {} -> {}",
                before.as_str(),
                session.state.phase.as_str()
            );
        }
        session.perform(&effects);

        if session.state.phase == GamePhase::Playing {
            if !session.loop_running {
                session.schedule_frame(this);
            }
        } else {
            session.stop_loop();
        }
        session.notify();
    }

    fn on_frame(this: &Rc<RefCell<Self>>, epoch: u64, time_ms: f64) {
        let mut session = this.borrow_mut();
        let session = &mut *session;
        if epoch != session.loop_epoch || session.state.phase != GamePhase::Playing {
            return;
        }

        let delta = session.timer.delta_seconds(time_ms);
        step(&mut session.state, MissionEvent::Tick { delta }, &mut session.rng);
        session.notify();
        session.schedule_frame(this);
    }

    fn schedule_frame(&mut self, this: &Rc<RefCell<Self>>) {
        let weak: Weak<RefCell<Self>> = Rc::downgrade(this);
        let epoch = self.loop_epoch;
        self.driver.schedule_next_tick(Box::new(move |time_ms| {
            if let Some(session) = weak.upgrade() {
                Self::on_frame(&session, epoch, time_ms);
            }
        }));
        self.loop_running = true;
    }

    fn perform(&mut self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::Announce(message) => log::info!("{}", message.text()),
                Effect::PersistAdoptedPlanet => self.persist_planet(),
            }
        }
    }

    fn persist_planet(&mut self) {
        let Some(planet) = self.planet.as_ref() else {
            log::warn!("Mission complete with no planet to adopt");
            return;
        };
        match self.store.save_adopted(planet) {
            Ok(()) => log::info!("Adopted planet saved: {}", planet.name),
            Err(e) => log::warn!("Could not save adopted planet: {}", e),
        }
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.state, self.planet.as_ref());
        }
    }
}

impl<D: TickDriver, S: PlanetStore, P: PlanetProvider, R: Rng> MissionSession<D, S, P, R> {
    /// Cancel the pending frame and forget the timing baseline
    fn stop_loop(&mut self) {
        if self.loop_running {
            self.driver.cancel();
            self.loop_running = false;
        }
        self.loop_epoch += 1;
        self.timer.reset();
    }
}

impl<D: TickDriver, S: PlanetStore, P: PlanetProvider, R: Rng> Drop for MissionSession<D, S, P, R> {
    fn drop(&mut self) {
        self.stop_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::planets::Catalog;
    use crate::platform::ManualDriver;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    type TestSession = MissionSession<ManualDriver, MemoryStore, Catalog<Pcg32>, Pcg32>;

    fn session_with(store: MemoryStore) -> (Rc<RefCell<TestSession>>, ManualDriver) {
        let driver = ManualDriver::new();
        let session = MissionSession::new(
            MissionConfig::default(),
            driver.clone(),
            store,
            Catalog::new(Pcg32::seed_from_u64(1)),
            Pcg32::seed_from_u64(2),
        )
        .shared();
        (session, driver)
    }

    fn angles(session: &Rc<RefCell<TestSession>>) -> Vec<f32> {
        session.borrow().state().debris.iter().map(|d| d.angle).collect()
    }

    #[test]
    fn test_idle_session_has_no_loop() {
        let (session, driver) = session_with(MemoryStore::new());
        assert_eq!(session.borrow().phase(), GamePhase::Idle);
        assert!(session.borrow().planet().is_some());
        assert!(!driver.is_pending());
    }

    #[test]
    fn test_loop_runs_while_playing() {
        let (session, driver) = session_with(MemoryStore::new());
        MissionSession::start(&session);
        assert!(driver.is_pending());
        assert_eq!(driver.scheduled(), 1);

        // First frame only sets the baseline
        let start = angles(&session);
        assert!(driver.fire(1000.0));
        assert_eq!(angles(&session), start);
        assert!(driver.is_pending());

        assert!(driver.fire(1500.0));
        let moved = angles(&session);
        for (d, before) in session.borrow().state().debris.iter().zip(&start) {
            let expected = crate::normalize_degrees(before + d.angular_velocity() * 0.5);
            assert!((d.angle - expected).abs() < 1e-3);
        }
        assert_ne!(moved, start);
        assert_eq!(driver.scheduled(), 3);
    }

    #[test]
    fn test_completion_stops_loop_and_persists_once() {
        let (session, driver) = session_with(MemoryStore::new());
        MissionSession::start(&session);
        driver.fire(0.0);

        for id in 0..10 {
            MissionSession::click(&session, id);
            MissionSession::click(&session, id);
        }

        let s = session.borrow();
        assert_eq!(s.phase(), GamePhase::Complete);
        assert_eq!(s.state().removed_count, 10);
        assert_eq!(s.store().writes, 1);
        assert!(!s.is_loop_running());
        assert_eq!(s.adopted_planet().as_ref(), s.planet());
        drop(s);

        assert!(!driver.is_pending());
        assert_eq!(driver.cancelled(), 1);
        assert!(!driver.fire(5000.0));
    }

    #[test]
    fn test_restart_discards_stale_baseline() {
        let (session, driver) = session_with(MemoryStore::new());
        MissionSession::start(&session);
        driver.fire(100.0);
        driver.fire(200.0);
        for id in 0..10 {
            MissionSession::click(&session, id);
        }

        MissionSession::start(&session);
        assert!(driver.is_pending());
        let start = angles(&session);
        // Long after the previous run: still a zero-length first step
        driver.fire(600_000.0);
        assert_eq!(angles(&session), start);
    }

    #[test]
    fn test_select_new_planet_resets() {
        let (session, driver) = session_with(MemoryStore::new());
        let first = session.borrow().planet().map(|p| p.name.clone());

        MissionSession::start(&session);
        MissionSession::click(&session, 3);
        MissionSession::select_new_planet(&session);

        let s = session.borrow();
        assert_eq!(s.phase(), GamePhase::Idle);
        assert!(s.state().debris.is_empty());
        assert_eq!(s.state().removed_count, 0);
        assert_eq!(s.state().message, None);
        assert_ne!(s.planet().map(|p| p.name.clone()), first);
        assert_eq!(s.store().writes, 0);
        drop(s);
        assert!(!driver.is_pending());
    }

    #[test]
    fn test_failed_save_still_completes() {
        let (session, driver) = session_with(MemoryStore::failing());
        MissionSession::start(&session);
        for id in 0..10 {
            MissionSession::click(&session, id);
        }
        assert_eq!(session.borrow().phase(), GamePhase::Complete);
        assert_eq!(session.borrow().adopted_planet(), None);
        assert!(!driver.is_pending());
    }

    #[test]
    fn test_observer_sees_frames() {
        let (session, driver) = session_with(MemoryStore::new());
        let frames = Rc::new(RefCell::new(Vec::new()));
        let seen = frames.clone();
        session
            .borrow_mut()
            .set_observer(Box::new(move |state, _| seen.borrow_mut().push(state.phase)));

        MissionSession::start(&session);
        driver.fire(0.0);
        driver.fire(16.0);
        assert_eq!(*frames.borrow(), vec![GamePhase::Playing; 3]);
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let (session, driver) = session_with(MemoryStore::new());
        MissionSession::start(&session);
        assert!(driver.is_pending());

        drop(session);
        assert!(!driver.is_pending());
        assert_eq!(driver.cancelled(), 1);
    }
}

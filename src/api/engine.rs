//! `TooltipEngine` JavaScript class
//!
//! Wires the tooltip engine to a live MapLibre map: a `setInterval` timer
//! drives the rotation, map `move`/`resize`/`load` events trigger anchor
//! recomputation, and recomputed anchors are installed on the next animation
//! frame. All of it runs on the browser's single thread; callbacks reach the
//! engine through a `Weak` handle and never hold a borrow while calling back
//! into JavaScript.
//!
//! ```js
//! const engine = new TooltipEngine(map, { rotationIntervalMs: 3000 });
//! engine.onChange(() => render(engine.activePoi(), engine.markerFeatures()));
//! engine.start(cities);
//! // on unmount
//! engine.stop();
//! engine.free();
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;

use super::browser::{AnimationFrame, IntervalTimer, MapSubscription};
use super::helpers::{deserialize, describe_js_error, notify, serialize, to_js_error};
use super::map::{JsMapProjector, MapLibreMap, MAP_CHANGE_EVENTS};
use crate::config::EngineConfig;
use crate::data::default_pois;
use crate::engine::{PendingAnchors, TooltipEngine};
use crate::models::{Poi, PoiId};

/// Engine plus the browser resources of the current session
struct Driver {
    engine: TooltipEngine,
    projector: JsMapProjector,
    config: EngineConfig,
    listener: Option<js_sys::Function>,
    timer: Option<IntervalTimer>,
    frame: Option<AnimationFrame>,
    subscription: Option<MapSubscription>,
}

impl Driver {
    /// Drop every timer, frame and subscription of the current session
    fn release(&mut self) {
        self.timer = None;
        self.frame = None;
        self.subscription = None;
    }

    fn on_tick(weak: &Weak<RefCell<Driver>>) {
        let Some(inner) = weak.upgrade() else { return };
        let listener = {
            let Ok(mut driver) = inner.try_borrow_mut() else { return };
            if driver.engine.tick().is_none() {
                return;
            }
            driver.listener.clone()
        };
        notify(listener);
    }

    fn on_viewport_changed(weak: &Weak<RefCell<Driver>>) {
        if let Some(inner) = weak.upgrade() {
            Driver::schedule_recompute(&inner);
        }
    }

    /// Recompute anchors now and install them on the next animation frame
    ///
    /// A newer request replaces (and cancels) the pending frame, so a burst of
    /// camera moves installs at most one result per frame.
    fn schedule_recompute(inner: &Rc<RefCell<Driver>>) {
        let (pending, defer) = {
            let Ok(driver) = inner.try_borrow() else { return };
            (
                driver.engine.recompute(&driver.projector),
                driver.config.defer_to_animation_frame,
            )
        };
        let Some(pending) = pending else { return };

        if !defer {
            Driver::install(inner, pending);
            return;
        }

        let weak = Rc::downgrade(inner);
        let slot = Rc::new(RefCell::new(Some(pending)));
        let frame_slot = Rc::clone(&slot);
        let callback: Closure<dyn FnMut()> = Closure::once(move || {
            let Some(inner) = weak.upgrade() else { return };
            if let Some(pending) = frame_slot.borrow_mut().take() {
                Driver::install(&inner, pending);
            }
        });

        match AnimationFrame::request(callback) {
            Ok(frame) => {
                if let Ok(mut driver) = inner.try_borrow_mut() {
                    driver.frame = Some(frame);
                }
            }
            Err(err) => {
                log::warn!(
                    "requestAnimationFrame unavailable ({}), applying anchors immediately",
                    describe_js_error(&err)
                );
                if let Some(pending) = slot.borrow_mut().take() {
                    Driver::install(inner, pending);
                }
            }
        }
    }

    fn install(inner: &Rc<RefCell<Driver>>, pending: PendingAnchors) {
        let (_finished_frame, listener) = {
            let Ok(mut driver) = inner.try_borrow_mut() else { return };
            let finished = driver.frame.take();
            if !driver.engine.apply(pending) {
                return;
            }
            (finished, driver.listener.clone())
        };
        notify(listener);
    }
}

/// Rotating tooltip engine bound to one MapLibre map
#[wasm_bindgen(js_name = TooltipEngine)]
pub struct TooltipEngineHandle {
    inner: Rc<RefCell<Driver>>,
}

#[wasm_bindgen(js_class = TooltipEngine)]
impl TooltipEngineHandle {
    /// Create an engine for `map`; `config` may be omitted
    #[wasm_bindgen(constructor)]
    pub fn new(map: MapLibreMap, config: JsValue) -> Result<TooltipEngineHandle, JsValue> {
        let config: Option<EngineConfig> = deserialize(config, "Invalid tooltip engine config")?;
        let config = config.unwrap_or_default();
        let driver = Driver {
            engine: TooltipEngine::with_interval(config.effective_interval_ms()),
            projector: JsMapProjector::new(map),
            config,
            listener: None,
            timer: None,
            frame: None,
            subscription: None,
        };
        Ok(Self {
            inner: Rc::new(RefCell::new(driver)),
        })
    }

    /// Start rotating over `pois` (the embedded city list when omitted)
    ///
    /// Restarting an engine first tears down the previous session. If the
    /// rotation timer cannot be armed the engine is left stopped.
    pub fn start(&self, pois: JsValue) -> Result<(), JsValue> {
        let pois: Vec<Poi> = if pois.is_undefined() || pois.is_null() {
            default_pois()
        } else {
            deserialize(pois, "Failed to deserialize POIs")?
        };

        let weak = Rc::downgrade(&self.inner);
        {
            let mut driver = self.inner.borrow_mut();
            driver.release();

            // A timer that cannot be armed leaves the engine stopped
            let timer = if pois.is_empty() {
                None
            } else {
                let interval = driver.config.effective_interval_ms();
                let tick_weak = weak.clone();
                match IntervalTimer::start(interval, Closure::new(move || Driver::on_tick(&tick_weak))) {
                    Ok(timer) => Some(timer),
                    Err(err) => {
                        driver.engine.stop();
                        return Err(to_js_error(format!(
                            "Failed to start rotation timer: {}",
                            describe_js_error(&err)
                        )));
                    }
                }
            };

            driver.engine.start(pois);
            driver.timer = timer;

            let map = driver.projector.map().clone();
            let change_weak = weak.clone();
            let subscription = MapSubscription::listen(
                map,
                &MAP_CHANGE_EVENTS,
                Closure::new(move || Driver::on_viewport_changed(&change_weak)),
            );
            driver.subscription = Some(subscription);
        }

        // The map may already be loaded, in which case no `load` event follows
        Driver::schedule_recompute(&self.inner);
        Ok(())
    }

    /// Cancel the timer, pending frame and map subscriptions, and clear state
    pub fn stop(&self) {
        let mut driver = self.inner.borrow_mut();
        driver.release();
        driver.engine.stop();
    }

    /// Recompute anchors now, e.g. after the page changed the map's layout
    pub fn refresh(&self) {
        Driver::schedule_recompute(&self.inner);
    }

    /// Register the callback fired after each rotation tick or anchor change
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&self, listener: Option<js_sys::Function>) {
        self.inner.borrow_mut().listener = listener;
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner.borrow().engine.is_running()
    }

    /// Highlighted POI, or `null` when none
    #[wasm_bindgen(js_name = activePoi)]
    pub fn active_poi(&self) -> Result<JsValue, JsValue> {
        let driver = self.inner.borrow();
        serialize(&driver.engine.active_poi(), "Failed to serialize active POI")
    }

    #[wasm_bindgen(js_name = activeIndex)]
    pub fn active_index(&self) -> Option<u32> {
        let index = self.inner.borrow().engine.active_index()?;
        u32::try_from(index).ok()
    }

    /// MapLibre anchor string for a POI id, `"bottom"` if unresolved
    #[wasm_bindgen(js_name = anchorFor)]
    pub fn anchor_for(&self, id: JsValue) -> Result<String, JsValue> {
        let id: PoiId = deserialize(id, "Invalid POI id")?;
        Ok(self.inner.borrow().engine.anchor_for(&id).as_str().to_string())
    }

    /// All resolved anchors as `{ [id]: anchor }`
    pub fn anchors(&self) -> Result<JsValue, JsValue> {
        let driver = self.inner.borrow();
        serialize(driver.engine.anchors(), "Failed to serialize anchors")
    }

    /// GeoJSON `FeatureCollection` for the marker layers
    #[wasm_bindgen(js_name = markerFeatures)]
    pub fn marker_features(&self) -> Result<JsValue, JsValue> {
        let driver = self.inner.borrow();
        serialize(&driver.engine.marker_features(), "Failed to serialize marker features")
    }
}

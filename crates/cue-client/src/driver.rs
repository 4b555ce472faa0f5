//! Connects DOM events, the shot request and the playback timer to the
//! `TurnController`.
//!
//! One listener per event kind stays bound for the page's lifetime and the
//! controller decides from its state whether an event matters. The cue ball
//! is hit-tested by delegation on the container, since every rendered frame
//! replaces the ball element.

use std::cell::RefCell;
use std::rc::Rc;

use cue_core::{DevicePoint, TurnAction, TurnConfig, TurnController};
use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, MouseEvent};

use crate::scene::SvgScene;
use crate::shot_client::ShotClient;

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("scene container #{0} not found")]
    ContainerNotFound(String),
}

fn device_point(event: &Event) -> Option<DevicePoint> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some(DevicePoint::new(
        f64::from(mouse.client_x()),
        f64::from(mouse.client_y()),
    ))
}

fn targets(event: &Event, selector: &str) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// Shared between every event and timer callback.
#[derive(Clone)]
struct Driver {
    turn: Rc<RefCell<TurnController<SvgScene>>>,
    client: Rc<ShotClient>,
    playback: Rc<RefCell<Option<Interval>>>,
}

impl Driver {
    /// Carry out an action returned by the controller.
    ///
    /// Callers must not hold a borrow of `turn` while calling this.
    fn perform(&self, action: TurnAction) {
        match action {
            TurnAction::None => {}
            TurnAction::Submit(velocity) => {
                let this = self.clone();
                spawn_local(async move {
                    let result = this.client.submit(velocity).await;
                    let next = this.turn.borrow_mut().shot_resolved(result);
                    this.perform(next);
                });
            }
            TurnAction::StartPlayback { id, interval_ms } => {
                let this = self.clone();
                let interval = Interval::new(interval_ms, move || {
                    let next = this.turn.borrow_mut().tick(id);
                    this.perform(next);
                });
                let previous = self.playback.borrow_mut().replace(interval);
                if let Some(previous) = previous {
                    tracing::debug!("Replacing active playback timer");
                    retire(previous);
                }
            }
            TurnAction::StopPlayback => {
                let current = self.playback.borrow_mut().take();
                if let Some(current) = current {
                    retire(current);
                }
            }
        }
    }
}

/// Drop a timer outside of its own callback.
///
/// `StopPlayback` is returned from inside the interval's tick, and freeing
/// the running closure there is not allowed.
fn retire(interval: Interval) {
    spawn_local(async move {
        drop(interval);
    });
}

/// A mounted table: the controller plus the listeners that feed it.
pub struct Game {
    _listeners: Vec<EventListener>,
}

impl Game {
    pub fn mount(document: &Document, config: TurnConfig) -> Result<Self, MountError> {
        let container = document
            .get_element_by_id(&config.container_id)
            .ok_or_else(|| MountError::ContainerNotFound(config.container_id.clone()))?;

        let scene = SvgScene::new(document.clone(), container.clone(), &config);
        let cue_ball_selector = scene.cue_ball_selector().to_string();
        let client = ShotClient::new(config.shoot_url.clone());
        let mut turn = TurnController::new(scene, config);
        // A failed first setup is logged; the first press retries it.
        let _ = turn.setup();

        let driver = Driver {
            turn: Rc::new(RefCell::new(turn)),
            client: Rc::new(client),
            playback: Rc::new(RefCell::new(None)),
        };

        let on_press = {
            let driver = driver.clone();
            EventListener::new(&container, "mousedown", move |event| {
                if !targets(event, &cue_ball_selector) {
                    return;
                }
                if let Some(point) = device_point(event) {
                    driver.turn.borrow_mut().press(point);
                }
            })
        };

        let on_move = {
            let driver = driver.clone();
            EventListener::new(&container, "mousemove", move |event| {
                if let Some(point) = device_point(event) {
                    driver.turn.borrow_mut().pointer_move(point);
                }
            })
        };

        let on_release = EventListener::new(document, "mouseup", move |_event| {
            let action = driver.turn.borrow_mut().release();
            driver.perform(action);
        });

        tracing::info!("Table mounted");
        Ok(Self {
            _listeners: vec![on_press, on_move, on_release],
        })
    }
}

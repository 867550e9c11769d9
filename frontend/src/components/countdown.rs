use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

/// Seconds left on the launch offer. Never goes below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(start: u32) -> Self {
        Self { remaining: start }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    pub fn tick(self) -> Self {
        Self {
            remaining: self.remaining.saturating_sub(1),
        }
    }
}

pub enum CountdownAction {
    Tick,
}

impl Reducible for Countdown {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // Same Rc back means yew skips the re-render.
            CountdownAction::Tick if self.is_expired() => self,
            CountdownAction::Tick => Rc::new(self.tick()),
        }
    }
}

/// `M:SS`, minutes unpadded.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_clock(self.remaining))
    }
}

/// Calls `on_tick` every `millis` from mount until unmount. The interval
/// handle lives in the effect and is dropped by its destructor, which
/// cancels the recurring callback.
#[hook]
pub fn use_interval_tick(millis: u32, on_tick: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let interval = Interval::new(millis, move || on_tick.emit(()));
            log::debug!("interval of {}ms started", millis);

            move || {
                drop(interval);
                log::debug!("interval of {}ms stopped", millis);
            }
        },
        (),
    );
}

/// Page-lifetime countdown, one tick per `config::TICK_MILLIS`.
#[hook]
pub fn use_countdown(start: u32) -> UseReducerHandle<Countdown> {
    let countdown = use_reducer(move || Countdown::new(start));

    let on_tick = {
        let dispatcher = countdown.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(CountdownAction::Tick))
    };
    use_interval_tick(config::TICK_MILLIS, on_tick);

    countdown
}

#[derive(Properties, PartialEq)]
pub struct OfferCountdownProps {
    #[prop_or(config::COUNTDOWN_START_SECS)]
    pub start: u32,
}

#[function_component(OfferCountdown)]
pub fn offer_countdown(props: &OfferCountdownProps) -> Html {
    let countdown = use_countdown(props.start);

    html! {
        <div class={classes!("offer-countdown", countdown.is_expired().then(|| "expired"))}>
            <span class="countdown-label">{"Esta oferta expira em"}</span>
            <span class="countdown-clock">{(*countdown).to_string()}</span>
        </div>
    }
}

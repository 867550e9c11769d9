use log::Level;

/// External payment page. The page never talks to it beyond a plain link.
pub const CHECKOUT_URL: &str = "https://www.ggcheckout.com/checkout/v5/xi498KPqTw2NpUI0Apzh";

/// `id` of the pricing section that the call-to-action buttons scroll to.
pub const OFFER_ANCHOR: &str = "oferta";

pub const COUNTDOWN_START_SECS: u32 = 3599;

pub const TICK_MILLIS: u32 = 1_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

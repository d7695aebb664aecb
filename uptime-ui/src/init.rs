use std::sync::atomic::{
    AtomicBool,
    Ordering,
};

use tokio::sync::oneshot;
use uptime_core::Config;
use wasm_bindgen::{
    closure::Closure,
    JsCast,
};
use web_sys::{
    Document,
    Event,
};

use crate::{
    counter::{
        UptimeCounter,
        UptimeHandle,
    },
    error::Error,
    utils::js_error_message,
};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Proof that this is the one initialization of the page.
#[derive(Debug)]
pub struct InitToken {
    _private: (),
}

fn acquire(flag: &AtomicBool) -> Option<InitToken> {
    flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .ok()
        .map(|_| InitToken { _private: () })
}

/// Returns a token the first time it's called, and `None` after that.
pub fn try_init() -> Option<InitToken> {
    acquire(&INITIALIZED)
}

/// Resolves once the document has been parsed.
///
/// Returns immediately if that already happened, since `DOMContentLoaded`
/// won't fire again.
pub async fn document_ready(document: &Document) -> Result<(), Error> {
    const EVENT: &str = "DOMContentLoaded";

    if document.ready_state() != "loading" {
        return Ok(());
    }

    tracing::debug!("waiting for {EVENT}");

    let (tx_ready, rx_ready) = oneshot::channel();
    let mut tx_ready = Some(tx_ready);
    let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(tx_ready) = tx_ready.take() {
            let _ = tx_ready.send(());
        }
    });

    document
        .add_event_listener_with_callback(EVENT, listener.as_ref().unchecked_ref())
        .map_err(|error| {
            Error::EventListener {
                event: EVENT,
                reason: js_error_message(&error),
            }
        })?;

    let _ = rx_ready.await;

    let _ = document.remove_event_listener_with_callback(EVENT, listener.as_ref().unchecked_ref());

    Ok(())
}

/// Starts the page's uptime counter once the document is ready.
///
/// Only the first call does anything. Later calls return `Ok(None)`, so at
/// most one update loop exists per page.
pub async fn init(config: Config) -> Result<Option<UptimeHandle>, Error> {
    let Some(_token) = try_init()
    else {
        tracing::warn!("uptime counter already initialized");
        return Ok(None);
    };

    let document = web_sys::window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)?;

    document_ready(&document).await?;

    UptimeCounter::new(config, &document)?.start()
}

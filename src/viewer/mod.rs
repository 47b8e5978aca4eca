//! The viewer engine: store, reducers, render reconciliation and dispatch.
//!
//! - `action.rs` - The closed action catalog
//! - `dispatch.rs` - Action builders with their guards
//! - `store.rs` - The store aggregate and the root reduce / reconcile passes
//! - `render.rs` - Render effects and class reconciliation helpers
//! - one module per concern: loading, scroll, selection, hover, search,
//!   cursor, copy
//! - `history.rs`, `throttle.rs` - Tracked-action history and input rate
//!   limiting

pub mod action;
pub mod copy;
pub mod cursor;
pub mod dispatch;
pub mod history;
pub mod hover;
pub mod loading;
pub mod mvi;
pub mod render;
pub mod scroll;
pub mod search;
pub mod selection;
pub mod settings;
pub mod store;
pub mod throttle;

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::config::Config;
use crate::hex::HexDocument;

pub use action::{Action, ActionKind, CursorKey, ItemsRendered, SearchStep};
pub use history::{History, HistoryEntry};
pub use render::{CellClass, RenderEffect, RenderTarget};
pub use settings::Settings;
pub use store::{Focus, Store};
pub use throttle::{ActionThrottle, SearchDebouncer};

/// One viewer instance over one document.
///
/// All dispatches are serialized through `&mut self`; each one folds the
/// action through every reducer and returns the render effects for the
/// transition.
pub struct Viewer {
    store: Store,
    document: Arc<HexDocument>,
    valid: bool,
    history: History,
    throttle: ActionThrottle,
    debouncer: SearchDebouncer,
}

impl Viewer {
    pub fn new(document: impl Into<Arc<HexDocument>>, settings: Settings) -> Self {
        Self::build(document.into(), settings, &Config::default())
    }

    pub fn with_config(document: impl Into<Arc<HexDocument>>, config: &Config) -> Self {
        Self::build(document.into(), Settings::from(config), config)
    }

    fn build(document: Arc<HexDocument>, settings: Settings, config: &Config) -> Self {
        Self {
            store: Store::new(settings, document.len()),
            document,
            valid: true,
            history: History::new(config.history.capacity),
            throttle: ActionThrottle::new(Duration::from_millis(config.input.repeat_interval_ms)),
            debouncer: SearchDebouncer::new(Duration::from_millis(config.search.debounce_ms)),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn document(&self) -> &Arc<HexDocument> {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Reduce `action` into the store and reconcile the result.
    pub fn dispatch(&mut self, action: impl Into<Action>) -> Vec<RenderEffect> {
        let action = action.into();
        tracing::debug!(
            action = action.name(),
            tracked = action.tracked,
            repeat = action.repeat,
            "dispatch"
        );
        if matches!(action.kind, ActionKind::SearchClear) && self.debouncer.is_pending() {
            self.debouncer.cancel();
            tracing::debug!("pending search abandoned");
        }

        let next = store::reduce(&self.store, &action.kind, &self.document);
        let effects = store::reconcile(&self.store, &next);

        if !self.store.loading.initialized && next.loading.initialized {
            tracing::info!(bytes = self.document.len(), "viewer initialized");
        }
        if !self.store.loading.is_invalid_data && next.loading.is_invalid_data {
            tracing::warn!("document rejected as invalid data");
        }
        if self.history.record(&action) {
            tracing::trace!(entries = self.history.len(), "history recorded");
        }

        self.store = next;
        tracing::trace!(effects = effects.len(), "reconciled");
        effects
    }

    /// Dispatch through the repeat throttle.
    pub fn submit(&mut self, action: Action, now: Instant) -> Vec<RenderEffect> {
        match self.throttle.push(action, now) {
            Some(action) => self.dispatch(action),
            None => Vec::new(),
        }
    }

    /// Queue search input behind the debounce delay.
    pub fn submit_search(&mut self, input: impl Into<String>, now: Instant) {
        self.debouncer.push(input, now);
    }

    /// Dispatch coalesced actions and debounced searches that are due.
    pub fn tick(&mut self, now: Instant) -> Vec<RenderEffect> {
        let mut due = self.throttle.poll(now);
        due.extend(self.debouncer.poll(now));
        self.dispatch_all(due)
    }

    /// Dispatch everything still pending, due or not.
    pub fn flush(&mut self, now: Instant) -> Vec<RenderEffect> {
        let mut pending = self.throttle.flush(now);
        pending.extend(self.debouncer.flush());
        self.dispatch_all(pending)
    }

    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<RenderEffect> {
        actions
            .into_iter()
            .flat_map(|action| self.dispatch(action))
            .collect()
    }

    /// Swap in a new document and restart from `AppLoad`. A pending search is
    /// dropped.
    pub fn replace_document(
        &mut self,
        document: impl Into<Arc<HexDocument>>,
        valid: bool,
    ) -> Vec<RenderEffect> {
        self.document = document.into();
        self.valid = valid;
        self.debouncer.cancel();
        self.dispatch(ActionKind::AppLoad { valid })
    }

    /// Load a hex-encoded document; malformed text loads as invalid data.
    pub fn load_hex_text(&mut self, text: &str) -> Vec<RenderEffect> {
        match HexDocument::from_hex_text(text) {
            Ok(document) => self.replace_document(document, true),
            Err(err) => {
                tracing::warn!(error = %err, "rejecting hex text");
                self.replace_document(HexDocument::default(), false)
            }
        }
    }

    /// The collaborator callback for the current scroll position.
    pub fn items_rendered(&self) -> ItemsRendered {
        let window = self.store.cells_rendered();
        ItemsRendered {
            visible_start_index: window.visible_start_row_index,
            visible_stop_index: window.visible_stop_row_index,
            overscan_start_index: window.overscan_start_row_index,
            overscan_stop_index: window.overscan_stop_row_index,
        }
    }

    /// Run the startup milestones in their canonical order.
    ///
    /// `width` and `height` are the measured container size in pixels.
    pub fn boot(
        &mut self,
        location: Option<usize>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Vec<RenderEffect> {
        let settings = self.store.settings.clone();
        let mut effects = self.dispatch(ActionKind::AppLoad { valid: self.valid });
        effects.extend(self.dispatch(ActionKind::SettingLoad { settings }));
        effects.extend(self.dispatch(ActionKind::AppLocationInit { offset: location }));
        effects.extend(self.dispatch(dispatch::body_init(false)));
        let items = self.items_rendered();
        effects.extend(self.dispatch(dispatch::body_items_rendered(items)));
        effects.extend(self.dispatch(dispatch::body_ref_init(true)));
        effects.extend(self.dispatch(dispatch::body_resize(width, height)));
        effects.extend(self.dispatch(dispatch::body_scroll_init()));
        let items = self.items_rendered();
        effects.extend(self.dispatch(dispatch::body_items_rendered(items)));
        effects
    }
}

/// Route effects to the view and the clipboard.
///
/// Every effect is applied even when a clipboard write fails; the first
/// failure is returned.
pub fn apply_effects<T, C>(
    effects: &[RenderEffect],
    target: &mut T,
    clipboard: &mut C,
) -> Result<(), ClipboardError>
where
    T: RenderTarget + ?Sized,
    C: ClipboardSink + ?Sized,
{
    let mut first_error = None;
    for effect in effects {
        match effect {
            RenderEffect::CopyToClipboard { text } => {
                if let Err(err) = clipboard.set_text(text) {
                    tracing::warn!(error = %err, "clipboard write failed");
                    first_error.get_or_insert(err);
                }
            }
            other => target.apply(other),
        }
    }
    first_error.map_or(Ok(()), Err)
}

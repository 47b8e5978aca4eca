//! Base trait for intents (user/system actions).

/// Intent objects folded through every reducer.
///
/// Intents represent:
/// - User input (key presses, mouse, wheel, search box)
/// - Collaborator callbacks (resize, items rendered, refs attached)
/// - Lifecycle milestones (app load, settings load)
pub trait Intent: Clone + std::fmt::Debug + Send + 'static {
    /// Stable name used in logs and history entries.
    fn name(&self) -> &'static str;

    /// Whether the intent belongs in the history.
    fn is_tracked(&self) -> bool;
}

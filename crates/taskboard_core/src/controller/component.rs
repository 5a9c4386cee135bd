//! Setup contract shared by board controllers.

/// Two-phase setup run once by each controller constructor.
pub trait Component {
    /// Wires event subscriptions.
    fn configure(&self);
    /// Emits static content for the controller's surface.
    fn render_content(&self);
}

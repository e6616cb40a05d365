#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Navigation request from outside the window, e.g. the control socket.
    Goto(usize),
}

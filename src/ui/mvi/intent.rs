/// Marker trait for things that can change a view's state:
/// key presses, API completions and timer ticks.
pub trait Intent: Send + 'static {}

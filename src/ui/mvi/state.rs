/// Marker trait for view state.
///
/// States are plain values: cloned to render, compared in tests,
/// and defaulted when a view is first mounted.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

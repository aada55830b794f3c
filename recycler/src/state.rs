use crate::Size;

/// A lightweight, serializable snapshot of the viewport a list is laid out in.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub offset_y: f64,
    pub frame: Size,
    pub total_row_count: usize,
    /// Frame width by `total_row_count * row_height`; zero without a data source.
    pub content_size: Size,
}

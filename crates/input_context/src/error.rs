use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputStateError {
    #[error("selection offset {offset} is out of bounds for text of {len} bytes")]
    SelectionOutOfBounds { offset: usize, len: usize },
    #[error("selection offset {offset} is not on a character boundary")]
    SelectionNotCharBoundary { offset: usize },
    #[error("selection start {start} is past selection end {end}")]
    SelectionReversed { start: usize, end: usize },
}

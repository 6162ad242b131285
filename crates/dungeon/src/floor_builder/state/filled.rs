use super::{FloorBuilderState, Smoothable};

/// A resting state: the map has been drawn on and is ready for smoothing.
#[derive(Debug)]
pub(crate) struct Filled;

impl FloorBuilderState for Filled {
    const TYPE_NAME: &'static str = "Filled";
}

impl Smoothable for Filled {}

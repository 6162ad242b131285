//! The states a [`FloorBuilder`](super::FloorBuilder) moves through. Each
//! module holds one state and the transitions out of it.

mod blank;
mod done;
mod drawable;
mod filled;
mod has_borders;
mod has_connections;
mod has_secret_passages;
mod new;
mod random_filled;
mod smoothed;

pub use new::New;

pub(crate) use blank::Blank;
pub(crate) use done::Done;
pub(crate) use drawable::Drawable;
pub(crate) use filled::Filled;
pub(crate) use has_borders::HasBorders;
pub(crate) use has_connections::HasConnections;
pub(crate) use has_secret_passages::HasSecretPassages;
pub(crate) use random_filled::RandomFilled;
pub(crate) use smoothed::Smoothed;

/// A state a floor builder can be in, along with its extra data.
pub trait FloorBuilderState {
    /// Name of the state, for debug output.
    const TYPE_NAME: &'static str;
}

/// States the cellular automaton may run from.
pub(crate) trait Smoothable: FloorBuilderState {}

mod elaboration;
mod model;
mod store;

pub use elaboration::{ElaborationRequest, IElaborationSource};
pub use model::{IModel, ModelOutput};
pub use store::{IFeedbackStore, IPlanStore};

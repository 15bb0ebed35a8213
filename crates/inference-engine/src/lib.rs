//! Serving-time runtime for the externally trained classifiers.
//!
//! Vectorizes the pipeline's token strings against fixed vocabularies and
//! scores serialized gradient-boosted tree artifacts. No training happens
//! here; artifacts are opaque inputs loaded once at startup.

pub mod artifacts;
pub mod ensemble;
pub mod vectorizer;

pub use artifacts::{LiabilityModel, ModelBundle, ModelError, MultiVehicleModel};
pub use ensemble::{Node, Tree, TreeEnsemble};
pub use vectorizer::{CountVectorizer, TfidfTransformer};

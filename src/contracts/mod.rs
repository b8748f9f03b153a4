//! Contract bindings, artifacts, and deployment plumbing

pub mod artifact;
pub mod bindings;
pub mod deploy;

pub use artifact::{Artifact, ArtifactError};
pub use bindings::{DigitalCopy, Reviews, SystemManager, TrustedSeller, Users};
pub use deploy::{deploy_contract, wait_for_event, DeployError, Deployment, EventError};

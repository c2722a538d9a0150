//! Page modules - one per demo variant

pub mod direct;
pub mod multi_connector;

pub use direct::DirectDemoPage;
pub use multi_connector::MultiConnectorPage;

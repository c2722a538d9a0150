//! # Wallet Connectors
//!
//! A connector is one strategy for reaching an external wallet. Each configured
//! connector can independently produce an external provider; prior-session
//! detection is owned by the connector, not by the client.

use std::rc::Rc;

use async_trait::async_trait;

use crate::chain::ConnectorKind;
use crate::error::Result;
use crate::signer::ProviderHandle;

#[async_trait(?Send)]
pub trait Connector {
    fn kind(&self) -> ConnectorKind;

    /// Run the connector's interactive connection flow.
    async fn connect(&self) -> Result<Rc<dyn ProviderHandle>>;

    /// Whether a previous session can be resumed without user action.
    async fn is_authorized(&self) -> bool;
}

//! # Wallet Connector Adapter
//!
//! Resolves the two connection actions to an [`ActiveSigner`] written into the
//! [`ConnectionStore`].
//!
//! ## Actions
//!
//! - [`WalletConnector::connect_external`]: runs the interactive wallet-selection
//!   flow and then the network/account check. The provider arrives through the
//!   selector's subscription callback, not through the return value.
//! - [`WalletConnector::connect_ephemeral`]: generates a fresh in-memory key pair.
//!   No I/O, no prompt, cannot fail.
//!
//! Both end the same way, by writing one signer into the same store, so whoever
//! renders the state never needs to know which path ran.
//!
//! ## Failure Policy
//!
//! Selection and check failures are swallowed: no retry, no state change, nothing
//! surfaced. [`WalletConnector::try_connect_external`] returns the error for
//! callers that want it; [`WalletConnector::connect_external`] is the UI entry
//! point and discards it. An abandoned prompt simply never resolves.

use std::rc::Rc;

use async_trait::async_trait;

use crate::error::Result;
use crate::signer::{ActiveSigner, EphemeralKeySigner, ProviderHandle};
use crate::state::ConnectionStore;

/// Source label recorded on providers obtained through the selection modal.
pub const WALLET_SELECT_SOURCE: &str = "wallet-select";

/// Subscription callback invoked by the selector whenever its provider changes.
pub type ProviderCallback = Rc<dyn Fn(Option<Rc<dyn ProviderHandle>>)>;

/// Interactive wallet-selection collaborator (a wallet modal).
///
/// On success the selector reports the provider through the [`ProviderCallback`]
/// it was built with.
#[async_trait(?Send)]
pub trait WalletSelector {
    /// Open the selection modal and wait for the user's choice.
    async fn select_wallet(&self) -> Result<()>;

    /// Validate the selected wallet (network, unlocked account).
    async fn check_wallet(&self) -> Result<()>;
}

/// The adapter: the only writer of the connection store in the direct variant.
#[derive(Clone)]
pub struct WalletConnector {
    selector: Rc<dyn WalletSelector>,
    store: ConnectionStore,
}

impl WalletConnector {
    /// Build the selector with a subscription that stores any provider it reports.
    ///
    /// `None` provider updates are ignored; the state is never cleared.
    pub fn new<S, F>(store: ConnectionStore, build_selector: F) -> Self
    where
        S: WalletSelector + 'static,
        F: FnOnce(ProviderCallback) -> S,
    {
        let writer = store.clone();
        let on_provider: ProviderCallback = Rc::new(move |provider| {
            if let Some(handle) = provider {
                writer.connect(ActiveSigner::external(handle, WALLET_SELECT_SOURCE));
            }
        });

        Self {
            selector: Rc::new(build_selector(on_provider)),
            store,
        }
    }

    pub fn store(&self) -> &ConnectionStore {
        &self.store
    }

    /// Run selection then check, returning the first failure.
    ///
    /// The check runs even when selection failed; the modal decides what that means.
    pub async fn try_connect_external(&self) -> Result<()> {
        let selected = self.selector.select_wallet().await;
        if let Err(err) = &selected {
            tracing::debug!(error = %err, "wallet selection did not complete");
        }

        let checked = self.selector.check_wallet().await;
        if let Err(err) = &checked {
            tracing::debug!(error = %err, "wallet check did not pass");
        }

        selected.and(checked)
    }

    /// UI entry point for the external wallet path. Failures leave the state as it was.
    pub async fn connect_external(&self) {
        let _ignored = self.try_connect_external().await;
    }

    /// Generate a fresh key pair and store it.
    pub fn connect_ephemeral(&self) -> ActiveSigner {
        let signer = ActiveSigner::ephemeral(EphemeralKeySigner::random());
        self.store.connect(signer.clone());
        signer
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::error::AppError;

    /// What the mocked modal does when opened.
    pub enum Selection {
        /// User picks a wallet; the subscription fires with this provider.
        Provide(Rc<dyn ProviderHandle>),
        /// User closes the modal.
        Reject,
        /// The modal never resolves.
        Abandon,
    }

    pub struct MockSelector {
        pub callback: ProviderCallback,
        pub selection: RefCell<Selection>,
        pub check_passes: bool,
        pub select_calls: Rc<Cell<u32>>,
        pub check_calls: Rc<Cell<u32>>,
    }

    impl MockSelector {
        pub fn new(callback: ProviderCallback, selection: Selection, check_passes: bool) -> Self {
            Self {
                callback,
                selection: RefCell::new(selection),
                check_passes,
                select_calls: Rc::new(Cell::new(0)),
                check_calls: Rc::new(Cell::new(0)),
            }
        }
    }

    #[async_trait(?Send)]
    impl WalletSelector for MockSelector {
        async fn select_wallet(&self) -> Result<()> {
            self.select_calls.set(self.select_calls.get() + 1);
            let provider = match &*self.selection.borrow() {
                Selection::Provide(provider) => Some(provider.clone()),
                Selection::Reject => None,
                Selection::Abandon => return std::future::pending().await,
            };

            match provider {
                Some(provider) => {
                    (self.callback)(Some(provider));
                    Ok(())
                }
                None => Err(AppError::WalletSelection("modal closed".to_string())),
            }
        }

        async fn check_wallet(&self) -> Result<()> {
            self.check_calls.set(self.check_calls.get() + 1);
            if self.check_passes {
                Ok(())
            } else {
                Err(AppError::WalletCheck("unsupported network".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Duration;

    use super::test_support::{MockSelector, Selection};
    use super::*;
    use crate::error::AppError;
    use crate::signer::test_support::MockProvider;

    fn connector_with(selection: Selection, check_passes: bool) -> (WalletConnector, Rc<Cell<u32>>) {
        let check_calls = Rc::new(Cell::new(0));
        let calls = check_calls.clone();
        let connector = WalletConnector::new(ConnectionStore::new(), move |callback| {
            let mut selector = MockSelector::new(callback, selection, check_passes);
            selector.check_calls = calls;
            selector
        });
        (connector, check_calls)
    }

    #[tokio::test]
    async fn test_external_success_stores_provider() {
        let provider = MockProvider::on_chain(1, "0xabc");
        let (connector, _) = connector_with(Selection::Provide(provider.clone()), true);

        connector.connect_external().await;

        let signer = connector.store().signer().expect("connected");
        match signer {
            ActiveSigner::External(external) => {
                assert!(external.is_same_handle(&provider));
                assert_eq!(external.source(), WALLET_SELECT_SOURCE);
            }
            other => panic!("unexpected signer {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejected_selection_is_swallowed() {
        let (connector, check_calls) = connector_with(Selection::Reject, true);

        connector.connect_external().await;

        assert!(!connector.store().is_connected());
        // The check still runs after a failed selection
        assert_eq!(check_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_try_connect_external_reports_first_error() {
        let (connector, _) = connector_with(Selection::Reject, false);
        let err = connector.try_connect_external().await.unwrap_err();
        assert!(matches!(err, AppError::WalletSelection(_)));

        let (connector, _) = connector_with(Selection::Provide(MockProvider::on_chain(1, "0x1")), false);
        let err = connector.try_connect_external().await.unwrap_err();
        assert!(matches!(err, AppError::WalletCheck(_)));
        // The provider already arrived through the subscription; a failed check does not undo it
        assert!(connector.store().is_connected());
    }

    #[tokio::test]
    async fn test_abandoned_prompt_stays_disconnected() {
        let (connector, _) = connector_with(Selection::Abandon, true);

        let pending = tokio::time::timeout(Duration::from_millis(20), connector.connect_external()).await;

        assert!(pending.is_err());
        assert!(!connector.store().is_connected());
    }

    #[test]
    fn test_none_provider_update_is_ignored() {
        let store = ConnectionStore::new();
        let mut captured = None;
        let _connector = WalletConnector::new(store.clone(), |callback| {
            captured = Some(callback.clone());
            MockSelector::new(callback, Selection::Reject, true)
        });

        let callback = captured.unwrap();
        callback(None);
        assert!(!store.is_connected());

        callback(Some(MockProvider::on_chain(1, "0x1")));
        assert!(store.is_connected());

        callback(None);
        assert!(store.is_connected());
    }

    #[test]
    fn test_connect_ephemeral() {
        let (connector, _) = connector_with(Selection::Reject, true);

        let signer = connector.connect_ephemeral();

        let stored = connector.store().signer().unwrap();
        assert!(stored.same_signer(&signer));
        assert!(signer.address().unwrap().starts_with("0x"));
    }

    #[test]
    fn test_consecutive_ephemeral_calls_keep_only_latest() {
        let (connector, _) = connector_with(Selection::Reject, true);

        let first = connector.connect_ephemeral();
        let second = connector.connect_ephemeral();

        assert_ne!(first.address(), second.address());
        assert!(connector.store().signer().unwrap().same_signer(&second));
    }
}

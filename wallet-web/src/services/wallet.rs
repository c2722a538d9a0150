//! Wallet Selection Modal via wasm-bindgen
//!
//! JavaScript interop for the Onboard wallet-select modal used by the direct
//! demo, and the [`JsProvider`] wrapper every browser provider object goes
//! through before it reaches the connection store.

use std::any::Any;
use std::rc::Rc;

use async_trait::async_trait;
use js_sys::Reflect;
use lib_core::adapter::{ProviderCallback, WalletSelector};
use lib_core::signer::ProviderHandle;
use lib_core::{AppError, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ============================================================================
// ONBOARD MODAL (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
let onboard = null;
let providerListener = null;

export function initOnboard(networkId) {
    if (onboard) {
        return;
    }
    if (typeof window.Onboard !== 'function') {
        throw new Error('Onboard library not loaded');
    }

    onboard = window.Onboard({
        networkId: networkId,
        walletSelect: {
            wallets: [{ walletName: 'metamask', preferred: true }],
        },
        subscriptions: {
            wallet: (wallet) => {
                if (providerListener) {
                    providerListener(wallet && wallet.provider ? wallet.provider : null);
                }
            },
        },
    });
}

export function setProviderListener(listener) {
    providerListener = listener;
}

export function clearProviderListener(listener) {
    if (providerListener === listener) {
        providerListener = null;
    }
}

export async function walletSelect() {
    if (!onboard) {
        throw new Error('Onboard not initialised');
    }
    const selected = await onboard.walletSelect();
    if (!selected) {
        throw new Error('No wallet selected');
    }
}

export async function walletCheck() {
    if (!onboard) {
        throw new Error('Onboard not initialised');
    }
    const ready = await onboard.walletCheck();
    if (!ready) {
        throw new Error('Wallet check did not pass');
    }
}
")]
extern "C" {
    /// Create the modal once per page load; later calls keep the first instance
    #[wasm_bindgen(catch)]
    fn initOnboard(network_id: u32) -> std::result::Result<(), JsValue>;

    /// Route the modal's provider subscription to `listener`
    fn setProviderListener(listener: &js_sys::Function);

    /// Detach `listener` if it is still the active one
    fn clearProviderListener(listener: &js_sys::Function);

    /// Open the selection modal
    #[wasm_bindgen(catch)]
    async fn walletSelect() -> std::result::Result<JsValue, JsValue>;

    /// Validate network and account of the selected wallet
    #[wasm_bindgen(catch)]
    async fn walletCheck() -> std::result::Result<JsValue, JsValue>;
}

/// Best-effort message from a thrown JavaScript value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }

    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

// ============================================================================
// PROVIDER HANDLE
// ============================================================================

/// An EIP-1193 provider object living on the JavaScript side.
#[derive(Debug, Clone)]
pub struct JsProvider {
    inner: JsValue,
}

impl JsProvider {
    pub fn new(inner: JsValue) -> Self {
        Self { inner }
    }

    pub fn js_value(&self) -> &JsValue {
        &self.inner
    }

    fn property(&self, name: &str) -> Option<JsValue> {
        Reflect::get(&self.inner, &JsValue::from_str(name))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }
}

impl ProviderHandle for JsProvider {
    fn chain_id(&self) -> Option<u64> {
        let value = self.property("chainId")?;
        if let Some(number) = value.as_f64() {
            return Some(number as u64);
        }

        let raw = value.as_string()?;
        match raw.strip_prefix("0x") {
            Some(digits) => u64::from_str_radix(digits, 16).ok(),
            None => raw.parse().ok(),
        }
    }

    fn accounts(&self) -> Vec<String> {
        self.property("selectedAddress")
            .and_then(|address| address.as_string())
            .into_iter()
            .collect()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Wrap a subscription payload, treating `null`/`undefined` as "no provider".
pub fn provider_from_js(value: JsValue) -> Option<Rc<dyn ProviderHandle>> {
    if value.is_null() || value.is_undefined() {
        None
    } else {
        Some(Rc::new(JsProvider::new(value)))
    }
}

// ============================================================================
// WALLET SELECTOR
// ============================================================================

/// The Onboard modal as a [`WalletSelector`].
///
/// The modal is shared by every selector built during a page load. Each new
/// selector takes over its provider subscription and releases it on drop.
pub struct OnboardSelector {
    on_provider: Closure<dyn Fn(JsValue)>,
    ready: bool,
}

impl OnboardSelector {
    pub fn new(network_id: u64, callback: ProviderCallback) -> Self {
        let on_provider = Closure::<dyn Fn(JsValue)>::new(move |value: JsValue| {
            callback(provider_from_js(value));
        });

        let ready = match u32::try_from(network_id) {
            Ok(network_id) => match initOnboard(network_id) {
                Ok(()) => {
                    setProviderListener(on_provider.as_ref().unchecked_ref());
                    true
                }
                Err(e) => {
                    log::error!("Wallet modal unavailable: {}", js_error_message(&e));
                    false
                }
            },
            Err(_) => {
                log::error!("Network id {} is out of range for the wallet modal", network_id);
                false
            }
        };

        Self { on_provider, ready }
    }
}

impl Drop for OnboardSelector {
    fn drop(&mut self) {
        // The closure is freed with this struct; the modal must not call it afterwards
        clearProviderListener(self.on_provider.as_ref().unchecked_ref());
    }
}

#[async_trait(?Send)]
impl WalletSelector for OnboardSelector {
    async fn select_wallet(&self) -> Result<()> {
        if !self.ready {
            return Err(AppError::WalletSelection("wallet modal unavailable".to_string()));
        }

        walletSelect()
            .await
            .map(|_| ())
            .map_err(|e| AppError::WalletSelection(js_error_message(&e)))
    }

    async fn check_wallet(&self) -> Result<()> {
        if !self.ready {
            return Err(AppError::WalletCheck("wallet modal unavailable".to_string()));
        }

        walletCheck()
            .await
            .map(|_| ())
            .map_err(|e| AppError::WalletCheck(js_error_message(&e)))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use js_sys::{Function, Object};
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Onboard stand-in that counts instances and exposes its wallet subscription.
    fn install_onboard() {
        Function::new_no_args(
            "window.onboardInstances = 0;
             window.Onboard = (options) => {
                 window.onboardInstances += 1;
                 window.emitWallet = options.subscriptions.wallet;
                 return { walletSelect: async () => true, walletCheck: async () => true };
             };",
        )
        .call0(&JsValue::NULL)
        .unwrap();
    }

    fn emit_wallet(wallet: &JsValue) {
        let emit: Function = Reflect::get(&js_sys::global(), &"emitWallet".into())
            .unwrap()
            .unchecked_into();
        emit.call1(&JsValue::NULL, wallet).unwrap();
    }

    fn recording_selector(seen: &Rc<RefCell<Vec<bool>>>) -> OnboardSelector {
        let sink = seen.clone();
        let callback: ProviderCallback = Rc::new(move |provider: Option<Rc<dyn ProviderHandle>>| {
            sink.borrow_mut().push(provider.is_some());
        });
        OnboardSelector::new(1, callback)
    }

    #[wasm_bindgen_test]
    fn test_modal_is_shared_and_released_on_drop() {
        install_onboard();
        let first_seen = Rc::new(RefCell::new(Vec::new()));
        let second_seen = Rc::new(RefCell::new(Vec::new()));

        let first = recording_selector(&first_seen);
        drop(first);
        let second = recording_selector(&second_seen);

        let instances = Reflect::get(&js_sys::global(), &"onboardInstances".into()).unwrap();
        assert_eq!(instances.as_f64(), Some(1.0));

        let wallet = Object::new();
        Reflect::set(&wallet, &"provider".into(), &Object::new()).unwrap();
        emit_wallet(&wallet);

        assert!(first_seen.borrow().is_empty());
        assert_eq!(*second_seen.borrow(), vec![true]);

        drop(second);
        emit_wallet(&JsValue::NULL);
        assert_eq!(*second_seen.borrow(), vec![true]);
    }
}

//! Transaction Builder Demo - Browser Entry Point
//!
//! Two pages showing how a dapp-owned wallet connection hands a signer to the
//! embedded transaction builder widget.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Transaction builder demo starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}

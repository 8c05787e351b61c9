#![allow(warnings)]
//! Sprachbruecke Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod controller;
mod services;
mod context;
mod components;
mod app;
#[cfg(test)]
mod fakes;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] Logger init failed: {}", e).into());
    }

    mount_to_body(App);
}

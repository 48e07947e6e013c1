#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Binary entry for the search page. Real builds target wasm32; a native
//! invocation only points at the right build command.

#[cfg(target_arch = "wasm32")]
fn main() {
    tubelens_ui::run_app();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "tubelens-ui renders the search page in the browser; build it with `trunk serve` or `cargo build --target wasm32-unknown-unknown`."
    );
}

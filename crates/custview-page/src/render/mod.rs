//! HTML rendering for the read page.
//!
//! The page is a tree of dioxus components rendered to a string with
//! `dioxus-ssr`. Two passes exist. The server pass produces the
//! data-independent shell the server sends first; client-only components
//! appear there as empty placeholders. The client pass renders everything
//! from current state. Keeping data-dependent markup out of the server pass
//! means the first client render never disagrees with the server document.

pub mod back_button;
pub mod client_only;
pub mod document;
pub mod info_card;
pub mod page;

use dioxus::prelude::*;

/// Which render pass is producing markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPass {
    /// Initial document produced on the server, before any client code runs.
    Server,
    /// Render on the client after the page has mounted.
    Client,
}

/// Builds `root` with `props` in a fresh virtual DOM and serializes it.
pub fn render_to_string<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

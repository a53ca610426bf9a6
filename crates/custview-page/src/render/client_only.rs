//! Client-only rendering gate.

use dioxus::prelude::*;

use super::RenderPass;

/// Renders `children` on the client pass and a placeholder named `name`
/// on the server pass. On the server the children are never mounted.
#[component]
pub fn ClientOnly(pass: RenderPass, name: String, children: Element) -> Element {
    match pass {
        RenderPass::Server => rsx! {
            div { "data-client-only": "{name}" }
        },
        RenderPass::Client => children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_to_string;

    #[allow(non_snake_case)]
    fn Exploding() -> Element {
        unreachable!("mounted on the server pass")
    }

    #[allow(non_snake_case)]
    fn Greeting() -> Element {
        rsx! { p { "hi" } }
    }

    fn server_app(_: ()) -> Element {
        rsx! {
            ClientOnly { pass: RenderPass::Server, name: "card".to_string(), Exploding {} }
        }
    }

    fn client_app(_: ()) -> Element {
        rsx! {
            ClientOnly { pass: RenderPass::Client, name: "card".to_string(), Greeting {} }
        }
    }

    #[test]
    fn server_pass_never_mounts_children() {
        assert_eq!(
            render_to_string(server_app, ()),
            r#"<div data-client-only="card"></div>"#
        );
    }

    #[test]
    fn client_pass_renders_children() {
        assert_eq!(render_to_string(client_app, ()), "<p>hi</p>");
    }
}

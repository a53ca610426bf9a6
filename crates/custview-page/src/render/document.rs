//! Full HTML document wrapper.

use dioxus::prelude::*;

use super::page::{ReadPageProps, ReadPageView};
use super::render_to_string;

/// Inputs of the document shell.
#[derive(Props, Debug, Clone, PartialEq)]
pub struct DocumentProps {
    /// Document title.
    pub title: String,
    /// The page placed in `<main>`.
    pub page: ReadPageProps,
}

/// `<html>` element holding the read page.
#[allow(non_snake_case)]
pub fn Document(props: DocumentProps) -> Element {
    let DocumentProps { title, page } = props;
    rsx! {
        html { lang: "ja",
            head {
                meta { charset: "utf-8" }
                title { "{title}" }
            }
            body {
                main {
                    ReadPageView {
                        state: page.state.clone(),
                        back_label: page.back_label.clone(),
                        pass: page.pass,
                    }
                }
            }
        }
    }
}

/// Renders the read page as a complete HTML document.
#[must_use]
pub fn render_document(title: &str, page: ReadPageProps) -> String {
    let html = render_to_string(
        Document,
        DocumentProps {
            title: title.to_string(),
            page,
        },
    );
    format!("<!DOCTYPE html>\n{html}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RenderPass;
    use crate::state::PageState;

    fn page() -> ReadPageProps {
        ReadPageProps {
            state: PageState::Empty,
            back_label: "戻る".to_string(),
            pass: RenderPass::Server,
        }
    }

    #[test]
    fn document_embeds_page_and_escaped_title() {
        let html = render_document("A & B", page());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="ja">"#));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains(r#"<main><div class="card bordered">"#));
    }
}

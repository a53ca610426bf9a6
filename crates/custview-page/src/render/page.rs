//! Read page body: the bordered card holding the customer card (or the
//! failure panel) and the back control.

use custview_common::constants::RETRY_LABEL;
use dioxus::prelude::*;

use super::RenderPass;
use super::back_button::BackButton;
use super::client_only::ClientOnly;
use super::info_card::{COMPONENT_NAME, InfoCard, InfoCardProps};
use crate::state::{FetchFailure, PageState};

/// Inputs of the read page view.
#[derive(Props, Debug, Clone, PartialEq)]
pub struct ReadPageProps {
    /// Current page state.
    pub state: PageState,
    /// Label of the back control.
    pub back_label: String,
    /// Pass producing the markup.
    pub pass: RenderPass,
}

/// The read page.
///
/// The server pass never mounts anything derived from `state`, so the
/// server document is identical for every customer.
#[allow(non_snake_case)]
pub fn ReadPageView(props: ReadPageProps) -> Element {
    let ReadPageProps {
        state,
        back_label,
        pass,
    } = props;

    let body = match &state {
        PageState::Failed(failure) => rsx! {
            FailurePanel { failure: failure.clone() }
        },
        PageState::Empty | PageState::Populated(_) => {
            let card = InfoCardProps::spread(state.record());
            rsx! { InfoCard { fields: card.fields } }
        }
    };

    rsx! {
        div { class: "card bordered",
            ClientOnly { pass, name: COMPONENT_NAME.to_string(), {body} }
            BackButton { label: back_label }
        }
    }
}

#[component]
fn FailurePanel(failure: FetchFailure) -> Element {
    rsx! {
        div {
            class: "alert alert-error",
            "role": "alert",
            "data-customer-id": "{failure.id}",
            p { "{failure.message}" }
            button { r#type: "button", class: "btn", "data-action": "retry", "{RETRY_LABEL}" }
        }
    }
}

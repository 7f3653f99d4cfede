use crate::domain::a001_document_qa::ui::details::DocumentQaDetails;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <DocumentQaDetails />
        </ConfigProvider>
    }
}

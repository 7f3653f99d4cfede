use crate::shared::icons::icon;
use contracts::domain::a001_document_qa::aggregate::UploadedDocumentRef;
use contracts::domain::a001_document_qa::dto::SourceChunk;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn DocumentList(#[prop(into)] documents: Signal<Vec<UploadedDocumentRef>>) -> impl IntoView {
    view! {
        <Show when=move || documents.with(|d| !d.is_empty())>
            <div style="margin-top: 20px; padding: 10px; background: var(--colorNeutralBackground2); border-radius: 4px;">
                <h3>"Uploaded Documents:"</h3>
                <ul style="list-style: none; padding: 0; margin: 0;">
                    <For
                        each=move || documents.get()
                        key=|doc| doc.id.clone()
                        let:doc
                    >
                        <li style="display: flex; align-items: center; gap: 6px; padding: 4px 0;">
                            {icon("document")}
                            {doc.name.clone()}
                        </li>
                    </For>
                </ul>
            </div>
        </Show>
    }
}

/// Source passage as shown under an answer
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub label: String,
    pub text: String,
}

impl SourceLine {
    /// `document_name` is the local upload name, when the document is known
    pub fn new(chunk: &SourceChunk, document_name: Option<&str>) -> Self {
        let document = document_name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Document {}", chunk.document_id));
        Self {
            label: format!(
                "{}, chunk {} ({:.0}% match)",
                document,
                chunk.chunk_index,
                chunk.similarity * 100.0
            ),
            text: chunk.text.clone(),
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AnswerSources(#[prop(into)] sources: Signal<Vec<SourceLine>>) -> impl IntoView {
    view! {
        <Show when=move || sources.with(|s| !s.is_empty())>
            <details style="margin-top: 12px;">
                <summary style="cursor: pointer; font-size: 13px;">
                    {move || format!("Sources ({})", sources.with(|s| s.len()))}
                </summary>
                {move || {
                    sources
                        .get()
                        .into_iter()
                        .map(|line| {
                            view! {
                                <div style="margin-top: 8px; font-size: 13px;">
                                    <div style="font-weight: 600;">{line.label}</div>
                                    <div style="white-space: pre-wrap; opacity: 0.8;">{line.text}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </details>
        </Show>
    }
}

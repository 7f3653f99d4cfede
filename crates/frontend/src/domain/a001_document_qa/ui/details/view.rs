//! Document Q&A - View Component

use super::document_list::{AnswerSources, DocumentList, SourceLine};
use super::view_model::DocumentQaVm;
use crate::domain::a001_document_qa::preview::preview_text;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn DocumentQaDetails() -> impl IntoView {
    let vm = DocumentQaVm::new();

    // Session start: nothing else is accepted until this clear resolves
    vm.start_session_command();

    let session = vm.session;
    let is_starting = move || session.with(|s| !s.is_ready());
    let selected_name = move || session.with(|s| s.selected_file().map(|f| f.name.clone()));
    let documents = Signal::derive(move || session.with(|s| s.documents().to_vec()));
    let preview = move || session.with(|s| preview_text(s.preview()).into_owned());
    let sources = Signal::derive(move || {
        session.with(|s| {
            s.answer()
                .map(|a| {
                    a.sources
                        .iter()
                        .map(|c| SourceLine::new(c, s.document_name(&c.document_id)))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    let handle_file_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            let file = input.files().and_then(|files| files.get(0));
            vm.select_file_command(file);
            // Сбросить input, чтобы можно было выбрать тот же файл повторно
            input.set_value("");
        }
    };

    view! {
        <div style="max-width: 800px; margin: 20px auto; padding: 20px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h1>"Document Q&A System"</h1>
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=move || !session.with(|s| s.can_clear())
                    on_click=move |_| vm.clear_command()
                >
                    {icon("trash")}
                    {move || {
                        if session.with(|s| s.is_clearing()) {
                            " Clearing..."
                        } else {
                            " Clear all documents"
                        }
                    }}
                </Button>
            </Flex>

            <Show when=is_starting>
                <div style="margin-bottom: 12px; color: var(--colorNeutralForeground3);">
                    "Preparing session..."
                </div>
            </Show>

            // Область загрузки
            <div style="border: 2px dashed var(--colorNeutralStroke1); padding: 20px; margin-bottom: 20px; text-align: center;">
                <h2>"Upload Documents"</h2>
                <input
                    type="file"
                    accept=".pdf"
                    disabled=move || session.with(|s| s.is_uploading() || s.is_clearing())
                    on:change=handle_file_change
                />
                {move || {
                    selected_name()
                        .map(|name| {
                            view! {
                                <div style="margin-top: 10px;">"Selected file: " {name}</div>
                            }
                        })
                }}
            </div>

            <Button
                appearance=ButtonAppearance::Primary
                attr:style="width: 100%;"
                disabled=move || !session.with(|s| s.can_upload())
                on_click=move |_| vm.upload_command()
            >
                {icon("upload")}
                {move || {
                    if session.with(|s| s.is_uploading()) {
                        " Uploading..."
                    } else {
                        " Upload Document"
                    }
                }}
            </Button>

            // Error display
            {move || {
                session
                    .with(|s| s.error().map(str::to_string))
                    .map(|e| {
                        view! {
                            <div style="padding: 10px; margin-top: 10px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 4px;">
                                <span style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}

            <DocumentList documents=documents />

            // Preview of the latest upload
            <Show when=move || session.with(|s| !s.preview().is_empty())>
                <div style="background: var(--colorNeutralBackground2); padding: 15px; margin-top: 20px; border-radius: 4px; white-space: pre-wrap; max-height: 300px; overflow-y: auto;">
                    <h3>"Document Preview:"</h3>
                    <div>{preview}</div>
                </div>
            </Show>

            // Вопрос по документам
            <div style="margin-top: 30px; padding: 15px; background: var(--colorBrandBackground2); border-radius: 4px;">
                <h2>"Ask Questions About Your Documents"</h2>
                <Textarea
                    value=vm.question
                    placeholder="Enter your question about the uploaded documents... (Ctrl+Enter to send)"
                    attr:rows=3
                    attr:style="width: 100%; margin-bottom: 10px;"
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && ev.ctrl_key() {
                            ev.prevent_default();
                            if session.with_untracked(|s| s.can_ask()) {
                                vm.ask_command();
                            }
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    attr:style="width: 100%;"
                    disabled=move || !session.with(|s| s.can_ask())
                    on_click=move |_| vm.ask_command()
                >
                    {icon("send")}
                    {move || {
                        if session.with(|s| s.is_answering()) {
                            " Getting Answer..."
                        } else {
                            " Ask Question"
                        }
                    }}
                </Button>
            </div>

            // Ответ
            {move || {
                session
                    .with(|s| s.answer().cloned())
                    .map(|answer| {
                        view! {
                            <div style="padding: 15px; margin-top: 20px; border: 1px solid var(--colorNeutralStroke2); border-radius: 4px;">
                                <h3>"Answer:"</h3>
                                <p style="white-space: pre-wrap;">{answer.text}</p>
                                {answer
                                    .notice
                                    .map(|notice| {
                                        view! {
                                            <div style="font-size: 12px; opacity: 0.7;">
                                                "Answer quoted from the best matching passage: "
                                                {notice}
                                            </div>
                                        }
                                    })}
                                <AnswerSources sources=sources />
                            </div>
                        }
                    })
            }}
        </div>
    }
}

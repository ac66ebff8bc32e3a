use gloo_console::log;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::tool::flow;
use crate::tool::handle::ObjectUrl;
use crate::tool::model::{Releasable, SnapshotAction, SnapshotRequest, SnapshotState};

#[function_component(ThumbnailTool)]
pub fn thumbnail_tool() -> Html {
    let api_key = use_state(String::new);
    let target_url = use_state(|| "https://example.com".to_string());
    let full_page = use_state(|| false);
    let state = use_state(SnapshotState::<ObjectUrl>::idle);

    // Mirror of the currently published handle, so the unmount destructor
    // can revoke it even though it only ever sees the first render's state.
    let live_handle = use_mut_ref(|| None::<ObjectUrl>);

    {
        let live_handle = live_handle.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    if let Some(handle) = live_handle.borrow_mut().take() {
                        handle.release();
                    }
                }
            },
            (),
        );
    }

    let on_api_key_change = {
        let api_key = api_key.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            api_key.set(input.value());
        })
    };

    let on_url_change = {
        let target_url = target_url.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            target_url.set(input.value());
        })
    };

    let on_full_page_toggle = {
        let full_page = full_page.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            full_page.set(input.checked());
        })
    };

    let onsubmit = {
        let api_key = api_key.clone();
        let target_url = target_url.clone();
        let full_page = full_page.clone();
        let state = state.clone();
        let live_handle = live_handle.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = SnapshotRequest {
                target_url: (*target_url).clone(),
                api_key_or_endpoint: (*api_key).clone(),
                full_page: *full_page,
            };

            if let Err(message) = flow::validate(&request) {
                state.set(state.apply(SnapshotAction::Fail(message.to_string())));
                *live_handle.borrow_mut() = None;
                return;
            }

            // Later transitions are applied to this loading snapshot, not
            // to the stale pre-submit value the closure captured, so the
            // old handle is released exactly once.
            let loading = state.apply(SnapshotAction::Begin);
            state.set(loading.clone());
            *live_handle.borrow_mut() = None;

            let state = state.clone();
            let live_handle = live_handle.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Keep the loading state visible; a placeholder service
                // answers too fast to look like a real capture.
                TimeoutFuture::new(config::SIMULATED_LATENCY_MS).await;

                let endpoint = flow::snapshot_url(request.full_page);
                match Request::get(&endpoint).send().await {
                    Ok(response) if response.ok() => match response.binary().await {
                        Ok(bytes) => match ObjectUrl::from_bytes(&bytes) {
                            Ok(handle) => {
                                *live_handle.borrow_mut() = Some(handle.clone());
                                state.set(loading.apply(SnapshotAction::Complete(handle)));
                            }
                            Err(_) => {
                                log!("failed to wrap snapshot bytes in an object URL");
                                state.set(loading.apply(SnapshotAction::Fail(
                                    flow::UNKNOWN_ERROR.to_string(),
                                )));
                            }
                        },
                        Err(e) => {
                            log!("failed to read snapshot body:", e.to_string());
                            state.set(loading.apply(SnapshotAction::Fail(
                                flow::transport_error_message(&e.to_string()),
                            )));
                        }
                    },
                    Ok(response) => {
                        log!("snapshot fetch failed with status:", response.status());
                        state.set(loading.apply(SnapshotAction::Fail(
                            flow::FETCH_FAILED_ERROR.to_string(),
                        )));
                    }
                    Err(e) => {
                        log!("snapshot request failed:", e.to_string());
                        state.set(loading.apply(SnapshotAction::Fail(
                            flow::transport_error_message(&e.to_string()),
                        )));
                    }
                }
            });
        })
    };

    let is_loading = state.is_loading();

    html! {
        <section id="tool" class="tool-section">
            <div class="tool-panel">
                <div class="tool-intro">
                    <h2>{"Generate a Website Thumbnail"}</h2>
                    <p>
                        {"Enter any URL to get a high-quality, live screenshot. \
                          This tool simulates a real screenshot API endpoint."}
                    </p>
                </div>

                <form class="tool-form" {onsubmit}>
                    <div class="tool-field">
                        <label for="apiKey">{"Custom Screenshot API Key/Endpoint"}</label>
                        <input
                            type="text"
                            id="apiKey"
                            value={(*api_key).clone()}
                            oninput={on_api_key_change}
                            placeholder="paste-your-api-key-or-endpoint-here (optional)"
                        />
                    </div>

                    <div class="tool-field">
                        <label for="url">{"Website URL"}</label>
                        <input
                            type="url"
                            id="url"
                            value={(*target_url).clone()}
                            oninput={on_url_change}
                            placeholder="https://example.com"
                            required=true
                        />
                    </div>

                    <div class="tool-actions">
                        <label for="fullPage" class="tool-checkbox">
                            <input
                                type="checkbox"
                                id="fullPage"
                                checked={*full_page}
                                onchange={on_full_page_toggle}
                            />
                            <span>{"Full Page Screenshot"}</span>
                        </label>
                        <button type="submit" disabled={is_loading}>
                            {
                                if is_loading {
                                    html! {
                                        <>
                                            <span class="tool-spinner"></span>
                                            {"Generating..."}
                                        </>
                                    }
                                } else {
                                    html! { {"Generate Thumbnail"} }
                                }
                            }
                        </button>
                    </div>
                </form>

                {
                    if let Some(message) = &state.error {
                        html! { <div class="tool-error">{message.clone()}</div> }
                    } else {
                        html! {}
                    }
                }

                {
                    if let Some(image) = &state.image {
                        html! {
                            <div class="tool-result">
                                <h3>{"Result"}</h3>
                                <div class="tool-result-frame">
                                    <img src={image.as_str().to_string()} alt="Website thumbnail" />
                                </div>
                                <div class="tool-download">
                                    <a
                                        href={image.as_str().to_string()}
                                        download="website_thumbnail.png"
                                    >
                                        {"Download Image"}
                                    </a>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>

            <style>
                {r#"
                .tool-panel {
                    background: rgba(0, 0, 0, 0.3);
                    backdrop-filter: blur(4px);
                    border: 1px solid #1f2937;
                    border-radius: 1rem;
                    padding: 2.5rem 1.5rem;
                    box-shadow: 0 25px 50px -12px rgba(6, 182, 212, 0.1);
                }

                .tool-intro {
                    max-width: 48rem;
                    margin: 0 auto 2rem auto;
                    text-align: center;
                }

                .tool-intro h2 {
                    font-size: 2.5rem;
                    font-weight: 800;
                    margin-bottom: 1rem;
                    background: linear-gradient(90deg, #67e8f9, #c084fc);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .tool-intro p {
                    font-size: 1.1rem;
                    color: #d1d5db;
                }

                .tool-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .tool-field label {
                    display: block;
                    font-size: 0.9rem;
                    color: #d1d5db;
                    margin-bottom: 0.5rem;
                }

                .tool-field input {
                    width: 100%;
                    background: #111827;
                    border: 1px solid #374151;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1rem;
                    color: #ffffff;
                    font-size: 1rem;
                }

                .tool-field input:focus {
                    outline: none;
                    border-color: #06b6d4;
                    box-shadow: 0 0 0 2px rgba(6, 182, 212, 0.4);
                }

                .tool-actions {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .tool-checkbox {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #d1d5db;
                    cursor: pointer;
                }

                .tool-actions button {
                    background: linear-gradient(90deg, #06b6d4, #2563eb);
                    color: #ffffff;
                    font-weight: 700;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 2rem;
                    font-size: 1rem;
                    cursor: pointer;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.75rem;
                    transition: transform 0.3s, opacity 0.3s;
                }

                .tool-actions button:hover:not(:disabled) {
                    transform: scale(1.05);
                }

                .tool-actions button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }

                .tool-spinner {
                    width: 1.1rem;
                    height: 1.1rem;
                    border: 3px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #ffffff;
                    border-radius: 50%;
                    animation: tool-spin 0.8s linear infinite;
                }

                @keyframes tool-spin {
                    to { transform: rotate(360deg); }
                }

                .tool-error {
                    margin-top: 1.5rem;
                    text-align: center;
                    background: rgba(127, 29, 29, 0.5);
                    border: 1px solid #ef4444;
                    color: #fca5a5;
                    padding: 0.75rem;
                    border-radius: 0.5rem;
                }

                .tool-result {
                    margin-top: 2.5rem;
                    text-align: center;
                }

                .tool-result h3 {
                    font-size: 1.5rem;
                    color: #22d3ee;
                    margin-bottom: 1rem;
                }

                .tool-result-frame {
                    display: inline-block;
                    border: 4px solid #374151;
                    border-radius: 0.5rem;
                    padding: 0.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }

                .tool-result-frame img {
                    max-width: 100%;
                    height: auto;
                    border-radius: 0.375rem;
                    display: block;
                }

                .tool-download {
                    margin-top: 1.5rem;
                }

                .tool-download a {
                    display: inline-block;
                    background: #16a34a;
                    color: #ffffff;
                    font-weight: 700;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    transition: transform 0.3s, background 0.3s;
                }

                .tool-download a:hover {
                    background: #22c55e;
                    transform: scale(1.05);
                }
                "#}
            </style>
        </section>
    }
}

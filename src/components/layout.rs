use web_sys::HtmlSelectElement;
use yew::prelude::*;

/// The informational modals reachable from the header navigation. Each
/// variant owns its static content; opening and closing them never
/// touches the tool's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    About,
    Contact,
    Guide,
    Privacy,
    Terms,
    Dmca,
}

impl ModalKind {
    pub const ALL: [ModalKind; 6] = [
        ModalKind::About,
        ModalKind::Contact,
        ModalKind::Guide,
        ModalKind::Privacy,
        ModalKind::Terms,
        ModalKind::Dmca,
    ];

    /// Display name used for nav buttons and the modal title.
    pub fn label(&self) -> &'static str {
        match self {
            ModalKind::About => "About",
            ModalKind::Contact => "Contact",
            ModalKind::Guide => "Guide",
            ModalKind::Privacy => "Privacy Policy",
            ModalKind::Terms => "Terms of Service",
            ModalKind::Dmca => "DMCA",
        }
    }

    /// Reverse of `label`, for the mobile dropdown.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.label() == label)
    }

    fn content(&self) -> Html {
        match self {
            ModalKind::About => html! {
                <p>
                    {"This Website Thumbnail Fetcher is a tool built with Rust, Yew and \
                      WebAssembly to demonstrate how modern web applications can integrate \
                      with external APIs to generate live screenshots of websites. It's \
                      designed for developers, marketers, and designers who need quick \
                      visual previews."}
                </p>
            },
            ModalKind::Contact => html! {
                <p>
                    {"For inquiries, please contact us at "}
                    <a href="mailto:hsini.web@gmail.com">{"hsini.web@gmail.com"}</a>
                    {" or visit "}
                    <a href="https://doodax.com" target="_blank" rel="noopener noreferrer">{"doodax.com"}</a>
                    {"."}
                </p>
            },
            ModalKind::Guide => html! {
                <p>
                    {"Simply enter your custom Screenshot API endpoint, paste the full URL \
                      of the website you want to capture, choose your desired options (like \
                      'Full Page Screenshot'), and click 'Generate Thumbnail'. The tool will \
                      then fetch and display the image, which you can download."}
                </p>
            },
            ModalKind::Privacy => html! {
                <p>
                    {"We respect your privacy. This tool does not store any URLs you enter \
                      or the images generated. All processing is done in real-time. We do \
                      not use cookies or tracking technologies for the core functionality \
                      of this tool."}
                </p>
            },
            ModalKind::Terms => html! {
                <p>
                    {"By using this service, you agree not to use it for any illegal \
                      purposes. You are responsible for ensuring you have the right to \
                      capture and use screenshots of the websites you enter. We are not \
                      liable for any misuse of this tool."}
                </p>
            },
            ModalKind::Dmca => html! {
                <p>
                    {"If you believe that your copyrighted work has been used in a way that \
                      constitutes copyright infringement, please provide our copyright agent \
                      with a notification of claimed infringement containing all of the \
                      required information as described in our full DMCA policy."}
                </p>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
struct ModalProps {
    kind: ModalKind,
    on_close: Callback<MouseEvent>,
}

#[function_component(Modal)]
fn modal(props: &ModalProps) -> Html {
    let stop_bubbling = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {
        <div class="modal-overlay" onclick={props.on_close.clone()}>
            <div class="modal-box" onclick={stop_bubbling}>
                <button class="modal-close" onclick={props.on_close.clone()}>{"\u{00d7}"}</button>
                <h2>{props.kind.label()}</h2>
                <div class="modal-content">{props.kind.content()}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let active_modal = use_state(|| None::<ModalKind>);

    let close_modal = {
        let active_modal = active_modal.clone();
        Callback::from(move |_: MouseEvent| active_modal.set(None))
    };

    let on_menu_select = {
        let active_modal = active_modal.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            active_modal.set(ModalKind::from_label(&select.value()));
        })
    };

    let nav_buttons = ModalKind::ALL
        .iter()
        .map(|kind| {
            let kind = *kind;
            let active_modal = active_modal.clone();
            let onclick = Callback::from(move |_: MouseEvent| active_modal.set(Some(kind)));
            html! {
                <button key={kind.label()} {onclick}>{kind.label()}</button>
            }
        })
        .collect::<Html>();

    html! {
        <div class="chrome">
            <div class="stars"></div>
            <div class="twinkling"></div>

            <div class="chrome-body">
                <header class="chrome-header">
                    <div class="chrome-header-inner">
                        <h1>{"Website Thumbnail Fetcher"}</h1>
                        <nav class="chrome-nav">{nav_buttons}</nav>
                        <div class="chrome-menu">
                            <select onchange={on_menu_select}>
                                <option selected=true disabled=true>{"Menu"}</option>
                                { for ModalKind::ALL.iter().map(|kind| html! {
                                    <option value={kind.label()}>{kind.label()}</option>
                                }) }
                            </select>
                        </div>
                    </div>
                </header>

                <main>{ for props.children.iter() }</main>

                <footer class="chrome-footer">
                    <p class="chrome-credit">
                        <a href="https://github.com/hsinidev" target="_blank" rel="noopener noreferrer">
                            {"Powered by HSINI MOHAMED"}
                        </a>
                    </p>
                    <p>
                        <a href="https://doodax.com" target="_blank" rel="noopener noreferrer">{"doodax.com"}</a>
                        {" \u{2022} "}
                        <a href="mailto:hsini.web@gmail.com">{"hsini.web@gmail.com"}</a>
                    </p>
                </footer>
            </div>

            {
                if let Some(kind) = *active_modal {
                    html! { <Modal {kind} on_close={close_modal} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .chrome {
                    position: relative;
                    min-height: 100vh;
                    color: #ffffff;
                    overflow-x: hidden;
                }

                .chrome-body {
                    position: relative;
                    z-index: 10;
                }

                .chrome-header {
                    padding: 1.5rem 1rem;
                }

                .chrome-header-inner {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                }

                .chrome-header h1 {
                    font-size: 1.6rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    background: linear-gradient(90deg, #22d3ee, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .chrome-nav {
                    display: none;
                }

                .chrome-nav button {
                    background: none;
                    border: none;
                    color: #d1d5db;
                    font-size: 1rem;
                    cursor: pointer;
                    padding: 0.25rem 0.5rem;
                    transition: color 0.3s;
                }

                .chrome-nav button:hover {
                    color: #22d3ee;
                }

                .chrome-menu select {
                    background: #1f2937;
                    border: 1px solid #374151;
                    border-radius: 0.375rem;
                    padding: 0.5rem;
                    color: #ffffff;
                }

                @media (min-width: 768px) {
                    .chrome-nav {
                        display: flex;
                        gap: 1rem;
                    }
                    .chrome-menu {
                        display: none;
                    }
                }

                .chrome-footer {
                    padding: 2rem 1rem;
                    text-align: center;
                    color: #9ca3af;
                }

                .chrome-footer a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.3s;
                }

                .chrome-footer a:hover {
                    color: #22d3ee;
                }

                .chrome-credit a {
                    color: #ffd700;
                    font-weight: 700;
                }

                .chrome-footer p {
                    margin-bottom: 0.5rem;
                    font-size: 0.9rem;
                }

                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.75);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }

                .modal-box {
                    position: relative;
                    background: #111827;
                    border: 1px solid #06b6d4;
                    border-radius: 0.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.5);
                    width: 100%;
                    max-width: 42rem;
                    max-height: 80vh;
                    overflow-y: auto;
                    padding: 1.5rem;
                }

                .modal-box h2 {
                    font-size: 1.5rem;
                    color: #22d3ee;
                    margin-bottom: 1rem;
                }

                .modal-content {
                    color: #d1d5db;
                    line-height: 1.6;
                }

                .modal-content a {
                    color: #22d3ee;
                }

                .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: none;
                    border: none;
                    color: #9ca3af;
                    font-size: 1.5rem;
                    cursor: pointer;
                }

                .modal-close:hover {
                    color: #ffffff;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privacy_and_terms_use_their_long_labels() {
        assert_eq!(ModalKind::Privacy.label(), "Privacy Policy");
        assert_eq!(ModalKind::Terms.label(), "Terms of Service");
        assert_eq!(ModalKind::About.label(), "About");
    }

    #[test]
    fn every_label_round_trips_through_the_menu() {
        for kind in ModalKind::ALL {
            assert_eq!(ModalKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(ModalKind::from_label("Menu"), None);
    }
}

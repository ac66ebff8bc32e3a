use yew::prelude::*;

mod config;
mod components {
    pub mod layout;
}
mod pages {
    pub mod article;
}
mod tool {
    pub mod component;
    pub mod flow;
    pub mod handle;
    pub mod model;
}

use components::layout::Layout;
use pages::article::SeoArticle;
use tool::component::ThumbnailTool;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Layout>
            <div class="page-sections">
                <ThumbnailTool />
                <SeoArticle />
            </div>
            <style>
                {r#"
                .page-sections {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 2rem 1rem 4rem 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }

                @media (min-width: 768px) {
                    .page-sections {
                        padding: 4rem 2rem 6rem 2rem;
                        gap: 6rem;
                    }
                }
                "#}
            </style>
        </Layout>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

// src/main.rs
mod components;
mod pages;
mod tour_config;
mod tour_data;
mod utils;
mod view_state;

use components::navigation::Navigation;
use components::toast::{Notice, ToastStack};
use gloo::timers::callback::Timeout;
use pages::about::AboutPage;
use pages::home::HomePage;
use pages::timeline::TimelinePage;
use pages::tour::TourPage;
use pages::Page;
use std::rc::Rc;
use tour_config::{fetch_tour_config, TourConfig};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// How long a notice stays on screen before it expires on its own.
const NOTICE_TTL_MS: u32 = 4000;

pub enum AppMsg {
    Navigate(Page),
    ConfigLoaded(TourConfig),
    ConfigLoadFailed(String),
    Notify(Notice),
    DismissNotice(u64),
}

pub struct App {
    page: Page,
    config: Rc<TourConfig>,
    loading: bool,
    notices: Vec<(u64, Notice)>,
    next_notice_id: u64,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            let msg = match fetch_tour_config().await {
                Ok(config) => AppMsg::ConfigLoaded(config),
                Err(e) => AppMsg::ConfigLoadFailed(e),
            };
            link.send_message(msg);
        });

        Self {
            page: Page::Home,
            config: Rc::new(TourConfig::builtin()),
            loading: true,
            notices: Vec::new(),
            next_notice_id: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                true
            }
            AppMsg::ConfigLoaded(config) => {
                log::info!("tour manifest loaded: {} locations", config.locations.len());
                self.config = Rc::new(config);
                self.loading = false;
                true
            }
            AppMsg::ConfigLoadFailed(error) => {
                log::warn!("{}; using built-in tour content", error);
                self.loading = false;
                true
            }
            AppMsg::Notify(notice) => {
                let id = self.next_notice_id;
                self.next_notice_id += 1;
                self.notices.push((id, notice));
                let link = ctx.link().clone();
                Timeout::new(NOTICE_TTL_MS, move || {
                    link.send_message(AppMsg::DismissNotice(id));
                })
                .forget();
                true
            }
            AppMsg::DismissNotice(id) => {
                let before = self.notices.len();
                self.notices.retain(|(notice_id, _)| *notice_id != id);
                self.notices.len() != before
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! {
                <div class="app-container">
                    <main style="min-height: 100vh; display: flex; align-items: center; \
                                 justify-content: center;">
                        <div class="loading">{"Загрузка тура..."}</div>
                    </main>
                </div>
            };
        }

        let on_navigate = ctx.link().callback(AppMsg::Navigate);
        let on_notice = ctx.link().callback(AppMsg::Notify);
        let on_dismiss = ctx.link().callback(AppMsg::DismissNotice);

        html! {
            <div class="app-container">
                <Navigation
                    active={self.page}
                    on_navigate={on_navigate.clone()}
                    title={self.config.title.clone()}
                />

                { match self.page {
                    Page::Home => html! {
                        <HomePage on_navigate={on_navigate.clone()} />
                    },
                    Page::Tour => html! {
                        <TourPage
                            locations={self.config.locations.clone()}
                            quiz={self.config.quiz.clone()}
                            {on_notice}
                        />
                    },
                    Page::Timeline => html! {
                        <TimelinePage events={self.config.timeline.clone()} />
                    },
                    Page::About => html! { <AboutPage /> },
                } }

                <ToastStack notices={self.notices.clone()} {on_dismiss} />

                { self.render_footer(&on_navigate) }
            </div>
        }
    }
}

impl App {
    fn render_footer(&self, on_navigate: &Callback<Page>) -> Html {
        html! {
            <footer style="padding: 2rem 1.5rem; background: rgba(148, 163, 184, 0.15);">
                <div style="max-width: 72rem; margin: 0 auto; display: flex; flex-wrap: wrap; \
                            align-items: center; justify-content: space-between; gap: 1rem;">
                    <div style="display: flex; align-items: center; gap: 0.5rem; font-weight: 700; \
                                font-size: 1.1rem;">
                        <span style="width: 1.1rem; height: 1.1rem; border-radius: 9999px; \
                                     background: #2563eb; display: inline-block;"></span>
                        { &self.config.title }
                    </div>
                    <div style="display: flex; gap: 1.5rem;">
                        { for Page::ALL.iter().copied().map(|page| {
                            let on_navigate = on_navigate.clone();
                            let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(page));
                            html! {
                                <button key={page.label()} class="link-btn" {onclick}>
                                    { page.label() }
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </footer>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

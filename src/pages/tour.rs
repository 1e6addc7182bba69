// src/pages/tour.rs
use crate::components::panorama_viewer::PanoramaViewer;
use crate::components::quiz::Quiz;
use crate::components::toast::Notice;
use crate::tour_config::QuizConfig;
use crate::tour_data::{Hotspot, Location};
use crate::view_state::LoadState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TourPageProps {
    pub locations: Vec<Location>,
    pub quiz: QuizConfig,
    pub on_notice: Callback<Notice>,
}

pub enum TourMsg {
    Select(usize),
    Previous,
    Next,
    ToggleQuiz,
    HotspotActivated(Hotspot),
    ViewerLoaded(LoadState),
}

pub struct TourPage {
    current: usize,
    show_quiz: bool,
}

impl Component for TourPage {
    type Message = TourMsg;
    type Properties = TourPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            current: 0,
            show_quiz: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old: &Self::Properties) -> bool {
        // The location list can be replaced under us when the manifest
        // arrives; keep the index valid.
        if self.current >= ctx.props().locations.len() {
            self.current = 0;
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let count = ctx.props().locations.len();
        match msg {
            TourMsg::Select(index) => {
                if index >= count || index == self.current {
                    return false;
                }
                self.current = index;
                true
            }
            TourMsg::Previous => {
                if count == 0 {
                    return false;
                }
                self.current = if self.current == 0 {
                    count - 1
                } else {
                    self.current - 1
                };
                true
            }
            TourMsg::Next => {
                if count == 0 {
                    return false;
                }
                self.current = (self.current + 1) % count;
                true
            }
            TourMsg::ToggleQuiz => {
                self.show_quiz = !self.show_quiz;
                true
            }
            TourMsg::HotspotActivated(hotspot) => {
                log::info!("hotspot activated: {}", hotspot.id);
                false
            }
            TourMsg::ViewerLoaded(state) => {
                match state {
                    LoadState::Ready => log::info!("panorama ready"),
                    LoadState::Failed => log::error!("panorama failed to load"),
                    LoadState::Loading => {}
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let locations = &ctx.props().locations;
        let Some(location) = locations.get(self.current) else {
            return html! {
                <main class="page" style="padding: 6rem 1.5rem 4rem;">
                    <p>{"Локации тура недоступны."}</p>
                </main>
            };
        };
        let link = ctx.link();

        let on_hotspot_activate = link.callback(TourMsg::HotspotActivated);
        let on_load = link.callback(TourMsg::ViewerLoaded);
        let previous = link.callback(|_| TourMsg::Previous);
        let next = link.callback(|_| TourMsg::Next);
        let toggle_quiz = link.callback(|_| TourMsg::ToggleQuiz);

        html! {
            <main class="page" style="padding: 6rem 1.5rem 4rem; max-width: 72rem; margin: 0 auto;">
                <div style="margin-bottom: 2rem;">
                    <h1>{"Виртуальный тур по ЛЭТИ"}</h1>
                    <p class="muted" style="max-width: 48rem;">
                        {"Исследуйте исторические места ЛЭТИ через интерактивные панорамы. \
                          Кликайте на информационные точки, чтобы узнать больше."}
                    </p>
                </div>

                <div style="display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem;">
                    { for locations.iter().enumerate().map(|(index, loc)| {
                        let onclick = link.callback(move |_| TourMsg::Select(index));
                        let class = if index == self.current {
                            "location-pill active"
                        } else {
                            "location-pill"
                        };
                        html! {
                            <button key={loc.id.clone()} {class} {onclick}>
                                { &loc.name }
                            </button>
                        }
                    }) }
                </div>

                <div style="margin-bottom: 1.5rem;">
                    <h2>{ &location.name }</h2>
                    <p class="muted">{ &location.description }</p>
                </div>

                <div style="margin-bottom: 2rem;">
                    <PanoramaViewer
                        panorama_url={location.image_url.clone()}
                        hotspots={location.hotspots.clone()}
                        on_hotspot_activate={Some(on_hotspot_activate)}
                        on_load={Some(on_load)}
                        on_notice={Some(ctx.props().on_notice.clone())}
                    />
                </div>

                <div style="display: flex; justify-content: space-between; margin-bottom: 3rem;">
                    <button class="secondary-btn" onclick={previous}>
                        {"← Предыдущая локация"}
                    </button>
                    <button class="secondary-btn" onclick={next}>
                        {"Следующая локация →"}
                    </button>
                </div>

                <div style="margin-bottom: 2rem;">
                    <div style="display: flex; align-items: center; justify-content: space-between; \
                                margin-bottom: 1rem;">
                        <h2>{"Проверьте свои знания"}</h2>
                        <button class="primary-btn" onclick={toggle_quiz}>
                            { if self.show_quiz { "Скрыть тест" } else { "Показать тест" } }
                        </button>
                    </div>

                    { if self.show_quiz {
                        let quiz = &ctx.props().quiz;
                        html! {
                            <Quiz
                                title={quiz.title.clone()}
                                description={quiz.description.clone()}
                                questions={quiz.questions.clone()}
                            />
                        }
                    } else {
                        html! {}
                    } }
                </div>
            </main>
        }
    }
}

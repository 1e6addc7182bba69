// src/pages/timeline.rs
use crate::components::timeline::Timeline;
use crate::tour_data::TimelineEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimelinePageProps {
    pub events: Vec<TimelineEvent>,
}

pub enum TimelinePageMsg {
    Select(TimelineEvent),
    OpenDetailed,
    CloseDetailed,
}

pub struct TimelinePage {
    selected: Option<TimelineEvent>,
    detailed: bool,
}

impl Component for TimelinePage {
    type Message = TimelinePageMsg;
    type Properties = TimelinePageProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            selected: ctx.props().events.first().cloned(),
            detailed: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TimelinePageMsg::Select(event) => {
                self.selected = Some(event);
                true
            }
            TimelinePageMsg::OpenDetailed => {
                if self.selected.is_none() {
                    return false;
                }
                self.detailed = true;
                true
            }
            TimelinePageMsg::CloseDetailed => {
                self.detailed = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <main class="page" style="padding: 6rem 1.5rem 4rem; max-width: 72rem; margin: 0 auto;">
                <div style="margin-bottom: 2rem;">
                    <h1>{"Хронология истории ЛЭТИ"}</h1>
                    <p class="muted" style="max-width: 48rem;">
                        {"Исследуйте ключевые моменты в истории Санкт-Петербургского \
                          государственного электротехнического университета «ЛЭТИ», \
                          от основания до современности."}
                    </p>
                </div>

                { if self.detailed {
                    self.render_detailed(ctx)
                } else {
                    let on_event_select = link.callback(TimelinePageMsg::Select);
                    let open_detailed = link.callback(|_| TimelinePageMsg::OpenDetailed);
                    html! {
                        <>
                            <Timeline events={ctx.props().events.clone()} {on_event_select} />
                            { if self.selected.is_some() {
                                html! {
                                    <button class="secondary-btn" onclick={open_detailed}>
                                        {"Подробнее о событии"}
                                    </button>
                                }
                            } else {
                                html! {}
                            } }
                        </>
                    }
                } }
            </main>
        }
    }
}

impl TimelinePage {
    fn render_detailed(&self, ctx: &Context<Self>) -> Html {
        let Some(event) = &self.selected else {
            return html! {};
        };
        let close = ctx.link().callback(|_| TimelinePageMsg::CloseDetailed);

        html! {
            <div class="event-detail">
                <button class="secondary-btn" style="margin-bottom: 2rem;" onclick={close}>
                    {"← Вернуться к хронологии"}
                </button>
                <div class="glass" style="border-radius: 0.75rem; overflow: hidden;">
                    { if let Some(image) = &event.image {
                        html! {
                            <img
                                src={image.clone()}
                                alt={event.title.clone()}
                                style="width: 100%; max-height: 24rem; object-fit: cover; display: block;"
                            />
                        }
                    } else {
                        html! {}
                    } }
                    <div style="padding: 1.5rem;">
                        <div style="font-size: 2.5rem; font-weight: 700;">{ event.year }</div>
                        <h2>{ &event.title }</h2>
                        <p class="muted">{ &event.description }</p>
                    </div>
                </div>
            </div>
        }
    }
}

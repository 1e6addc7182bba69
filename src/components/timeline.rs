// src/components/timeline.rs
use crate::tour_data::{timeline_percent, TimelineEvent};
use crate::utils::resource_url;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement};
use yew::events::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub events: Vec<TimelineEvent>,
    pub on_event_select: Callback<TimelineEvent>,
}

pub enum TimelineMsg {
    Select(u32),
    DragStart(f64),
    DragMove(f64),
    DragEnd,
    ScrollBy(f64),
}

/// Horizontally drag-scrollable band of year nodes with a preview of the
/// active event underneath.
pub struct Timeline {
    scroll_ref: NodeRef,
    active_event_id: Option<u32>,
    dragging: bool,
    drag_start_x: f64,
    drag_start_scroll: f64,
}

impl Component for Timeline {
    type Message = TimelineMsg;
    type Properties = TimelineProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            scroll_ref: NodeRef::default(),
            active_event_id: ctx.props().events.first().map(|e| e.id),
            dragging: false,
            drag_start_x: 0.0,
            drag_start_scroll: 0.0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TimelineMsg::Select(event_id) => {
                if self.active_event_id == Some(event_id) {
                    return false;
                }
                self.active_event_id = Some(event_id);
                if let Some(event) = ctx.props().events.iter().find(|e| e.id == event_id) {
                    ctx.props().on_event_select.emit(event.clone());
                }
                true
            }
            TimelineMsg::DragStart(x) => {
                if let Some(el) = self.scroll_ref.cast::<HtmlElement>() {
                    self.dragging = true;
                    self.drag_start_x = x;
                    self.drag_start_scroll = f64::from(el.scroll_left());
                }
                false
            }
            TimelineMsg::DragMove(x) => {
                if !self.dragging {
                    return false;
                }
                if let Some(el) = self.scroll_ref.cast::<HtmlElement>() {
                    let walk = (x - self.drag_start_x) * 2.0;
                    el.set_scroll_left((self.drag_start_scroll - walk) as i32);
                }
                false
            }
            TimelineMsg::DragEnd => {
                self.dragging = false;
                false
            }
            TimelineMsg::ScrollBy(fraction) => {
                if let Some(el) = self.scroll_ref.cast::<HtmlElement>() {
                    let step = f64::from(el.client_width()) * fraction;
                    el.set_scroll_left(el.scroll_left() + step as i32);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let mut events: Vec<&TimelineEvent> = ctx.props().events.iter().collect();
        events.sort_by_key(|e| e.year);
        let min_year = events.first().map_or(0, |e| e.year);
        let max_year = events.last().map_or(0, |e| e.year);
        let band_width = ((max_year - min_year).max(5) * 20).max(100);

        let onmousedown = link.callback(|e: MouseEvent| {
            e.prevent_default();
            TimelineMsg::DragStart(f64::from(e.page_x()))
        });
        let onmousemove = link.callback(|e: MouseEvent| TimelineMsg::DragMove(f64::from(e.page_x())));
        let onmouseup = link.callback(|_: MouseEvent| TimelineMsg::DragEnd);
        let onmouseleave = link.callback(|_: MouseEvent| TimelineMsg::DragEnd);
        let scroll_back = link.callback(|_| TimelineMsg::ScrollBy(-0.1));
        let scroll_forward = link.callback(|_| TimelineMsg::ScrollBy(0.1));

        html! {
            <div class="timeline" style="width: 100%; padding: 2rem 0;">
                <div style="position: relative;">
                    <button
                        class="scroll-btn"
                        onclick={scroll_back}
                        aria-label="Прокрутить влево"
                        style="position: absolute; left: 0; top: 50%; transform: translateY(-50%); z-index: 10;"
                    >
                        {"‹"}
                    </button>

                    <div
                        ref={self.scroll_ref.clone()}
                        class="timeline-band"
                        style="overflow-x: auto; padding: 1rem 3rem; scrollbar-width: none; cursor: grab;"
                        {onmousedown}
                        {onmousemove}
                        {onmouseup}
                        {onmouseleave}
                    >
                        <div style={format!("position: relative; width: {}px; min-height: 100px;", band_width)}>
                            <div style="position: absolute; left: 0; right: 0; top: 50%; height: 2px; \
                                        background: #d1d5db; transform: translateY(-50%);"></div>
                            { for events.iter().map(|event| self.render_node(ctx, event, min_year, max_year)) }
                        </div>
                    </div>

                    <button
                        class="scroll-btn"
                        onclick={scroll_forward}
                        aria-label="Прокрутить вправо"
                        style="position: absolute; right: 0; top: 50%; transform: translateY(-50%); z-index: 10;"
                    >
                        {"›"}
                    </button>
                </div>

                { self.render_preview(ctx) }
            </div>
        }
    }
}

impl Timeline {
    fn render_node(
        &self,
        ctx: &Context<Self>,
        event: &TimelineEvent,
        min_year: i32,
        max_year: i32,
    ) -> Html {
        let position = timeline_percent(event.year, min_year, max_year);
        let is_active = self.active_event_id == Some(event.id);
        let onclick = {
            let id = event.id;
            ctx.link().callback(move |_| TimelineMsg::Select(id))
        };
        let node_style = if is_active {
            "width: 1.4rem; height: 1.4rem; border-radius: 9999px; background: #2563eb;"
        } else {
            "width: 1rem; height: 1rem; border-radius: 9999px; background: #d1d5db;"
        };

        html! {
            <div
                key={event.id}
                style={format!("position: absolute; top: 50%; transform: translateY(-50%); left: {}%;", position)}
            >
                <button
                    {onclick}
                    class="timeline-node-btn"
                    style="display: flex; flex-direction: column; align-items: center; gap: 0.4rem; \
                           background: none; border: none; cursor: pointer;"
                >
                    <div style={node_style}></div>
                    <div style="font-size: 0.85rem; font-weight: 500;">{ event.year }</div>
                </button>
            </div>
        }
    }

    fn render_preview(&self, ctx: &Context<Self>) -> Html {
        let Some(event) = ctx
            .props()
            .events
            .iter()
            .find(|e| Some(e.id) == self.active_event_id)
        else {
            return html! {};
        };

        // Swap in a placeholder if the event's illustration cannot load.
        let onerror = Callback::from(|e: Event| {
            if let Some(target) = e.target() {
                if let Ok(img) = target.dyn_into::<HtmlImageElement>() {
                    img.set_src(&resource_url("public/placeholder.svg"));
                    img.set_alt("Изображение недоступно");
                }
            }
        });

        html! {
            <div class="timeline-preview" style="margin-top: 2rem; display: flex; gap: 2rem; \
                 align-items: center; flex-wrap: wrap;">
                { if let Some(image) = &event.image {
                    html! {
                        <div style="flex: 1 1 250px; max-width: 320px; border-radius: 0.5rem; overflow: hidden;">
                            <img
                                src={image.clone()}
                                alt={event.title.clone()}
                                {onerror}
                                style="width: 100%; height: auto; display: block;"
                            />
                        </div>
                    }
                } else {
                    html! {}
                } }
                <div style="flex: 2 1 300px;">
                    <div style="font-size: 2rem; font-weight: 700;">{ event.year }</div>
                    <h3>{ &event.title }</h3>
                    <p class="muted">{ &event.description }</p>
                </div>
            </div>
        }
    }
}

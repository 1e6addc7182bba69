// src/components/panorama_viewer.rs
use crate::components::toast::Notice;
use crate::tour_data::Hotspot;
use crate::view_state::{ControlMode, LoadState, ViewState};
use gloo::timers::callback::Interval;
use gloo_events::EventListener;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, KeyboardEvent};
use yew::events::{MouseEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

/// Milliseconds between idle-rotation ticks.
const AUTO_ROTATE_INTERVAL_MS: u32 = 50;

#[derive(Properties, PartialEq)]
pub struct PanoramaViewerProps {
    pub panorama_url: String,
    #[prop_or_default]
    pub hotspots: Vec<Hotspot>,
    /// Raised once per marker activation with the activated hotspot.
    #[prop_or_default]
    pub on_hotspot_activate: Option<Callback<Hotspot>>,
    /// Raised on load completion, with `Ready` or `Failed`.
    #[prop_or_default]
    pub on_load: Option<Callback<LoadState>>,
    /// User-facing notices (reset confirmation, load failure). The host
    /// decides how, and whether, to display them.
    #[prop_or_default]
    pub on_notice: Option<Callback<Notice>>,
    #[prop_or(true)]
    pub auto_rotate: bool,
    #[prop_or(1.0)]
    pub initial_zoom: f32,
    #[prop_or("70vh".to_string())]
    pub viewport_height: String,
    /// Scales raw pointer deltas into degrees (or pixels in Move mode).
    #[prop_or(0.5)]
    pub sensitivity: f32,
}

pub enum PanoramaMsg {
    DragStart(f32, f32),
    DragMove(f32, f32),
    DragEnd,
    Wheel(f32),
    ZoomIn,
    ZoomOut,
    SetMode(ControlMode),
    Reset,
    ActivateHotspot(usize),
    DismissInfo,
    ImageReady(u32),
    ImageFailed(u32),
    RotateTick,
}

/// Keeps a preload's image element and listeners alive until it completes
/// or is superseded. Dropping the handle detaches the listeners, which is
/// what cancels a load made stale by a URL change.
struct PreloadHandle {
    url: String,
    _image: HtmlImageElement,
    _on_load: EventListener,
    _on_error: EventListener,
}

pub struct PanoramaViewer {
    view: ViewState,
    load: LoadState,
    active_hotspot: Option<Hotspot>,
    /// Once a manual drag or mode toggle happens, idle rotation stays off
    /// until the next location.
    auto_rotate_suspended: bool,
    load_generation: u32,
    preload: Option<PreloadHandle>,
    rotate_timer: Option<Interval>,
    _keyboard: EventListener,
}

impl Component for PanoramaViewer {
    type Message = PanoramaMsg;
    type Properties = PanoramaViewerProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let keyboard = EventListener::new(&document(), "keydown", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                match key_event.key().as_str() {
                    "+" | "=" => link.send_message(PanoramaMsg::ZoomIn),
                    "-" | "_" => link.send_message(PanoramaMsg::ZoomOut),
                    "r" | "R" => link.send_message(PanoramaMsg::Reset),
                    _ => {}
                }
            }
        });

        warn_out_of_viewport_hotspots(&ctx.props().hotspots);

        let mut viewer = Self {
            view: ViewState::new(ctx.props().initial_zoom),
            load: LoadState::Loading,
            active_hotspot: None,
            auto_rotate_suspended: false,
            load_generation: 0,
            preload: None,
            rotate_timer: None,
            _keyboard: keyboard,
        };
        viewer.begin_load(ctx);
        viewer
    }

    fn changed(&mut self, ctx: &Context<Self>, old: &Self::Properties) -> bool {
        if ctx.props().panorama_url != old.panorama_url {
            // A new location: everything mount-scoped starts over.
            self.view = ViewState::new(ctx.props().initial_zoom);
            self.active_hotspot = None;
            self.auto_rotate_suspended = false;
            self.rotate_timer = None;
            warn_out_of_viewport_hotspots(&ctx.props().hotspots);
            self.begin_load(ctx);
            true
        } else {
            ctx.props() != old
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PanoramaMsg::DragStart(x, y) => {
                self.suspend_auto_rotate();
                self.view.begin_drag(x, y);
                false
            }
            PanoramaMsg::DragMove(x, y) => {
                self.view.drag_to(x, y, ctx.props().sensitivity)
            }
            PanoramaMsg::DragEnd => {
                if self.view.dragging {
                    self.view.end_drag();
                    true
                } else {
                    false
                }
            }
            PanoramaMsg::Wheel(delta_y) => {
                self.view.wheel_zoom(delta_y);
                true
            }
            PanoramaMsg::ZoomIn => {
                self.view.zoom_in();
                true
            }
            PanoramaMsg::ZoomOut => {
                self.view.zoom_out();
                true
            }
            PanoramaMsg::SetMode(mode) => {
                if self.view.mode != mode {
                    self.suspend_auto_rotate();
                    self.view.set_mode(mode);
                    true
                } else {
                    false
                }
            }
            PanoramaMsg::Reset => {
                self.view.reset();
                self.notify(ctx, Notice::success("Вид панорамы сброшен"));
                true
            }
            PanoramaMsg::ActivateHotspot(index) => {
                let Some(hotspot) = ctx.props().hotspots.get(index) else {
                    return false;
                };
                if let Some(callback) = &ctx.props().on_hotspot_activate {
                    callback.emit(hotspot.clone());
                }
                // Two rapid activations are last-wins; re-activating the
                // current hotspot changes nothing.
                if self.active_hotspot.as_ref() == Some(hotspot) {
                    false
                } else {
                    self.active_hotspot = Some(hotspot.clone());
                    true
                }
            }
            PanoramaMsg::DismissInfo => {
                self.active_hotspot = None;
                true
            }
            PanoramaMsg::ImageReady(generation) => {
                if generation != self.load_generation {
                    log::debug!("ignoring stale panorama load (generation {})", generation);
                    return false;
                }
                self.preload = None;
                self.load = LoadState::Ready;
                if let Some(callback) = &ctx.props().on_load {
                    callback.emit(LoadState::Ready);
                }
                if ctx.props().auto_rotate && !self.auto_rotate_suspended {
                    let link = ctx.link().clone();
                    self.rotate_timer = Some(Interval::new(AUTO_ROTATE_INTERVAL_MS, move || {
                        link.send_message(PanoramaMsg::RotateTick);
                    }));
                }
                true
            }
            PanoramaMsg::ImageFailed(generation) => {
                if generation != self.load_generation {
                    log::debug!("ignoring stale panorama error (generation {})", generation);
                    return false;
                }
                log::error!(
                    "failed to load panorama image: {}",
                    ctx.props().panorama_url
                );
                self.preload = None;
                self.load = LoadState::Failed;
                if let Some(callback) = &ctx.props().on_load {
                    callback.emit(LoadState::Failed);
                }
                self.notify(ctx, Notice::error("Не удалось загрузить панораму"));
                true
            }
            PanoramaMsg::RotateTick => self.view.auto_rotate_tick(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let container_style = format!(
            "position: relative; width: 100%; height: {}; overflow: hidden; \
             border-radius: 0.75rem; background: rgba(0, 0, 0, 0.2); user-select: none;",
            ctx.props().viewport_height
        );

        html! {
            <div class="panorama-viewer" style={container_style}>
                { self.render_stage(ctx) }
                { self.render_markers(ctx) }
                { self.render_loading() }
                { self.render_failed() }
                { self.render_controls(ctx) }
                { self.render_info_panel(ctx) }
                <div
                    class="panorama-hint"
                    style="position: absolute; bottom: 1rem; left: 1rem; padding: 0.4rem 0.8rem; \
                           border-radius: 9999px; background: rgba(255, 255, 255, 0.25); \
                           backdrop-filter: blur(6px); font-size: 0.75rem;"
                >
                    { match self.view.mode {
                        ControlMode::Rotate => "Перемещайте мышью для обзора панорамы",
                        ControlMode::Move => "Перемещайте мышью для сдвига изображения",
                    } }
                </div>
            </div>
        }
    }
}

impl PanoramaViewer {
    /// Starts preloading the current image. A repeated attempt for the same
    /// in-flight URL is a no-op: one instance never runs two loads of the
    /// same image at once.
    fn begin_load(&mut self, ctx: &Context<Self>) {
        let url = ctx.props().panorama_url.clone();
        if let Some(active) = &self.preload {
            if active.url == url && self.load == LoadState::Loading {
                return;
            }
        }

        self.load_generation += 1;
        let generation = self.load_generation;
        self.load = LoadState::Loading;
        // Drops the superseded preload's listeners before the new one starts.
        self.preload = None;

        let Ok(image) = HtmlImageElement::new() else {
            log::error!("could not create image element for panorama preload");
            self.load = LoadState::Failed;
            return;
        };
        let link = ctx.link().clone();
        let on_load = EventListener::once(&image, "load", move |_| {
            link.send_message(PanoramaMsg::ImageReady(generation));
        });
        let link = ctx.link().clone();
        let on_error = EventListener::once(&image, "error", move |_| {
            link.send_message(PanoramaMsg::ImageFailed(generation));
        });
        image.set_src(&url);
        self.preload = Some(PreloadHandle {
            url,
            _image: image,
            _on_load: on_load,
            _on_error: on_error,
        });
    }

    fn suspend_auto_rotate(&mut self) {
        self.auto_rotate_suspended = true;
        self.rotate_timer = None;
    }

    fn notify(&self, ctx: &Context<Self>, notice: Notice) {
        if let Some(callback) = &ctx.props().on_notice {
            callback.emit(notice);
        }
    }

    fn render_stage(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let onmousedown = link.callback(|e: MouseEvent| {
            e.prevent_default();
            PanoramaMsg::DragStart(e.client_x() as f32, e.client_y() as f32)
        });
        let onmousemove = link.callback(|e: MouseEvent| {
            PanoramaMsg::DragMove(e.client_x() as f32, e.client_y() as f32)
        });
        let onmouseup = link.callback(|_: MouseEvent| PanoramaMsg::DragEnd);
        let onmouseleave = link.callback(|_: MouseEvent| PanoramaMsg::DragEnd);

        // Single-finger touch shares the mouse code path.
        let ontouchstart = link.batch_callback(|e: TouchEvent| {
            e.touches()
                .get(0)
                .map(|t| PanoramaMsg::DragStart(t.client_x() as f32, t.client_y() as f32))
        });
        let ontouchmove = link.batch_callback(|e: TouchEvent| {
            e.prevent_default();
            e.touches()
                .get(0)
                .map(|t| PanoramaMsg::DragMove(t.client_x() as f32, t.client_y() as f32))
        });
        let ontouchend = link.callback(|_: TouchEvent| PanoramaMsg::DragEnd);

        // Wheel zoom replaces native scrolling over the viewport.
        let onwheel = link.callback(|e: WheelEvent| {
            e.prevent_default();
            PanoramaMsg::Wheel(e.delta_y() as f32)
        });

        let cursor = if self.view.dragging { "grabbing" } else { "grab" };
        let stage_style = format!(
            "width: 100%; height: 100%; perspective: 1000px; cursor: {};",
            cursor
        );
        // Cross-fade instead of a hard cut once the image is decoded.
        let opacity = if self.load == LoadState::Ready { 1.0 } else { 0.0 };
        let surface_style = format!(
            "width: 100%; height: 100%; transform-style: preserve-3d; \
             background-image: url({}); background-size: cover; \
             background-position: center; background-repeat: no-repeat; \
             opacity: {}; transition: opacity 0.6s ease; {}",
            ctx.props().panorama_url,
            opacity,
            self.view.transform_style()
        );

        html! {
            <div
                class="panorama-stage"
                style={stage_style}
                {onmousedown}
                {onmousemove}
                {onmouseup}
                {onmouseleave}
                {ontouchstart}
                {ontouchmove}
                {ontouchend}
                {onwheel}
            >
                <div class="panorama-surface" style={surface_style}></div>
            </div>
        }
    }

    /// Markers are anchored to the container box by their normalized
    /// percentages, not to the transformed surface: they sit on the glass
    /// while the panorama moves beneath them.
    fn render_markers(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <>
                { for ctx.props().hotspots.iter().enumerate().map(|(index, hotspot)| {
                    let onclick = {
                        let link = link.clone();
                        Callback::from(move |e: MouseEvent| {
                            // A marker tap must not double as a drag start.
                            e.stop_propagation();
                            link.send_message(PanoramaMsg::ActivateHotspot(index));
                        })
                    };
                    let onmousedown = Callback::from(|e: MouseEvent| e.stop_propagation());
                    let ontouchstart = Callback::from(|e: TouchEvent| e.stop_propagation());
                    let style = format!(
                        "position: absolute; left: {}%; top: {}%; transform: translate(-50%, -50%); \
                         width: 1.75rem; height: 1.75rem; border-radius: 9999px; border: none; \
                         background: rgba(37, 99, 235, 0.85); color: white; cursor: pointer; \
                         box-shadow: 0 0 0 4px rgba(37, 99, 235, 0.25); z-index: 5;",
                        hotspot.position.x, hotspot.position.y
                    );
                    html! {
                        <button
                            key={hotspot.id.clone()}
                            class="panorama-hotspot"
                            {style}
                            {onclick}
                            {onmousedown}
                            {ontouchstart}
                            aria-label={format!("Информация о «{}»", hotspot.title)}
                        >
                            {"i"}
                        </button>
                    }
                }) }
            </>
        }
    }

    fn render_loading(&self) -> Html {
        if self.load != LoadState::Loading {
            return html! {};
        }
        html! {
            <div
                class="panorama-loading"
                style="position: absolute; inset: 0; display: flex; align-items: center; \
                       justify-content: center; backdrop-filter: blur(4px); z-index: 10;"
            >
                <div style="text-align: center;">
                    <div class="spinner"></div>
                    <p>{"Загрузка панорамы..."}</p>
                </div>
            </div>
        }
    }

    fn render_failed(&self) -> Html {
        if self.load != LoadState::Failed {
            return html! {};
        }
        html! {
            <div
                class="panorama-failed"
                style="position: absolute; inset: 0; display: flex; align-items: center; \
                       justify-content: center; z-index: 10;"
            >
                <div style="text-align: center;">
                    <p style="font-weight: 600;">{"Не удалось загрузить панораму"}</p>
                    <p style="font-size: 0.85rem;">{"Попробуйте выбрать локацию ещё раз"}</p>
                </div>
            </div>
        }
    }

    fn render_controls(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let zoom_in = link.callback(|_| PanoramaMsg::ZoomIn);
        let zoom_out = link.callback(|_| PanoramaMsg::ZoomOut);
        let reset = link.callback(|_| PanoramaMsg::Reset);
        let rotate_mode = link.callback(|_| PanoramaMsg::SetMode(ControlMode::Rotate));
        let move_mode = link.callback(|_| PanoramaMsg::SetMode(ControlMode::Move));

        let mode_class = |mode: ControlMode| {
            if self.view.mode == mode {
                "active"
            } else {
                ""
            }
        };

        html! {
            <div
                class="panorama-controls"
                style="position: absolute; bottom: 1rem; right: 1rem; display: flex; gap: 0.4rem; \
                       align-items: center; z-index: 15;"
            >
                <button class={mode_class(ControlMode::Rotate)} onclick={rotate_mode} title="Режим вращения">
                    {"Вращение"}
                </button>
                <button class={mode_class(ControlMode::Move)} onclick={move_mode} title="Режим сдвига">
                    {"Сдвиг"}
                </button>
                <button onclick={zoom_in} title="Приблизить (+)">{"🔍 +"}</button>
                <button onclick={zoom_out} title="Отдалить (-)">{"🔍 -"}</button>
                <span class="zoom-level">{format!("{}%", (self.view.zoom * 100.0) as i32)}</span>
                <button onclick={reset} title="Сбросить вид (R)">{"⟲"}</button>
            </div>
        }
    }

    fn render_info_panel(&self, ctx: &Context<Self>) -> Html {
        let Some(hotspot) = &self.active_hotspot else {
            return html! {};
        };
        let on_close = ctx.link().callback(|_| PanoramaMsg::DismissInfo);

        html! {
            <div
                class="panorama-info-card"
                style="position: absolute; right: 1rem; top: 1rem; max-width: 24rem; padding: 1rem; \
                       border-radius: 0.5rem; background: rgba(255, 255, 255, 0.92); \
                       box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); z-index: 20;"
            >
                <button
                    class="close-btn"
                    onclick={on_close}
                    aria-label="Закрыть"
                    style="position: absolute; right: 0.5rem; top: 0.5rem;"
                >
                    {"×"}
                </button>
                <h3 style="margin-top: 0;">{ &hotspot.title }</h3>
                { if let Some(image) = &hotspot.image {
                    html! {
                        <div style="margin-bottom: 0.75rem; border-radius: 0.4rem; overflow: hidden;">
                            <img src={image.clone()} alt={hotspot.title.clone()} style="width: 100%; height: auto; display: block;" />
                        </div>
                    }
                } else {
                    html! {}
                } }
                <p style="font-size: 0.9rem;">{ &hotspot.description }</p>
                { if let Some(link) = &hotspot.link {
                    html! {
                        <a href={link.clone()} target="_blank" rel="noopener noreferrer">
                            {"Узнать больше"}
                        </a>
                    }
                } else {
                    html! {}
                } }
            </div>
        }
    }
}

fn warn_out_of_viewport_hotspots(hotspots: &[Hotspot]) {
    for hotspot in hotspots {
        if !hotspot.position.in_viewport() {
            log::warn!(
                "hotspot '{}' position ({}, {}) lies outside the viewport",
                hotspot.id,
                hotspot.position.x,
                hotspot.position.y
            );
        }
    }
}

// src/components/navigation.rs
use crate::pages::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active: Page,
    pub on_navigate: Callback<Page>,
    pub title: String,
}

/// Fixed header with the site navigation. The burger menu collapses again
/// as soon as a destination is picked.
#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_item = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            on_navigate.emit(page);
            menu_open.set(false);
        });
        let class = if props.active == page {
            "nav-item active"
        } else {
            "nav-item"
        };
        html! {
            <button key={page.label()} {class} {onclick}>{ page.label() }</button>
        }
    };

    html! {
        <header
            class="site-header"
            style="position: fixed; top: 0; left: 0; right: 0; z-index: 50; \
                   backdrop-filter: blur(8px); background: rgba(255, 255, 255, 0.75);"
        >
            <div class="header-inner" style="display: flex; align-items: center; \
                 justify-content: space-between; padding: 0.75rem 1.5rem;">
                <button
                    class="site-logo"
                    onclick={{
                        let on_navigate = props.on_navigate.clone();
                        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Home))
                    }}
                    style="display: flex; align-items: center; gap: 0.5rem; font-weight: 700; \
                           font-size: 1.25rem; background: none; border: none; cursor: pointer;"
                >
                    <span style="width: 1.5rem; height: 1.5rem; border-radius: 9999px; \
                                 background: #2563eb; display: inline-block;"></span>
                    { &props.title }
                </button>

                <nav class="desktop-nav">
                    { for Page::ALL.iter().copied().map(nav_item.clone()) }
                </nav>

                <button class="menu-toggle" onclick={toggle_menu} aria-label={
                    if *menu_open { "Закрыть меню" } else { "Открыть меню" }
                }>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            { if *menu_open {
                html! {
                    <nav class="mobile-nav" style="display: flex; flex-direction: column; \
                         padding: 0.5rem 1.5rem 1rem;">
                        { for Page::ALL.iter().copied().map(nav_item) }
                    </nav>
                }
            } else {
                html! {}
            } }
        </header>
    }
}

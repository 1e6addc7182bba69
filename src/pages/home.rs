// src/pages/home.rs
use crate::pages::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let go_tour = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Tour))
    };
    let go_timeline = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Page::Timeline))
    };

    html! {
        <main class="page">
            <section
                class="hero"
                style="min-height: 100vh; display: flex; align-items: center; \
                       background: linear-gradient(160deg, #1e3a8a 0%, #1e293b 60%, #0f172a 100%); \
                       color: white; padding: 0 1.5rem;"
            >
                <div style="max-width: 48rem; margin: 0 auto;">
                    <span style="display: inline-block; padding: 0.25rem 0.75rem; border-radius: 9999px; \
                                 background: rgba(37, 99, 235, 0.8); font-size: 0.85rem; margin-bottom: 1rem;">
                        {"Виртуальный тур"}
                    </span>
                    <h1 style="font-size: 3rem; margin: 0 0 1.5rem;">
                        {"История ЛЭТИ в интерактивном формате"}
                    </h1>
                    <p style="font-size: 1.25rem; opacity: 0.9; margin-bottom: 2rem; max-width: 36rem;">
                        {"Погрузитесь в увлекательное путешествие по истории старейшего \
                          электротехнического университета Европы"}
                    </p>
                    <div style="display: flex; gap: 1rem; flex-wrap: wrap;">
                        <button class="primary-btn" onclick={go_tour.clone()}>
                            {"Начать тур →"}
                        </button>
                        <button class="secondary-btn" onclick={go_timeline.clone()}>
                            {"Хронология событий"}
                        </button>
                    </div>
                </div>
            </section>

            <section style="padding: 4rem 1.5rem; max-width: 72rem; margin: 0 auto;">
                <h2 style="text-align: center; margin-bottom: 2.5rem;">{"Что вас ждёт"}</h2>
                <div style="display: flex; gap: 1.5rem; flex-wrap: wrap;">
                    <div class="feature-card" style="flex: 1 1 250px;">
                        <h3>{"Интерактивные панорамы"}</h3>
                        <p class="muted">
                            {"Осмотритесь в исторических местах университета: главный корпус, \
                              музей и воссозданная лаборатория начала XX века."}
                        </p>
                        <button class="link-btn" onclick={go_tour}>{"К панорамам →"}</button>
                    </div>
                    <div class="feature-card" style="flex: 1 1 250px;">
                        <h3>{"Хронология"}</h3>
                        <p class="muted">
                            {"Ключевые события с 1886 года до наших дней на интерактивной \
                              временной ленте."}
                        </p>
                        <button class="link-btn" onclick={go_timeline}>{"К хронологии →"}</button>
                    </div>
                    <div class="feature-card" style="flex: 1 1 250px;">
                        <h3>{"Тест по истории"}</h3>
                        <p class="muted">
                            {"Проверьте, насколько хорошо вы запомнили историю университета, \
                              в небольшом тесте после тура."}
                        </p>
                    </div>
                </div>
            </section>
        </main>
    }
}

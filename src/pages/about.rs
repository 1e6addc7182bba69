// src/pages/about.rs
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AboutTab {
    Features,
    Team,
    Contacts,
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let active_tab = use_state(|| AboutTab::Features);

    let tab_button = |tab: AboutTab, label: &'static str| {
        let active_tab = active_tab.clone();
        let class = if *active_tab == tab {
            "tab-btn active"
        } else {
            "tab-btn"
        };
        let onclick = Callback::from(move |_: MouseEvent| active_tab.set(tab));
        html! { <button {class} {onclick}>{ label }</button> }
    };

    html! {
        <main class="page" style="padding: 6rem 1.5rem 4rem; max-width: 56rem; margin: 0 auto;">
            <h1 style="margin-bottom: 1.5rem;">{"О проекте"}</h1>

            <div class="glass" style="border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 2rem;">
                <h2>{"Виртуальный тур по истории ЛЭТИ"}</h2>
                <p class="muted">
                    {"Этот проект представляет собой интерактивный виртуальный тур по истории \
                      Санкт-Петербургского государственного электротехнического университета \
                      «ЛЭТИ» им. В.И. Ульянова (Ленина) — старейшего электротехнического \
                      университета Европы."}
                </p>
                <p>
                    {"Основанный в 1886 году как Техническое училище почтово-телеграфного \
                      ведомства, ЛЭТИ прошел долгий и славный путь, став одним из ведущих \
                      технических университетов России. Наш виртуальный тур позволяет \
                      посетителям погрузиться в богатую историю университета через \
                      интерактивные панорамы, хронологическую ленту событий и \
                      мультимедийный контент."}
                </p>
            </div>

            <div class="glass" style="border-radius: 0.75rem; padding: 1.5rem;">
                <div style="display: flex; gap: 0.5rem; margin-bottom: 1.5rem;">
                    { tab_button(AboutTab::Features, "Особенности") }
                    { tab_button(AboutTab::Team, "Команда") }
                    { tab_button(AboutTab::Contacts, "Контакты") }
                </div>

                { match *active_tab {
                    AboutTab::Features => html! {
                        <ul>
                            <li>{"Интерактивные панорамы исторических мест с информационными точками"}</li>
                            <li>{"Хронологическая лента ключевых событий с 1886 года"}</li>
                            <li>{"Тест для проверки знаний по истории университета"}</li>
                            <li>{"Работает целиком в браузере, без установки"}</li>
                        </ul>
                    },
                    AboutTab::Team => html! {
                        <p class="muted">
                            {"Проект создан студентами и выпускниками университета, \
                              увлечёнными его историей."}
                        </p>
                    },
                    AboutTab::Contacts => html! {
                        <p class="muted">
                            {"Вопросы и предложения по наполнению тура присылайте через \
                              страницу проекта."}
                        </p>
                    },
                } }
            </div>
        </main>
    }
}

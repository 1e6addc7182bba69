// src/tour_config.rs
use crate::tour_data::{
    Hotspot, Location, Position, QuizOption, QuizQuestion, TimelineEvent,
};
use crate::utils::resource_url;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub questions: Vec<QuizQuestion>,
}

/// Everything the site renders: locations with hotspots, the history
/// timeline and the quiz. Normally fetched from `public/tour/manifest.json`;
/// the built-in registry below is the fallback when the manifest is absent
/// or malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourConfig {
    pub title: String,
    pub subtitle: String,
    pub locations: Vec<Location>,
    pub timeline: Vec<TimelineEvent>,
    pub quiz: QuizConfig,
}

pub async fn fetch_tour_config() -> Result<TourConfig, String> {
    // Cache-bust so edited manifests show up without a hard refresh.
    let cache_bust = js_sys::Date::now() as u64;
    let url = resource_url(&format!("public/tour/manifest.json?v={}", cache_bust));
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch tour manifest: {:?}", e))?;
    if !resp.ok() {
        return Err(format!("Tour manifest not found (HTTP {})", resp.status()));
    }
    resp.json::<TourConfig>()
        .await
        .map_err(|e| format!("Failed to parse tour manifest: {:?}", e))
}

impl TourConfig {
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Built-in tour content, used when no manifest is deployed.
    pub fn builtin() -> Self {
        Self {
            title: "ЛЭТИ Тур".to_string(),
            subtitle: "История ЛЭТИ в интерактивном формате".to_string(),
            locations: builtin_locations(),
            timeline: builtin_timeline(),
            quiz: QuizConfig {
                title: "Тест по истории ЛЭТИ".to_string(),
                description: Some(
                    "Проверьте, насколько хорошо вы знаете историю \
                     Электротехнического института"
                        .to_string(),
                ),
                questions: builtin_quiz_questions(),
            },
        }
    }
}

fn builtin_locations() -> Vec<Location> {
    vec![
        Location {
            id: "main-building".to_string(),
            name: "Главный корпус".to_string(),
            description: "Историческое здание главного корпуса ЛЭТИ, \
                          построенное в начале XX века"
                .to_string(),
            image_url: "/public/tour/panoramas/main-building.jpg".to_string(),
            hotspots: vec![
                Hotspot {
                    id: "main-entrance".to_string(),
                    position: Position::new(35.0, 45.0),
                    title: "Главный вход".to_string(),
                    description: "Исторический вход в главный корпус ЛЭТИ, \
                                  оформленный в классическом стиле начала XX века"
                        .to_string(),
                    image: Some("/public/tour/details/main-entrance.jpg".to_string()),
                    link: None,
                },
                Hotspot {
                    id: "memorial-plaque".to_string(),
                    position: Position::new(65.0, 40.0),
                    title: "Мемориальная доска".to_string(),
                    description: "Мемориальная доска в честь выдающихся ученых, \
                                  работавших в ЛЭТИ в разные годы"
                        .to_string(),
                    image: Some("/public/tour/details/memorial-plaque.jpg".to_string()),
                    link: None,
                },
            ],
        },
        Location {
            id: "historical-museum".to_string(),
            name: "Музей истории ЛЭТИ".to_string(),
            description: "Музей, содержащий экспонаты и артефакты, отражающие \
                          богатую историю университета"
                .to_string(),
            image_url: "/public/tour/panoramas/historical-museum.jpg".to_string(),
            hotspots: vec![
                Hotspot {
                    id: "first-exhibits".to_string(),
                    position: Position::new(30.0, 50.0),
                    title: "Первые экспонаты".to_string(),
                    description: "Коллекция первых электротехнических приборов, \
                                  использовавшихся для обучения студентов в конце \
                                  XIX века"
                        .to_string(),
                    image: Some("/public/tour/details/first-exhibits.jpg".to_string()),
                    link: None,
                },
                Hotspot {
                    id: "famous-graduates".to_string(),
                    position: Position::new(70.0, 45.0),
                    title: "Выдающиеся выпускники".to_string(),
                    description: "Стенд, посвященный знаменитым выпускникам ЛЭТИ, \
                                  внесшим значительный вклад в науку и технику"
                        .to_string(),
                    image: Some("/public/tour/details/famous-graduates.jpg".to_string()),
                    link: None,
                },
            ],
        },
        Location {
            id: "laboratory".to_string(),
            name: "Историческая лаборатория".to_string(),
            description: "Воссозданная историческая лаборатория начала XX века"
                .to_string(),
            image_url: "/public/tour/panoramas/laboratory.jpg".to_string(),
            hotspots: vec![
                Hotspot {
                    id: "equipment".to_string(),
                    position: Position::new(40.0, 55.0),
                    title: "Оборудование".to_string(),
                    description: "Историческое лабораторное оборудование, на котором \
                                  проводились первые эксперименты в области \
                                  электротехники"
                        .to_string(),
                    image: Some("/public/tour/details/equipment.jpg".to_string()),
                    link: None,
                },
                Hotspot {
                    id: "scientists-workspace".to_string(),
                    position: Position::new(60.0, 40.0),
                    title: "Рабочее место ученого".to_string(),
                    description: "Воссозданное рабочее место известного ученого, \
                                  работавшего в ЛЭТИ в начале XX века"
                        .to_string(),
                    image: Some("/public/tour/details/scientists-workspace.jpg".to_string()),
                    link: None,
                },
            ],
        },
    ]
}

fn builtin_timeline() -> Vec<TimelineEvent> {
    let events = [
        (
            1,
            1886,
            "Основание Технического училища почтово-телеграфного ведомства",
            "15 июня 1886 года по указу императора Александра III было основано \
             Техническое училище почтово-телеграфного ведомства — первое в России \
             электротехническое учебное заведение.",
        ),
        (
            2,
            1891,
            "Преобразование в Электротехнический институт",
            "Техническое училище было преобразовано в Электротехнический институт, \
             что позволило расширить программу обучения и привлечь новых \
             преподавателей.",
        ),
        (
            3,
            1899,
            "Присвоение имени Императора Александра III",
            "Электротехническому институту было присвоено имя Императора \
             Александра III, что подчеркнуло его значимость для развития \
             технического образования в России.",
        ),
        (
            4,
            1903,
            "Начало работы А.С. Попова в институте",
            "Александр Степанович Попов, изобретатель радио, становится профессором \
             физики в Электротехническом институте и вносит значительный вклад в \
             развитие радиотехники.",
        ),
        (
            5,
            1918,
            "Преобразования после Октябрьской революции",
            "После Октябрьской революции институт был реорганизован. Изменились \
             программы обучения, были открыты новые специальности.",
        ),
        (
            6,
            1925,
            "Присвоение имени В.И. Ульянова (Ленина)",
            "Институту было присвоено имя В.И. Ульянова (Ленина), которое \
             сохраняется в названии вуза до настоящего времени.",
        ),
        (
            7,
            1941,
            "ЛЭТИ в годы Великой Отечественной войны",
            "Во время блокады Ленинграда многие сотрудники и студенты института \
             ушли на фронт. Несмотря на тяжелейшие условия, в ЛЭТИ продолжались \
             исследования для оборонной промышленности.",
        ),
        (
            8,
            1991,
            "ЛЭТИ в постсоветский период",
            "После распада СССР институт успешно адаптировался к новым \
             экономическим условиям, сохранив и приумножив образовательный и \
             научный потенциал.",
        ),
        (
            9,
            2003,
            "Получение статуса университета",
            "ЛЭТИ получил статус университета и был переименован в \
             Санкт-Петербургский государственный электротехнический университет \
             «ЛЭТИ» им. В.И. Ульянова (Ленина).",
        ),
        (
            10,
            2021,
            "ЛЭТИ в современную эпоху",
            "Сегодня ЛЭТИ — один из ведущих технических вузов России, сочетающий \
             традиции и инновации, активно участвующий в международных \
             образовательных и научных проектах.",
        ),
    ];

    events
        .into_iter()
        .map(|(id, year, title, description)| TimelineEvent {
            id,
            year,
            title: title.to_string(),
            description: description.to_string(),
            image: Some(format!("/public/tour/timeline/{}.jpg", year)),
        })
        .collect()
}

fn builtin_quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: 1,
            text: "В каком году был основан Электротехнический институт?".to_string(),
            options: vec![
                option("a", "1886", true),
                option("b", "1895", false),
                option("c", "1900", false),
                option("d", "1905", false),
            ],
            explanation: Some(
                "Учебное заведение было основано в 1886 году как Техническое \
                 училище почтово-телеграфного ведомства."
                    .to_string(),
            ),
        },
        QuizQuestion {
            id: 2,
            text: "Кто был первым директором Электротехнического института?".to_string(),
            options: vec![
                option("a", "А.С. Попов", false),
                option("b", "Н.Г. Писаревский", true),
                option("c", "П.Д. Войнаровский", false),
                option("d", "М.А. Шателен", false),
            ],
            explanation: Some(
                "Первым директором института был Николай Григорьевич Писаревский, \
                 который руководил учебным заведением с 1886 по 1895 год."
                    .to_string(),
            ),
        },
        QuizQuestion {
            id: 3,
            text: "Какое изобретение продемонстрировал А.С. Попов 7 мая 1895 года?"
                .to_string(),
            options: vec![
                option("a", "Телефон", false),
                option("b", "Электрическую лампочку", false),
                option("c", "Радиоприёмник", true),
                option("d", "Телеграф", false),
            ],
            explanation: Some(
                "7 мая 1895 года А.С. Попов продемонстрировал первый в мире \
                 радиоприёмник на заседании Русского физико-химического общества."
                    .to_string(),
            ),
        },
    ]
}

fn option(id: &str, text: &str, is_correct: bool) -> QuizOption {
    QuizOption {
        id: id.to_string(),
        text: text.to_string(),
        is_correct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_is_complete() {
        let config = TourConfig::builtin();
        assert_eq!(config.locations.len(), 3);
        assert!(config.locations.iter().all(|l| !l.hotspots.is_empty()));
        assert_eq!(config.timeline.len(), 10);
        assert_eq!(config.quiz.questions.len(), 3);
        // Every question has exactly one correct answer.
        for question in &config.quiz.questions {
            let correct = question.options.iter().filter(|o| o.is_correct).count();
            assert_eq!(correct, 1, "question {} has {} correct options", question.id, correct);
        }
    }

    #[test]
    fn builtin_hotspots_are_within_viewport() {
        let config = TourConfig::builtin();
        for location in &config.locations {
            for hotspot in &location.hotspots {
                assert!(hotspot.position.in_viewport(), "hotspot {}", hotspot.id);
            }
        }
    }

    #[test]
    fn location_lookup_by_id() {
        let config = TourConfig::builtin();
        assert!(config.location("laboratory").is_some());
        assert!(config.location("no-such-place").is_none());
    }

    #[test]
    fn manifest_json_deserializes() {
        let manifest = r#"{
            "title": "Тур",
            "subtitle": "История",
            "locations": [{
                "id": "hall",
                "name": "Зал",
                "description": "Актовый зал",
                "image_url": "/public/tour/panoramas/hall.jpg",
                "hotspots": [{
                    "id": "stage",
                    "position": {"x": 50.0, "y": 60.0},
                    "title": "Сцена",
                    "description": "Историческая сцена",
                    "link": "https://etu.ru"
                }]
            }],
            "timeline": [{
                "id": 1,
                "year": 1886,
                "title": "Основание",
                "description": "Основание училища"
            }],
            "quiz": {
                "title": "Тест",
                "questions": [{
                    "id": 1,
                    "text": "Год основания?",
                    "options": [
                        {"id": "a", "text": "1886", "is_correct": true},
                        {"id": "b", "text": "1900", "is_correct": false}
                    ]
                }]
            }
        }"#;
        let config: TourConfig = serde_json::from_str(manifest).unwrap();
        assert_eq!(config.locations[0].hotspots[0].link.as_deref(), Some("https://etu.ru"));
        assert!(config.quiz.description.is_none());
        assert!(config.timeline[0].image.is_none());
    }
}

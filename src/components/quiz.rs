// src/components/quiz.rs
use crate::tour_data::QuizQuestion;
use yew::prelude::*;

/// Quiz progression, separate from the component so the scoring and restart
/// rules are testable without a DOM.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QuizProgress {
    pub current: usize,
    pub selected: Option<String>,
    pub checked: bool,
    pub score: usize,
    pub answered: usize,
    pub completed: bool,
}

impl QuizProgress {
    /// The answer is frozen once checked. Returns whether the selection took.
    pub fn select(&mut self, option_id: String) -> bool {
        if self.checked {
            return false;
        }
        self.selected = Some(option_id);
        true
    }

    /// Grades the current selection. A check with nothing selected, a double
    /// check, or a check past the end of the quiz is a no-op.
    pub fn check(&mut self, questions: &[QuizQuestion]) -> bool {
        if self.checked || self.selected.is_none() {
            return false;
        }
        let Some(question) = questions.get(self.current) else {
            return false;
        };
        self.checked = true;
        self.answered += 1;
        let correct = question
            .options
            .iter()
            .any(|o| o.is_correct && Some(o.id.as_str()) == self.selected.as_deref());
        if correct {
            self.score += 1;
        }
        true
    }

    /// Advances to the next question; completes the quiz after the last one.
    pub fn advance(&mut self, total: usize) {
        if self.current + 1 < total {
            self.current += 1;
            self.selected = None;
            self.checked = false;
        } else {
            self.completed = true;
        }
    }

    pub fn restart(&mut self) {
        *self = Self::default();
    }

    pub fn progress_percent(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.answered as f64 / total as f64 * 100.0
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizProps {
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    pub questions: Vec<QuizQuestion>,
}

pub enum QuizMsg {
    SelectOption(String),
    CheckAnswer,
    NextQuestion,
    Restart,
}

pub struct Quiz {
    progress: QuizProgress,
}

impl Component for Quiz {
    type Message = QuizMsg;
    type Properties = QuizProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            progress: QuizProgress::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            QuizMsg::SelectOption(option_id) => self.progress.select(option_id),
            QuizMsg::CheckAnswer => self.progress.check(&ctx.props().questions),
            QuizMsg::NextQuestion => {
                self.progress.advance(ctx.props().questions.len());
                true
            }
            QuizMsg::Restart => {
                self.progress.restart();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let questions = &ctx.props().questions;
        if questions.is_empty() {
            return html! {
                <div class="quiz-panel glass">
                    <p>{"Вопросы теста недоступны."}</p>
                </div>
            };
        }
        if self.progress.completed {
            return self.render_result(ctx, questions.len());
        }
        let Some(question) = questions.get(self.progress.current) else {
            return html! {};
        };
        self.render_question(ctx, question, questions.len())
    }
}

impl Quiz {
    fn render_result(&self, ctx: &Context<Self>, total: usize) -> Html {
        let restart = ctx.link().callback(|_| QuizMsg::Restart);
        let score = self.progress.score;
        let (heading, verdict) = if score == total {
            (
                "Поздравляем!",
                "Идеальный результат! Вы отлично знаете историю ЛЭТИ.",
            )
        } else if score * 10 >= total * 7 {
            ("Хороший результат!", "Вы хорошо знаете историю ЛЭТИ!")
        } else {
            (
                "Результат теста",
                "Вы можете ещё лучше узнать историю ЛЭТИ в нашем виртуальном туре.",
            )
        };

        html! {
            <div class="quiz-panel glass" style="padding: 1.5rem; border-radius: 0.75rem;">
                <h2 style="text-align: center;">{ heading }</h2>
                <div style="text-align: center; margin: 1.5rem 0;">
                    <div style="font-size: 3rem; font-weight: 700;">
                        { format!("{} / {}", score, total) }
                    </div>
                    <p>{ verdict }</p>
                </div>
                <button class="primary-btn" style="width: 100%;" onclick={restart}>
                    {"Пройти тест ещё раз"}
                </button>
            </div>
        }
    }

    fn render_question(&self, ctx: &Context<Self>, question: &QuizQuestion, total: usize) -> Html {
        let link = ctx.link();
        let progress = self.progress.progress_percent(total);

        let action = if !self.progress.checked {
            let check = link.callback(|_| QuizMsg::CheckAnswer);
            let disabled = self.progress.selected.is_none();
            html! {
                <button class="primary-btn" style="flex: 1;" onclick={check} {disabled}>
                    {"Проверить ответ"}
                </button>
            }
        } else {
            let next = link.callback(|_| QuizMsg::NextQuestion);
            let label = if self.progress.current + 1 < total {
                "Следующий вопрос"
            } else {
                "Завершить тест"
            };
            html! {
                <button class="primary-btn" style="flex: 1;" onclick={next}>{ label }</button>
            }
        };

        html! {
            <div class="quiz-panel glass" style="padding: 1.5rem; border-radius: 0.75rem;">
                <h2 style="margin-bottom: 0.25rem;">{ &ctx.props().title }</h2>
                { if let Some(description) = &ctx.props().description {
                    html! { <p class="muted">{ description }</p> }
                } else {
                    html! {}
                } }

                <div style="width: 100%; height: 4px; background: #e5e7eb; border-radius: 9999px; \
                            margin: 1rem 0 1.5rem; overflow: hidden;">
                    <div style={format!(
                        "height: 100%; background: #2563eb; width: {}%; transition: width 0.3s;",
                        progress
                    )}></div>
                </div>

                <p class="muted" style="font-size: 0.85rem;">
                    { format!("Вопрос {} из {}", self.progress.current + 1, total) }
                </p>
                <h3 style="margin: 0.5rem 0 1rem;">{ &question.text }</h3>

                <div style="display: flex; flex-direction: column; gap: 0.6rem;">
                    { for question.options.iter().map(|option| {
                        let select = {
                            let id = option.id.clone();
                            link.callback(move |_| QuizMsg::SelectOption(id.clone()))
                        };
                        let is_selected =
                            self.progress.selected.as_deref() == Some(option.id.as_str());
                        let class = if self.progress.checked {
                            if option.is_correct {
                                "quiz-option correct"
                            } else if is_selected {
                                "quiz-option wrong"
                            } else {
                                "quiz-option"
                            }
                        } else if is_selected {
                            "quiz-option selected"
                        } else {
                            "quiz-option"
                        };
                        let marker = if self.progress.checked {
                            if option.is_correct {
                                "✓"
                            } else if is_selected {
                                "✗"
                            } else {
                                ""
                            }
                        } else {
                            ""
                        };
                        html! {
                            <div key={option.id.clone()} {class} onclick={select}
                                 style="display: flex; align-items: center; justify-content: space-between; \
                                        border: 1px solid #d1d5db; border-radius: 0.5rem; padding: 0.8rem 1rem; \
                                        cursor: pointer;">
                                <span>{ &option.text }</span>
                                <span>{ marker }</span>
                            </div>
                        }
                    }) }
                </div>

                { if self.progress.checked {
                    if let Some(explanation) = &question.explanation {
                        html! {
                            <div class="quiz-explanation"
                                 style="background: #f3f4f6; border-radius: 0.5rem; padding: 1rem; \
                                        margin-top: 1rem;">
                                <h4 style="margin: 0 0 0.25rem;">{"Пояснение:"}</h4>
                                <p class="muted" style="margin: 0; font-size: 0.9rem;">{ explanation }</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                } else {
                    html! {}
                } }

                <div style="display: flex; gap: 1rem; margin-top: 1.25rem;">
                    { action }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour_data::QuizOption;

    fn questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                id: 1,
                text: "Год основания?".into(),
                options: vec![
                    QuizOption { id: "a".into(), text: "1886".into(), is_correct: true },
                    QuizOption { id: "b".into(), text: "1900".into(), is_correct: false },
                ],
                explanation: None,
            },
            QuizQuestion {
                id: 2,
                text: "Изобретатель радио?".into(),
                options: vec![
                    QuizOption { id: "a".into(), text: "Попов".into(), is_correct: true },
                    QuizOption { id: "b".into(), text: "Шателен".into(), is_correct: false },
                ],
                explanation: None,
            },
        ]
    }

    #[test]
    fn scoring_counts_only_correct_answers() {
        let questions = questions();
        let mut quiz = QuizProgress::default();

        assert!(quiz.select("a".into()));
        assert!(quiz.check(&questions));
        assert_eq!(quiz.score, 1);

        quiz.advance(questions.len());
        assert!(!quiz.completed);

        quiz.select("b".into());
        quiz.check(&questions);
        assert_eq!(quiz.score, 1);

        quiz.advance(questions.len());
        assert!(quiz.completed);
    }

    #[test]
    fn selection_is_frozen_after_check() {
        let questions = questions();
        let mut quiz = QuizProgress::default();
        quiz.select("b".into());
        assert!(quiz.check(&questions));
        assert!(!quiz.select("a".into()));
        assert_eq!(quiz.selected.as_deref(), Some("b"));
        // A second check must not award or count anything.
        assert!(!quiz.check(&questions));
        assert_eq!(quiz.answered, 1);
    }

    #[test]
    fn check_without_selection_is_a_noop() {
        let questions = questions();
        let mut quiz = QuizProgress::default();
        assert!(!quiz.check(&questions));
        assert_eq!(quiz.answered, 0);
        assert!(!quiz.checked);
    }

    #[test]
    fn restart_clears_everything() {
        let questions = questions();
        let mut quiz = QuizProgress::default();
        quiz.select("a".into());
        quiz.check(&questions);
        quiz.advance(questions.len());
        quiz.restart();
        assert_eq!(quiz, QuizProgress::default());
    }

    #[test]
    fn progress_tracks_answered_not_position() {
        let questions = questions();
        let mut quiz = QuizProgress::default();
        assert_eq!(quiz.progress_percent(questions.len()), 0.0);
        quiz.select("a".into());
        quiz.check(&questions);
        assert_eq!(quiz.progress_percent(questions.len()), 50.0);
        // Moving on without answering does not change the bar.
        quiz.advance(questions.len());
        assert_eq!(quiz.progress_percent(questions.len()), 50.0);
    }
}

use crate::error::AppResult;
use crate::ledger::AnswerRecord;
use crate::questions::{Question, QuestionStore};
use handlebars::Handlebars;
use serde::Serialize;

const QUESTION_TEMPLATE: &str = "question";
const RESULTS_TEMPLATE: &str = "results";
const NOT_FOUND_TEMPLATE: &str = "not_found";

/// Shown when a recorded index no longer resolves against the question set.
const MISSING_ANSWER_TEXT: &str = "–";

const QUESTION_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Quiz Frage</title>
        <style>
            body { font-family: Arial, sans-serif; text-align: center; margin: 20px; }
            .question { font-size: 24px; margin-bottom: 20px; }
            table { width: 50%; margin: auto; border-collapse: collapse; }
            th, td { padding: 10px; border: 1px solid #000; }
            button.correct { background-color: #4caf50; color: #fff; }
            button.chosen { background-color: #f44336; color: #fff; }
        </style>
    </head>
    <body data-task-id="{{task_id}}">
        <h1>ArV-Quiz</h1>
        <table>
            <tr><th>Task ID</th><td>{{task_id}}</td></tr>
            <tr><th>Kategorie</th><td>{{category}}</td></tr>
            <tr><th>Frage</th><td class="question">{{question}}</td></tr>
        </table>
        <h2>Antworten</h2>
        <table>
            {{#each options}}
            {{#if ../answered}}
            <tr><td><button{{#if class}} class="{{class}}"{{/if}} disabled>{{text}}</button></td></tr>
            {{else}}
            <tr><td><button onclick="submitAnswer({{index}})">{{text}}</button></td></tr>
            {{/if}}
            {{/each}}
        </table>
        {{#unless answered}}
        <script>
            function submitAnswer(answer) {
                fetch('/answer', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ taskId: document.body.dataset.taskId, answer })
                }).then(() => location.reload())
                .catch(error => console.error("Fehler:", error));
            }
        </script>
        {{/unless}}
    </body>
</html>
"#;

const RESULTS_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Quiz Ergebnisse</title>
        <style>
            body { font-family: Arial, sans-serif; text-align: center; margin: 20px; }
            table { width: 70%; margin: auto; border-collapse: collapse; }
            th, td { padding: 10px; border: 1px solid #000; }
            .correct { color: green; }
            .wrong { color: red; }
        </style>
    </head>
    <body>
        <h1>Ergebnisse</h1>
        <table>
            <tr><th>Task ID</th><th>Kategorie</th><th>Angegebene Antwort</th><th>Richtige Antwort</th><th>Korrekt?</th></tr>
            {{#each rows}}
            <tr><td>{{task_id}}</td><td>{{category}}</td><td>{{given_text}}</td><td>{{correct_text}}</td>{{#if correct}}<td class="correct">✔️</td>{{else}}<td class="wrong">❌</td>{{/if}}</tr>
            {{else}}
            <tr><td colspan="5">Noch keine Antworten</td></tr>
            {{/each}}
        </table>
        <button onclick="resetResults()">Reset</button>
        <script>
            function resetResults() {
                fetch('/reset', {
                    method: 'POST'
                }).then(() => location.reload())
                .catch(error => console.error("Fehler:", error));
            }
        </script>
    </body>
</html>
"#;

const NOT_FOUND_PAGE: &str = "<h1>Frage nicht gefunden</h1>";

#[derive(Debug, Serialize)]
struct QuestionView<'a> {
    task_id: &'a str,
    category: &'a str,
    question: &'a str,
    answered: bool,
    options: Vec<OptionView<'a>>,
}

#[derive(Debug, Serialize)]
struct OptionView<'a> {
    index: usize,
    text: &'a str,
    class: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ResultsView<'a> {
    rows: Vec<ResultRow<'a>>,
}

#[derive(Debug, Serialize)]
struct ResultRow<'a> {
    task_id: &'a str,
    category: &'a str,
    given_text: &'a str,
    correct_text: &'a str,
    correct: bool,
}

/// Renders the HTML pages. Values are HTML-escaped by the registry.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> AppResult<Self> {
        let mut registry = Handlebars::new();
        registry.register_template_string(QUESTION_TEMPLATE, QUESTION_PAGE)?;
        registry.register_template_string(RESULTS_TEMPLATE, RESULTS_PAGE)?;
        registry.register_template_string(NOT_FOUND_TEMPLATE, NOT_FOUND_PAGE)?;
        Ok(Self { registry })
    }

    /// Renders a question. With a given answer the options are disabled, the
    /// correct one is marked `correct` and a differing choice `chosen`.
    pub fn render_question(
        &self,
        question: &Question,
        given_answer: Option<usize>,
    ) -> AppResult<String> {
        let options = question
            .answers
            .iter()
            .enumerate()
            .map(|(index, text)| OptionView {
                index,
                text,
                class: given_answer.and_then(|given| {
                    if index == question.correct_answer {
                        Some("correct")
                    } else if index == given {
                        Some("chosen")
                    } else {
                        None
                    }
                }),
            })
            .collect();

        let view = QuestionView {
            task_id: &question.task_id,
            category: &question.category,
            question: &question.question,
            answered: given_answer.is_some(),
            options,
        };

        Ok(self.registry.render(QUESTION_TEMPLATE, &view)?)
    }

    /// Renders one row per record. Answer text is looked up in the current
    /// question set.
    pub fn render_results(
        &self,
        records: &[AnswerRecord],
        questions: &QuestionStore,
    ) -> AppResult<String> {
        let rows = records
            .iter()
            .map(|record| {
                let question = questions.find_by_task_id(&record.task_id);
                let text_at = |index: usize| {
                    question
                        .and_then(|q| q.answer_text(index))
                        .unwrap_or(MISSING_ANSWER_TEXT)
                };

                ResultRow {
                    task_id: &record.task_id,
                    category: &record.category,
                    given_text: text_at(record.given_answer),
                    correct_text: text_at(record.correct_answer),
                    correct: record.is_correct(),
                }
            })
            .collect();

        Ok(self.registry.render(RESULTS_TEMPLATE, &ResultsView { rows })?)
    }

    pub fn render_not_found(&self) -> AppResult<String> {
        Ok(self.registry.render(NOT_FOUND_TEMPLATE, &())?)
    }
}

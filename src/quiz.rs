use tracing::{debug, info};

use crate::error::QuizError;
use crate::models::{Domain, Question, QuizScore};

/// Source of practice questions, one list per domain.
pub trait QuestionBank {
    fn questions(&self, domain: Domain) -> &[Question];
}

/// The demo question set: one question per domain.
pub struct BuiltinBank;

const FRONTEND: &[Question] = &[Question {
    id: "fe1",
    prompt: "What is the Virtual DOM in React?",
    options: &[
        "A real DOM element that React uses",
        "A lightweight copy of the real DOM kept in memory",
        "A database for storing component state",
        "A CSS framework for styling components",
    ],
    correct_index: 1,
    explanation: "The Virtual DOM is a lightweight JavaScript representation of the real DOM. \
                  React uses it to optimize rendering by minimizing direct DOM manipulation.",
}];

const BACKEND: &[Question] = &[Question {
    id: "be1",
    prompt: "What is the main difference between SQL and NoSQL databases?",
    options: &[
        "SQL is faster than NoSQL",
        "NoSQL is only for small applications",
        "SQL uses structured schema, NoSQL is schema-less or flexible",
        "NoSQL cannot handle relationships",
    ],
    correct_index: 2,
    explanation: "SQL databases use structured, predefined schemas and are table-based, while NoSQL \
                  databases are more flexible and can handle unstructured data with various data models.",
}];

const HR: &[Question] = &[Question {
    id: "hr1",
    prompt: "When describing a conflict resolution scenario, which framework is most effective?",
    options: &[
        "Talk only about the positive outcomes",
        "STAR method (Situation, Task, Action, Result)",
        "Blame the other party involved",
        "Keep it vague to avoid details",
    ],
    correct_index: 1,
    explanation: "The STAR method provides a structured way to describe your experience, making it \
                  clear and comprehensive while showing your problem-solving approach.",
}];

const PRODUCT: &[Question] = &[Question {
    id: "pm1",
    prompt: "What framework helps prioritize features with limited resources?",
    options: &[
        "Build everything at once",
        "RICE scoring (Reach, Impact, Confidence, Effort)",
        "Choose features randomly",
        "Only focus on what competitors are doing",
    ],
    correct_index: 1,
    explanation: "RICE scoring helps objectively prioritize features by evaluating their Reach, Impact, \
                  Confidence level, and required Effort, ensuring optimal resource allocation.",
}];

impl QuestionBank for BuiltinBank {
    fn questions(&self, domain: Domain) -> &[Question] {
        match domain {
            Domain::Frontend => FRONTEND,
            Domain::Backend => BACKEND,
            Domain::HR => HR,
            Domain::Product => PRODUCT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    NoDomainSelected,
    AwaitingAnswer,
    AnswerSubmitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub correct: bool,
    pub correct_index: usize,
    pub explanation: &'static str,
}

pub struct QuizSession {
    bank: Box<dyn QuestionBank>,
    domain: Option<Domain>,
    position: usize,
    selected: Option<usize>,
    submitted: bool,
    score: QuizScore,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(Box::new(BuiltinBank))
    }
}

impl QuizSession {
    pub fn new(bank: Box<dyn QuestionBank>) -> Self {
        Self {
            bank,
            domain: None,
            position: 0,
            selected: None,
            submitted: false,
            score: QuizScore::default(),
        }
    }

    pub fn phase(&self) -> QuizPhase {
        match (self.domain, self.submitted) {
            (None, _) => QuizPhase::NoDomainSelected,
            (Some(_), false) => QuizPhase::AwaitingAnswer,
            (Some(_), true) => QuizPhase::AnswerSubmitted,
        }
    }

    pub fn domain(&self) -> Option<Domain> {
        self.domain
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> QuizScore {
        self.score
    }

    pub fn current_question(&self) -> Option<&Question> {
        let questions = self.bank.questions(self.domain?);
        if questions.is_empty() {
            return None;
        }
        questions.get(self.position % questions.len())
    }

    pub fn questions_in_domain(&self) -> usize {
        self.domain.map_or(0, |d| self.bank.questions(d).len())
    }

    /// Switch domain. Drops any pending answer; the score carries over.
    pub fn select_domain(&mut self, domain: Domain) {
        info!(%domain, "Quiz domain selected");
        self.domain = Some(domain);
        self.position = 0;
        self.selected = None;
        self.submitted = false;
    }

    pub fn choose(&mut self, index: usize) -> Result<(), QuizError> {
        let question = self.question_or_err()?;
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        let len = question.options.len();
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, QuizError> {
        let question = self.question_or_err()?;
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        let Some(choice) = self.selected else {
            return Err(QuizError::NoSelection);
        };

        let outcome = SubmitOutcome {
            correct: choice == question.correct_index,
            correct_index: question.correct_index,
            explanation: question.explanation,
        };

        self.submitted = true;
        self.score.total += 1;
        if outcome.correct {
            self.score.correct += 1;
        }

        info!(
            correct = outcome.correct,
            score = %format!("{}/{}", self.score.correct, self.score.total),
            "Quiz answer submitted"
        );
        Ok(outcome)
    }

    /// Reset the answer state and move to the next question in the domain.
    pub fn next_question(&mut self) {
        self.selected = None;
        self.submitted = false;
        if self.domain.is_some() {
            self.position = self.position.wrapping_add(1);
            debug!(position = self.position, "Advanced to next question");
        }
    }

    fn question_or_err(&self) -> Result<&Question, QuizError> {
        let domain = self.domain.ok_or(QuizError::NoDomainSelected)?;
        self.current_question()
            .ok_or_else(|| QuizError::EmptyDomain(domain.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyBank;

    impl QuestionBank for EmptyBank {
        fn questions(&self, _domain: Domain) -> &[Question] {
            &[]
        }
    }

    fn frontend_session() -> QuizSession {
        let mut session = QuizSession::default();
        session.select_domain(Domain::Frontend);
        session
    }

    #[test]
    fn starts_without_domain() {
        let mut session = QuizSession::default();
        assert_eq!(session.phase(), QuizPhase::NoDomainSelected);
        assert!(session.current_question().is_none());
        assert_eq!(session.choose(0), Err(QuizError::NoDomainSelected));
        assert_eq!(session.submit(), Err(QuizError::NoDomainSelected));
    }

    #[test]
    fn correct_then_wrong_answer_scores() {
        let mut session = frontend_session();
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer);

        session.choose(1).unwrap();
        let outcome = session.submit().unwrap();
        assert!(outcome.correct);
        assert_eq!(session.score(), QuizScore { correct: 1, total: 1 });

        session.next_question();
        session.choose(0).unwrap();
        let outcome = session.submit().unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_index, 1);
        assert_eq!(session.score(), QuizScore { correct: 1, total: 2 });
    }

    #[test]
    fn submit_requires_selection() {
        let mut session = frontend_session();
        assert_eq!(session.submit(), Err(QuizError::NoSelection));
        assert_eq!(session.score(), QuizScore::default());
    }

    #[test]
    fn resubmission_is_rejected_until_next() {
        let mut session = frontend_session();
        session.choose(1).unwrap();
        session.submit().unwrap();

        assert_eq!(session.phase(), QuizPhase::AnswerSubmitted);
        assert_eq!(session.submit(), Err(QuizError::AlreadySubmitted));
        assert_eq!(session.choose(2), Err(QuizError::AlreadySubmitted));
        assert_eq!(session.score(), QuizScore { correct: 1, total: 1 });

        session.next_question();
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(session.selected(), None);
        session.choose(2).unwrap();
        session.submit().unwrap();
        assert_eq!(session.score(), QuizScore { correct: 1, total: 2 });
    }

    #[test]
    fn choosing_again_replaces_selection() {
        let mut session = frontend_session();
        session.choose(0).unwrap();
        session.choose(3).unwrap();
        assert_eq!(session.selected(), Some(3));
    }

    #[test]
    fn out_of_range_choice_is_refused() {
        let mut session = frontend_session();
        assert_eq!(
            session.choose(4),
            Err(QuizError::OptionOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn selecting_domain_resets_answer_state_but_keeps_score() {
        let mut session = frontend_session();
        session.choose(1).unwrap();
        session.submit().unwrap();

        session.select_domain(Domain::Backend);
        assert_eq!(session.phase(), QuizPhase::AwaitingAnswer);
        assert_eq!(session.selected(), None);
        assert_eq!(session.score(), QuizScore { correct: 1, total: 1 });
        assert_eq!(session.current_question().map(|q| q.id), Some("be1"));

        session.choose(0).unwrap();
        session.select_domain(Domain::Backend);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn next_question_wraps_single_question_domain() {
        let mut session = frontend_session();
        session.next_question();
        assert_eq!(session.current_question().map(|q| q.id), Some("fe1"));
    }

    #[test]
    fn correct_never_exceeds_total() {
        let mut session = QuizSession::default();
        for domain in Domain::ALL {
            session.select_domain(domain);
            for choice in 0..4 {
                session.choose(choice).unwrap();
                session.submit().unwrap();
                session.next_question();
                let score = session.score();
                assert!(score.correct <= score.total);
            }
        }
        assert_eq!(session.score(), QuizScore { correct: 4, total: 16 });
    }

    #[test]
    fn empty_bank_reports_empty_domain() {
        let mut session = QuizSession::new(Box::new(EmptyBank));
        session.select_domain(Domain::HR);
        assert_eq!(session.choose(0), Err(QuizError::EmptyDomain("HR".to_string())));
    }

    #[test]
    fn builtin_bank_covers_every_domain() {
        for domain in Domain::ALL {
            let questions = BuiltinBank.questions(domain);
            assert_eq!(questions.len(), 1);
            assert!(questions[0].correct_index < questions[0].options.len());
        }
    }
}

use super::schema::{LearningSessionInput, MainResponse, ThreadResponse};

pub const ANALYSIS_PROMPT: &str = r#"You are an expert learning scientist and instructional designer. Analyze the following DeepDive learning session, made of main responses and follow-up thread discussions, and turn it into study material that helps the learner retain and apply what they explored.

Respond with ONLY a valid JSON object (no Markdown, no commentary) using exactly this structure:
{
  "summary": "A concise 2-3 paragraph synthesis of what was learned",
  "learningObjectives": ["What the learner should be able to do after studying this material"],
  "keyTopics": ["Main topics covered"],
  "flashcards": [
    {
      "question": "Question text",
      "answer": "Answer text",
      "category": "Topic or concept area",
      "difficulty": "easy|medium|hard"
    }
  ],
  "quizQuestions": [
    {
      "question": "Question text",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": "The correct option or expected answer",
      "explanation": "Why this answer is correct",
      "type": "multiple-choice|true-false|short-answer"
    }
  ],
  "studyGuide": {
    "mainConcepts": ["Core concepts with brief explanations"],
    "processes": ["Step-by-step processes or methods described"],
    "keyInsights": ["Important insights and connections"],
    "practicalApplications": ["How to apply this knowledge"]
  },
  "reviewSessions": [
    {
      "title": "Review session title",
      "content": "What to review and how",
      "timeEstimate": "e.g. 15 minutes",
      "difficulty": "easy|medium|hard"
    }
  ]
}

Guidelines:
- Create 8-15 flashcards covering the most important facts, definitions and concepts.
- Create 5-10 quiz questions that mix question types and difficulty levels. Omit "options" for short-answer questions.
- Synthesize ideas across the main responses and threads instead of repeating them.
- Draw connections between the thread discussions and the main responses.
- Keep all content accurate to the session; do not invent facts that were not discussed.
- Order review sessions from foundational to advanced, spaced for long-term retention."#;

pub fn render_main_responses(responses: &[MainResponse]) -> String {
    responses
        .iter()
        .enumerate()
        .map(|(i, response)| format!("=== MAIN RESPONSE {} ===\n{}", i + 1, response.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_thread_responses(threads: &[ThreadResponse]) -> String {
    threads
        .iter()
        .map(|thread| {
            format!(
                "=== THREAD: {} ===\nContext: {}\n{}",
                thread.thread_title, thread.context, thread.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders the whole session transcript: main responses first, then threads.
pub fn render_session(session: &LearningSessionInput) -> String {
    format!(
        "{}\n\n{}",
        render_main_responses(&session.main_responses),
        render_thread_responses(&session.thread_responses)
    )
}

pub fn build_prompt(session: &LearningSessionInput) -> String {
    format!("{}\n\n{}", ANALYSIS_PROMPT, render_session(session))
}

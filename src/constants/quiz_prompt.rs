pub const SINGLE_QUIZ_PROMPT: &str = r#"Given the input text below, create a challenging quiz question with multiple-choice answers following these guidelines:

1. Analyze the input text thoroughly to identify key concepts, important facts, or central themes.
2. Formulate a thought-provoking question that tests deep understanding of the material.
3. Create one correct answer and three plausible but incorrect answers.
4. Present the output in exactly this structure:

what is the capital of france?
paris
london
berlin
rome

Ensure that:
- The question is clear, concise, and directly related to the most significant aspects of the input text.
- All answers are of similar length, style, and complexity to avoid unintentional hints.
- Each answer is on a separate line without labels or bullet points.
- The correct answer is always the first option listed.
- The question and answers are written in the same language as the input text.

Avoid:
- Obvious trick questions or puns
- True/False questions
- "All of the above" or "None of the above" options
- Answers that are partially correct

Input text:
{input_text}"#;

pub const QUIZ_BATCH_PROMPT: &str = r#"You are a quiz generation agent. Create {question_count} multiple-choice questions that test understanding of the input text below.

Rules:
1. Every question must be directly supported by the input text.
2. Start each question on a new line with the exact marker "Question:" followed by the question text.
3. Follow each question with exactly four answer lines labelled a), b), c) and d), one per line.
4. Put the correct answer on the a) line.
5. Leave one blank line between questions.
6. Do not add explanations, headings, numbering or markdown.
7. Write the questions and answers in the same language as the input text.

Example:
Question: What is the capital of France?
a) Paris
b) London
c) Berlin
d) Rome

Input text:
{input_text}"#;

use std::io::{self, BufRead, Write};

use crate::models::{AnswerResponse, Question, QuizResults, QuizSubmission};

/// Submitted in place of an answer the user could not express.
pub const INVALID_ANSWER: i64 = -1;

/// Asks every question in order and collects the answers into a submission.
/// Options are shown 1-based and converted back to 0-based indices.
pub fn run_quiz<R, W>(
    category: &str,
    questions: &[Question],
    input: &mut R,
    out: &mut W,
) -> io::Result<QuizSubmission>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "\nYou have selected the {} category.", category)?;
    writeln!(out, "Please answer all {} questions.", questions.len())?;

    let mut responses = Vec::with_capacity(questions.len());
    for (number, question) in questions.iter().enumerate() {
        writeln!(out, "\n+++ Question {}: {} +++\n", number + 1, question.question)?;
        for (option, answer) in question.answers.iter().enumerate() {
            writeln!(out, "{}. {}", option + 1, answer)?;
        }

        let selection = prompt_user(input, out)?
            .and_then(|option| option.checked_sub(1))
            .and_then(|index| question.answer_text(index).map(|text| (index, text)));
        let answer = match selection {
            Some((index, text)) if question.is_correct(index) => {
                writeln!(out, "\nCorrect! {} is the right answer.", text)?;
                index
            }
            Some((index, text)) => {
                writeln!(out, "\nIncorrect! {} is the wrong answer.", text)?;
                index
            }
            None => {
                writeln!(out, "\nIncorrect! Your selection was invalid.")?;
                INVALID_ANSWER
            }
        };

        responses.push(AnswerResponse {
            question: Some(question.clone()),
            answer,
        });
    }

    Ok(QuizSubmission {
        category: category.to_string(),
        question_responses: responses,
    })
}

/// Reads one option number. Unparsable input and end of input yield `None`.
fn prompt_user<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<i64>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "\nEnter option number: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(line.trim().parse().ok())
}

pub fn display_results<W: Write>(results: &QuizResults, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n+++ Quiz Results +++")?;
    writeln!(out, "\nRaw score: {}", results.score_string)?;
    writeln!(out, "Percentage score: {:.0}%", results.score_percentage)?;
    writeln!(out, "\n{}", results.comparison)
}

pub fn display_categories<W: Write>(categories: &[String], out: &mut W) -> io::Result<()> {
    if categories.is_empty() {
        return writeln!(out, "\nNo categories are available at the moment");
    }

    writeln!(out)?;
    for (number, category) in categories.iter().enumerate() {
        writeln!(out, "{}. {}", number + 1, category)?;
    }
    Ok(())
}

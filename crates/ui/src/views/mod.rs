mod glossary;
mod quiz;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use glossary::GlossaryView;
pub use quiz::QuizView;

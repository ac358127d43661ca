//! String transformation pipeline
//!
//! A [`Pipeline`] is an ordered list of [`Transform`] stages. Each stage is a
//! total function from string to string, and the pipeline feeds the output of
//! one stage into the next.

/// A single string transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Uppercase the first character of every word
    Capitalize,
    /// Reverse the characters
    Reverse,
    /// Append `!!!`
    Exclaim,
}

impl Transform {
    pub fn apply(self, input: &str) -> String {
        match self {
            Transform::Capitalize => capitalize(input),
            Transform::Reverse => reverse(input),
            Transform::Exclaim => exclaim(input),
        }
    }
}

/// Ordered chain of transformations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Transform>,
}

impl Pipeline {
    pub fn new(stages: Vec<Transform>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Transform] {
        &self.stages
    }

    /// Run the input through every stage in order
    pub fn run(&self, input: &str) -> String {
        self.stages
            .iter()
            .fold(input.to_string(), |acc, stage| stage.apply(&acc))
    }
}

impl Default for Pipeline {
    /// Capitalize, then reverse, then exclaim
    fn default() -> Self {
        Self::new(vec![
            Transform::Capitalize,
            Transform::Reverse,
            Transform::Exclaim,
        ])
    }
}

/// Uppercase the first character of each whitespace-separated word
///
/// Words are rejoined with single spaces, so leading, trailing and repeated
/// whitespace is normalized away.
pub fn capitalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reverse the string by Unicode scalar values
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

pub fn exclaim(input: &str) -> String {
    format!("{input}!!!")
}

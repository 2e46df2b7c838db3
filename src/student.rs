use std::fmt;
use std::io::{self, Write};

use crate::format::format_general;

/// A student with a name, an age and the grades recorded so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    age: i32,
    grades: Vec<i32>,
}

impl Student {
    /// Creates a student with no grades. Neither field is validated.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            grades: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Grades in the order they were added.
    pub fn grades(&self) -> &[i32] {
        &self.grades
    }

    pub fn add_grade(&mut self, grade: i32) {
        tracing::debug!(name = %self.name, grade, "adding grade");
        self.grades.push(grade);
    }

    /// Arithmetic mean of the grades, or `0.0` when there are none.
    pub fn average(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: i64 = self.grades.iter().map(|&g| i64::from(g)).sum();
        total as f64 / self.grades.len() as f64
    }

    /// Writes the info line, newline included, to `out`.
    pub fn write_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Prints the info line to stdout.
    pub fn print_info(&self) {
        println!("{self}");
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Average: {}",
            self.name,
            self.age,
            format_general(self.average())
        )
    }
}

use std::cmp::Ordering;
use std::fmt;

/// Priority level of a task
///
/// Ordering is explicit: `High < Medium < Low`, so sorting ascending puts the
/// most urgent tasks first. The order comes from [`Priority::rank`], not from
/// the declaration order of the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Do first
    High,
    /// Do after high priority tasks
    Medium,
    /// Do when nothing else is pending
    Low,
}

impl Priority {
    /// Sort rank of this priority (lower sorts first)
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }

    /// Map a single priority letter to a priority, case-insensitively
    ///
    /// # Returns
    /// `None` for anything other than `H`, `M` or `L`
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'H' => Some(Priority::High),
            'M' => Some(Priority::Medium),
            'L' => Some(Priority::Low),
            _ => None,
        }
    }

    /// Upper-case label used when displaying tasks
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do item
///
/// Tasks are immutable once created; the store only ever adds, reorders or
/// removes whole tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    description: String,
    priority: Priority,
}

impl Task {
    /// Create a new task. The description is stored as given (empty is allowed).
    pub fn new(description: impl Into<String>, priority: Priority) -> Self {
        Self {
            description: description.into(),
            priority,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.priority, self.description)
    }
}

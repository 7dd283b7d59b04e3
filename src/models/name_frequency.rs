use std::fmt;

/// How often a name occurs across all first and last names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFrequency {
    pub name: String,
    pub frequency: usize,
}

impl NameFrequency {
    pub fn new(name: impl Into<String>, frequency: usize) -> Self {
        NameFrequency {
            name: name.into(),
            frequency,
        }
    }
}

impl fmt::Display for NameFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NameFrequency::new("Brown", 2).to_string(), "Brown, 2");
    }
}

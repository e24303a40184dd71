use std::fmt;

/// The property keys kept on every feature. Matching is exact and case-sensitive.
pub const NEEDED_PROPERTY_KEYS: AllowList = AllowList(&["adm0_a3", "name", "continent"]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowList(&'static [&'static str]);

impl AllowList {
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|allowed| *allowed == key)
    }
}

/// Renders as a set literal, e.g. `{"adm0_a3", "name", "continent"}`.
impl fmt::Display for AllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, key) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", key)?;
        }
        write!(f, "}}")
    }
}

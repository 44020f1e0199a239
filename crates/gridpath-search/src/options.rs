/// Per-search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Allow the four diagonal steps in addition to the cardinal ones.
    pub allow_diagonal: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
        }
    }
}

impl SearchOptions {
    /// 4-way movement only.
    pub const fn cardinal() -> Self {
        Self {
            allow_diagonal: false,
        }
    }

    /// Set whether diagonal steps are allowed (builder).
    pub const fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_movement_is_the_default() {
        assert!(SearchOptions::default().allow_diagonal);
        assert!(!SearchOptions::cardinal().allow_diagonal);
        assert_eq!(
            SearchOptions::cardinal().with_diagonal(true),
            SearchOptions::default()
        );
    }
}

//! Homepage cap on visible car cards.

#[cfg(test)]
#[path = "cars_test.rs"]
mod cars_test;

/// Whether `pathname` is the homepage, where the cap applies.
pub fn is_homepage(pathname: &str) -> bool {
    pathname == "/" || pathname.ends_with("index.html")
}

/// Presentation plan for the car grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarVisibility {
    /// One entry per card, in grid order.
    pub visible: Vec<bool>,
    /// Whether the "view all" link has anything more to reveal.
    pub show_view_all: bool,
}

impl CarVisibility {
    /// Show the first `limit` of `count` cards.
    pub fn plan(count: usize, limit: usize) -> Self {
        Self {
            visible: (0..count).map(|index| index < limit).collect(),
            show_view_all: count > limit,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}

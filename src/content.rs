/// Copy shown on a page. Every field is a literal baked into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub features_heading: &'static str,
    pub features: &'static [&'static str],
    pub action_label: &'static str,
    /// Text of the notice raised when the action control is activated.
    pub action_notice: &'static str,
}

/// The landing page.
pub const HOME: PageContent = PageContent {
    title: "Welcome to ReviewMaster",
    subtitle: "Your trusted platform to rate, review, and discover the best books, movies, and TV shows.",
    features_heading: "Why Use ReviewMaster?",
    features: &[
        "Share your honest reviews with others.",
        "Discover top-rated content recommended by users.",
        "Track your favorite books, movies, and shows.",
    ],
    action_label: "Explore Now",
    action_notice: "Feature coming soon!",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_lists_three_features_in_order() {
        assert_eq!(
            HOME.features,
            [
                "Share your honest reviews with others.",
                "Discover top-rated content recommended by users.",
                "Track your favorite books, movies, and shows.",
            ]
        );
    }

    #[test]
    fn home_subtitle_describes_the_platform() {
        assert!(HOME.subtitle.contains("rate, review, and discover"));
    }
}

use crate::types::Details;

pub const FEWER_COLORS: &str = "Consider using fewer colors to maintain brand consistency";
pub const LARGER_LOGO: &str = "Consider increasing logo size for better visibility";
pub const WIDER_MARGINS: &str = "Increase margins for better visual balance";

const COLOR_SUGGESTION_THRESHOLD: usize = 3;
const LOGO_SUGGESTION_WIDTH: f64 = 150.0;
const MARGIN_SUGGESTION_AVERAGE: f64 = 30.0;

/// Advisory text derived from measurements alone. Never affects the status.
#[must_use]
pub fn generate(details: &Details) -> Vec<String> {
    let mut out = Vec::new();

    if details.colors.found_colors.len() > COLOR_SUGGESTION_THRESHOLD {
        out.push(FEWER_COLORS.to_string());
    }
    if details
        .logo
        .as_ref()
        .is_some_and(|l| l.width < LOGO_SUGGESTION_WIDTH)
    {
        out.push(LARGER_LOGO.to_string());
    }
    if details
        .spacing
        .as_ref()
        .is_some_and(|s| s.margins.average() < MARGIN_SUGGESTION_AVERAGE)
    {
        out.push(WIDER_MARGINS.to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::types::{LogoDetails, Margins, SpacingDetails};

    fn logo(width: f64) -> LogoDetails {
        LogoDetails {
            width,
            clear_space: 20.0,
            min_width: 120.0,
            max_width: 400.0,
            required_clear_space: 20.0,
        }
    }

    #[test]
    fn empty_details_give_no_suggestions() {
        assert!(generate(&Details::default()).is_empty());
    }

    #[test]
    fn all_three_in_order() {
        let mut details = Details::default();
        details.colors.found_colors = (0..4u8).map(|i| Color::rgb(i, 0, 0)).collect();
        details.logo = Some(logo(149.0));
        details.spacing = Some(SpacingDetails {
            margins: Margins {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left: 119.0,
            },
            required_margin: 40.0,
        });
        assert_eq!(generate(&details), vec![FEWER_COLORS, LARGER_LOGO, WIDER_MARGINS]);
    }

    #[test]
    fn boundaries_are_exclusive() {
        let mut details = Details::default();
        details.colors.found_colors = (0..3u8).map(|i| Color::rgb(i, 0, 0)).collect();
        details.logo = Some(logo(150.0));
        details.spacing = Some(SpacingDetails {
            margins: Margins::uniform(30.0),
            required_margin: 40.0,
        });
        assert!(generate(&details).is_empty());
    }
}

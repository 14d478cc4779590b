// ABOUTME: Display helpers for dashboard cards: exercise totals and readable area labels
// ABOUTME: Purely cosmetic, never consulted by the selection logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use stretchwell_core::models::{BodyArea, StretchRecord};

/// Total number of member exercises across `records`
///
/// Counts the exercise ids kept by [`split_list`](stretchwell_core::models::split_list)
/// at load time. Empty tokens are not ids, so `"a||b|"` counts 2 rather than
/// the 4 pieces a raw split on `|` would produce.
#[must_use]
pub fn count_exercises_in_recommendations<'a, I>(records: I) -> usize
where
    I: IntoIterator<Item = &'a StretchRecord>,
{
    records.into_iter().map(StretchRecord::exercise_count).sum()
}

/// Turn a camelCase or dash-case key into a title-cased label
///
/// `upperBack` becomes `Upper Back`, `lower-back` becomes `Lower Back`.
#[must_use]
pub fn format_area_name(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if ch.is_ascii_uppercase() && index > 0 {
            spaced.push(' ');
        }
        spaced.push(if ch == '-' { ' ' } else { ch });
    }

    spaced
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Labels for the area tags on an exercise card
#[must_use]
pub fn format_area_tags(areas: &[BodyArea]) -> Vec<String> {
    areas
        .iter()
        .map(|area| format_area_name(area.as_str()))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stretchwell_core::models::{split_list, Intensity, Priority, TimeOfDay};

    fn with_exercises(ids: &str) -> StretchRecord {
        StretchRecord {
            stretch_id: "s".to_owned(),
            name: "S".to_owned(),
            description: String::new(),
            duration: String::new(),
            difficulty: Intensity::Medium,
            body_areas: Vec::new(),
            time_of_day: TimeOfDay::Anytime,
            priority: Priority::Medium,
            exercises: split_list(ids),
        }
    }

    #[test]
    fn test_count_exercises() {
        let records = vec![with_exercises("a|b|c"), with_exercises("d")];
        assert_eq!(count_exercises_in_recommendations(&records), 4);
        assert_eq!(count_exercises_in_recommendations(&[]), 0);
    }

    #[test]
    fn test_count_treats_missing_exercises_as_zero() {
        let records = vec![with_exercises(""), with_exercises("x|y")];
        assert_eq!(count_exercises_in_recommendations(&records), 2);
    }

    #[test]
    fn test_count_ignores_empty_tokens() {
        let records = vec![with_exercises("a||b|"), with_exercises(" | ")];
        assert_eq!(count_exercises_in_recommendations(&records), 2);
    }

    #[test]
    fn test_format_area_name() {
        assert_eq!(format_area_name("upperBack"), "Upper Back");
        assert_eq!(format_area_name("lower-back"), "Lower Back");
        assert_eq!(format_area_name("neck"), "Neck");
        assert_eq!(format_area_name("upperback"), "Upperback");
        assert_eq!(format_area_name("UpperBack"), "Upper Back");
        assert_eq!(format_area_name(""), "");
    }

    #[test]
    fn test_format_area_tags() {
        let tags = format_area_tags(&[BodyArea::Shoulders, BodyArea::LowerBack]);
        assert_eq!(tags, vec!["Shoulders", "Lowerback"]);
    }
}

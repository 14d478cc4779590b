// ABOUTME: Plain-text rendering of dashboard views, catalog listings and saved preferences
// ABOUTME: Terminal layout only; JSON output bypasses this module entirely
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::dashboard::DashboardView;
use std::fmt::Write;
use std::iter;
use stretchwell_core::constants::messages::NO_RECOMMENDATIONS;
use stretchwell_core::models::{ExerciseRecord, StretchRecord, UserPreferences};
use stretchwell_intelligence::{format_area_name, format_area_tags, FocusTier};

const RULE_WIDTH: usize = 60;

/// Types that can be printed for a human
pub trait TextRender {
    /// Multi-line text rendering, newline terminated
    fn render_text(&self) -> String;
}

fn rule(out: &mut String, ch: char) {
    out.extend(iter::repeat(ch).take(RULE_WIDTH));
    out.push('\n');
}

// `write!` into a String cannot fail; results are discarded throughout.

impl TextRender for DashboardView {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for banner in &self.banners {
            let _ = writeln!(out, "! {banner}");
        }
        let _ = writeln!(out, "{}", self.greeting);
        let _ = writeln!(out, "{}", self.date_label);
        rule(&mut out, '=');

        if let Some(title) = &self.title {
            let _ = writeln!(out, "{title}");
            out.push('\n');
        }

        if self.no_recommendations {
            let _ = writeln!(out, "{NO_RECOMMENDATIONS}");
        } else {
            let _ = writeln!(out, "Daily Stretches");
            rule(&mut out, '-');
            for daily in &self.daily_stretches {
                let stretch = &daily.stretch;
                let _ = writeln!(
                    out,
                    "[{}] {} ({}, {})",
                    daily.display_time_of_day(),
                    stretch.name,
                    stretch.duration,
                    stretch.difficulty
                );
                if !stretch.description.is_empty() {
                    let _ = writeln!(out, "    {}", stretch.description);
                }
            }
        }
        out.push('\n');

        let _ = writeln!(out, "Focus Areas");
        rule(&mut out, '-');
        for tier in [FocusTier::Primary, FocusTier::Secondary, FocusTier::Tertiary] {
            let labels: Vec<&str> = self
                .focus_tags
                .iter()
                .filter(|tag| tag.tier == tier)
                .map(|tag| tag.label.as_str())
                .collect();
            if !labels.is_empty() {
                let _ = writeln!(out, "{:<10} {}", format!("{tier:?}:"), labels.join(", "));
            }
        }

        if !self.targeted_exercises.is_empty() {
            out.push('\n');
            let _ = writeln!(out, "Targeted Exercises");
            rule(&mut out, '-');
            for targeted in &self.targeted_exercises {
                let exercise = &targeted.exercise;
                let _ = writeln!(
                    out,
                    "{} ({}) [{}]",
                    exercise.name,
                    exercise.duration,
                    targeted.area_tags.join(", ")
                );
            }
        }
        out
    }
}

impl TextRender for [StretchRecord] {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} stretches", self.len());
        rule(&mut out, '-');
        for stretch in self {
            let _ = writeln!(
                out,
                "{:<8} {:<32} {:<8} {:<7} {:<7} {}",
                stretch.stretch_id,
                stretch.name,
                stretch.time_of_day.as_str(),
                stretch.priority.as_str(),
                stretch.difficulty.as_str(),
                format_area_tags(&stretch.body_areas).join(", ")
            );
        }
        out
    }
}

impl TextRender for [ExerciseRecord] {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} exercises", self.len());
        rule(&mut out, '-');
        for exercise in self {
            let _ = writeln!(
                out,
                "{:<8} {:<32} {:<8} {:<7} {}",
                exercise.exercise_id,
                exercise.name,
                exercise.duration,
                exercise.difficulty.as_str(),
                format_area_tags(&exercise.body_areas).join(", ")
            );
        }
        out
    }
}

impl TextRender for UserPreferences {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let areas: Vec<String> = self
            .discomfort_areas
            .iter()
            .map(|area| format_area_name(area.as_str()))
            .collect();

        let _ = writeln!(out, "Saved preferences ({})", self.timestamp.to_rfc3339());
        rule(&mut out, '-');
        let _ = writeln!(out, "Daily activity:     {}", self.daily_activity);
        if let Some(other) = &self.other_activity {
            let _ = writeln!(out, "Activity details:   {other}");
        }
        let _ = writeln!(
            out,
            "Discomfort areas:   {}",
            if areas.is_empty() { "none".to_owned() } else { areas.join(", ") }
        );
        let _ = writeln!(out, "Discomfort level:   {}", self.discomfort_level);
        let _ = writeln!(out, "Intensity:          {}", self.intensity_preference);
        let _ = writeln!(out, "Energy level:       {}", self.energy_level);
        let _ = writeln!(out, "Breath awareness:   {}", self.breath_awareness);
        let _ = writeln!(
            out,
            "Routine duration:   {} ({})",
            self.routine_duration.name.as_str(),
            self.routine_duration.label
        );
        if let Some(username) = &self.username {
            let _ = writeln!(out, "Name:               {username}");
        }
        out
    }
}

//! Editable tour draft with the form's day-plan rules.
//!
//! Single-day tours carry no plans. Multi-day tours always have at least two
//! days and exactly one plan per day; plans are matched by day number when
//! the shape changes, and missing days get a `Day N` placeholder.

#[cfg(test)]
#[path = "tour_draft_test.rs"]
mod tour_draft_test;

use crate::api::types::{Tour, TourInput, TourKind, TourPlan};

pub const DEFAULT_CATEGORY: &str = "adventure";
pub const MIN_MULTI_DAYS: u32 = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct TourDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price: f64,
    pub category: String,
    kind: TourKind,
    days: u32,
    included: Vec<String>,
    excluded: Vec<String>,
    plans: Vec<TourPlan>,
}

impl Default for TourDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Tour> for TourDraft {
    fn from(tour: &Tour) -> Self {
        Self {
            title: tour.title.clone(),
            description: tour.description.clone(),
            location: tour.location.clone(),
            price: tour.price,
            category: tour.category.clone().unwrap_or_default(),
            kind: tour.kind,
            days: tour.days,
            included: tour.included.clone(),
            excluded: tour.excluded.clone(),
            plans: tour.tour_plans.clone(),
        }
    }
}

fn placeholder(day: u32) -> TourPlan {
    TourPlan { day, title: format!("Day {day}"), description: String::new(), included: Vec::new() }
}

fn push_trimmed(list: &mut Vec<String>, item: &str) {
    let item = item.trim();
    if !item.is_empty() {
        list.push(item.to_owned());
    }
}

fn remove_at(list: &mut Vec<String>, index: usize) {
    if index < list.len() {
        list.remove(index);
    }
}

impl TourDraft {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            price: 0.0,
            category: DEFAULT_CATEGORY.to_owned(),
            kind: TourKind::Single,
            days: 1,
            included: Vec::new(),
            excluded: Vec::new(),
            plans: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> TourKind {
        self.kind
    }

    #[must_use]
    pub fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub fn plans(&self) -> &[TourPlan] {
        &self.plans
    }

    #[must_use]
    pub fn included(&self) -> &[String] {
        &self.included
    }

    #[must_use]
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn set_kind(&mut self, kind: TourKind) {
        self.kind = kind;
        match kind {
            TourKind::Single => {
                self.days = 1;
                self.plans.clear();
            }
            TourKind::Multi => {
                self.days = self.days.max(MIN_MULTI_DAYS);
                let existing = std::mem::take(&mut self.plans);
                self.plans = (1..=self.days)
                    .map(|day| {
                        existing
                            .iter()
                            .find(|plan| plan.day == day)
                            .cloned()
                            .unwrap_or_else(|| placeholder(day))
                    })
                    .collect();
            }
        }
    }

    /// Set the day count. Multi-day plans grow with placeholders or are
    /// truncated to match, never below [`MIN_MULTI_DAYS`].
    pub fn set_days(&mut self, days: u32) {
        if self.kind != TourKind::Multi {
            self.days = days;
            return;
        }
        let days = days.max(MIN_MULTI_DAYS);
        self.days = days;
        let current = u32::try_from(self.plans.len()).unwrap_or(u32::MAX);
        if days > current {
            self.plans.extend((current + 1..=days).map(placeholder));
        } else {
            self.plans.truncate(days as usize);
        }
    }

    pub fn add_included(&mut self, item: &str) {
        push_trimmed(&mut self.included, item);
    }

    pub fn remove_included(&mut self, index: usize) {
        remove_at(&mut self.included, index);
    }

    pub fn add_excluded(&mut self, item: &str) {
        push_trimmed(&mut self.excluded, item);
    }

    pub fn remove_excluded(&mut self, index: usize) {
        remove_at(&mut self.excluded, index);
    }

    /// Rename the plan at `index`. Out-of-range indices are ignored.
    pub fn set_plan_title(&mut self, index: usize, title: &str) {
        if let Some(plan) = self.plans.get_mut(index) {
            title.clone_into(&mut plan.title);
        }
    }

    pub fn set_plan_description(&mut self, index: usize, description: &str) {
        if let Some(plan) = self.plans.get_mut(index) {
            description.clone_into(&mut plan.description);
        }
    }

    pub fn add_plan_included(&mut self, index: usize, item: &str) {
        if let Some(plan) = self.plans.get_mut(index) {
            push_trimmed(&mut plan.included, item);
        }
    }

    pub fn remove_plan_included(&mut self, index: usize, item_index: usize) {
        if let Some(plan) = self.plans.get_mut(index) {
            remove_at(&mut plan.included, item_index);
        }
    }

    #[must_use]
    pub fn into_input(self) -> TourInput {
        TourInput {
            title: self.title,
            description: self.description,
            location: self.location,
            days: self.days,
            price: self.price,
            kind: self.kind,
            category: Some(self.category).filter(|c| !c.is_empty()),
            categories: Vec::new(),
            included: self.included,
            excluded: self.excluded,
            tour_plans: self.plans,
            status: None,
            completion_percentage: None,
        }
    }
}

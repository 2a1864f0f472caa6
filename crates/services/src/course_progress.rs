use std::collections::HashSet;

use serde::Serialize;

use aware_core::model::{CourseId, Lesson, LessonId, ModuleId};

use crate::catalog_service::CatalogService;
use crate::error::ProgressError;

/// Per-module completion counts for a course outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleProgress {
    pub module_id: ModuleId,
    pub completed: usize,
    pub total: usize,
}

/// In-memory record of which lessons of one course are done.
///
/// Nothing is persisted; a new value starts with no completed lessons.
#[derive(Debug, Clone)]
pub struct CourseProgress {
    course_id: CourseId,
    lessons: Vec<(LessonId, ModuleId)>,
    completed: HashSet<LessonId>,
}

impl CourseProgress {
    /// Tracks the course's lessons in reading order.
    #[must_use]
    pub fn new<'a>(course_id: CourseId, lessons: impl IntoIterator<Item = &'a Lesson>) -> Self {
        Self {
            course_id,
            lessons: lessons
                .into_iter()
                .map(|l| (l.id().clone(), l.module_id().clone()))
                .collect(),
            completed: HashSet::new(),
        }
    }

    /// Convenience for a catalog course; `None` for an unknown course.
    #[must_use]
    pub fn for_course(catalog: &CatalogService, course_id: &CourseId) -> Option<Self> {
        catalog.course(course_id)?;
        Some(Self::new(course_id.clone(), catalog.lessons_for_course(course_id)))
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    /// Flips a lesson between done and not done; returns the new status.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownLesson` if the lesson is not in this course.
    pub fn toggle(&mut self, lesson: &LessonId) -> Result<bool, ProgressError> {
        if !self.lessons.iter().any(|(id, _)| id == lesson) {
            return Err(ProgressError::UnknownLesson(lesson.clone()));
        }
        let done = if self.completed.remove(lesson) {
            false
        } else {
            self.completed.insert(lesson.clone());
            true
        };
        tracing::debug!(course = %self.course_id, lesson = %lesson, done, "lesson toggled");
        Ok(done)
    }

    #[must_use]
    pub fn is_complete(&self, lesson: &LessonId) -> bool {
        self.completed.contains(lesson)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.lessons.len()
    }

    /// Share of completed lessons, 0.0 for a course without lessons.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.lessons.is_empty() {
            return 0.0;
        }
        100.0 * self.completed.len() as f64 / self.lessons.len() as f64
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.lessons.is_empty() && self.completed.len() == self.lessons.len()
    }

    /// First lesson not yet done, in reading order.
    #[must_use]
    pub fn next_lesson(&self) -> Option<&LessonId> {
        self.lessons
            .iter()
            .map(|(id, _)| id)
            .find(|id| !self.completed.contains(*id))
    }

    #[must_use]
    pub fn module_progress(&self, module: &ModuleId) -> ModuleProgress {
        let in_module = self.lessons.iter().filter(|(_, m)| m == module);
        let (total, completed) = in_module.fold((0, 0), |(total, done), (id, _)| {
            (total + 1, done + usize::from(self.completed.contains(id)))
        });
        ModuleProgress {
            module_id: module.clone(),
            completed,
            total,
        }
    }
}

/// Progress-bar fill: `round(value / max * 100)`, capped at 100.
///
/// A non-positive `max` yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bar_percent(value: f64, max: f64) -> u8 {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let pct = (value / max * 100.0).round().clamp(0.0, 100.0);
    pct as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::StaticContent;
    use std::sync::Arc;

    fn progress() -> (CatalogService, CourseProgress) {
        let catalog = CatalogService::new(Arc::new(StaticContent::load().unwrap()));
        let id = CourseId::new("password-security").unwrap();
        let progress = CourseProgress::for_course(&catalog, &id).unwrap();
        (catalog, progress)
    }

    #[test]
    fn toggle_flips_and_percentage_follows() {
        let (_, mut progress) = progress();
        let total = progress.total();
        assert_eq!(total, 3);
        let first = progress.next_lesson().unwrap().clone();

        assert!(progress.toggle(&first).unwrap());
        assert!(progress.is_complete(&first));
        assert!((progress.percentage() - 100.0 / 3.0).abs() < 1e-9);

        assert!(!progress.toggle(&first).unwrap());
        assert_eq!(progress.percentage(), 0.0);
    }

    #[test]
    fn unknown_lesson_is_rejected() {
        let (_, mut progress) = progress();
        let other = LessonId::new("pa-l1").unwrap();
        assert_eq!(
            progress.toggle(&other).unwrap_err(),
            ProgressError::UnknownLesson(other)
        );
    }

    #[test]
    fn completing_every_lesson_finishes_the_course() {
        let (catalog, mut progress) = progress();
        let ids: Vec<LessonId> = catalog
            .lessons_for_course(progress.course_id())
            .iter()
            .map(|l| l.id().clone())
            .collect();
        for id in &ids {
            progress.toggle(id).unwrap();
        }
        assert!(progress.is_finished());
        assert!(progress.next_lesson().is_none());
        assert_eq!(bar_percent(progress.percentage(), 100.0), 100);
    }

    #[test]
    fn module_counts_only_its_lessons() {
        let (_, mut progress) = progress();
        progress.toggle(&LessonId::new("ps-l3").unwrap()).unwrap();
        let m1 = progress.module_progress(&ModuleId::new("ps-m1").unwrap());
        let m2 = progress.module_progress(&ModuleId::new("ps-m2").unwrap());
        assert_eq!((m1.completed, m1.total), (0, 2));
        assert_eq!((m2.completed, m2.total), (1, 1));
    }

    #[test]
    fn empty_course_reports_zero() {
        let progress = CourseProgress::new(CourseId::new("empty").unwrap(), Vec::<&Lesson>::new());
        assert_eq!(progress.percentage(), 0.0);
        assert!(!progress.is_finished());
    }

    #[test]
    fn bar_percent_rounds_and_caps() {
        assert_eq!(bar_percent(33.4, 100.0), 33);
        assert_eq!(bar_percent(66.5, 100.0), 67);
        assert_eq!(bar_percent(150.0, 100.0), 100);
        assert_eq!(bar_percent(5.0, 0.0), 0);
    }
}

use serde::Serialize;

use aware_core::model::{BlogCategory, BlogPost, Course, CourseLevel};
use services::{CourseOutline, CourseProgress, LessonPage, bar_percent};

use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::{format_long_date, format_short_date};
use crate::vm::tone::Tone;

#[must_use]
pub fn level_label(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Beginner => "Beginner",
        CourseLevel::Intermediate => "Intermediate",
        CourseLevel::Advanced => "Advanced",
    }
}

#[must_use]
pub fn level_tone(level: CourseLevel) -> Tone {
    match level {
        CourseLevel::Beginner => Tone::Success,
        CourseLevel::Intermediate => Tone::Warning,
        CourseLevel::Advanced => Tone::Danger,
    }
}

#[must_use]
pub fn category_label(category: BlogCategory) -> &'static str {
    match category {
        BlogCategory::Alert => "Security Alert",
        BlogCategory::Tip => "Security Tip",
        BlogCategory::News => "News",
        BlogCategory::Guide => "Guide",
    }
}

#[must_use]
pub fn category_tone(category: BlogCategory) -> Tone {
    match category {
        BlogCategory::Alert => Tone::Danger,
        BlogCategory::Tip => Tone::Warning,
        BlogCategory::News => Tone::Info,
        BlogCategory::Guide => Tone::Success,
    }
}

//
// ─── COURSES ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: &'static str,
    pub level_tone: Tone,
    pub duration: String,
    pub modules: u32,
    pub lessons: u32,
    pub topics: Vec<String>,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            title: course.title().to_owned(),
            description: course.description().to_owned(),
            level: level_label(course.level()),
            level_tone: level_tone(course.level()),
            duration: course.duration().to_owned(),
            modules: course.module_count(),
            lessons: course.lesson_count(),
            topics: course.topics().to_vec(),
        }
    }
}

#[must_use]
pub fn map_course_cards<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<CourseCardVm> {
    courses.into_iter().map(CourseCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutlineLessonVm {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutlineModuleVm {
    pub title: String,
    pub description: String,
    /// "1/2 completed"
    pub completion: String,
    pub lessons: Vec<OutlineLessonVm>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CourseDetailVm {
    pub card: CourseCardVm,
    pub modules: Vec<OutlineModuleVm>,
    pub progress_percent: u8,
    /// "0 of 3 lessons completed"
    pub progress_label: String,
    pub finished: bool,
}

#[must_use]
pub fn map_course_detail(outline: &CourseOutline<'_>, progress: &CourseProgress) -> CourseDetailVm {
    let modules = outline
        .modules
        .iter()
        .map(|entry| {
            let counts = progress.module_progress(&entry.module.id);
            OutlineModuleVm {
                title: entry.module.title.clone(),
                description: entry.module.description.clone(),
                completion: format!("{}/{} completed", counts.completed, counts.total),
                lessons: entry
                    .lessons
                    .iter()
                    .map(|lesson| OutlineLessonVm {
                        id: lesson.id().to_string(),
                        title: lesson.title().to_owned(),
                        duration: lesson.duration().to_owned(),
                        completed: progress.is_complete(lesson.id()),
                    })
                    .collect(),
            }
        })
        .collect();

    CourseDetailVm {
        card: CourseCardVm::from(outline.course),
        modules,
        progress_percent: bar_percent(progress.percentage(), 100.0),
        progress_label: format!(
            "{} of {} lessons completed",
            progress.completed_count(),
            progress.total()
        ),
        finished: progress.is_finished(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LessonVm {
    pub course_title: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub video_url: String,
    /// Sanitized HTML.
    pub content_html: String,
    pub content_markdown: String,
    pub tips: Vec<String>,
    /// "Lesson 2 of 3"
    pub position: String,
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[must_use]
pub fn map_lesson(page: &LessonPage<'_>) -> LessonVm {
    let lesson = page.lesson;
    LessonVm {
        course_title: page.course.title().to_owned(),
        title: lesson.title().to_owned(),
        description: lesson.description().to_owned(),
        duration: lesson.duration().to_owned(),
        video_url: lesson.video_url().to_string(),
        content_html: markdown_to_html(lesson.content()),
        content_markdown: lesson.content().to_owned(),
        tips: lesson.tips().to_vec(),
        position: format!("Lesson {} of {}", page.position + 1, page.total),
        previous: page.previous.map(|l| l.id().to_string()),
        next: page.next.map(|l| l.id().to_string()),
    }
}

//
// ─── POSTS ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostCardVm {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub category: &'static str,
    pub category_tone: Tone,
    pub date: String,
    pub read_time: String,
    pub featured: bool,
}

impl From<&BlogPost> for PostCardVm {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id().to_string(),
            title: post.title().to_owned(),
            excerpt: post.excerpt().to_owned(),
            category: category_label(post.category()),
            category_tone: category_tone(post.category()),
            date: format_short_date(post.published_on()),
            read_time: post.read_time().to_owned(),
            featured: post.is_featured(),
        }
    }
}

#[must_use]
pub fn map_post_cards<'a>(posts: impl IntoIterator<Item = &'a BlogPost>) -> Vec<PostCardVm> {
    posts.into_iter().map(PostCardVm::from).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostVm {
    pub card: PostCardVm,
    pub published: String,
    pub content_html: String,
    pub content_markdown: String,
    pub related: Vec<PostCardVm>,
}

#[must_use]
pub fn map_post<'a>(post: &BlogPost, related: impl IntoIterator<Item = &'a BlogPost>) -> PostVm {
    PostVm {
        card: PostCardVm::from(post),
        published: format_long_date(post.published_on()),
        content_html: markdown_to_html(post.content()),
        content_markdown: post.content().to_owned(),
        related: map_post_cards(related),
    }
}

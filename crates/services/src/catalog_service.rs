use std::fmt;
use std::sync::Arc;

use aware_core::model::{
    BlogCategory, BlogPost, Course, CourseId, CourseLevel, CourseModule, Filter, Lesson, LessonId,
    ModuleId, PostId, filter_records,
};
use content::CatalogRepository;

/// Courses highlighted on the landing page, in catalog order.
pub const POPULAR_COURSES: usize = 3;
/// Related articles listed under a post.
pub const RELATED_POSTS: usize = 3;

/// A course with its modules and their lessons, each in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseOutline<'a> {
    pub course: &'a Course,
    pub modules: Vec<ModuleOutline<'a>>,
}

impl CourseOutline<'_> {
    /// Lessons across all modules, in reading order.
    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleOutline<'a> {
    pub module: &'a CourseModule,
    pub lessons: Vec<&'a Lesson>,
}

/// A lesson with its neighbours inside the same course.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonPage<'a> {
    pub course: &'a Course,
    pub lesson: &'a Lesson,
    pub previous: Option<&'a Lesson>,
    pub next: Option<&'a Lesson>,
    /// Zero-based position in the course's reading order.
    pub position: usize,
    pub total: usize,
}

/// Blog results split the way the listing page shows them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PostListing<'a> {
    pub featured: Vec<&'a BlogPost>,
    pub regular: Vec<&'a BlogPost>,
}

impl PostListing<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read-only queries over courses, lessons and blog posts.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self { catalog }
    }

    //
    // ─── COURSES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        self.catalog.courses()
    }

    /// Courses whose title, description or topics contain `query`
    /// (case-insensitive) and whose level passes `level`, in catalog order.
    #[must_use]
    pub fn search_courses(&self, query: &str, level: &Filter<CourseLevel>) -> Vec<&Course> {
        let found = filter_records(self.catalog.courses(), query, level);
        tracing::debug!(query, level = %level, hits = found.len(), "course search");
        found
    }

    #[must_use]
    pub fn popular_courses(&self) -> &[Course] {
        let courses = self.catalog.courses();
        &courses[..courses.len().min(POPULAR_COURSES)]
    }

    #[must_use]
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.catalog.courses().iter().find(|c| c.id() == id)
    }

    /// Modules of a course ordered by their `order` field.
    #[must_use]
    pub fn modules_for_course(&self, id: &CourseId) -> Vec<&CourseModule> {
        let mut modules: Vec<_> = self
            .catalog
            .modules()
            .iter()
            .filter(|m| &m.course_id == id)
            .collect();
        modules.sort_by_key(|m| m.order);
        modules
    }

    #[must_use]
    pub fn lessons_for_module(&self, id: &ModuleId) -> Vec<&Lesson> {
        let mut lessons: Vec<_> = self
            .catalog
            .lessons()
            .iter()
            .filter(|l| l.module_id() == id)
            .collect();
        lessons.sort_by_key(|l| l.order());
        lessons
    }

    /// Every lesson of a course, module by module.
    #[must_use]
    pub fn lessons_for_course(&self, id: &CourseId) -> Vec<&Lesson> {
        self.modules_for_course(id)
            .into_iter()
            .flat_map(|m| self.lessons_for_module(&m.id))
            .collect()
    }

    #[must_use]
    pub fn course_outline(&self, id: &CourseId) -> Option<CourseOutline<'_>> {
        let course = self.course(id)?;
        let modules = self
            .modules_for_course(id)
            .into_iter()
            .map(|module| ModuleOutline {
                module,
                lessons: self.lessons_for_module(&module.id),
            })
            .collect();
        Some(CourseOutline { course, modules })
    }

    /// Looks a lesson up inside a course; `None` when either is unknown or the
    /// lesson belongs to another course.
    #[must_use]
    pub fn lesson_page(&self, course_id: &CourseId, lesson_id: &LessonId) -> Option<LessonPage<'_>> {
        let course = self.course(course_id)?;
        let lessons = self.lessons_for_course(course_id);
        let position = lessons.iter().position(|l| l.id() == lesson_id)?;
        Some(LessonPage {
            course,
            lesson: lessons[position],
            previous: position.checked_sub(1).map(|i| lessons[i]),
            next: lessons.get(position + 1).copied(),
            position,
            total: lessons.len(),
        })
    }

    //
    // ─── POSTS ─────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        self.catalog.posts()
    }

    /// Posts whose title or excerpt contain `query` (case-insensitive) and
    /// whose category passes `category`, in catalog order.
    #[must_use]
    pub fn search_posts(&self, query: &str, category: &Filter<BlogCategory>) -> Vec<&BlogPost> {
        let found = filter_records(self.catalog.posts(), query, category);
        tracing::debug!(query, category = %category, hits = found.len(), "post search");
        found
    }

    /// Same matches as [`CatalogService::search_posts`], featured ones first.
    #[must_use]
    pub fn post_listing(&self, query: &str, category: &Filter<BlogCategory>) -> PostListing<'_> {
        let (featured, regular) = self
            .search_posts(query, category)
            .into_iter()
            .partition(|p| p.is_featured());
        PostListing { featured, regular }
    }

    #[must_use]
    pub fn post(&self, id: &PostId) -> Option<&BlogPost> {
        self.catalog.posts().iter().find(|p| p.id() == id)
    }

    #[must_use]
    pub fn featured_posts(&self) -> Vec<&BlogPost> {
        self.catalog.posts().iter().filter(|p| p.is_featured()).collect()
    }

    #[must_use]
    pub fn posts_in_category(&self, category: BlogCategory) -> Vec<&BlogPost> {
        self.catalog
            .posts()
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Other posts in the same category, at most [`RELATED_POSTS`].
    #[must_use]
    pub fn related_posts(&self, post: &BlogPost) -> Vec<&BlogPost> {
        self.catalog
            .posts()
            .iter()
            .filter(|p| p.id() != post.id() && p.category() == post.category())
            .take(RELATED_POSTS)
            .collect()
    }
}

impl fmt::Debug for CatalogService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("courses_len", &self.catalog.courses().len())
            .field("posts_len", &self.catalog.posts().len())
            .finish_non_exhaustive()
    }
}

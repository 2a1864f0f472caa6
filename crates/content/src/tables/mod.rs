//! Content compiled into the binary.

mod blog_posts;
mod courses;
mod quizzes;
mod security_check;

use crate::repository::{ContentError, ContentTables};

/// Builds the shipped content tables.
///
/// # Errors
///
/// Returns `ContentError` if any record fails validation.
pub fn builtin() -> Result<ContentTables, ContentError> {
    Ok(ContentTables {
        quizzes: quizzes::quizzes()?,
        self_check: security_check::self_check()?,
        courses: courses::courses()?,
        modules: courses::modules()?,
        lessons: courses::lessons()?,
        posts: blog_posts::blog_posts()?,
    })
}

//! Course and blog browsing commands.

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use aware_core::model::{BlogCategory, CourseId, CourseLevel, Filter, LessonId, PostId};
use services::{AppServices, CourseProgress};
use ui::vm::{
    CourseCardVm, PostCardVm, map_course_cards, map_course_detail, map_lesson, map_post,
    map_post_cards, markdown_to_text,
};

use crate::error::CliError;
use crate::output::{bullet_list, heading, print_json};

pub fn courses(
    services: &AppServices,
    search: &str,
    level: &Filter<CourseLevel>,
    json: bool,
) -> Result<(), CliError> {
    let catalog = services.catalog();
    let cards = map_course_cards(catalog.search_courses(search, level));
    if json {
        return print_json(&cards);
    }
    if cards.is_empty() {
        println!("No courses found. Try adjusting your search or filter criteria.");
        return Ok(());
    }
    println!("{}", course_table(&cards));
    println!("Showing {} course{}", cards.len(), plural(cards.len()));
    Ok(())
}

pub fn course(
    services: &AppServices,
    id: &str,
    done: &[String],
    json: bool,
) -> Result<(), CliError> {
    let catalog = services.catalog();
    let id = CourseId::new(id)?;
    let outline = catalog
        .course_outline(&id)
        .ok_or_else(|| CliError::UnknownCourse(id.to_string()))?;
    let mut progress = CourseProgress::for_course(&catalog, &id)
        .ok_or_else(|| CliError::UnknownCourse(id.to_string()))?;
    for lesson in done {
        progress.toggle(&LessonId::new(lesson.as_str())?)?;
    }

    let vm = map_course_detail(&outline, &progress);
    if json {
        return print_json(&vm);
    }

    heading(&vm.card.title);
    println!("{}", vm.card.description);
    println!(
        "{} | {} | {} modules | {} lessons",
        vm.card.level, vm.card.duration, vm.card.modules, vm.card.lessons
    );
    println!();
    println!("Progress: {}% ({})", vm.progress_percent, vm.progress_label);
    if vm.finished {
        println!("Course complete! You can now claim your certificate.");
    }
    for (number, module) in vm.modules.iter().enumerate() {
        println!();
        println!("Module {}: {} [{}]", number + 1, module.title, module.completion);
        for lesson in &module.lessons {
            let mark = if lesson.completed { "x" } else { " " };
            println!("  [{mark}] {} ({}) {}", lesson.title, lesson.duration, lesson.id);
        }
    }
    Ok(())
}

pub fn lesson(services: &AppServices, course: &str, lesson: &str, json: bool) -> Result<(), CliError> {
    let catalog = services.catalog();
    let course_id = CourseId::new(course)?;
    let lesson_id = LessonId::new(lesson)?;
    let page = catalog
        .lesson_page(&course_id, &lesson_id)
        .ok_or_else(|| CliError::UnknownLesson {
            course: course.to_owned(),
            lesson: lesson.to_owned(),
        })?;

    let vm = map_lesson(&page);
    if json {
        return print_json(&vm);
    }

    println!("{} / {}", vm.course_title, vm.position);
    heading(&vm.title);
    println!("{} | video: {}", vm.duration, vm.video_url);
    println!();
    print!("{}", markdown_to_text(&vm.content_markdown));
    if !vm.tips.is_empty() {
        println!();
        println!("Key takeaways:");
        bullet_list(&vm.tips);
    }
    println!();
    if let Some(previous) = &vm.previous {
        println!("Previous: {previous}");
    }
    if let Some(next) = &vm.next {
        println!("Next: {next}");
    }
    Ok(())
}

pub fn blog(
    services: &AppServices,
    search: &str,
    category: &Filter<BlogCategory>,
    json: bool,
) -> Result<(), CliError> {
    let catalog = services.catalog();
    let listing = catalog.post_listing(search, category);
    if json {
        let cards = map_post_cards(listing.featured.iter().chain(&listing.regular).copied());
        return print_json(&cards);
    }
    if listing.is_empty() {
        println!("No articles found. Try adjusting your search or filter criteria.");
        return Ok(());
    }

    let featured = map_post_cards(listing.featured.iter().copied());
    if !featured.is_empty() {
        println!("Featured");
        println!("{}", post_table(&featured));
    }
    let regular = map_post_cards(listing.regular.iter().copied());
    if !regular.is_empty() {
        if !featured.is_empty() {
            println!("More articles");
        }
        println!("{}", post_table(&regular));
    }
    println!("Showing {} article{}", listing.len(), plural(listing.len()));
    Ok(())
}

pub fn post(services: &AppServices, id: &str, json: bool) -> Result<(), CliError> {
    let catalog = services.catalog();
    let id = PostId::new(id)?;
    let post = catalog
        .post(&id)
        .ok_or_else(|| CliError::UnknownPost(id.to_string()))?;
    let vm = map_post(post, catalog.related_posts(post));
    if json {
        return print_json(&vm);
    }

    println!("{} | {} | {}", vm.card.category, vm.published, vm.card.read_time);
    heading(&vm.card.title);
    println!();
    print!("{}", markdown_to_text(&vm.content_markdown));
    if !vm.related.is_empty() {
        println!();
        println!("Related articles:");
        for related in &vm.related {
            println!("  - {} ({})", related.title, related.id);
        }
    }
    Ok(())
}

fn course_table(cards: &[CourseCardVm]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Title", "Level", "Duration", "Lessons"]);
    for card in cards {
        table.add_row(vec![
            card.id.clone(),
            card.title.clone(),
            card.level.to_owned(),
            card.duration.clone(),
            card.lessons.to_string(),
        ]);
    }
    table
}

fn post_table(cards: &[PostCardVm]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Title", "Category", "Date", "Read"]);
    for card in cards {
        table.add_row(vec![
            card.id.clone(),
            card.title.clone(),
            card.category.to_owned(),
            card.date.clone(),
            card.read_time.clone(),
        ]);
    }
    table
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

mod catalog_vm;
mod certificate_vm;
mod markdown_vm;
mod quiz_vm;
mod self_check_vm;
mod time_fmt;
mod tone;

pub use catalog_vm::{
    CourseCardVm, CourseDetailVm, LessonVm, OutlineLessonVm, OutlineModuleVm, PostCardVm, PostVm,
    category_label, category_tone, level_label, level_tone, map_course_cards, map_course_detail,
    map_lesson, map_post, map_post_cards,
};
pub use certificate_vm::CertificateVm;
pub use markdown_vm::{markdown_to_html, markdown_to_text, sanitize_html, strip_html_tags};
pub use quiz_vm::{
    AnswerReviewVm, OptionVm, QuizIntroVm, QuizQuestionVm, QuizResultVm, URGENT_BELOW_SECS,
    map_quiz_intro, map_quiz_question, map_quiz_result, option_letter,
};
pub use self_check_vm::{
    SelfCheckQuestionVm, SelfCheckResultVm, TierStyle, map_self_check_question,
    map_self_check_result, tier_style,
};
pub use time_fmt::{format_countdown, format_datetime, format_long_date, format_short_date};
pub use tone::Tone;

use clap::{Args, Parser, Subcommand};

use aware_core::model::{BlogCategory, CourseLevel, Filter};

#[derive(Debug, Parser)]
#[command(name = "aware", version, about = "Cyber security awareness courses, quizzes and self-checks")]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List or search courses
    Courses {
        /// Case-insensitive text matched against title, description and topics
        #[arg(long, short, default_value = "")]
        search: String,

        /// all, beginner, intermediate or advanced
        #[arg(long, default_value = "all")]
        level: Filter<CourseLevel>,
    },

    /// Show a course outline with lesson progress
    Course {
        id: String,

        /// Lesson ids to mark as completed
        #[arg(long = "done", value_delimiter = ',')]
        done: Vec<String>,
    },

    /// Show a lesson of a course
    Lesson { course: String, lesson: String },

    /// List or search blog posts
    Blog {
        #[arg(long, short, default_value = "")]
        search: String,

        /// all, alert, tip, news or guide
        #[arg(long, default_value = "all")]
        category: Filter<BlogCategory>,
    },

    /// Show a blog post with related articles
    Post { id: String },

    /// Take a timed quiz
    Quiz(QuizArgs),

    /// Rate your own security habits
    SelfCheck {
        /// Non-interactive answers, e.g. "D,D,C,C,B,A,A,A"
        #[arg(long)]
        answers: Option<String>,
    },

    /// Issue a completion certificate
    Certificate { name: String },

    /// Load the built-in content and report what it holds
    CheckContent,
}

#[derive(Debug, Args)]
pub struct QuizArgs {
    #[arg(long = "quiz", env = "AWARE_QUIZ_ID", default_value = "security-basics")]
    pub quiz_id: String,

    /// Overrides the quiz's time limit
    #[arg(long, env = "AWARE_TIME_LIMIT_MINUTES")]
    pub time_limit_minutes: Option<u32>,

    /// Overrides the quiz's passing percentage
    #[arg(long, env = "AWARE_PASSING_SCORE")]
    pub passing_score: Option<u8>,

    /// Non-interactive answers, one letter per question, "-" to skip
    #[arg(long)]
    pub answers: Option<String>,
}

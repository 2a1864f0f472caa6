use aware_core::model::{QuestionId, Quiz, QuizId, QuizQuestion, QuizSettings};

use crate::repository::ContentError;

fn question(
    id: &str,
    prompt: &str,
    options: [&str; 4],
    correct: usize,
    explanation: &str,
) -> Result<QuizQuestion, ContentError> {
    Ok(QuizQuestion::new(
        QuestionId::new(id)?,
        prompt,
        options.iter().map(|o| (*o).to_string()).collect(),
        correct,
        explanation,
    )?)
}

pub(crate) fn quizzes() -> Result<Vec<Quiz>, ContentError> {
    let questions = vec![
        question(
            "q1",
            "What is the minimum recommended length for a strong password?",
            ["6 characters", "8 characters", "12 characters", "4 characters"],
            2,
            "Security experts recommend passwords of at least 12 characters to resist brute force attacks.",
        )?,
        question(
            "q2",
            "Which of the following is a sign of a phishing email?",
            [
                "Email from your bank with your full name",
                "Urgent request to verify your account by clicking a link",
                "Newsletter you subscribed to",
                "Email from a known colleague about a meeting",
            ],
            1,
            "Urgency and requests to click links for \"verification\" are classic phishing tactics.",
        )?,
        question(
            "q3",
            "What does two-factor authentication (2FA) provide?",
            [
                "Two passwords for one account",
                "An extra layer of security beyond just a password",
                "Access to two accounts at once",
                "Two attempts to enter your password",
            ],
            1,
            "2FA adds a second verification step (like a code sent to your phone) beyond your password.",
        )?,
        question(
            "q4",
            "What should you do if you receive an email asking for your password?",
            [
                "Reply with your password if it looks official",
                "Click the link and enter your password",
                "Never share your password - legitimate companies never ask for it via email",
                "Forward it to your friends to check",
            ],
            2,
            "No legitimate organization will ever ask for your password via email. This is always a scam.",
        )?,
        question(
            "q5",
            "Which is the safest way to connect to the internet in a coffee shop?",
            [
                "Use the free public WiFi directly",
                "Use a VPN while connected to public WiFi",
                "Ask someone nearby for their hotspot password",
                "Assume the WiFi is safe because the cafe is trustworthy",
            ],
            1,
            "A VPN encrypts your connection, protecting your data even on unsecured public networks.",
        )?,
        question(
            "q6",
            "What is a password manager?",
            [
                "A person who manages your passwords for you",
                "A secure tool that stores and generates strong passwords",
                "A website that checks if your password is strong",
                "An app that shares passwords with your friends",
            ],
            1,
            "Password managers securely store all your passwords and can generate strong, unique passwords for each account.",
        )?,
        question(
            "q7",
            "Which of these passwords is the strongest?",
            [
                "password123",
                "MyDog2020",
                "Tr0ub4dor&3",
                "correct-horse-battery-staple",
            ],
            3,
            "Long passphrases with random words are very strong because they're long and hard to guess, yet memorable.",
        )?,
        question(
            "q8",
            "What should you do before clicking a link in an email?",
            [
                "Click it immediately to see where it goes",
                "Hover over it to see the actual URL destination",
                "Forward it to a friend first",
                "Delete all emails with links",
            ],
            1,
            "Hovering over a link reveals its true destination, helping you spot suspicious URLs before clicking.",
        )?,
        question(
            "q9",
            "How often should you update your software and operating system?",
            [
                "Never - updates cause problems",
                "Once a year",
                "As soon as updates are available",
                "Only when something breaks",
            ],
            2,
            "Updates often contain security patches for newly discovered vulnerabilities. Install them promptly.",
        )?,
        question(
            "q10",
            "What is the best practice for sharing sensitive information?",
            [
                "Post it on social media for convenience",
                "Send it via unencrypted email",
                "Use encrypted communication channels",
                "Write it on a sticky note",
            ],
            2,
            "Encrypted channels ensure only the intended recipient can read sensitive information.",
        )?,
    ];

    let basics = Quiz::new(
        QuizId::new("security-basics")?,
        "Cyber Security Basics",
        "Test your knowledge of fundamental cyber security concepts.",
        QuizSettings::new(10, 70)?,
        questions,
    )?;

    Ok(vec![basics])
}
